//! Parrot/neon theme tokens for the twinrange TUI
//!
//! # Color Palette
//! - **Accent**: Electric cyan (selected slider, focused thumb)
//! - **Positive**: Neon green (highlighted band, commits)
//! - **Negative**: Hot pink (rejections)
//! - **Warning**: Neon orange (limits reached)
//! - **Neutral**: Cool purple (unfocused thumbs)
//! - **Muted**: Steel blue (track, labels, hints)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Thumb color: focused thumb of the selected slider stands out.
    pub fn thumb_color(&self, focused: bool, active: bool) -> Color {
        match (focused, active) {
            (true, _) => self.accent,
            (false, true) => self.positive,
            (false, false) => self.neutral,
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn thumb(focused: bool, active: bool) -> Style {
    let style = Style::default().fg(THEME.thumb_color(focused, active));
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_thumb_color() {
        let theme = Theme::default();
        assert_eq!(theme.thumb_color(true, false), theme.accent);
        assert_eq!(theme.thumb_color(true, true), theme.accent);
        assert_eq!(theme.thumb_color(false, true), theme.positive);
        assert_eq!(theme.thumb_color(false, false), theme.neutral);
    }

    #[test]
    fn test_style_helpers_use_palette() {
        assert_eq!(accent().fg, Some(THEME.accent));
        assert_eq!(panel_border(false).fg, Some(THEME.muted));
        assert!(thumb(true, false).add_modifier.contains(Modifier::BOLD));
    }
}
