//! Overlays drawn on top of the slider panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::input::key_bindings_help;
use crate::theme;

use super::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Keys", theme::accent_bold())),
        Line::from(""),
    ];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:>14}  "), theme::accent()),
            Span::styled(desc, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Typed values commit on Enter or when the tooltip loses focus.",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "Invalid or empty values revert to the last committed value.",
        theme::muted(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Help ")
        .title_style(theme::panel_title(true));
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
