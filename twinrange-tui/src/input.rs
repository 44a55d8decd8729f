//! Keyboard input dispatch — overlays first, then slider keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

/// Coarse drag step for `H` / `L`.
pub const COARSE_STEP: i64 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // 2. Slider keys.
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_thumb(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge(1),
        KeyCode::Char('H') => app.nudge(-COARSE_STEP),
        KeyCode::Char('L') => app.nudge(COARSE_STEP),
        KeyCode::Char(c) if c.is_ascii_digit() => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.enter(),
        KeyCode::Esc => app.blur(),
        _ => {}
    }
}

/// Key bindings shown in the help overlay.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j / k", "Select next / previous slider"),
        ("Tab", "Switch between low and high thumb"),
        ("h / l", "Drag focused thumb by 1"),
        ("H / L", "Drag focused thumb by 10"),
        ("0-9", "Type into the focused tooltip"),
        ("Backspace", "Delete last typed digit"),
        ("Enter", "Commit typed value"),
        ("Esc", "Leave tooltip (commits typed value)"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use twinrange_core::{SliderSet, Thumb};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        AppState::new(&SliderSet::samples())
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert!(app.running);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.current().unwrap().state().low(), 25);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn coarse_and_fine_drags() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('L')));
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.current().unwrap().state().low(), 34);
    }

    #[test]
    fn tab_moves_focus() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.thumb, Thumb::High);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.thumb, Thumb::Low);
    }

    #[test]
    fn help_lists_every_binding_once() {
        let help = key_bindings_help();
        assert_eq!(help.len(), 10);
        assert!(help.iter().any(|(k, _)| *k == "Enter"));
    }
}
