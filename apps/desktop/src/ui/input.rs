//! # Key Mapping
//!
//! Turns crossterm key events into form inputs. Pure, so the whole key map
//! is testable without a terminal.
//!
//! ```text
//! F1..F5 / Ctrl+A,D,U,F,L   run command (see commands::COMMANDS)
//! Tab / Shift+Tab           focus next / previous
//! Up / Down                 move list selection
//! printable char            type into the focused entry
//! Backspace                 delete last char of the focused entry
//! Esc / Ctrl+C              quit
//!
//! while an alert is open:
//! Enter / Esc               dismiss
//! Ctrl+C                    quit
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::commands::{self, Action};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Run(Action),
    FocusNext,
    FocusPrevious,
    SelectNext,
    SelectPrevious,
    Char(char),
    Backspace,
    Dismiss,
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, alert_open: bool) -> Input {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Input::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        return Input::Quit;
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Input::Dismiss,
            _ => Input::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => Input::Quit,
        KeyCode::F(n) => commands::for_function_key(n).map_or(Input::Ignore, Input::Run),
        KeyCode::Char(c) if ctrl => commands::for_ctrl(c).map_or(Input::Ignore, Input::Run),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => Input::Ignore,
        KeyCode::Char(c) => Input::Char(c),
        KeyCode::Tab => Input::FocusNext,
        KeyCode::BackTab => Input::FocusPrevious,
        KeyCode::Down => Input::SelectNext,
        KeyCode::Up => Input::SelectPrevious,
        KeyCode::Backspace => Input::Backspace,
        _ => Input::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(map_key(key(KeyCode::F(1)), false), Input::Run(Action::Add));
        assert_eq!(map_key(key(KeyCode::F(4)), false), Input::Run(Action::Search));
        assert_eq!(map_key(key(KeyCode::F(9)), false), Input::Ignore);
        assert_eq!(map_key(ctrl('d'), false), Input::Run(Action::Delete));
        assert_eq!(map_key(ctrl('l'), false), Input::Run(Action::ShowAll));
    }

    #[test]
    fn test_editing_and_navigation() {
        assert_eq!(map_key(key(KeyCode::Char('W')), false), Input::Char('W'));
        assert_eq!(map_key(key(KeyCode::Backspace), false), Input::Backspace);
        assert_eq!(map_key(key(KeyCode::Tab), false), Input::FocusNext);
        assert_eq!(map_key(key(KeyCode::BackTab), false), Input::FocusPrevious);
        assert_eq!(map_key(key(KeyCode::Down), false), Input::SelectNext);
        assert_eq!(map_key(key(KeyCode::Up), false), Input::SelectPrevious);
    }

    #[test]
    fn test_quit() {
        assert_eq!(map_key(key(KeyCode::Esc), false), Input::Quit);
        assert_eq!(map_key(ctrl('c'), false), Input::Quit);
        assert_eq!(map_key(ctrl('c'), true), Input::Quit);
    }

    #[test]
    fn test_alert_swallows_other_keys() {
        assert_eq!(map_key(key(KeyCode::Enter), true), Input::Dismiss);
        assert_eq!(map_key(key(KeyCode::Esc), true), Input::Dismiss);
        assert_eq!(map_key(key(KeyCode::F(1)), true), Input::Ignore);
        assert_eq!(map_key(key(KeyCode::Char('x')), true), Input::Ignore);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut release = key(KeyCode::F(1));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, false), Input::Ignore);
    }
}
