//! Semantic input events so the event loop never matches raw key codes.

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Quit,
    /// Keyboard activation of the panel's arrow handle.
    ToggleHandle,
    Escape,
    CursorUp,
    CursorDown,
    CycleBack,
    CycleForward,
    Activate,
    ResetShortcut,
    ApplyShortcut,
    /// Left-button pointer-down at 0-based terminal coordinates.
    PointerDown { x: u16, y: u16 },
    Resized { cols: u16, rows: u16 },
}

/// Translate a crossterm event; `None` means the loop ignores it.
#[must_use]
pub(crate) fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(InputEvent::Quit);
            }
            match key.code {
                KeyCode::Char('q') => Some(InputEvent::Quit),
                KeyCode::Tab => Some(InputEvent::ToggleHandle),
                KeyCode::Esc => Some(InputEvent::Escape),
                KeyCode::Up => Some(InputEvent::CursorUp),
                KeyCode::Down => Some(InputEvent::CursorDown),
                KeyCode::Left => Some(InputEvent::CycleBack),
                KeyCode::Right => Some(InputEvent::CycleForward),
                KeyCode::Enter => Some(InputEvent::Activate),
                KeyCode::Char('r') => Some(InputEvent::ResetShortcut),
                KeyCode::Char('a') => Some(InputEvent::ApplyShortcut),
                _ => None,
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::PointerDown {
            x: *column,
            y: *row,
        }),
        Event::Resize(cols, rows) => Some(InputEvent::Resized {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn toggle_and_close_keys_translate() {
        assert_eq!(translate(&press(KeyCode::Tab)), Some(InputEvent::ToggleHandle));
        assert_eq!(translate(&press(KeyCode::Esc)), Some(InputEvent::Escape));
    }

    #[test]
    fn ctrl_c_and_q_both_quit() {
        assert_eq!(translate(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        assert_eq!(translate(&Event::Key(key)), None);
    }

    #[test]
    fn left_button_down_becomes_a_pointer_event() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(&mouse),
            Some(InputEvent::PointerDown { x: 7, y: 3 })
        );
    }

    #[test]
    fn other_mouse_activity_is_ignored() {
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&moved), None);
        let released = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&released), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(translate(&press(KeyCode::Char('x'))), None);
        assert_eq!(translate(&press(KeyCode::Home)), None);
    }
}
