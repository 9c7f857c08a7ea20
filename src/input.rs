//! Maps terminal key events to logical game input.
//!
//! Enter presses the button, F1-F3 buy upgrades, Esc or Ctrl-C quits, and any
//! other printable character is a typing keystroke.

use crate::core::controller::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    // Some terminals report releases too; only presses count
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Enter => Some(GameInput::PressButton),
        KeyCode::F(n @ 1..=3) => Some(GameInput::Purchase(usize::from(n - 1))),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(ch) => Some(GameInput::Type(ch)),
        _ => None,
    }
}
