//! Key mapping from terminal events to ship intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Quit,
}

/// Map keyboard input to a ship intent.
pub fn map_key(key: KeyEvent) -> Option<KeyIntent> {
    if should_quit(key) {
        return Some(KeyIntent::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyIntent::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyIntent::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyIntent::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyIntent::Right)
        }
        KeyCode::Char(' ') => Some(KeyIntent::Fire),
        _ => None,
    }
}

/// Check if key should quit the scene.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
