//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(GameAction::Cancel),

        // Boards
        KeyCode::Char('r' | 'R') => Some(GameAction::NewGame),
        KeyCode::Char('n' | 'N') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
