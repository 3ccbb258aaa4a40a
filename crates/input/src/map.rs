//! Key bindings for terminal play.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall_types::{Direction, GameCommand};

/// Map a key event to an engine command.
///
/// Arrows plus vi-style (hjkl) and wasd movement; Up rotates, `p` pauses,
/// Enter starts, `r` resets.
pub fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H') | KeyCode::Char('a' | 'A') => {
            Some(GameCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L') | KeyCode::Char('d' | 'D') => {
            Some(GameCommand::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J') | KeyCode::Char('s' | 'S') => {
            Some(GameCommand::Move(Direction::Down))
        }
        KeyCode::Up | KeyCode::Char('k' | 'K') | KeyCode::Char('w' | 'W') => {
            Some(GameCommand::Rotate)
        }
        KeyCode::Char('p' | 'P') => Some(GameCommand::TogglePause),
        KeyCode::Enter => Some(GameCommand::Start),
        KeyCode::Char('r' | 'R') => Some(GameCommand::Reset),
        _ => None,
    }
}

/// Whether a key event should quit the program (`q` or Ctrl-C).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
