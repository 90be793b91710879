//! Key mapping from terminal events to session requests.

use crate::types::MoveDirection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a move to the session
    Move(MoveDirection),
    /// Throw the session away and start a new one
    Restart,
}

/// Map keyboard input to driver actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(KeyAction::Move(MoveDirection::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(KeyAction::Move(MoveDirection::Right)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(KeyAction::Move(MoveDirection::Down)),

        // Rotation (always anti-clockwise)
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(KeyAction::Move(MoveDirection::Rotate)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
