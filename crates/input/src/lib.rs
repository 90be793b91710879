//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the moves a session understands. There is
//! no repeat handling here: one key press is one move request, which is how
//! the rules engine expects to be driven.

pub mod map;

pub use mini_tetris_types as types;

pub use map::{handle_key_event, should_quit, KeyAction};
