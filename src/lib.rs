//! Mini Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benches can write `mini_tetris::core::Session` and friends.

pub use mini_tetris_core as core;
pub use mini_tetris_input as input;
pub use mini_tetris_term as term;
pub use mini_tetris_types as types;
