//! Terminal rendering for the game.
//!
//! Frames are drawn into a plain [`FrameBuffer`] by [`GameView`], then
//! flushed by [`TerminalRenderer`], which only rewrites cells that changed.
//! Everything except the renderer's I/O is pure and unit-tested.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
