//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else: no terminal, no
//! input handling, no clock. A driver owns a [`Session`], feeds it move
//! requests, and reads snapshots back for drawing.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven 4x4 tetromino templates
//! - [`piece`]: positioned piece instances and anti-clockwise rotation
//! - [`board`]: 10x20 occupancy grid and line clearing
//! - [`rules`]: collision check, move simulation, locking
//! - [`rng`]: injectable piece sources (seedable LCG, scripted)
//! - [`session`]: game lifecycle `NotStarted -> Running -> GameOver`
//! - [`snapshot`]: render-facing copy of a session
//!
//! # Game Rules
//!
//! - Pieces spawn at (3, 0); the opening piece may start rotated
//! - Rotation is always 90° anti-clockwise inside the 4x4 box, no wall kicks
//! - A piece that cannot move down locks in place, then full rows clear
//! - The game ends when a freshly spawned piece cannot move down
//!
//! # Example
//!
//! ```
//! use mini_tetris_core::{ScriptedSource, Session, StepOutcome};
//! use mini_tetris_types::{GameStatus, MoveDirection, PieceKind};
//!
//! let mut session = Session::new(ScriptedSource::new([PieceKind::I])).unwrap();
//! session.start(12345).unwrap();
//! assert_eq!(session.status(), GameStatus::Running);
//!
//! session.apply(MoveDirection::Left);
//! assert_eq!(session.apply(MoveDirection::Down), StepOutcome::Moved);
//! assert_eq!(session.active().unwrap().y, 1);
//! ```

pub mod board;
pub mod catalog;
pub mod error;
pub mod piece;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use mini_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{TetrominoDef, TETROMINOS};
pub use error::SessionError;
pub use piece::Piece;
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use rules::{check_collision, clear_lines, lock_piece, simulate_move};
pub use session::{Session, StepOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
