//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the rules engine, the terminal
//! renderer and the input layer. All types are plain data with no behaviour
//! beyond classification helpers.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0)
//!
//! # Result Classification
//!
//! Collision checks and move simulations never fail with an error. They return
//! one of the tagged results below, which the driver treats as control flow:
//!
//! | Type | Cases |
//! |------|-------|
//! | [`CollisionCheck`] | `Valid`, `OutOfBounds`, `Locked` |
//! | [`MoveResult`] | `Valid`, `OutOfBounds`, `Locked` (left/right/rotate) or `Valid`, `Blocked` (down) |
//!
//! # Examples
//!
//! ```
//! use mini_tetris_types::{MoveDirection, GameStatus, BOARD_WIDTH, BOARD_HEIGHT, SPAWN_X};
//!
//! assert_eq!(MoveDirection::Left.delta(), (-1, 0));
//!
//! assert_eq!(GameStatus::default(), GameStatus::NotStarted);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 3);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square matrix every piece lives in
pub const PIECE_GRID: usize = 4;

/// Horizontal spawn origin: the 4x4 matrix is centred on the board
pub const SPAWN_X: i32 = BOARD_WIDTH as i32 / 2 - 2;

/// Vertical spawn origin
pub const SPAWN_Y: i32 = 0;

/// Board cell value. `EMPTY` or `LOCKED`, nothing else is ever stored.
pub type Cell = u8;

/// An empty board cell
pub const EMPTY: Cell = 0;

/// A cell occupied by a locked piece
pub const LOCKED: Cell = 1;

/// 4x4 occupancy matrix, indexed `[row][col]`, 0 = empty, 1 = active
pub type ShapeMatrix = [[u8; PIECE_GRID]; PIECE_GRID];

/// The seven tetromino kinds, in catalog order
///
/// The catalog order is also the index space of the random piece source:
/// - **O**: 2x2 square
/// - **I**: 4x1 line
/// - **Z**: Z-shaped
/// - **S**: S-shaped (mirror of Z)
/// - **T**: T-shaped
/// - **J**: corner on the left
/// - **L**: corner on the right (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    O,
    I,
    Z,
    S,
    T,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Kind at a catalog index. Indices wrap modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position in the catalog
    pub fn index(&self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::I => 1,
            PieceKind::Z => 2,
            PieceKind::S => 3,
            PieceKind::T => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A move the driver can request
///
/// `Rotate` is always a 90° anti-clockwise turn of the piece matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoveDirection {
    Rotate,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Origin translation applied by this move. `Rotate` does not translate.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            MoveDirection::Rotate => (0, 0),
            MoveDirection::Down => (0, 1),
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
        }
    }
}

/// Session lifecycle
///
/// `NotStarted -> Running -> GameOver`. `GameOver` is terminal: a new game
/// needs a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "not_started",
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Outcome of testing a piece against the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollisionCheck {
    /// Every active cell is in bounds and on an empty cell
    Valid,
    /// An active cell lies outside the board
    OutOfBounds,
    /// An active cell lies on a locked cell
    Locked,
}

/// Outcome of simulating a move
///
/// Left, right and rotate report why a move failed. Down only reports that it
/// failed: hitting the floor and landing on a locked cell both mean "lock here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveResult {
    Valid,
    OutOfBounds,
    Locked,
    /// Downward move failed
    Blocked,
}

impl MoveResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, MoveResult::Valid)
    }

    /// Classify a collision check for the given direction.
    pub fn from_check(direction: MoveDirection, check: CollisionCheck) -> Self {
        match (direction, check) {
            (_, CollisionCheck::Valid) => MoveResult::Valid,
            (MoveDirection::Down, _) => MoveResult::Blocked,
            (_, CollisionCheck::OutOfBounds) => MoveResult::OutOfBounds,
            (_, CollisionCheck::Locked) => MoveResult::Locked,
        }
    }
}
