//! Render-facing copy of a session
//!
//! Renderers and tests read a [`GameSnapshot`] instead of borrowing the live
//! session; callers can keep one snapshot and refill it every frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::types::{GameStatus, PieceKind, ShapeMatrix, BOARD_HEIGHT, BOARD_WIDTH};

/// Locked-cell grid, `[y][x]`, 0 = empty, 1 = locked
pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Board coordinates of active cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.iter().enumerate().flat_map(move |(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, &c)| c != 0)
                .map(move |(col, _)| (self.x + col as i32, self.y + row as i32))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub seed: u32,
    pub pieces_spawned: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    /// Whether the session still accepts moves
    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    /// Whether the session ended with a refused spawn
    pub fn game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::NotStarted,
            seed: 0,
            pieces_spawned: 0,
            lines_cleared: 0,
        }
    }
}
