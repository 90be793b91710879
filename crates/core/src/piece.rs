//! Piece module - a positioned instance of a catalog template
//!
//! A piece is a value: moving or rotating it produces a new piece, which is
//! what lets the rules engine simulate a move on a copy before committing it.

use arrayvec::ArrayVec;

use crate::catalog::TetrominoDef;
use crate::types::{PieceKind, ShapeMatrix, PIECE_GRID};

/// Board coordinates of a piece's active cells (at most 16)
pub type PieceCells = ArrayVec<(i32, i32), { PIECE_GRID * PIECE_GRID }>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    /// Board column of the matrix's left edge
    pub x: i32,
    /// Board row of the matrix's top edge
    pub y: i32,
}

impl Piece {
    /// Copy a template verbatim to the given origin. No validation happens here.
    pub fn new(def: &TetrominoDef, x: i32, y: i32) -> Self {
        Self {
            kind: def.kind,
            shape: def.shape,
            x,
            y,
        }
    }

    /// Piece for a kind at the given origin
    pub fn of_kind(kind: PieceKind, x: i32, y: i32) -> Self {
        Self::new(TetrominoDef::of(kind), x, y)
    }

    /// 90° anti-clockwise turn of the matrix around its own 4x4 box.
    ///
    /// Cell `(row, col)` moves to `(3 - col, row)`. The origin stays put.
    pub fn rotated(&self) -> Self {
        let mut shape = [[0u8; PIECE_GRID]; PIECE_GRID];
        for row in 0..PIECE_GRID {
            for col in 0..PIECE_GRID {
                shape[PIECE_GRID - 1 - col][row] = self.shape[row][col];
            }
        }
        Self { shape, ..*self }
    }

    /// Copy translated by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether matrix cell `(row, col)` is active
    #[inline]
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.shape[row][col] != 0
    }

    /// Board coordinates of active cells, in row-major matrix order
    pub fn cells(&self) -> PieceCells {
        let mut out = PieceCells::new();
        for row in 0..PIECE_GRID {
            for col in 0..PIECE_GRID {
                if self.is_active(row, col) {
                    out.push((self.x + col as i32, self.y + row as i32));
                }
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.shape.iter().flatten().all(|&c| c == 0)
    }
}
