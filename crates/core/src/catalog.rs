//! Tetromino catalog - the seven immutable shape templates
//!
//! Every template is a 4x4 occupancy matrix with its active cells packed into
//! the top-left corner (a 2x2, 4x1 or 3x2 footprint).

use crate::types::{PieceKind, ShapeMatrix, PIECE_GRID};

/// An immutable 4x4 shape template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrominoDef {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
}

pub const TETROMINO_O: TetrominoDef = TetrominoDef {
    kind: PieceKind::O,
    shape: [
        [0, 1, 1, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

pub const TETROMINO_I: TetrominoDef = TetrominoDef {
    kind: PieceKind::I,
    shape: [
        [1, 1, 1, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

pub const TETROMINO_Z: TetrominoDef = TetrominoDef {
    kind: PieceKind::Z,
    shape: [
        [1, 1, 0, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

pub const TETROMINO_S: TetrominoDef = TetrominoDef {
    kind: PieceKind::S,
    shape: [
        [0, 1, 1, 0],
        [1, 1, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

pub const TETROMINO_T: TetrominoDef = TetrominoDef {
    kind: PieceKind::T,
    shape: [
        [0, 1, 0, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

pub const TETROMINO_J: TetrominoDef = TetrominoDef {
    kind: PieceKind::J,
    shape: [
        [1, 0, 0, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

pub const TETROMINO_L: TetrominoDef = TetrominoDef {
    kind: PieceKind::L,
    shape: [
        [0, 0, 1, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

/// All templates, indexed by [`PieceKind::index`]
pub const TETROMINOS: [TetrominoDef; 7] = [
    TETROMINO_O,
    TETROMINO_I,
    TETROMINO_Z,
    TETROMINO_S,
    TETROMINO_T,
    TETROMINO_J,
    TETROMINO_L,
];

impl TetrominoDef {
    /// Template for a piece kind
    pub fn of(kind: PieceKind) -> &'static TetrominoDef {
        &TETROMINOS[kind.index()]
    }

    /// Number of active cells (always 4 for the catalog)
    pub fn cell_count(&self) -> usize {
        self.shape.iter().flatten().filter(|&&c| c != 0).count()
    }

    /// Width and height of the active-cell bounding box
    pub fn footprint(&self) -> (usize, usize) {
        let mut w = 0;
        let mut h = 0;
        for row in 0..PIECE_GRID {
            for col in 0..PIECE_GRID {
                if self.shape[row][col] != 0 {
                    w = w.max(col + 1);
                    h = h.max(row + 1);
                }
            }
        }
        (w, h)
    }
}
