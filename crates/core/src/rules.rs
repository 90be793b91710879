//! Rules engine - collision testing, move simulation, locking, line clearing
//!
//! Everything here is a plain function over a [`Board`] and a [`Piece`].
//! Nothing panics and nothing returns an error: failures are classified
//! results the driver uses as ordinary control flow.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{CollisionCheck, MoveDirection, MoveResult, PIECE_GRID};

/// Test every active cell of `piece` against the board.
///
/// Cells are scanned in row-major matrix order; for each active cell the
/// bounds test runs before the occupancy test, and the first failing cell
/// decides the result.
pub fn check_collision(board: &Board, piece: &Piece) -> CollisionCheck {
    for row in 0..PIECE_GRID {
        for col in 0..PIECE_GRID {
            if !piece.is_active(row, col) {
                continue;
            }
            let x = piece.x + col as i32;
            let y = piece.y + row as i32;
            if Board::is_out_of_bounds(x, y) {
                return CollisionCheck::OutOfBounds;
            }
            if board.is_occupied(x, y) {
                return CollisionCheck::Locked;
            }
        }
    }
    CollisionCheck::Valid
}

/// Candidate piece produced by applying `direction` to a copy of `piece`
pub fn apply_move(piece: &Piece, direction: MoveDirection) -> Piece {
    match direction {
        MoveDirection::Rotate => piece.rotated(),
        _ => {
            let (dx, dy) = direction.delta();
            piece.shifted(dx, dy)
        }
    }
}

/// Simulate a move without touching `piece` or `board`.
///
/// Rotate, left and right pass the collision classification through.
/// Down collapses both failures into [`MoveResult::Blocked`].
pub fn simulate_move(board: &Board, piece: &Piece, direction: MoveDirection) -> MoveResult {
    let candidate = apply_move(piece, direction);
    MoveResult::from_check(direction, check_collision(board, &candidate))
}

/// Write every in-bounds active cell of `piece` into the board.
///
/// Out-of-bounds cells are skipped; locking only ever follows a validated
/// position, so there is nothing to report.
pub fn lock_piece(board: &mut Board, piece: &Piece) {
    for (x, y) in piece.cells() {
        board.lock(x, y);
    }
}

/// Remove full rows, compact the rest downward, return the count removed.
pub fn clear_lines(board: &mut Board) -> u32 {
    board.clear_lines()
}
