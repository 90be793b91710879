//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or locked.
//! Uses a flat row-major buffer sized once at construction.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use std::collections::TryReserveError;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, LOCKED};

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows of locked-cell occupancy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat buffer of cells, row-major order (y * WIDTH + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: vec![EMPTY; BOARD_SIZE],
        }
    }

    /// Create a new empty board, reporting allocation failure instead of aborting
    pub fn try_new() -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(BOARD_SIZE)?;
        cells.resize(BOARD_SIZE, EMPTY);
        Ok(Self { cells })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Mark a cell as locked. Out-of-bounds coordinates are ignored.
    pub fn lock(&mut self, x: i32, y: i32) -> bool {
        self.set(x, y, LOCKED)
    }

    /// Check if position is occupied (within bounds and locked)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(x: i32, y: i32) -> bool {
        x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&cell| cell != EMPTY))
            .unwrap_or(false)
    }

    /// Check if a row has no locked cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&cell| cell == EMPTY))
            .unwrap_or(true)
    }

    /// Lock every cell of a row (test and benchmark setup)
    pub fn fill_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(LOCKED);
    }

    /// Remove full rows and compact the rows above them downward.
    ///
    /// Single bottom-up pass: `cleared` counts full rows seen so far, and
    /// every non-full row above one of them is copied down by that count.
    /// The top `cleared` rows are zeroed afterwards.
    ///
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0usize;

        for y in (0..HEIGHT).rev() {
            if self.is_row_full(y) {
                cleared += 1;
            } else if cleared > 0 {
                let src = y * WIDTH;
                let dst = (y + cleared) * WIDTH;
                self.cells.copy_within(src..src + WIDTH, dst);
            }
        }

        self.cells[..cleared * WIDTH].fill(EMPTY);

        cleared as u32
    }

    /// Number of locked cells on the board
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Get a reference to the internal cells buffer
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy occupancy into a fixed 2D grid (row-major, `[y][x]`)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Create from a 2D grid
    pub fn from_rows(rows: &[[u8; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = if cell != EMPTY { LOCKED } else { EMPTY };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_try_new_is_empty() {
        let board = Board::try_new().unwrap();
        assert_eq!(board.cells().len(), BOARD_SIZE);
        assert_eq!(board.locked_count(), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_board_flat_layout() {
        let mut board = Board::new();
        board.lock(0, 0);
        board.lock(5, 10);

        assert_eq!(board.cells[0], LOCKED);
        assert_eq!(board.cells[10 * 10 + 5], LOCKED);
        assert_eq!(board.locked_count(), 2);
    }

    #[test]
    fn test_clear_lines_keeps_partial_bottom_row() {
        let mut board = Board::new();
        board.lock(0, 19);
        board.fill_row(18);
        board.lock(9, 17);

        assert_eq!(board.clear_lines(), 1);
        assert!(board.is_occupied(0, 19));
        assert!(board.is_occupied(9, 18));
        assert!(board.is_row_empty(17));
        assert!(board.is_row_empty(0));
    }

    #[test]
    fn test_clear_lines_whole_board() {
        let mut board = Board::new();
        for y in 0..HEIGHT {
            board.fill_row(y);
        }
        assert_eq!(board.clear_lines(), HEIGHT as u32);
        assert_eq!(board.locked_count(), 0);
    }

    #[test]
    fn test_write_u8_grid_matches_cells() {
        let mut board = Board::new();
        board.lock(2, 3);
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[3][2], 1);
        assert_eq!(Board::from_rows(&grid), board);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clear_lines_removes_exactly_the_full_rows(
                rows in proptest::collection::vec(proptest::collection::vec(any::<bool>(), WIDTH), HEIGHT),
                full in proptest::collection::vec(any::<bool>(), HEIGHT),
            ) {
                let mut board = Board::new();
                for (y, row) in rows.iter().enumerate() {
                    if full[y] {
                        board.fill_row(y);
                        continue;
                    }
                    for (x, &set) in row.iter().enumerate() {
                        if set {
                            board.lock(x as i32, y as i32);
                        }
                    }
                }
                let full_rows = (0..HEIGHT).filter(|&y| board.is_row_full(y)).count();
                let before = board.locked_count();

                let cleared = board.clear_lines() as usize;

                prop_assert_eq!(cleared, full_rows);
                prop_assert_eq!(board.locked_count(), before - cleared * WIDTH);
                prop_assert!((0..HEIGHT).all(|y| !board.is_row_full(y)));
                prop_assert!((0..cleared).all(|y| board.is_row_empty(y)));
            }
        }
    }
}
