//! Board tests - occupancy grid and line clearing

use mini_tetris::core::Board;
use mini_tetris::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY, LOCKED};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);
    assert!(board.cells().iter().all(|&c| c == EMPTY));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
    assert!(Board::is_out_of_bounds(-1, 5));
    assert!(!Board::is_out_of_bounds(9, 19));
}

#[test]
fn test_board_lock_and_query() {
    let mut board = Board::new();
    assert!(board.lock(5, 10));
    assert_eq!(board.get(5, 10), Some(LOCKED));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_occupied(4, 10));
    assert!(!board.lock(10, 10));
    assert_eq!(board.locked_count(), 1);
}

#[test]
fn test_clear_lines_on_empty_board() {
    let mut board = Board::new();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_lines_partial_rows_untouched() {
    let mut board = Board::new();
    for x in 0..9 {
        board.lock(x, 19);
    }
    let before = board.clone();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_two_adjacent_rows_shifts_down() {
    let mut board = Board::new();
    board.fill_row(5);
    board.fill_row(6);
    // Markers above the cleared block and one below it.
    board.lock(0, 0);
    board.lock(3, 4);
    board.lock(7, 10);

    assert_eq!(board.clear_lines(), 2);

    assert!(board.is_occupied(0, 2));
    assert!(board.is_occupied(3, 6));
    assert!(board.is_occupied(7, 10), "rows below the cleared block stay put");
    assert!(board.is_row_empty(0));
    assert!(board.is_row_empty(1));
    assert!(!board.is_row_full(5));
    assert!(!board.is_row_full(6));
    assert_eq!(board.locked_count(), 3);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(19);
    board.fill_row(17);
    board.lock(2, 18);
    board.lock(4, 16);

    assert_eq!(board.clear_lines(), 2);

    assert!(board.is_occupied(2, 19));
    assert!(board.is_occupied(4, 18));
    assert_eq!(board.locked_count(), 2);
}

#[test]
fn test_clear_entire_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as usize {
        board.fill_row(y);
    }
    assert_eq!(board.clear_lines(), BOARD_HEIGHT as u32);
    assert_eq!(board.locked_count(), 0);
}

#[test]
fn test_from_rows_round_trips_through_grid() {
    let mut rows = [[0u8; 10]; 20];
    rows[19] = [1, 1, 1, 1, 1, 0, 1, 1, 1, 1];
    rows[3][7] = 9;
    let board = Board::from_rows(&rows);
    assert_eq!(board.get(7, 3), Some(LOCKED));

    let mut out = [[0u8; 10]; 20];
    board.write_u8_grid(&mut out);
    assert_eq!(out[19], rows[19]);
    assert_eq!(out[3][7], LOCKED);
}
