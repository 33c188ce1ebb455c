//! Board tests - grid storage, collision gate, row sweeping

use retris::core::{shape_of, Board};
use retris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_clear(x, y), "cell ({}, {}) should be clear", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn get_out_of_bounds_returns_none() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn collides_whenever_any_cell_is_out_of_bounds() {
    let board = Board::new();
    let shape = shape_of(PieceKind::O);

    // In bounds on an empty board: no collision.
    assert!(!board.collides(&shape, 0, 0));
    assert!(!board.collides(&shape, 8, 18));

    // Any occupied cell past an edge collides.
    assert!(board.collides(&shape, -1, 0), "past left edge");
    assert!(board.collides(&shape, 9, 0), "past right edge");
    assert!(board.collides(&shape, 0, 19), "past bottom edge");
    assert!(board.collides(&shape, 0, -1), "past top edge");
}

#[test]
fn padded_shape_rows_do_not_collide() {
    let board = Board::new();

    // The I matrix is 4x4 with the occupied row at matrix row 1, so the
    // top-left offset may sit one row above the board.
    let shape = shape_of(PieceKind::I);
    assert!(!board.collides(&shape, 0, -1));
    assert!(board.collides(&shape, 0, -2));
}

#[test]
fn collides_with_merged_cells() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::T));

    let shape = shape_of(PieceKind::O);
    assert!(board.collides(&shape, 5, 10));
    assert!(board.collides(&shape, 4, 9));
    assert!(!board.collides(&shape, 3, 10));
}

#[test]
fn merge_locks_all_shape_cells() {
    let mut board = Board::new();
    let shape = shape_of(PieceKind::O);

    board.merge(&shape, 3, 5, PieceKind::O);

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn occupied_count_never_exceeds_board_size() {
    let mut board = Board::new();
    let shape = shape_of(PieceKind::O);

    // Tile the whole board, with plenty of overlapping merges.
    for y in (0..BOARD_HEIGHT as i8).step_by(2) {
        for x in 0..BOARD_WIDTH as i8 - 1 {
            board.merge(&shape, x, y, PieceKind::O);
        }
    }

    assert!(board.occupied_count() <= (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize));
}

#[test]
fn row_is_full_only_without_gaps() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::L));
    }
    assert!(board.is_row_full(19));

    board.set(4, 19, None);
    assert!(!board.is_row_full(19));
}

#[test]
fn sweep_clears_full_rows_and_shifts_the_rest_down() {
    let mut board = Board::new();

    // Rows 17 and 19 full; a lone marker on row 18.
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 17, Some(PieceKind::S));
        board.set(x, 19, Some(PieceKind::Z));
    }
    board.set(0, 18, Some(PieceKind::T));

    let cleared = board.sweep_full_rows();
    assert_eq!(cleared.len(), 2);

    // The marker row slid to the bottom; the top rows are blank.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 1);
    for x in 0..BOARD_WIDTH as i8 {
        assert!(board.is_clear(x, 0));
        assert!(board.is_clear(x, 1));
    }
}

#[test]
fn sweep_on_a_board_without_full_rows_changes_nothing() {
    let mut board = Board::new();
    board.set(3, 12, Some(PieceKind::J));
    let before = board.clone();

    let cleared = board.sweep_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(board, before);
}
