//! Board tests - collision, merging and line clearing through the public API

use blockdrop::core::{check_collision, clear_lines, merge_board, Board, Piece};
use blockdrop::types::{Block, PieceKind, Position, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

fn block(kind: PieceKind) -> Option<Block> {
    Some(Block {
        kind,
        color: Rgb::new(90, 90, 90),
    })
}

fn fill_row_except(board: &mut Board, y: i8, gaps: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&x) {
            board.set(x, y, block(PieceKind::Z));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.get(0, 0), Some(None));
    assert_eq!(board.get(BOARD_WIDTH as i8 - 1, BOARD_HEIGHT as i8 - 1), Some(None));
}

#[test]
fn test_board_get_set_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, block(PieceKind::T)));
    assert!(board.set(4, 7, block(PieceKind::T)));
    assert!(board.is_occupied(4, 7));
}

#[test]
fn test_collision_against_walls_and_floor() {
    let board = Board::new();
    let o = Piece::new(PieceKind::O, 1);

    assert!(!check_collision(&board, &o, Position::new(0, 0)));
    assert!(!check_collision(&board, &o, Position::new(8, 18)));
    assert!(check_collision(&board, &o, Position::new(-1, 5)));
    assert!(check_collision(&board, &o, Position::new(9, 5)));
    assert!(check_collision(&board, &o, Position::new(4, 19)));
}

#[test]
fn test_cells_above_grid_do_not_collide() {
    let board = Board::new();
    let i = Piece::new(PieceKind::I, 1).rotated_cw();
    assert!(!check_collision(&board, &i, Position::new(3, -3)));
}

#[test]
fn test_collision_with_locked_cells() {
    let mut board = Board::new();
    board.set(5, 10, block(PieceKind::J));
    let o = Piece::new(PieceKind::O, 1);

    assert!(check_collision(&board, &o, Position::new(4, 9)));
    assert!(!check_collision(&board, &o, Position::new(6, 9)));
}

#[test]
fn test_merge_board_leaves_input_untouched() {
    let board = Board::new();
    let t = Piece::new(PieceKind::T, 1);
    let merged = merge_board(&board, &t, Position::new(0, 0));

    assert_eq!(board.filled_count(), 0);
    assert_eq!(merged.filled_count(), 4);
    assert_eq!(merged.get(1, 0).flatten().map(|b| b.kind), Some(PieceKind::T));
}

#[test]
fn test_merge_board_drops_cells_outside_grid() {
    let board = Board::new();
    let t = Piece::new(PieceKind::T, 1);
    let merged = merge_board(&board, &t, Position::new(3, -1));
    assert_eq!(merged.filled_count(), 3);
}

#[test]
fn test_clear_lines_removes_only_full_rows() {
    let mut board = Board::new();
    fill_row_except(&mut board, 19, &[]);
    fill_row_except(&mut board, 18, &[0]);
    fill_row_except(&mut board, 17, &[]);
    board.set(2, 16, block(PieceKind::L));

    let (cleared, count) = clear_lines(&board);
    assert_eq!(count, 2);
    assert_eq!(cleared.filled_count(), 10);
    // Row 18 slid to the floor, the lone block landed on it.
    assert_eq!(cleared.get(0, 19), Some(None));
    assert!(cleared.is_occupied(1, 19));
    assert!(cleared.is_occupied(2, 18));
}

#[test]
fn test_clear_lines_on_empty_board() {
    let (cleared, count) = clear_lines(&Board::new());
    assert_eq!(count, 0);
    assert_eq!(cleared, Board::new());
}

#[test]
fn test_drop_position_lands_on_stack() {
    let mut board = Board::new();
    fill_row_except(&mut board, 19, &[0]);
    let o = Piece::new(PieceKind::O, 1);

    assert_eq!(board.drop_position(&o, Position::new(4, 0)), Position::new(4, 17));
}
