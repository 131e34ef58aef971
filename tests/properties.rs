//! Property tests for the board rules and scoring

use blockdrop::core::{
    check_collision, clear_lines, drop_interval_ms, level_for_lines, line_clear_points,
    merge_board, Board, GameState, Piece,
};
use blockdrop::types::{
    Block, GameAction, PieceKind, Position, Rgb, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MIN_MS,
};
use proptest::prelude::*;

const W: i8 = BOARD_WIDTH as i8;
const H: i8 = BOARD_HEIGHT as i8;

fn any_piece() -> impl Strategy<Value = Piece> {
    (0..7usize, 0..4usize).prop_map(|(kind, turns)| {
        let mut piece = Piece::new(PieceKind::ALL[kind], 1);
        for _ in 0..turns {
            piece = piece.rotated_cw();
        }
        piece
    })
}

fn any_board() -> impl Strategy<Value = Board> {
    // Bias toward dense rows so full rows actually show up.
    proptest::collection::vec(prop::bool::weighted(0.8), BOARD_WIDTH as usize * BOARD_HEIGHT as usize)
        .prop_map(|bits| {
            let mut board = Board::new();
            for (i, filled) in bits.into_iter().enumerate() {
                if filled {
                    let block = Block {
                        kind: PieceKind::J,
                        color: Rgb::new(1, 2, 3),
                    };
                    board.set((i % W as usize) as i8, (i / W as usize) as i8, Some(block));
                }
            }
            board
        })
}

fn any_action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::SoftDrop),
        Just(GameAction::HardDrop),
        Just(GameAction::RotateCw),
        Just(GameAction::RotateCcw),
        Just(GameAction::Hold),
    ]
}

proptest! {
    #[test]
    fn collision_when_any_cell_is_out_of_bounds(piece in any_piece(), x in -6i8..14, y in -4i8..24) {
        let pos = Position::new(x, y);
        let outside = piece
            .shape
            .cells()
            .any(|(dx, dy)| pos.x + dx < 0 || pos.x + dx >= W || pos.y + dy >= H);
        let collides = check_collision(&Board::new(), &piece, pos);
        // On an empty board bounds are the only source of collision.
        prop_assert_eq!(collides, outside);
    }

    #[test]
    fn merge_keeps_board_dimensions(board in any_board(), piece in any_piece(), x in -4i8..12, y in -4i8..22) {
        let merged = merge_board(&board, &piece, Position::new(x, y));
        prop_assert_eq!(merged.cells().len(), BOARD_WIDTH as usize * BOARD_HEIGHT as usize);
        prop_assert_eq!(merged.to_grid().len(), BOARD_HEIGHT as usize);
        prop_assert!(merged.filled_count() >= board.filled_count());
    }

    #[test]
    fn clear_lines_counts_full_rows(board in any_board()) {
        let full = (0..BOARD_HEIGHT as usize).filter(|&y| board.is_row_full(y)).count();
        let (cleared, count) = clear_lines(&board);

        prop_assert_eq!(count, full);
        prop_assert_eq!(cleared.to_grid().len(), BOARD_HEIGHT as usize);
        prop_assert_eq!(cleared.filled_count(), board.filled_count() - full * BOARD_WIDTH as usize);
        prop_assert!((0..BOARD_HEIGHT as usize).all(|y| !cleared.is_row_full(y)));
    }

    #[test]
    fn level_tracks_lines(lines in 0u32..10_000) {
        prop_assert_eq!(level_for_lines(lines), 1 + lines / 10);
    }

    #[test]
    fn drop_interval_never_speeds_up_past_floor(level in 1u32..500) {
        let here = drop_interval_ms(level);
        prop_assert!(here >= DROP_INTERVAL_MIN_MS);
        prop_assert!(drop_interval_ms(level + 1) <= here);
    }

    #[test]
    fn score_never_decreases_and_level_follows(seed in any::<u32>(), actions in proptest::collection::vec(any_action(), 1..300)) {
        let mut state = GameState::new(seed);
        state.start();
        let mut last_score = 0;
        for action in actions {
            state.apply_action(action);
            prop_assert!(state.score() >= last_score);
            prop_assert_eq!(state.level(), 1 + state.lines() / 10);
            last_score = state.score();
            state.take_events();
            if state.game_over() {
                break;
            }
        }
    }
}

#[test]
fn tetris_beats_single() {
    assert!(line_clear_points(4) > line_clear_points(1));
    assert_eq!(line_clear_points(1), 10);
    assert_eq!(line_clear_points(4), 50);
}
