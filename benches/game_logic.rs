use blockdrop::core::{clear_lines, Board, GameController, GameState};
use blockdrop::term::{GameView, Hud, Viewport};
use blockdrop::types::{Block, PieceKind, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    let block = Some(Block {
        kind: PieceKind::I,
        color: Rgb::new(0, 200, 200),
    });
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, block);
        }
    }

    c.bench_function("clear_4_lines", |b| b.iter(|| clear_lines(black_box(&board))));
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.hard_drop();
            state.take_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate(true);
            state.take_events();
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut game = GameController::silent(GameState::new(7));
    game.start_game();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = view.render(game.snapshot(), Hud::default(), viewport);

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.state().snapshot())));
    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(game.snapshot(), Hud::default(), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_rotate,
    bench_snapshot_and_render
);
criterion_main!(benches);
