use criterion::{black_box, criterion_group, criterion_main, Criterion};
use block_drop::core::{ActivePiece, Board, GameSession, SimpleRng};
use block_drop::types::{GameAction, Rgb, BOARD_WIDTH};

fn playing_session() -> GameSession {
    let mut session = GameSession::new(12345);
    session.apply_action(GameAction::AnyKey);
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = playing_session();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.finished() {
                session = playing_session();
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Rgb::new(90, 90, 90);

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.place(x, y, gray);
                }
            }
            board.place(3, 15, gray);
            black_box(board.clear_filled_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(ActivePiece::spawn(&mut rng)))
    });
}

fn bench_try_translate(c: &mut Criterion) {
    let mut session = playing_session();

    c.bench_function("try_translate", |b| {
        b.iter(|| {
            session.try_translate(black_box(1), 0);
            session.try_translate(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut session = playing_session();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            session.try_rotate();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = playing_session();
    session.tick(16);
    let mut snap = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_translate,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
