use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::{Board, apply_action, best_move};

fn bench_self_play_game() {
    let mut board = Board::initial();
    while let Some(action) = best_move(&board) {
        board = apply_action(&board, action).expect("search returned an illegal move");
    }
}

fn bench_single_move_empty_board() {
    let board = Board::initial();
    black_box(best_move(black_box(&board)));
}

fn bench_single_move_mid_game() {
    let board: Board = "X.O/.X./..O".parse().expect("valid board");
    black_box(best_move(black_box(&board)));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
