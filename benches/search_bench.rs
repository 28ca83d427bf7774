use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stake_raid::board::{Player, Position, Weights};
use stake_raid::eval::score;
use stake_raid::movegen::children;
use stake_raid::search::{alphabeta, minimax};

const MIDGAME: [&str; 4] = ["O..X", ".XO.", "..X.", "O..."];

fn midgame() -> (Position, Weights) {
    let position = Position::from_rows(&MIDGAME).unwrap();
    let weights = Weights::from_rows(vec![
        vec![9, 1, 1, 9],
        vec![1, 5, 5, 1],
        vec![1, 5, 5, 1],
        vec![9, 1, 1, 9],
    ])
    .unwrap();
    (position, weights)
}

fn bench_score(c: &mut Criterion) {
    let (position, weights) = midgame();
    c.bench_function("score_4x4", |b| {
        b.iter(|| score(black_box(&position), black_box(&weights), Player::O))
    });
}

fn bench_children(c: &mut Criterion) {
    let (position, _) = midgame();
    c.bench_function("children_4x4", |b| {
        b.iter(|| children(black_box(&position), Player::X).count())
    });
}

fn bench_minimax_depth3(c: &mut Criterion) {
    let (position, weights) = midgame();
    c.bench_function("minimax_4x4_depth3", |b| {
        b.iter(|| minimax::search(black_box(&position), &weights, Player::O, 3))
    });
}

fn bench_alphabeta_depth3(c: &mut Criterion) {
    let (position, weights) = midgame();
    c.bench_function("alphabeta_4x4_depth3", |b| {
        b.iter(|| alphabeta::search(black_box(&position), &weights, Player::O, 3))
    });
}

fn bench_alphabeta_depth5(c: &mut Criterion) {
    let (position, weights) = midgame();
    let mut group = c.benchmark_group("deep");
    group.sample_size(10);
    group.bench_function("alphabeta_4x4_depth5", |b| {
        b.iter(|| alphabeta::search(black_box(&position), &weights, Player::O, 5))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_score,
    bench_children,
    bench_minimax_depth3,
    bench_alphabeta_depth3,
    bench_alphabeta_depth5,
);
criterion_main!(benches);
