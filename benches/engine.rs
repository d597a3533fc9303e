//! Board engine benchmarks: scramble generation, slide throughput, and
//! the solvability predicate.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use fifteen::{Board, PuzzleRng};

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    for side in [3usize, 4, 8] {
        let solved = Board::solved(side);
        let mut rng = PuzzleRng::new(42);
        group.bench_function(format!("{side}x{side}"), |b| {
            b.iter(|| black_box(solved.shuffled(&mut rng)));
        });
    }
    group.finish();
}

fn bench_slide_walk(c: &mut Criterion) {
    let start = Board::solved(4).shuffled(&mut PuzzleRng::new(42));
    c.bench_function("slide_walk_4x4_64_steps", |b| {
        b.iter(|| {
            let mut board = start.clone();
            for step in 0..64 {
                let legal = board.legal_slides();
                board = board.slide(legal[step % legal.len()]);
            }
            black_box(board)
        });
    });
}

fn bench_solvability(c: &mut Criterion) {
    let board = Board::solved(16).shuffled(&mut PuzzleRng::new(42));
    c.bench_function("is_solvable_16x16", |b| {
        b.iter(|| black_box(board.is_solvable()));
    });
}

criterion_group!(benches, bench_shuffle, bench_slide_walk, bench_solvability);
criterion_main!(benches);
