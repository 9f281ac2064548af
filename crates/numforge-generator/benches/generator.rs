//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation pipeline — solved-grid fill plus clue
//! removal with uniqueness checks — at the default removal target.
//!
//! # Test Data
//!
//! Three fixed seeds keep runs reproducible while covering multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use numforge_generator::{PuzzleGenerator, PuzzleSeed};
use numforge_solver::BacktrackSolver;

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_solved_grid(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_solved_grid", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || seed.rng(),
                    |mut rng| generator.generate_solved_grid(&mut rng),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generate, bench_generate_solved_grid
);
criterion_main!(benches);
