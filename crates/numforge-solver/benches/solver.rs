//! Benchmarks for the backtracking search.
//!
//! Measures solving and uniqueness-counting on fixed boards so runs are
//! comparable across changes:
//!
//! - **`solve_puzzle`**: solve a 30-clue board in place.
//! - **`solve_empty`**: fill an empty board (deterministic digit order).
//! - **`count_unique`**: capped solution count on a uniquely solvable board.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use numforge_core::DigitGrid;
use numforge_solver::BacktrackSolver;

const PUZZLE: &str = "\
    53__7____\
    6__195___\
    _98____6_\
    8___6___3\
    4__8_3__1\
    7___2___6\
    _6____28_\
    ___419__5\
    ____8__79";

fn bench_solve_puzzle(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle: DigitGrid = PUZZLE.parse().unwrap();

    c.bench_function("solve_puzzle", |b| {
        b.iter_batched(
            || hint::black_box(puzzle.clone()),
            |mut grid| {
                assert!(solver.solve(&mut grid));
                grid
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_empty(c: &mut Criterion) {
    let solver = BacktrackSolver::new();

    c.bench_function("solve_empty", |b| {
        b.iter_batched(
            || hint::black_box(DigitGrid::new()),
            |mut grid| {
                assert!(solver.solve(&mut grid));
                grid
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_count_unique(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle: DigitGrid = PUZZLE.parse().unwrap();

    c.bench_function("count_unique", |b| {
        b.iter(|| {
            let count =
                solver.count_solutions(hint::black_box(&puzzle), BacktrackSolver::UNIQUENESS_CAP);
            assert_eq!(count, 1);
        });
    });
}

criterion_group!(
    benches,
    bench_solve_puzzle,
    bench_solve_empty,
    bench_count_unique
);
criterion_main!(benches);
