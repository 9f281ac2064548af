//! Seeded Sudoku puzzle generation for the Numforge engine.
//!
//! Generation is the composition of two searches over a
//! [`DigitGrid`](numforge_core::DigitGrid):
//!
//! 1. **Fill**: randomized backtracking produces a fully solved grid — the
//!    same search as the solver, but the digit try-order is shuffled at
//!    every cell.
//! 2. **Reduce**: clues are removed in random order, keeping a removal only
//!    while the grid retains exactly one completion (checked with the
//!    solver's capped solution count). See [`reduce::remove_clues`].
//!
//! All randomness flows from a [`PuzzleSeed`], so puzzles are reproducible
//! and tests are deterministic: the same seed and removal target always
//! yield the same [`GeneratedPuzzle`].
//!
//! # Examples
//!
//! ```
//! use numforge_generator::{PuzzleGenerator, PuzzleSeed};
//! use numforge_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//! let generator = PuzzleGenerator::new(&solver).with_target_removed(48);
//!
//! let seed = PuzzleSeed::from_bytes([42; 32]);
//! let puzzle = generator.generate_with_seed(seed);
//!
//! assert!(puzzle.solution.is_solved());
//! assert!(solver.has_unique_solution(&puzzle.problem));
//! assert_eq!(generator.generate_with_seed(seed), puzzle);
//! ```

pub use self::{generator::*, seed::*};

mod generator;
pub mod reduce;
mod seed;
