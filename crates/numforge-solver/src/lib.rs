//! Exhaustive backtracking search for the Numforge Sudoku engine.
//!
//! This crate does two things, both on a
//! [`DigitGrid`](numforge_core::DigitGrid) and both via depth-first
//! backtracking with full undo:
//!
//! - **Solving**: [`BacktrackSolver::solve`] fills a grid in place,
//!   reporting `false` (not an error) when no completion exists.
//! - **Counting**: [`BacktrackSolver::count_solutions`] counts completions
//!   up to a cap, which with [`BacktrackSolver::UNIQUENESS_CAP`] is the
//!   uniqueness test the puzzle reducer is built on.
//!
//! The search is deterministic — row-major cell order, ascending digit
//! order — and headless. Interactive callers that want to watch the search
//! subscribe through [`SearchObserver`]; the engine never depends on a
//! rendering facility or timing delay.
//!
//! # Examples
//!
//! ```
//! use numforge_core::DigitGrid;
//! use numforge_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//!
//! let mut grid: DigitGrid = "\
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert!(solver.has_unique_solution(&grid));
//! assert!(solver.solve(&mut grid));
//! assert!(grid.is_solved());
//! # Ok::<(), numforge_core::ParseGridError>(())
//! ```

pub use self::{backtrack::*, observer::*};

mod backtrack;
mod observer;
