//! Observation hooks for the backtracking search.
//!
//! The search itself never renders, sleeps, or blocks. A caller that wants
//! to visualize the search (or just measure it) implements
//! [`SearchObserver`] and passes it to
//! [`BacktrackSolver::solve_observed`](crate::BacktrackSolver::solve_observed);
//! headless callers use [`BacktrackSolver::solve`](crate::BacktrackSolver::solve)
//! and pay nothing.

use numforge_core::{Digit, Position};

/// Receives an event after every trial placement and every undo during a
/// backtracking search.
///
/// Both hooks default to no-ops, so an observer only implements what it
/// cares about. The solver guarantees that every `unplaced` call matches the
/// most recent `placed` call that has not yet been undone (the events form a
/// well-nested trail).
pub trait SearchObserver {
    /// Called after a digit has been tentatively placed at a cell.
    fn placed(&mut self, _pos: Position, _digit: Digit) {}

    /// Called after a tentative placement has been undone on backtrack.
    fn unplaced(&mut self, _pos: Position, _digit: Digit) {}
}

/// An observer that tallies search effort.
///
/// # Examples
///
/// ```
/// use numforge_core::DigitGrid;
/// use numforge_solver::{BacktrackSolver, SearchCounters};
///
/// let solver = BacktrackSolver::new();
/// let mut grid = DigitGrid::new();
/// let mut counters = SearchCounters::new();
///
/// assert!(solver.solve_observed(&mut grid, &mut counters));
/// // A solved empty grid keeps 81 of its placements.
/// assert_eq!(counters.placements - counters.undos, 81);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchCounters {
    /// Number of trial placements made.
    pub placements: usize,
    /// Number of placements undone on backtrack.
    pub undos: usize,
}

impl SearchCounters {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placements: 0,
            undos: 0,
        }
    }
}

impl SearchObserver for SearchCounters {
    fn placed(&mut self, _pos: Position, _digit: Digit) {
        self.placements += 1;
    }

    fn unplaced(&mut self, _pos: Position, _digit: Digit) {
        self.undos += 1;
    }
}
