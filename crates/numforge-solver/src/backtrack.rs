use numforge_core::{Digit, DigitGrid};

use crate::SearchObserver;

struct Unobserved;

impl SearchObserver for Unobserved {}

/// Exhaustive depth-first backtracking search over a [`DigitGrid`].
///
/// The search always visits cells in the grid's deterministic
/// [`first_empty`](DigitGrid::first_empty) order and tries digits in
/// ascending [`Digit::ALL`] order, committing a tentative placement,
/// recursing, and undoing the placement before trying the next digit. That
/// makes results reproducible: the same input grid always yields the same
/// solution and the same search trail.
///
/// "No solution" is an expected outcome, reported as `false` — a
/// user-entered grid may well be contradictory. The worst case is
/// exponential and no time bound is imposed.
///
/// # Examples
///
/// ```
/// use numforge_core::DigitGrid;
/// use numforge_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
///
/// // Every empty board is solvable.
/// let mut grid = DigitGrid::new();
/// assert!(solver.solve(&mut grid));
/// assert!(grid.is_solved());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Solution-count cap that distinguishes "unique" from "more than one".
    ///
    /// [`count_solutions`](Self::count_solutions) with this cap returns 0, 1,
    /// or 2; the reducer's uniqueness probe needs nothing finer.
    pub const UNIQUENESS_CAP: usize = 2;

    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves the grid in place.
    ///
    /// Returns `true` and leaves the grid in a solved state if a completion
    /// exists. Returns `false` if the search space is exhausted; the undo
    /// discipline guarantees the grid is then exactly as it was. Cells that
    /// were filled on entry are never altered in either case.
    pub fn solve(&self, grid: &mut DigitGrid) -> bool {
        self.solve_observed(grid, &mut Unobserved)
    }

    /// Solves the grid in place, reporting every placement and undo to the
    /// observer.
    ///
    /// Identical search to [`solve`](Self::solve); the observer is invoked
    /// synchronously after each event and adds no delay of its own.
    pub fn solve_observed<O>(&self, grid: &mut DigitGrid, observer: &mut O) -> bool
    where
        O: SearchObserver,
    {
        let Some(pos) = grid.first_empty() else {
            return true;
        };
        for digit in Digit::ALL {
            if grid.is_valid_placement(pos, digit) {
                grid.set(pos, Some(digit));
                observer.placed(pos, digit);
                if self.solve_observed(grid, observer) {
                    return true;
                }
                grid.set(pos, None);
                observer.unplaced(pos, digit);
            }
        }
        false
    }

    /// Counts the completions of the grid, saturating at `cap`.
    ///
    /// The caller's grid is untouched: the search runs on an internal clone,
    /// and every placement made during the search is undone on backtrack,
    /// including on the path that hits the cap. The search short-circuits
    /// the moment the running count reaches `cap`, so
    /// `count_solutions(grid, 2)` on a wide-open grid returns promptly
    /// instead of enumerating an astronomical solution space.
    ///
    /// With [`UNIQUENESS_CAP`](Self::UNIQUENESS_CAP): 0 means unsolvable,
    /// 1 means exactly one solution, 2 means more than one.
    #[must_use]
    pub fn count_solutions(&self, grid: &DigitGrid, cap: usize) -> usize {
        if cap == 0 {
            return 0;
        }
        let mut work = grid.clone();
        let mut count = 0;
        Self::count_from(&mut work, cap, &mut count);
        count
    }

    /// Returns whether the grid has exactly one completion.
    #[must_use]
    pub fn has_unique_solution(&self, grid: &DigitGrid) -> bool {
        self.count_solutions(grid, Self::UNIQUENESS_CAP) == 1
    }

    fn count_from(grid: &mut DigitGrid, cap: usize, count: &mut usize) {
        let Some(pos) = grid.first_empty() else {
            *count += 1;
            return;
        };
        for digit in Digit::ALL {
            if *count >= cap {
                return;
            }
            if grid.is_valid_placement(pos, digit) {
                grid.set(pos, Some(digit));
                Self::count_from(grid, cap, count);
                grid.set(pos, None);
            }
        }
    }
}
