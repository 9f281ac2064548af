use numforge_core::{Digit, DigitGrid};
use numforge_solver::BacktrackSolver;
use rand::{Rng, seq::SliceRandom as _};

use crate::{PuzzleSeed, reduce};

/// A generated puzzle together with its solution and the seed that
/// produced it.
///
/// The problem grid has exactly one completion, and that completion is the
/// solution grid. Feeding the seed back into
/// [`PuzzleGenerator::generate_with_seed`] reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle: a partially blanked grid with a unique solution.
    pub problem: DigitGrid,
    /// The solved grid the puzzle was reduced from.
    pub solution: DigitGrid,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by randomized backtracking and clue removal.
///
/// Generation runs in two phases sharing one seeded random stream: fill an
/// empty grid with randomized backtracking (same search as the solver, but
/// the digit try-order is shuffled at every cell), then remove clues in
/// random order while the solution stays unique (see
/// [`reduce::remove_clues`]).
///
/// # Examples
///
/// ```
/// use numforge_generator::PuzzleGenerator;
/// use numforge_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let generator = PuzzleGenerator::new(&solver);
///
/// let puzzle = generator.generate();
/// assert!(puzzle.solution.is_solved());
/// assert!(solver.has_unique_solution(&puzzle.problem));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a BacktrackSolver,
    target_removed: usize,
}

impl<'a> PuzzleGenerator<'a> {
    /// Default number of clue removals to aim for.
    ///
    /// The difficulty proxy is clue count alone; 40 removals leaves 41
    /// clues, a comfortable mid-range puzzle.
    pub const DEFAULT_TARGET_REMOVED: usize = 40;

    /// Creates a generator using the given solver for uniqueness checks.
    #[must_use]
    pub const fn new(solver: &'a BacktrackSolver) -> Self {
        Self {
            solver,
            target_removed: Self::DEFAULT_TARGET_REMOVED,
        }
    }

    /// Sets the number of clue removals to aim for.
    ///
    /// Higher targets give harder puzzles. The reducer may fall short of an
    /// ambitious target when uniqueness blocks further removal; the
    /// resulting puzzle is still valid.
    #[must_use]
    pub const fn with_target_removed(mut self, target_removed: usize) -> Self {
        self.target_removed = target_removed;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and target always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = self.generate_solved_grid(&mut rng);
        let mut problem = solution.clone();
        reduce::remove_clues(&mut problem, self.target_removed, &mut rng, self.solver);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }

    /// Produces a random fully solved grid.
    ///
    /// Always succeeds for the 9x9 rule set: a valid full board exists from
    /// any empty grid, and the randomized search finds one.
    pub fn generate_solved_grid<R>(&self, rng: &mut R) -> DigitGrid
    where
        R: Rng,
    {
        let mut grid = DigitGrid::new();
        let filled = fill_grid(&mut grid, rng);
        debug_assert!(filled, "an empty 9x9 grid always has a completion");
        grid
    }
}

/// Backtracking fill with a shuffled digit try-order at every cell.
///
/// Structurally identical to the solver's search, including the undo on
/// subtree failure; only the candidate order differs.
fn fill_grid<R>(grid: &mut DigitGrid, rng: &mut R) -> bool
where
    R: Rng,
{
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_grid(grid, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}
