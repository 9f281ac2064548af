//! Clue removal with uniqueness preservation.

use log::debug;
use numforge_core::{DigitGrid, Position};
use numforge_solver::BacktrackSolver;
use rand::Rng;
use rand::seq::SliceRandom as _;

/// Turns a solved grid into a puzzle by blanking cells while the solution
/// stays unique.
///
/// All 81 positions are visited in an order shuffled by `rng`. Each visited
/// clue is tentatively blanked; the removal is committed only if the grid
/// still has exactly one completion, otherwise the digit is restored. The
/// loop stops after `target_removed` committed removals or when every
/// position has been tried, whichever comes first.
///
/// Returns the number of cells actually blanked. This may be below the
/// target when uniqueness blocks further removal — expected behavior, not
/// an error. `target_removed` is the difficulty knob: more blanks, harder
/// puzzle, bounded in practice well under 81.
pub fn remove_clues<R>(
    grid: &mut DigitGrid,
    target_removed: usize,
    rng: &mut R,
    solver: &BacktrackSolver,
) -> usize
where
    R: Rng,
{
    let mut positions = Position::ALL;
    positions.shuffle(rng);

    let mut removed = 0;
    for pos in positions {
        if removed >= target_removed {
            break;
        }
        let Some(digit) = grid.get(pos) else {
            continue;
        };
        grid.set(pos, None);
        if solver.count_solutions(grid, BacktrackSolver::UNIQUENESS_CAP) == 1 {
            removed += 1;
            debug!("removed {digit} at {pos} ({removed}/{target_removed})");
        } else {
            grid.set(pos, Some(digit));
            debug!("kept {digit} at {pos}: removal breaks uniqueness");
        }
    }
    removed
}
