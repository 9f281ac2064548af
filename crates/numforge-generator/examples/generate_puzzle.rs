//! Example demonstrating seeded Sudoku puzzle generation.
//!
//! Generates one or more puzzles and prints the seed, problem, and solution
//! of each. Pass a seed to reproduce a specific puzzle, and raise the
//! removal target for harder boards.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Generate five hard puzzles, with removal-loop logging enabled:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle -- --count 5 --target-removed 52
//! ```

use clap::Parser;
use numforge_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use numforge_solver::BacktrackSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce (64 hex characters). Random when omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Number of clue removals to aim for.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_TARGET_REMOVED)]
    target_removed: usize,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver).with_target_removed(args.target_removed);

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        let puzzle = match args.seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        print_puzzle(&puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} clues):", puzzle.problem.filled_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
