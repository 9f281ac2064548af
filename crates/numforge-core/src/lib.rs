//! Core data structures for the Numforge Sudoku engine.
//!
//! This crate provides the 9x9 board and the constraint primitive shared by
//! the solver, the generator, and the reducer. It has no opinion about
//! search or randomness; those live in `numforge-solver` and
//! `numforge-generator`.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`position`]: board coordinates and box derivation
//! - [`digit_set`] / [`position_set`]: bitset containers over digits and
//!   board positions
//! - [`grid`]: the board itself — cell storage, exchange forms, the
//!   row/column/box validity primitive, and on-demand conflict detection
//!
//! # Examples
//!
//! ```
//! use numforge_core::{Digit, DigitGrid, Position};
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
//! // The first empty cell in row-major order drives the search order.
//! assert_eq!(grid.first_empty(), Some(Position::new(2, 0)));
//!
//! // Conflict detection re-validates every populated cell.
//! assert!(grid.conflicts().is_empty());
//! grid.set(Position::new(2, 0), Some(Digit::D5));
//! assert_eq!(grid.conflicts().len(), 2);
//! # Ok::<(), numforge_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod position_set;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
    position_set::PositionSet,
};
