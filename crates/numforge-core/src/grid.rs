//! The 9x9 board and its constraint primitive.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::{Digit, DigitSet, Position, PositionSet};

/// Error produced when converting external input into a [`DigitGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells actually found.
        count: usize,
    },
    /// The input contains a character that is neither a digit nor an
    /// empty-cell marker.
    #[display("invalid cell character {c:?}")]
    InvalidCell {
        /// The offending character.
        c: char,
    },
    /// A cell value in the array form is outside the range 0-9.
    #[display("cell value out of range: {value}")]
    InvalidValue {
        /// The offending value.
        value: u8,
    },
}

/// A 9x9 Sudoku board.
///
/// Each cell holds `Option<Digit>`; `None` is an empty cell. The grid is the
/// single data structure shared by the solver, the generator, and the
/// reducer: all of them mutate it in place during search and rely on
/// [`is_valid_placement`](Self::is_valid_placement) as the one constraint
/// primitive.
///
/// Two exchange forms exist for callers:
///
/// - a row-major `[[u8; 9]; 9]` with `0` meaning empty
///   ([`try_from_rows`](Self::try_from_rows) / [`to_rows`](Self::to_rows)),
/// - an 81-character text form where `1`-`9` are filled cells, `.`, `_`, and
///   `0` are empty cells, and whitespace is ignored ([`FromStr`]); the
///   [`Display`] form always emits digits and `.`.
///
/// # Examples
///
/// ```
/// use numforge_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// assert!(grid.is_valid_placement(Position::new(1, 0), Digit::D3));
/// assert!(!grid.is_valid_placement(Position::new(1, 0), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.index())]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[usize::from(pos.index())] = cell;
    }

    /// Builds a grid from a row-major array of cell values, `0` meaning
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::InvalidValue`] if any value is greater
    /// than 9.
    pub fn try_from_rows(rows: [[u8; 9]; 9]) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        for (y, row) in (0u8..).zip(rows) {
            for (x, value) in (0u8..).zip(row) {
                if value == 0 {
                    continue;
                }
                let digit = Digit::try_from_value(value)
                    .ok_or(ParseGridError::InvalidValue { value })?;
                grid.set(Position::new(x, y), Some(digit));
            }
        }
        Ok(grid)
    }

    /// Returns the grid as a row-major array of cell values, `0` meaning
    /// empty.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = self[pos] {
                rows[usize::from(pos.y())][usize::from(pos.x())] = digit.value();
            }
        }
        rows
    }

    /// Returns whether placing `digit` at `pos` would violate row, column,
    /// or box uniqueness against the *other* populated cells.
    ///
    /// The cell at `pos` itself is always excluded from the scan, so this
    /// serves both empty target cells and re-validation of already-filled
    /// cells (the basis of [`conflicts`](Self::conflicts)). Pure function of
    /// the grid snapshot; no side effects.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        for x in 0..9 {
            if x != pos.x() && self[Position::new(x, pos.y())] == Some(digit) {
                return false;
            }
        }
        for y in 0..9 {
            if y != pos.y() && self[Position::new(pos.x(), y)] == Some(digit) {
                return false;
            }
        }
        for cell in 0..9 {
            let other = Position::from_box(pos.box_index(), cell);
            if other != pos && self[other] == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns the first empty cell in row-major order, or `None` when the
    /// grid is full.
    ///
    /// The scan order is deterministic and defines the search order of the
    /// backtracking solver.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns the digits that can be placed at `pos` without violating a
    /// constraint, per [`is_valid_placement`](Self::is_valid_placement).
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|&digit| self.is_valid_placement(pos, digit))
            .collect()
    }

    /// Re-validates every populated cell against the rest of the grid and
    /// returns the positions currently in violation.
    ///
    /// A duplicated digit reports *all* of its occurrences: two `5`s in one
    /// row yield both positions. Read-only and idempotent; interactive
    /// callers run this after every edit to drive highlighting.
    ///
    /// # Examples
    ///
    /// ```
    /// use numforge_core::{Digit, DigitGrid, Position, PositionSet};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    /// grid.set(Position::new(1, 0), Some(Digit::D5));
    ///
    /// let expected: PositionSet = [Position::new(0, 0), Position::new(1, 0)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(grid.conflicts(), expected);
    /// ```
    #[must_use]
    pub fn conflicts(&self) -> PositionSet {
        let mut conflicts = PositionSet::new();
        for pos in Position::ALL {
            if let Some(digit) = self[pos]
                && !self.is_valid_placement(pos, digit)
            {
                conflicts.insert(pos);
            }
        }
        conflicts
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether no row, column, or box contains a digit twice.
    ///
    /// Partially filled grids can be valid; emptiness is not a violation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.conflicts().is_empty()
    }

    /// Returns whether the grid is solved: every cell filled and no
    /// constraint violated.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.index())]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[usize::from(pos.index())]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '.' | '_' | '0' => None,
                _ => {
                    let digit = c
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value)
                        .ok_or(ParseGridError::InvalidCell { c })?;
                    Some(digit)
                }
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
