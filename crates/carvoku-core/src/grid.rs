//! The 9×9 board and its rule checks.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 grid of optional digits.
///
/// `None` is an empty cell. The grid itself enforces no rules; consistency
/// is a property checked on demand so that partially built (and carved)
/// boards are representable.
///
/// # Examples
///
/// ```
/// use carvoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.count_filled(), 30);
/// assert!(grid.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid([Option<Digit>; 81]);

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 81])
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn count_filled(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// This is the cell-selection rule of the backtracking search.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns whether `digit` may legally occupy `pos` on the current grid.
    ///
    /// `false` means the digit already appears somewhere in the cell's row,
    /// column, or 3×3 box. The scan includes the target cell itself, so the
    /// check is only meaningful when the caller keeps `pos` empty first.
    /// Pure, worst case 27 cell comparisons.
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        for x in 0..9 {
            if self[Position::new(x, pos.y())] == Some(digit) {
                return false;
            }
        }
        for y in 0..9 {
            if self[Position::new(pos.x(), y)] == Some(digit) {
                return false;
            }
        }
        let origin = pos.box_origin();
        for y in origin.y()..origin.y() + 3 {
            for x in origin.x()..origin.x() + 3 {
                if self[Position::new(x, y)] == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns whether no house contains a duplicate digit.
    ///
    /// Empty cells are ignored, so this is the invariant of a
    /// puzzle-in-progress rather than of a finished grid.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                if let Some(digit) = self[pos]
                    && !seen.insert(digit)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Returns whether the grid is a complete valid solution: every row,
    /// column, and box is exactly the set {1..9}.
    #[must_use]
    pub fn is_solved_grid(&self) -> bool {
        // Nine cells collecting to all nine digits means the house is a
        // permutation of 1-9 with no cell left empty.
        House::ALL.into_iter().all(|house| {
            house
                .positions()
                .filter_map(|pos| self[pos])
                .collect::<DigitSet>()
                == DigitSet::FULL
        })
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
        &self.0[pos.cell_index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.0[pos.cell_index()]
    }
}

/// Error parsing a [`DigitGrid`] from a string.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// A character other than `1-9`, `.`, `_`, `0`, or whitespace was found.
    #[display("unexpected character {_0:?} in grid")]
    UnexpectedChar(#[error(not(source))] char),
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses 81 cells in row-major order. Digits `1-9` are filled cells;
    /// `.`, `_`, and `0` are empty; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseGridError::UnexpectedChar(c)),
            };
            if count < 81 {
                grid.0[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    /// Formats the grid as 81 characters in row-major order, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solved_grid() -> DigitGrid {
        SOLVED.parse().expect("valid solved grid")
    }

    #[test]
    fn test_parse_display_round_trip() {
        let grid = solved_grid();
        assert_eq!(grid.to_string(), SOLVED);
        assert!(grid.is_complete());
        assert!(grid.is_solved_grid());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::UnexpectedChar('x'))
        );
        assert_eq!(
            ".".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount(80))
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount(82))
        );
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = solved_grid();
        assert_eq!(grid.first_empty(), None);
        grid[Position::new(4, 2)] = None;
        grid[Position::new(1, 7)] = None;
        assert_eq!(grid.first_empty(), Some(Position::new(4, 2)));
    }

    #[test]
    fn test_is_legal_blocks_row_column_box() {
        let mut grid = DigitGrid::new();
        grid[Position::new(4, 4)] = Some(Digit::D5);

        // Row, column, box conflicts.
        assert!(!grid.is_legal(Position::new(0, 4), Digit::D5));
        assert!(!grid.is_legal(Position::new(4, 8), Digit::D5));
        assert!(!grid.is_legal(Position::new(3, 3), Digit::D5));
        // Unrelated cell or different digit is fine.
        assert!(grid.is_legal(Position::new(0, 0), Digit::D5));
        assert!(grid.is_legal(Position::new(0, 4), Digit::D6));
    }

    #[test]
    fn test_is_consistent_detects_duplicates() {
        let mut grid = DigitGrid::new();
        grid[Position::new(0, 0)] = Some(Digit::D3);
        assert!(grid.is_consistent());
        grid[Position::new(8, 0)] = Some(Digit::D3);
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_incomplete_grid_is_not_solved() {
        let mut grid = solved_grid();
        grid[Position::new(0, 0)] = None;
        assert!(!grid.is_solved_grid());
        assert!(grid.is_consistent());
    }

    proptest! {
        /// `is_legal` agrees with the definition: false exactly when the
        /// digit already occurs among the cell's row, column, or box.
        #[test]
        fn prop_is_legal_matches_peer_scan(
            holes in proptest::collection::vec(0_usize..81, 0..60),
            cell in 0_usize..81,
            value in 1_u8..=9,
        ) {
            let mut grid = solved_grid();
            for hole in holes {
                grid[Position::ALL[hole]] = None;
            }
            let pos = Position::ALL[cell];
            let digit = Digit::from_value(value);

            let occupied = pos
                .house_peers()
                .chain([pos])
                .any(|peer| grid[peer] == Some(digit));
            prop_assert_eq!(grid.is_legal(pos, digit), !occupied);
        }
    }
}
