//! Board coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). The 3×3 box containing a position has its origin at
/// `(3 * (x / 3), 3 * (y / 3))`.
///
/// # Examples
///
/// ```
/// use carvoku_core::Position;
///
/// let pos = Position::new(7, 4);
/// assert_eq!(pos.box_origin(), Position::new(6, 3));
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    ///
    /// This is the scan order the solver uses to find the next empty cell.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the top-left position of the 3×3 box containing `self`.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            x: 3 * (self.x / 3),
            y: 3 * (self.y / 3),
        }
    }

    /// Returns the index (0-8, left to right, top to bottom) of the box
    /// containing `self`.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        3 * (self.y / 3) + self.x / 3
    }

    /// Returns the 20 positions sharing a row, column, or box with `self`,
    /// excluding `self` itself.
    ///
    /// Box peers that already share the row or column are not yielded twice.
    pub fn house_peers(self) -> impl Iterator<Item = Self> {
        let origin = self.box_origin();
        let row = (0..9).filter(move |&x| x != self.x).map(move |x| Self { x, y: self.y });
        let column = (0..9).filter(move |&y| y != self.y).map(move |y| Self { x: self.x, y });
        let boxed = (origin.y..origin.y + 3)
            .flat_map(move |y| (origin.x..origin.x + 3).map(move |x| Self { x, y }))
            .filter(move |pos| pos.x != self.x && pos.y != self.y);
        row.chain(column).chain(boxed)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
