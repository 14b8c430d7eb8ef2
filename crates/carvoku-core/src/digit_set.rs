//! A compact set of Sudoku digits.

use crate::Digit;

/// A set of digits 1-9, backed by a 9-bit mask.
///
/// Used by house-level checks: a row, column, or box of a solved grid must
/// collect to exactly [`DigitSet::FULL`].
///
/// # Examples
///
/// ```
/// use carvoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D2);
/// set.insert(Digit::D9);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D2));
/// assert!(!set.contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(0x1ff);

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |&digit| self.contains(digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
