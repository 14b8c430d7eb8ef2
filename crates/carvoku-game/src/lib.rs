//! Game session state for the carvoku Sudoku engine.
//!
//! A [`Game`] owns the three grids of one play session: the given clues
//! (encoded as [`CellState::Given`] cells), the stored solution, and the
//! player's working entries. All mutation goes through the session, which
//! rejects writes to given cells and moves that break the row/column/box
//! rules. There is no ambient state; starting a new game means constructing
//! a new `Game`.

mod game;

use carvoku_core::Digit;
use derive_more::{Display, Error, IsVariant};

pub use self::game::Game;

/// The state of a single cell from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue fixed at puzzle creation. Never editable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit in this cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

/// Why a session rejected a player action.
///
/// Rejection is a normal outcome reported to the caller, never a fatal
/// condition; the presentation layer decides whether to prompt again.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The target cell is a given clue.
    #[display("cannot modify a given clue")]
    CannotModifyGivenCell,
    /// The digit already appears in the cell's row, column, or box.
    #[display("digit conflicts with an existing digit")]
    ConflictingDigit,
}
