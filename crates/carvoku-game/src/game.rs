use carvoku_core::{Digit, DigitGrid, Position};
use carvoku_generator::{Difficulty, GeneratedPuzzle};
use carvoku_solver::backtrack;
use rand::{Rng, seq::IndexedRandom as _};

use crate::{CellState, GameError};

/// A Sudoku play session.
///
/// Owns the clue mask (as [`CellState::Given`] cells), the stored solution,
/// and the player's working entries. The engine crates never retain state
/// between calls; everything a session needs lives here.
///
/// # Example
///
/// ```
/// use carvoku_game::Game;
/// use carvoku_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let game = Game::new(puzzle);
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    difficulty: Difficulty,
}

impl Game {
    /// Creates a session from a generated puzzle.
    ///
    /// Every non-empty cell of the problem grid becomes a given clue; the
    /// rest start empty. Replacing a running game atomically is simply
    /// assigning a freshly constructed `Game`.
    #[must_use]
    #[expect(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.cell_index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            difficulty,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.cell_index()]
    }

    /// Returns whether `pos` is a given clue.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.cell(pos).is_given()
    }

    /// Returns the stored solution.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the difficulty the puzzle was carved at.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the working grid: givens plus player-entered digits.
    #[must_use]
    pub fn working_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid[pos] = self.cell(pos).as_digit();
        }
        grid
    }

    /// Attempts to place a digit at `pos`.
    ///
    /// Replacing the player's own previous entry is allowed; the legality
    /// check runs against the working grid with the target cell emptied
    /// first, so a cell never conflicts with itself.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells and
    /// [`GameError::ConflictingDigit`] when the digit already appears in
    /// the cell's row, column, or box.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell);
        }
        let mut grid = self.working_grid();
        grid[pos] = None;
        if !grid.is_legal(pos, digit) {
            return Err(GameError::ConflictingDigit);
        }
        self.cells[pos.cell_index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player's entry at `pos`.
    ///
    /// Clearing an already empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.cell_index()] = CellState::Empty;
        Ok(())
    }

    /// Fills a uniformly random empty cell from the stored solution.
    ///
    /// Returns the position and digit placed, or `None` when no empty cell
    /// remains.
    pub fn hint<R>(&mut self, rng: &mut R) -> Option<(Position, Digit)>
    where
        R: Rng + ?Sized,
    {
        let empties: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect();
        let pos = *empties.choose(rng)?;
        let digit = self.solution[pos].expect("solution is complete");
        self.cells[pos.cell_index()] = CellState::Filled(digit);
        Some((pos, digit))
    }

    /// Runs the completion-mode search on the current working grid.
    ///
    /// Returns a full valid grid consistent with the givens and the
    /// player's entries, or `None` when the working grid cannot be
    /// completed (the player has painted the board into a corner). The
    /// session itself is not modified.
    #[must_use]
    pub fn solve_working(&self) -> Option<DigitGrid> {
        let mut grid = self.working_grid();
        backtrack::solve(&mut grid).then_some(grid)
    }

    /// Replaces every non-given cell with the stored solution's digit.
    pub fn apply_solution(&mut self) {
        for pos in Position::ALL {
            if !self.is_given(pos) {
                let digit = self.solution[pos].expect("solution is complete");
                self.cells[pos.cell_index()] = CellState::Filled(digit);
            }
        }
    }

    /// Clears every non-given cell, restoring the freshly carved puzzle.
    ///
    /// This is the in-place restart; no new puzzle is generated.
    pub fn reset(&mut self) {
        for pos in Position::ALL {
            if !self.is_given(pos) {
                self.cells[pos.cell_index()] = CellState::Empty;
            }
        }
    }

    /// Returns whether the working grid is a complete valid solution.
    ///
    /// Any valid completion counts, not just the stored solution; a carved
    /// puzzle may admit several.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.working_grid().is_solved_grid()
    }

    /// Returns whether the working grid equals the stored solution
    /// cell-for-cell.
    #[must_use]
    pub fn matches_solution(&self) -> bool {
        self.working_grid() == self.solution
    }
}
