//! Puzzle generation for the carvoku Sudoku engine.
//!
//! Generation has two steps. A full solved board is synthesized by running
//! the backtracking search over an empty grid with shuffled candidates,
//! then the carver clears a difficulty-dependent number of cells from a
//! copy of that board. The cells still holding digits are the puzzle's
//! clues.
//!
//! Carving only budgets how many clues remain; it does not check that the
//! carved puzzle has a unique solution. A puzzle is always consistent
//! (removing cells cannot introduce a conflict) but may admit completions
//! other than the stored solution.
//!
//! # Examples
//!
//! ```
//! use carvoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Hard);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_solved_grid());
//! assert!(Difficulty::Hard.clue_range().contains(&puzzle.clue_count()));
//! ```

mod difficulty;
mod seed;

use carvoku_core::{DigitGrid, Position};
use carvoku_solver::backtrack;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    seed::{ParseSeedError, PuzzleSeed},
};

/// Synthesizes a random complete solved board.
///
/// Runs the backtracking search from an empty grid with shuffled candidate
/// order. An empty 9×9 grid always admits a solution, so the search cannot
/// fail here.
pub fn generate_full_board<R>(rng: &mut R) -> DigitGrid
where
    R: Rng + ?Sized,
{
    let mut grid = DigitGrid::new();
    let filled = backtrack::fill_random(&mut grid, rng);
    debug_assert!(filled, "empty grid always has a completion");
    grid
}

/// Carves a puzzle out of a solved board.
///
/// Samples a clue count uniformly from the difficulty's range, shuffles all
/// 81 positions, and clears `81 - clues` of them in a copy of `solution`.
/// Cells that keep their digit are the givens of the resulting puzzle.
#[must_use]
pub fn carve<R>(solution: &DigitGrid, difficulty: Difficulty, rng: &mut R) -> DigitGrid
where
    R: Rng + ?Sized,
{
    let clues = usize::from(rng.random_range(difficulty.clue_range()));
    let mut cells = Position::ALL;
    cells.shuffle(rng);

    let mut problem = solution.clone();
    for &pos in &cells[..81 - clues] {
        problem[pos] = None;
    }
    problem
}

/// A generated puzzle together with the board it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved puzzle. Non-empty cells are the given clues.
    pub problem: DigitGrid,
    /// The complete board the problem was carved from. Not necessarily the
    /// only completion of `problem`.
    pub solution: DigitGrid,
    /// The difficulty the puzzle was carved at.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the number of given clues in the problem.
    #[must_use]
    pub fn clue_count(&self) -> u8 {
        u8::try_from(self.problem.count_filled()).expect("at most 81 clues")
    }

    /// Iterates over the positions of the given clues.
    ///
    /// This set is the puzzle's clue mask: the game session treats exactly
    /// these cells as immutable.
    pub fn clue_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.problem[pos].is_some())
    }
}

/// Generates puzzles at a fixed difficulty.
///
/// # Examples
///
/// ```
/// use carvoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Medium);
/// let puzzle = generator.generate();
/// let replay = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(puzzle, replay);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the generator's difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random(&mut rand::rng()))
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.stream();
        let solution = generate_full_board(&mut rng);
        let problem = carve(&solution, self.difficulty, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_full_board_is_solved() {
        let mut rng = PuzzleSeed::from_bytes([1; 32]).stream();
        let board = generate_full_board(&mut rng);
        assert!(board.is_complete());
        assert!(board.is_solved_grid());
    }

    #[test]
    fn test_carve_keeps_a_subset_of_the_solution() {
        let seed = PuzzleSeed::from_bytes([2; 32]);
        let puzzle = PuzzleGenerator::new(Difficulty::Hard).generate_with_seed(seed);

        assert!(Difficulty::Hard.clue_range().contains(&puzzle.clue_count()));
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(puzzle.solution[pos], Some(digit));
            }
        }
        assert!(puzzle.problem.is_consistent());
    }

    #[test]
    fn test_generation_is_reproducible() {
        let seed = PuzzleSeed::from_bytes([3; 32]);
        let generator = PuzzleGenerator::new(Difficulty::Medium);
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_carved_problem_is_completable() {
        use carvoku_solver::backtrack;

        let seed = PuzzleSeed::from_bytes([4; 32]);
        let puzzle = PuzzleGenerator::new(Difficulty::Hard).generate_with_seed(seed);

        let mut grid = puzzle.problem.clone();
        assert!(backtrack::solve(&mut grid));
        assert!(grid.is_solved_grid());
        // The completion honors the clues; it need not equal the stored
        // solution when the carved puzzle admits several completions.
        for pos in puzzle.clue_positions() {
            assert_eq!(grid[pos], puzzle.problem[pos]);
        }
    }

    #[test]
    fn test_clue_positions_match_mask() {
        let seed = PuzzleSeed::from_bytes([5; 32]);
        let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate_with_seed(seed);
        let clues: Vec<_> = puzzle.clue_positions().collect();
        assert_eq!(clues.len(), usize::from(puzzle.clue_count()));
        for pos in clues {
            assert!(puzzle.problem[pos].is_some());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Carving consistency holds for arbitrary seeds and levels.
        #[test]
        fn prop_carve_consistency(bytes in any::<[u8; 32]>(), level in 0_usize..3) {
            let difficulty = Difficulty::ALL[level];
            let puzzle =
                PuzzleGenerator::new(difficulty).generate_with_seed(PuzzleSeed::from_bytes(bytes));

            prop_assert!(puzzle.solution.is_solved_grid());
            prop_assert!(difficulty.clue_range().contains(&puzzle.clue_count()));
            for pos in Position::ALL {
                if let Some(digit) = puzzle.problem[pos] {
                    prop_assert_eq!(puzzle.solution[pos], Some(digit));
                }
            }
        }
    }
}
