//! Backtracking search for the carvoku Sudoku engine.
//!
//! One depth-first search serves two callers: the generator fills an empty
//! grid with shuffled candidates to synthesize a random solved board, and
//! the game session completes a partially filled grid with ascending
//! candidates to verify feasibility or produce a solution.
//!
//! # Examples
//!
//! ```
//! use carvoku_core::DigitGrid;
//! use carvoku_solver::backtrack;
//!
//! let mut grid = DigitGrid::new();
//! assert!(backtrack::solve(&mut grid));
//! assert!(grid.is_solved_grid());
//! ```

pub mod backtrack;

pub use self::backtrack::CandidateOrder;
