//! Core data structures for the carvoku Sudoku engine.
//!
//! This crate provides the board representation and the rule (constraint)
//! checks shared by the solver, generator, and game session crates.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board coordinates (column `x`, row `y`, both 0-8)
//! - [`digit_set`]: Compact set of digits, used by house-level checks
//! - [`house`]: Rows, columns, and 3×3 boxes
//! - [`grid`]: The 9×9 board itself, including the legality check that
//!   answers "may digit `v` occupy cell `(x, y)`"
//!
//! # Examples
//!
//! ```
//! use carvoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 is now blocked along the first row, column, and box.
//! assert!(!grid.is_legal(Position::new(8, 0), Digit::D5));
//! assert!(grid.is_legal(Position::new(8, 8), Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
