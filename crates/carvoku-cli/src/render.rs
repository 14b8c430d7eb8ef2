//! ASCII board rendering.

use std::fmt::Write as _;

use carvoku_core::{DigitGrid, Position};

const SEPARATOR: &str = "+-------+-------+-------+";

/// Renders a grid as a bordered ASCII board, `.` for empty cells.
pub fn board(grid: &DigitGrid) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y % 3 == 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        for x in 0..9 {
            if x % 3 == 0 {
                out.push_str("| ");
            }
            match grid[Position::new(x, y)] {
                Some(digit) => {
                    let _ = write!(out, "{digit} ");
                }
                None => out.push_str(". "),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(SEPARATOR);
    out
}
