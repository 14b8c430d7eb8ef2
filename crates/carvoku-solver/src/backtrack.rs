//! Depth-first backtracking over empty cells.

use carvoku_core::{Digit, DigitGrid};
use rand::{Rng, seq::SliceRandom as _};

/// Candidate digit order tried at each empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Digits 1-9 in ascending order. Deterministic; used for completion
    /// and feasibility checks.
    Ascending,
    /// Digits 1-9 in a freshly shuffled order per cell. Used to generate
    /// diverse solved boards from an empty grid.
    Shuffled,
}

/// Searches for a completion of `grid`, trying candidates in `order`.
///
/// The search takes the first empty cell in row-major order, tries each
/// candidate that passes the legality check, and recurses; a failed branch
/// resets the cell before trying the next candidate. Depth is bounded by
/// the number of empty cells (at most 81), and every recursive call fills
/// one cell, so the search always terminates.
///
/// Returns `true` with `grid` mutated in place to a complete valid
/// assignment, or `false` with `grid` exactly as it was before the call.
/// `false` means "no completion exists from this state", not an error.
pub fn solve_with<R>(grid: &mut DigitGrid, order: CandidateOrder, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut candidates = Digit::ALL;
    if order == CandidateOrder::Shuffled {
        candidates.shuffle(rng);
    }
    for digit in candidates {
        if grid.is_legal(pos, digit) {
            grid[pos] = Some(digit);
            if solve_with(grid, order, rng) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}

/// Completion mode: ascending candidate order.
///
/// See [`solve_with`] for the result contract.
pub fn solve(grid: &mut DigitGrid) -> bool {
    solve_with(grid, CandidateOrder::Ascending, &mut rand::rng())
}

/// Generation mode: shuffled candidate order.
///
/// A 9×9 grid with standard constraints always admits a solution from
/// empty, so this returns `true` for an empty input grid.
pub fn fill_random<R>(grid: &mut DigitGrid, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    solve_with(grid, CandidateOrder::Shuffled, rng)
}
