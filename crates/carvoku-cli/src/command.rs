//! Prompt command parsing.
//!
//! All range checking happens here, before anything reaches the engine:
//! rows, columns, and values are 1-based on the prompt and validated to
//! 1-9, then converted to the engine's 0-based coordinates.

use carvoku_core::{Digit, Position};
use derive_more::{Display, Error};

/// A parsed prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place `digit` at `pos`.
    Move {
        /// Target cell.
        pos: Position,
        /// Digit to place.
        digit: Digit,
    },
    /// Clear the player's entry at `pos`.
    Clear {
        /// Target cell.
        pos: Position,
    },
    /// Fill a random empty cell from the solution.
    Hint,
    /// Complete the board.
    Solve,
    /// Generate a new puzzle.
    New,
    /// Clear all player entries, keeping the same puzzle.
    Restart,
    /// Exit the game.
    Quit,
}

/// Error describing why a prompt line was rejected.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    /// The line matched no command shape.
    #[display("unrecognized input; try `4 7 2` (row 4, col 7, value 2), `clear 4 7`, `hint`, `solve`, `new`, `restart`, or `quit`")]
    Unrecognized,
    /// A coordinate or value was numeric but outside 1-9.
    #[display("rows, columns, and values must be 1-9")]
    OutOfRange,
}

/// Parses one prompt line.
///
/// # Errors
///
/// Returns [`ParseCommandError`] when the line matches no command or a
/// number is out of range.
pub fn parse(line: &str) -> Result<Command, ParseCommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["hint"] => Ok(Command::Hint),
        ["solve"] => Ok(Command::Solve),
        ["new"] | ["new", "game"] => Ok(Command::New),
        ["restart"] => Ok(Command::Restart),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["clear", row, col] => {
            let pos = parse_position(row, col)?;
            Ok(Command::Clear { pos })
        }
        [row, col, value] => {
            let pos = parse_position(row, col)?;
            let value = parse_number(value)?;
            let digit = Digit::try_from_value(value).ok_or(ParseCommandError::OutOfRange)?;
            Ok(Command::Move { pos, digit })
        }
        _ => Err(ParseCommandError::Unrecognized),
    }
}

fn parse_position(row: &str, col: &str) -> Result<Position, ParseCommandError> {
    let row = parse_number(row)?;
    let col = parse_number(col)?;
    if !(1..=9).contains(&row) || !(1..=9).contains(&col) {
        return Err(ParseCommandError::OutOfRange);
    }
    Ok(Position::new(col - 1, row - 1))
}

fn parse_number(word: &str) -> Result<u8, ParseCommandError> {
    word.parse().map_err(|_| ParseCommandError::Unrecognized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_commands() {
        assert_eq!(parse("hint"), Ok(Command::Hint));
        assert_eq!(parse("  solve  "), Ok(Command::Solve));
        assert_eq!(parse("new"), Ok(Command::New));
        assert_eq!(parse("new game"), Ok(Command::New));
        assert_eq!(parse("restart"), Ok(Command::Restart));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_move_is_one_based() {
        assert_eq!(
            parse("4 7 2"),
            Ok(Command::Move {
                pos: Position::new(6, 3),
                digit: Digit::D2,
            })
        );
        assert_eq!(
            parse("1 1 9"),
            Ok(Command::Move {
                pos: Position::new(0, 0),
                digit: Digit::D9,
            })
        );
    }

    #[test]
    fn test_clear() {
        assert_eq!(
            parse("clear 9 1"),
            Ok(Command::Clear {
                pos: Position::new(0, 8),
            })
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(parse("0 1 5"), Err(ParseCommandError::OutOfRange));
        assert_eq!(parse("10 1 5"), Err(ParseCommandError::OutOfRange));
        assert_eq!(parse("1 1 0"), Err(ParseCommandError::OutOfRange));
        assert_eq!(parse("clear 1 10"), Err(ParseCommandError::OutOfRange));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse(""), Err(ParseCommandError::Unrecognized));
        assert_eq!(parse("a b c"), Err(ParseCommandError::Unrecognized));
        assert_eq!(parse("1 2"), Err(ParseCommandError::Unrecognized));
        assert_eq!(parse("1 2 3 4"), Err(ParseCommandError::Unrecognized));
    }
}
