//! Difficulty levels and their clue budgets.

use std::{ops::RangeInclusive, str::FromStr};

use derive_more::{Display, Error};

/// Puzzle difficulty, expressed as a budget of clues left after carving.
///
/// The carver samples the actual clue count uniformly from the level's
/// inclusive range, so two easy puzzles may keep a different number of
/// givens.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 36-40 clues.
    #[display("easy")]
    Easy,
    /// 30-35 clues.
    #[default]
    #[display("medium")]
    Medium,
    /// 22-29 clues.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the inclusive range of clue counts for this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use carvoku_generator::Difficulty;
    ///
    /// assert_eq!(Difficulty::Hard.clue_range(), 22..=29);
    /// ```
    #[must_use]
    pub const fn clue_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 36..=40,
            Self::Medium => 30..=35,
            Self::Hard => 22..=29,
        }
    }
}

/// Error parsing a [`Difficulty`] name.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown difficulty {name:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError {
                name: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_disjoint_and_ordered() {
        assert_eq!(Difficulty::Easy.clue_range(), 36..=40);
        assert_eq!(Difficulty::Medium.clue_range(), 30..=35);
        assert_eq!(Difficulty::Hard.clue_range(), 22..=29);
        for level in Difficulty::ALL {
            let range = level.clue_range();
            assert!(range.start() <= range.end());
            assert!(*range.end() < 81);
        }
    }

    #[test]
    fn test_display_parse_round_trip() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse::<Difficulty>(), Ok(level));
        }
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
