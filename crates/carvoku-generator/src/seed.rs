//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// The seed is the only input to [`generate_with_seed`]; the same seed
/// always produces the same solution and the same carved problem. Seeds
/// render as 64 lowercase hex characters so they can be shared and replayed
/// from the command line.
///
/// [`generate_with_seed`]: crate::PuzzleGenerator::generate_with_seed
///
/// # Examples
///
/// ```
/// use carvoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh random seed from `rng`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut bytes = [0_u8; 32];
        rng.fill(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the PRNG stream for this seed.
    ///
    /// The seed bytes are hashed with a domain prefix so that unrelated
    /// consumers of the same bytes cannot collide with the generator's
    /// stream.
    pub(crate) fn stream(&self) -> Pcg64Mcg {
        let digest = Sha256::new()
            .chain_update(b"carvoku.generator.v1")
            .chain_update(self.0)
            .finalize();
        let mut state = [0_u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from a hex string.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// A non-hex character was found.
    #[display("invalid hex character {_0:?}")]
    InvalidChar(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidChar(c));
        }
        // All ASCII hex from here, so byte length equals character count.
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength(s.len()));
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = hex_value(pair[0]) * 16 + hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => unreachable!("caller checked for hex digits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes(std::array::from_fn(|i| {
            u8::try_from(i).expect("index fits in u8")
        }));
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert!(text.starts_with("000102"));
        assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength(3))
        );
        let bad = format!("g{}", "0".repeat(63));
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidChar('g'))
        );
        // Multi-byte characters are rejected as characters, not by their
        // UTF-8 byte length.
        let non_ascii = format!("é{}", "0".repeat(63));
        assert_eq!(
            non_ascii.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidChar('é'))
        );
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let seed = format!("AB{}", "0".repeat(62)).parse::<PuzzleSeed>().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xab);
        assert_eq!(seed.to_string(), format!("ab{}", "0".repeat(62)));
    }

    #[test]
    fn test_stream_is_deterministic() {
        use rand::Rng as _;

        let seed = PuzzleSeed::from_bytes([42; 32]);
        let a: u64 = seed.stream().random();
        let b: u64 = seed.stream().random();
        assert_eq!(a, b);

        let other = PuzzleSeed::from_bytes([43; 32]);
        assert_ne!(a, other.stream().random::<u64>());
    }
}
