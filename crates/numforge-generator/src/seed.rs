//! Reproducible generation seeds.

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// Error produced when parsing a [`PuzzleSeed`] from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleSeedError {
    /// The input is not exactly 64 hex characters.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// Length of the input in bytes.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex character {c:?}")]
    InvalidHexDigit {
        /// The offending character.
        c: char,
    },
}

/// A 32-byte seed that reproduces a generation run exactly.
///
/// The seed is the only source of randomness in puzzle generation: it is
/// hashed into a PCG stream that drives both the solved-board fill and the
/// clue-removal order, so the same seed always yields the same puzzle.
/// Seeds round-trip through a 64-character lowercase hex form for display,
/// logs, and benchmarks.
///
/// # Examples
///
/// ```
/// use numforge_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(seed.to_string().len(), 64);
/// # Ok::<(), numforge_generator::ParsePuzzleSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Creates a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Derives the deterministic random stream for this seed.
    ///
    /// The seed bytes are hashed with SHA-256 and the first half of the
    /// digest seeds a [`Pcg64Mcg`], so nearby seeds still produce unrelated
    /// streams.
    #[must_use]
    pub fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.bytes);
        let mut state = [0; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParsePuzzleSeedError::WrongLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, c) in s.chars().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or(ParsePuzzleSeedError::InvalidHexDigit { c })?;
            #[expect(clippy::cast_possible_truncation)]
            {
                bytes[i / 2] = (bytes[i / 2] << 4) | (nibble as u8);
            }
        }
        Ok(Self { bytes })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xAB; 32]);
        let text = seed.to_string();
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_accepts_mixed_case() {
        let lower = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let upper = lower.to_uppercase();
        assert_eq!(
            lower.parse::<PuzzleSeed>().unwrap(),
            upper.parse::<PuzzleSeed>().unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::WrongLength { len: 3 })
        );
        let with_bad_char = format!("g{}", "0".repeat(63));
        assert_eq!(
            with_bad_char.parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidHexDigit { c: 'g' })
        );
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        use rand::Rng as _;

        let seed = PuzzleSeed::from_bytes([7; 32]);
        assert_eq!(seed.rng().next_u64(), seed.rng().next_u64());

        let other = PuzzleSeed::from_bytes([8; 32]);
        assert_ne!(seed.rng().next_u64(), other.rng().next_u64());
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(bytes in proptest::array::uniform32(any::<u8>())) {
            let seed = PuzzleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
        }
    }
}
