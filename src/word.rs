//! Fixed-length dictionary words.

use crate::error::WordError;
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A lowercase ASCII word of exactly [`WORD_LENGTH`] letters.
///
/// Words are validated once, when they are built, so every consumer further
/// down (feedback, filtering, evaluation) can index them without checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn new(s: &str) -> Result<Self, WordError> {
        let trimmed = s.trim();
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NotAlphabetic {
                word: trimmed.to_string(),
            });
        }
        let bytes: [u8; WORD_LENGTH] =
            trimmed
                .as_bytes()
                .try_into()
                .map_err(|_| WordError::WrongLength {
                    word: trimmed.to_string(),
                    len: trimmed.len(),
                })?;
        Ok(Self(bytes.map(|b| b.to_ascii_lowercase())))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters ever make it into a Word.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        let word = Word::new("  CrAnE\r").unwrap();
        assert_eq!(word.as_str(), "crane");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Word::new("cranes"),
            Err(WordError::WrongLength {
                word: "cranes".to_string(),
                len: 6
            })
        );
        assert!(matches!(Word::new(""), Err(WordError::WrongLength { len: 0, .. })));
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(matches!(Word::new("cr4ne"), Err(WordError::NotAlphabetic { .. })));
        assert!(matches!(Word::new("créme"), Err(WordError::NotAlphabetic { .. })));
    }
}
