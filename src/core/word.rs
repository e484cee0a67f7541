//! Word representation
//!
//! A `Word` is a fixed-length sequence of five lowercase ASCII letters.
//! It is immutable once constructed, and its derived ordering (byte order
//! over the letters) is the deterministic order used for tie-breaking.

use crate::error::WordleError;
use std::fmt;

/// Number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter lowercase word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
    text: String,
}

impl Word {
    /// Create a new `Word` from a string, lowercasing first.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidVocabulary` if the input is not
    /// exactly five ASCII letters.
    pub fn new(text: impl Into<String>) -> Result<Self, WordleError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordleError::InvalidVocabulary {
                reason: format!("word {text:?} must be exactly {WORD_LENGTH} letters"),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordleError::InvalidVocabulary {
                reason: format!("word {text:?} must contain only letters a-z"),
            });
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { chars, text })
    }

    /// The word as a string slice.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as raw letter bytes.
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// The letter at `position` (0-4).
    ///
    /// # Panics
    /// Panics if `position >= 5`.
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Whether the word contains `letter` anywhere.
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// How many times `letter` occurs in the word.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
    }

    #[test]
    fn creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
    }

    #[test]
    fn creation_rejects_bad_length() {
        assert!(Word::new("too long").is_err());
        assert!(Word::new("shrt").is_err());
        assert!(Word::new("").is_err());
    }

    #[test]
    fn creation_rejects_bad_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn letter_queries() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letter_at(0), b's');
        assert!(word.contains(b'e'));
        assert!(!word.contains(b'z'));
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'q'), 0);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("crate").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "crate", "slate"]);
    }

    #[test]
    fn equality_ignores_case_of_input() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
