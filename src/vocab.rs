//! Word-list provider boundary
//!
//! Loads and validates the two vocabularies the solver runs on: the full
//! allowed-guess list and the answer list (a subset). Contract violations
//! are construction-time failures; nothing downstream re-validates.

use crate::core::Word;
use crate::error::WordleError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// The validated word lists for a game.
///
/// Both lists are sorted and deduplicated at construction, so every
/// downstream iteration order is deterministic.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    allowed: Vec<Word>,
    answers: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from already-parsed words.
    ///
    /// # Errors
    /// `InvalidVocabulary` if either list is empty or the answers are not
    /// a subset of the allowed words.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, WordleError> {
        let mut allowed = allowed;
        let mut answers = answers;
        allowed.sort_unstable();
        allowed.dedup();
        answers.sort_unstable();
        answers.dedup();

        if allowed.is_empty() || answers.is_empty() {
            return Err(WordleError::InvalidVocabulary {
                reason: "allowed and answer lists must both be non-empty".to_string(),
            });
        }

        let allowed_set: FxHashSet<&Word> = allowed.iter().collect();
        if let Some(stray) = answers.iter().find(|w| !allowed_set.contains(w)) {
            return Err(WordleError::InvalidVocabulary {
                reason: format!("answer word {stray:?} is not in the allowed list"),
            });
        }

        Ok(Self { allowed, answers })
    }

    /// Load a vocabulary from two newline-delimited word files.
    ///
    /// # Errors
    /// `InvalidVocabulary` if a file cannot be read, contains a malformed
    /// word, or the lists violate the contract.
    pub fn from_files(
        allowed_path: impl AsRef<Path>,
        answers_path: impl AsRef<Path>,
    ) -> Result<Self, WordleError> {
        let allowed = read_word_file(allowed_path.as_ref())?;
        let answers = read_word_file(answers_path.as_ref())?;
        Self::new(allowed, answers)
    }

    /// All words that may legally be submitted as a guess.
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Words that may be the secret answer.
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

/// Read one word file. Blank lines are ignored; any other malformed line
/// fails the whole load.
fn read_word_file(path: &Path) -> Result<Vec<Word>, WordleError> {
    let content = fs::read_to_string(path).map_err(|e| WordleError::InvalidVocabulary {
        reason: format!("cannot read word list {}: {e}", path.display()),
    })?;

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Word::new)
        .collect()
}
