//! Known-answer guess cache
//!
//! When the secret answer is known (repeated solves, simulation), the
//! optimal guess sequence computed for it is worth keeping: replaying the
//! same answer can then skip the scoring pass entirely. The cache maps
//! answer word to the ordered guesses chosen for it, append-only, and is
//! persisted as JSON across process runs.
//!
//! Persistence is an optimization, never correctness: a missing or
//! corrupt file loads as an empty cache, and a failed save is logged and
//! forgotten.

use crate::core::Word;
use crate::error::WordleError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Default cache file name, alongside the working directory.
pub const DEFAULT_CACHE_FILE: &str = "answer_optimal_guesses.json";

/// Persisted mapping from known answer to its recorded guess sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessCache {
    entries: BTreeMap<String, Vec<String>>,
}

impl GuessCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from `path`. Never fails: a missing file starts an
    /// empty cache, and unreadable or corrupt contents are logged and
    /// discarded.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(cache) => {
                    debug!(
                        "loaded guess cache from {} ({} answers)",
                        path.display(),
                        cache.entries.len()
                    );
                    cache
                }
                Err(e) => {
                    warn!(
                        "ignoring corrupt guess cache {}: {e}; starting empty",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no guess cache at {}; starting empty", path.display());
                Self::default()
            }
            Err(e) => {
                warn!(
                    "cannot read guess cache {}: {e}; starting empty",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Persist the cache to `path`. A failure is logged and swallowed.
    pub fn save(&self, path: &Path) {
        match self.try_save(path) {
            Ok(()) => debug!(
                "saved guess cache to {} ({} answers)",
                path.display(),
                self.entries.len()
            ),
            Err(e) => warn!("guess cache not saved to {}: {e}", path.display()),
        }
    }

    fn try_save(&self, path: &Path) -> Result<(), WordleError> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The cached guess for `answer` at 1-based `turn`, if the recorded
    /// sequence reaches that far.
    #[must_use]
    pub fn lookup(&self, answer: &Word, turn: usize) -> Option<Word> {
        let guesses = self.entries.get(answer.text())?;
        if turn == 0 || guesses.len() < turn {
            return None;
        }
        match Word::new(guesses[turn - 1].as_str()) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("cached guess for {answer:?} at turn {turn} is unusable: {e}");
                None
            }
        }
    }

    /// Append `guess` to the sequence recorded for `answer`. Entries are
    /// never overwritten and the same guess is never recorded twice.
    pub fn record(&mut self, answer: &Word, guess: &Word) {
        let guesses = self.entries.entry(answer.text().to_string()).or_default();
        if !guesses.iter().any(|g| g == guess.text()) {
            guesses.push(guess.text().to_string());
        }
    }

    /// The full recorded sequence for `answer`, if any.
    #[must_use]
    pub fn sequence(&self, answer: &Word) -> Option<&[String]> {
        self.entries.get(answer.text()).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
