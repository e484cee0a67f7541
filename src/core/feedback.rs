//! Per-letter verdicts and feedback rows
//!
//! A `FeedbackRow` is the ordered verdict sequence for one guess, either
//! computed against a known answer or parsed from an external puzzle's
//! reported colors. Rows encode to a base-3 index (grey=0, present=1,
//! correct=2), giving each of the 3^5 = 243 possible patterns a dense slot.

use super::word::{WORD_LENGTH, Word};
use crate::error::WordleError;
use std::fmt;

/// Number of distinct feedback patterns over one row.
pub const PATTERN_COUNT: usize = 243; // 3^WORD_LENGTH

/// Verdict for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The letter is at this exact position in the answer.
    Correct,
    /// The letter occurs elsewhere in the answer (duplicate-aware).
    Present,
    /// The letter contributes nothing: not in the answer, or every
    /// occurrence is already accounted for.
    Absent,
    /// The letter is somewhere in the answer but confirmed not here.
    /// Reported only by external puzzles; never produced by
    /// classification.
    AbsentAtPosition,
}

impl Verdict {
    /// Base-3 digit for pattern encoding. `AbsentAtPosition` folds into
    /// the grey digit; it only arises from external feedback.
    #[must_use]
    const fn digit(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent | Self::AbsentAtPosition => 0,
        }
    }

    /// Single-character symbol, the same alphabet accepted by
    /// [`FeedbackRow::parse`].
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => '_',
            Self::AbsentAtPosition => '/',
        }
    }
}

/// The ordered verdicts for one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow {
    guess: Word,
    verdicts: [Verdict; WORD_LENGTH],
}

impl FeedbackRow {
    #[must_use]
    pub const fn new(guess: Word, verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self { guess, verdicts }
    }

    /// Parse a row from an external puzzle's reported colors.
    ///
    /// Symbols: `g` = correct, `y` = present, `_` = absent,
    /// `/` = absent at this position only. Case-insensitive.
    ///
    /// # Errors
    /// Returns `WordleError::BadFeedback` for a wrong-length string or an
    /// unknown symbol. Callers at the interactive boundary re-prompt.
    pub fn parse(guess: Word, symbols: &str) -> Result<Self, WordleError> {
        let symbols = symbols.trim().to_lowercase();
        let chars: Vec<char> = symbols.chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(WordleError::BadFeedback {
                input: symbols,
                reason: format!("expected exactly {WORD_LENGTH} symbols"),
            });
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (i, ch) in chars.into_iter().enumerate() {
            verdicts[i] = match ch {
                'g' => Verdict::Correct,
                'y' => Verdict::Present,
                '_' => Verdict::Absent,
                '/' => Verdict::AbsentAtPosition,
                other => {
                    return Err(WordleError::BadFeedback {
                        input: symbols,
                        reason: format!("unknown symbol {other:?}, use one of g y _ /"),
                    });
                }
            };
        }

        Ok(Self { guess, verdicts })
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// Whether every position is `Correct` (the guess is the answer).
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }

    /// Dense base-3 index of this row's pattern, in `0..PATTERN_COUNT`.
    #[must_use]
    pub fn pattern_index(&self) -> usize {
        let mut index = 0usize;
        let mut multiplier = 1usize;
        for verdict in &self.verdicts {
            index += usize::from(verdict.digit()) * multiplier;
            multiplier *= 3;
        }
        index
    }
}

impl fmt::Display for FeedbackRow {
    /// Render as `guess` plus the symbol string, e.g. `crane g_y__`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.guess)?;
        for verdict in &self.verdicts {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}
