//! Error taxonomy
//!
//! Every failure mode the crate can surface, with enough context attached
//! that callers can log, retry, or abort without re-deriving state.

use thiserror::Error;

/// Errors surfaced by vocabulary construction, classification, filtering,
/// scoring, selection, feedback parsing, and cache persistence.
#[derive(Debug, Error)]
pub enum WordleError {
    /// Classification was called with words of different lengths.
    /// Always a caller bug; propagated, never recovered.
    #[error("guess length {guess_len} does not match answer length {answer_len}")]
    LengthMismatch { guess_len: usize, answer_len: usize },

    /// The word lists violate the provider contract (empty set, answers
    /// not a subset of allowed, malformed word). Fatal at startup.
    #[error("invalid vocabulary: {reason}")]
    InvalidVocabulary { reason: String },

    /// Filtering emptied a candidate set: the accumulated feedback is
    /// inconsistent with the word lists. The game cannot continue.
    #[error(
        "no candidates consistent with feedback \
         ({answers_remaining} answers, {allowed_remaining} allowed words remain)"
    )]
    EmptyCandidateSet {
        answers_remaining: usize,
        allowed_remaining: usize,
    },

    /// The entropy scorer was invoked with no answers left. Programming
    /// error upstream.
    #[error("entropy scoring requires a non-empty answer set")]
    EmptyAnswerSet,

    /// The selector was invoked with an empty allowed set. Unreachable
    /// while the filtering invariants hold; signals an upstream bug.
    #[error("no allowed words to select a guess from on turn {turn}")]
    NoCandidates { turn: usize },

    /// Malformed feedback from an external source. Recoverable by
    /// re-prompting at the boundary.
    #[error("bad feedback {input:?}: {reason}")]
    BadFeedback { input: String, reason: String },

    /// The known-answer cache could not be read or written. The cache
    /// layer logs this and continues; it never aborts a game.
    #[error("cache persistence failed: {0}")]
    CachePersistence(#[from] std::io::Error),
}
