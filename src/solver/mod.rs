//! Solving machinery
//!
//! Candidate filtering, entropy scoring, guess selection, and the
//! known-answer cache.

pub mod cache;
pub mod entropy;
pub mod filter;
pub mod selector;

pub use cache::{DEFAULT_CACHE_FILE, GuessCache};
pub use entropy::score_guess;
pub use filter::filter_candidates;
pub use selector::{Choice, DEFAULT_OPENING, GuessSelector, ScoredGuess, SelectorConfig};
