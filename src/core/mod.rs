//! Core domain types
//!
//! Words, verdicts, feedback rows, classification, and accumulated
//! knowledge. Everything here is pure and independent of I/O.

pub mod classify;
mod feedback;
mod knowledge;
mod word;

pub use feedback::{FeedbackRow, PATTERN_COUNT, Verdict};
pub use knowledge::AccumulatedKnowledge;
pub use word::{WORD_LENGTH, Word};
