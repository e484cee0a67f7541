//! One-step entropy scoring
//!
//! The expected information (in bits) a guess yields against the current
//! answer set: classify the guess against every remaining answer, bucket
//! the resulting patterns, and take the Shannon entropy of the bucket
//! distribution.
//!
//! Each answer lands in exactly one of the 3^5 = 243 pattern buckets
//! (the verdicts partition {Correct, Present, Absent} per position), so
//! a fixed count table stands in for a map over the pattern space.

use crate::core::{PATTERN_COUNT, Word, classify::classify_row};
use crate::error::WordleError;

/// Expected information gain of `guess` against `answers`, in bits.
///
/// `H = -Σ p·log2(p)` over the nonzero pattern probabilities, where
/// `p = count / |answers|`. A single remaining answer scores 0.0: the
/// outcome is certain and the guess can reveal nothing.
///
/// # Errors
/// `EmptyAnswerSet` if `answers` is empty; there is no distribution to
/// take an entropy of, and reaching this state is an upstream bug.
pub fn score_guess(guess: &Word, answers: &[Word]) -> Result<f64, WordleError> {
    if answers.is_empty() {
        return Err(WordleError::EmptyAnswerSet);
    }

    let mut counts = [0u32; PATTERN_COUNT];
    for answer in answers {
        counts[classify_row(guess, answer).pattern_index()] += 1;
    }

    Ok(shannon_entropy(&counts, answers.len()))
}

fn shannon_entropy(counts: &[u32; PATTERN_COUNT], total: usize) -> f64 {
    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}
