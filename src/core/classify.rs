//! Guess classification
//!
//! Maps a (guess, answer, position) triple to a verdict, with Wordle's
//! duplicate-letter rules: correct positions claim a letter's occurrences
//! first, then remaining occurrences are handed out to misplaced guess
//! letters left to right until the answer has none left to give.
//!
//! The predicates operate on raw byte slices so the equal-length contract
//! is enforceable; [`classify_row`] is the `Word`-level entry point and
//! cannot mismatch.

use super::feedback::{FeedbackRow, Verdict};
use super::word::{WORD_LENGTH, Word};
use crate::error::WordleError;

fn ensure_equal_length(guess: &[u8], answer: &[u8]) -> Result<(), WordleError> {
    if guess.len() == answer.len() {
        Ok(())
    } else {
        Err(WordleError::LengthMismatch {
            guess_len: guess.len(),
            answer_len: answer.len(),
        })
    }
}

/// Whether the occurrence of `guess[i]` consumes one unit of the letter's
/// remaining availability.
///
/// Availability is the count of the letter in `answer` minus the
/// positions where guess and answer agree on it. Non-correct occurrences
/// in `guess` drain availability left to right; once it runs dry, every
/// later occurrence is a dud.
fn consumes_availability(guess: &[u8], i: usize, answer: &[u8]) -> bool {
    let letter = guess[i];

    let correct_occurrences = (0..guess.len())
        .filter(|&j| guess[j] == letter && answer[j] == letter)
        .count();
    let in_answer = answer.iter().filter(|&&b| b == letter).count();
    let mut available = in_answer - correct_occurrences;

    for j in 0..=i {
        if guess[j] == letter && guess[j] != answer[j] {
            if available == 0 {
                return false;
            }
            available -= 1;
            if j == i {
                return true;
            }
        }
    }
    false
}

/// True iff `guess[i] == answer[i]`.
///
/// # Errors
/// `LengthMismatch` if the words differ in length.
pub fn is_correct(guess: &[u8], i: usize, answer: &[u8]) -> Result<bool, WordleError> {
    ensure_equal_length(guess, answer)?;
    Ok(guess[i] == answer[i])
}

/// True iff `guess[i]` is in the answer, not correct here, and claims one
/// of the letter's remaining (non-correct) occurrences.
///
/// # Errors
/// `LengthMismatch` if the words differ in length.
pub fn is_present_elsewhere(guess: &[u8], i: usize, answer: &[u8]) -> Result<bool, WordleError> {
    ensure_equal_length(guess, answer)?;
    let letter = guess[i];
    if guess[i] == answer[i] || !answer.contains(&letter) {
        return Ok(false);
    }
    Ok(consumes_availability(guess, i, answer))
}

/// True iff `guess[i]` contributes nothing: the letter never occurs in
/// the answer, or every occurrence is already claimed by correct matches
/// and earlier misplaced duplicates.
///
/// # Errors
/// `LengthMismatch` if the words differ in length.
pub fn is_absent(guess: &[u8], i: usize, answer: &[u8]) -> Result<bool, WordleError> {
    ensure_equal_length(guess, answer)?;
    let letter = guess[i];
    if !answer.contains(&letter) {
        return Ok(true);
    }
    if guess[i] == answer[i] {
        return Ok(false);
    }
    Ok(!consumes_availability(guess, i, answer))
}

/// True iff `guess[i]` is somewhere in the answer but not at `i`.
///
/// Coarser than [`is_present_elsewhere`]: no duplicate availability
/// accounting. Used only to interpret external puzzles' grey-at-index
/// reports, never by the entropy scorer.
///
/// # Errors
/// `LengthMismatch` if the words differ in length.
pub fn is_absent_at_position(guess: &[u8], i: usize, answer: &[u8]) -> Result<bool, WordleError> {
    ensure_equal_length(guess, answer)?;
    Ok(guess[i] != answer[i] && answer.contains(&guess[i]))
}

/// Classify a full guess against a known answer.
///
/// Two passes: correct positions claim their letters first, then
/// misplaced letters drain what is left, left to right. Produces only
/// {Correct, Present, Absent}, in agreement with the per-position
/// predicates.
#[must_use]
pub fn classify_row(guess: &Word, answer: &Word) -> FeedbackRow {
    let g = guess.bytes();
    let a = answer.bytes();

    let mut available = [0u8; 26];
    for &b in a {
        available[usize::from(b - b'a')] += 1;
    }

    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    for i in 0..WORD_LENGTH {
        if g[i] == a[i] {
            verdicts[i] = Verdict::Correct;
            available[usize::from(g[i] - b'a')] -= 1;
        }
    }
    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        let slot = &mut available[usize::from(g[i] - b'a')];
        if *slot > 0 {
            verdicts[i] = Verdict::Present;
            *slot -= 1;
        }
    }

    FeedbackRow::new(guess.clone(), verdicts)
}
