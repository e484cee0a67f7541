//! Candidate filtering
//!
//! Narrows the answer and allowed sets to words consistent with the
//! accumulated feedback. Pure: inputs are untouched, new vectors come
//! back. An empty result is an inconsistency between the feedback and
//! the word lists and is always surfaced.

use crate::core::{AccumulatedKnowledge, WORD_LENGTH, Word};
use crate::error::WordleError;

/// Reduce both word sets against the accumulated knowledge.
///
/// The allowed set only drops words containing a letter confirmed absent
/// everywhere; the answer set additionally honors the per-position
/// constraints.
///
/// # Errors
/// `EmptyCandidateSet` if either resulting set ends up empty.
pub fn filter_candidates(
    answers: &[Word],
    allowed: &[Word],
    knowledge: &AccumulatedKnowledge,
) -> Result<(Vec<Word>, Vec<Word>), WordleError> {
    let new_answers: Vec<Word> = answers
        .iter()
        .filter(|w| answer_is_consistent(w, knowledge))
        .cloned()
        .collect();

    let new_allowed: Vec<Word> = allowed
        .iter()
        .filter(|w| !contains_absent_letter(w, knowledge))
        .cloned()
        .collect();

    if new_answers.is_empty() || new_allowed.is_empty() {
        return Err(WordleError::EmptyCandidateSet {
            answers_remaining: new_answers.len(),
            allowed_remaining: new_allowed.len(),
        });
    }

    Ok((new_answers, new_allowed))
}

fn contains_absent_letter(word: &Word, knowledge: &AccumulatedKnowledge) -> bool {
    word.bytes().iter().any(|&b| knowledge.is_letter_absent(b))
}

/// A word can still be the answer iff every position survives all four
/// checks: the confirmed letter, the misplaced letters it must hold
/// elsewhere, the absent-everywhere set, and the absent-here list.
fn answer_is_consistent(word: &Word, knowledge: &AccumulatedKnowledge) -> bool {
    for i in 0..WORD_LENGTH {
        let letter = word.letter_at(i);

        if let Some(required) = knowledge.correct_at(i)
            && letter != required
        {
            return false;
        }

        if knowledge.is_letter_absent(letter) {
            return false;
        }

        if knowledge.absent_at(i).contains(&letter) {
            return false;
        }

        for &misplaced in knowledge.present_at(i) {
            if !occurs_elsewhere(word, i, misplaced) {
                return false;
            }
        }
    }
    true
}

/// Whether `letter` occurs in `word` at any position other than `excluded`.
fn occurs_elsewhere(word: &Word, excluded: usize, letter: u8) -> bool {
    word.bytes()
        .iter()
        .enumerate()
        .any(|(j, &b)| j != excluded && b == letter)
}
