//! Solve a known target word
//!
//! Runs the solver against a specific answer and captures a per-turn
//! trace: candidate counts, the expected bits of the chosen guess, and
//! the feedback it produced.

use crate::core::{FeedbackRow, Word};
use crate::error::WordleError;
use crate::game::GameSession;
use crate::solver::{GuessCache, GuessSelector};
use crate::vocab::Vocabulary;

/// One turn of a traced solve.
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub row: FeedbackRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected information of the guess, when a scoring pass ran.
    pub bits: Option<f64>,
}

/// The full trace of solving one target.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub target: Word,
    pub steps: Vec<SolveStep>,
    pub solved: bool,
}

/// Solve `target` and return the trace.
///
/// # Errors
/// `InvalidVocabulary` if the target is malformed or not in the answer
/// list; selector/filter errors propagate.
pub fn solve_target(
    target: &str,
    vocab: &Vocabulary,
    selector: &GuessSelector,
    cache: &mut GuessCache,
) -> Result<SolveReport, WordleError> {
    let target = Word::new(target)?;
    if !vocab.answers().contains(&target) {
        return Err(WordleError::InvalidVocabulary {
            reason: format!("target {target:?} is not in the answer list"),
        });
    }

    let mut session = GameSession::new(vocab);
    let mut steps = Vec::new();
    let mut solved = false;

    while !session.budget_exhausted() {
        let candidates_before = session.answers().len();
        let choice = selector.select(
            session.answers(),
            session.allowed(),
            session.next_turn(),
            Some(&target),
            cache,
        )?;
        let bits = choice
            .ranked
            .iter()
            .find(|scored| scored.word == choice.guess)
            .map(|scored| scored.bits);

        let row = session.observe(&choice.guess, &target)?;
        let candidates_after = session.answers().len();

        let done = row.is_solved();
        steps.push(SolveStep {
            row,
            candidates_before,
            candidates_after,
            bits,
        });

        if done {
            solved = true;
            break;
        }
    }

    Ok(SolveReport {
        target,
        steps,
        solved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;
    use crate::solver::SelectorConfig;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn vocab() -> Vocabulary {
        let set: Vec<Word> = ["crane", "crate", "plane", "slate", "stare"]
            .iter()
            .map(|t| word(t))
            .collect();
        Vocabulary::new(set.clone(), set).unwrap()
    }

    fn selector() -> GuessSelector {
        GuessSelector::new(SelectorConfig {
            opening: word("slate"),
            ..SelectorConfig::default()
        })
    }

    #[test]
    fn solve_traces_candidate_narrowing() {
        let vocab = vocab();
        let report =
            solve_target("crane", &vocab, &selector(), &mut GuessCache::new()).unwrap();

        assert!(report.solved);
        assert!(report.steps.len() <= MAX_GUESSES);
        assert!(report.steps.last().unwrap().row.is_solved());
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_rejects_unknown_target() {
        let vocab = vocab();
        let result = solve_target("zzzzz", &vocab, &selector(), &mut GuessCache::new());
        assert!(matches!(
            result,
            Err(WordleError::InvalidVocabulary { .. })
        ));
    }

    #[test]
    fn solve_rejects_malformed_target() {
        let vocab = vocab();
        let result = solve_target("cr4ne", &vocab, &selector(), &mut GuessCache::new());
        assert!(result.is_err());
    }

    #[test]
    fn solve_records_guesses_in_cache() {
        let vocab = vocab();
        let mut cache = GuessCache::new();
        let report = solve_target("stare", &vocab, &selector(), &mut cache).unwrap();

        let recorded = cache.sequence(&word("stare")).unwrap();
        assert_eq!(recorded.len(), report.steps.len());
        for (recorded, step) in recorded.iter().zip(&report.steps) {
            assert_eq!(recorded, step.row.guess().text());
        }
    }
}
