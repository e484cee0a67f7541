//! Game session state
//!
//! One session owns the evolving candidate sets, the accumulated
//! knowledge, and the feedback history for a single game. The solver
//! only ever sees immutable borrows of the sets; all mutation happens
//! here, one feedback row at a time.

use crate::core::{AccumulatedKnowledge, FeedbackRow, Word, classify::classify_row};
use crate::error::WordleError;
use crate::solver::filter_candidates;
use crate::vocab::Vocabulary;
use log::error;

/// Guess budget for one game.
pub const MAX_GUESSES: usize = 6;

/// The bookkeeping for one game in progress.
#[derive(Debug, Clone)]
pub struct GameSession {
    answers: Vec<Word>,
    allowed: Vec<Word>,
    knowledge: AccumulatedKnowledge,
    history: Vec<FeedbackRow>,
}

impl GameSession {
    /// Start a fresh session over the full vocabulary.
    #[must_use]
    pub fn new(vocab: &Vocabulary) -> Self {
        Self {
            answers: vocab.answers().to_vec(),
            allowed: vocab.allowed().to_vec(),
            knowledge: AccumulatedKnowledge::new(),
            history: Vec::new(),
        }
    }

    /// Words still possible as the secret answer.
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words still reasonable to submit as guesses.
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    #[inline]
    #[must_use]
    pub fn knowledge(&self) -> &AccumulatedKnowledge {
        &self.knowledge
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[FeedbackRow] {
        &self.history
    }

    /// How many guesses have been played.
    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    /// 1-based turn number of the next guess.
    #[inline]
    #[must_use]
    pub fn next_turn(&self) -> usize {
        self.history.len() + 1
    }

    /// Whether the last guess hit the answer.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(FeedbackRow::is_solved)
    }

    /// Whether the guess budget is spent.
    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.history.len() >= MAX_GUESSES
    }

    /// Merge one feedback row and narrow both candidate sets.
    ///
    /// # Errors
    /// `EmptyCandidateSet` if the feedback is inconsistent with the word
    /// lists. The session is left unchanged in that case so the caller
    /// can report or retry with corrected feedback.
    pub fn apply_feedback(&mut self, row: FeedbackRow) -> Result<(), WordleError> {
        let mut knowledge = self.knowledge.clone();
        knowledge.absorb(&row);

        match filter_candidates(&self.answers, &self.allowed, &knowledge) {
            Ok((answers, allowed)) => {
                self.answers = answers;
                self.allowed = allowed;
                self.knowledge = knowledge;
                self.history.push(row);
                Ok(())
            }
            Err(e) => {
                error!(
                    "feedback {row} on turn {} dead-ends the candidate sets ({})",
                    self.next_turn(),
                    self.knowledge.summary()
                );
                Err(e)
            }
        }
    }

    /// Classify `guess` against a known `secret` and apply the result.
    ///
    /// # Errors
    /// `EmptyCandidateSet` propagated from [`Self::apply_feedback`];
    /// unreachable for truthful feedback, since the secret always
    /// survives its own constraints.
    pub fn observe(&mut self, guess: &Word, secret: &Word) -> Result<FeedbackRow, WordleError> {
        let row = classify_row(guess, secret);
        self.apply_feedback(row.clone())?;
        Ok(row)
    }
}
