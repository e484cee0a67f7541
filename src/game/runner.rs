//! Automated game loop
//!
//! Plays one full game of the solver against a known secret, within the
//! guess budget. Used by the solve command and the simulation.

use super::session::{GameSession, MAX_GUESSES};
use crate::core::Word;
use crate::error::WordleError;
use crate::solver::{GuessCache, GuessSelector};
use crate::vocab::Vocabulary;

/// The result of one finished game.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub answer: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

impl GameOutcome {
    /// Number of guesses played.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// Play one automated game against `secret`.
///
/// The secret is passed to the selector as the known answer, so the
/// chosen guesses are recorded in `cache` and replays of the same secret
/// skip the scoring pass.
///
/// # Errors
/// Propagates selector and filtering errors; both indicate an upstream
/// bug or inconsistent word lists, not a normal game outcome.
pub fn play_game(
    vocab: &Vocabulary,
    secret: &Word,
    selector: &GuessSelector,
    cache: &mut GuessCache,
) -> Result<GameOutcome, WordleError> {
    let mut session = GameSession::new(vocab);
    let mut guesses = Vec::with_capacity(MAX_GUESSES);

    while !session.budget_exhausted() {
        let choice = selector.select(
            session.answers(),
            session.allowed(),
            session.next_turn(),
            Some(secret),
            cache,
        )?;
        let row = session.observe(&choice.guess, secret)?;
        guesses.push(choice.guess);

        if row.is_solved() {
            return Ok(GameOutcome {
                answer: secret.clone(),
                guesses,
                solved: true,
            });
        }
    }

    Ok(GameOutcome {
        answer: secret.clone(),
        guesses,
        solved: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
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
        // open inside the tiny vocabulary so games can end on turn one
        GuessSelector::new(SelectorConfig {
            opening: word("slate"),
            ..SelectorConfig::default()
        })
    }

    #[test]
    fn solves_every_word_in_small_vocabulary() {
        let vocab = vocab();
        let selector = selector();
        let mut cache = GuessCache::new();

        for secret in vocab.answers().to_vec() {
            let outcome = play_game(&vocab, &secret, &selector, &mut cache).unwrap();
            assert!(outcome.solved, "failed to solve {secret}");
            assert!(outcome.guess_count() <= MAX_GUESSES);
            assert_eq!(outcome.guesses.last(), Some(&secret));
        }
    }

    #[test]
    fn outcome_guesses_match_cache_sequence() {
        let vocab = vocab();
        let selector = selector();
        let mut cache = GuessCache::new();
        let secret = word("crane");

        let outcome = play_game(&vocab, &secret, &selector, &mut cache).unwrap();
        assert!(outcome.solved);

        let recorded: Vec<&str> = cache
            .sequence(&secret)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        let played: Vec<&str> = outcome.guesses.iter().map(Word::text).collect();
        assert_eq!(recorded, played);
    }

    #[test]
    fn replay_reuses_cached_guesses() {
        let vocab = vocab();
        let selector = selector();
        let mut cache = GuessCache::new();
        let secret = word("stare");

        let first = play_game(&vocab, &secret, &selector, &mut cache).unwrap();
        let cached_after_first = cache.sequence(&secret).unwrap().to_vec();

        let replay = play_game(&vocab, &secret, &selector, &mut cache).unwrap();

        // identical games, and the cache did not grow
        let first_texts: Vec<&str> = first.guesses.iter().map(Word::text).collect();
        let replay_texts: Vec<&str> = replay.guesses.iter().map(Word::text).collect();
        assert_eq!(first_texts, replay_texts);
        assert_eq!(cache.sequence(&secret).unwrap(), &cached_after_first[..]);
    }
}
