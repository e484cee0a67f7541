//! Guess selection
//!
//! Turns the entropy scores into an actual guess. Per-turn state machine:
//! a fixed opening word on turn one, the lone survivor when the answer
//! set is down to a single word, a cache fast-path when the answer is
//! known from a previous solve, and otherwise a full scoring pass over
//! the allowed set.
//!
//! Scoring each allowed word is independent of every other, so the pass
//! runs on the rayon pool; each task reads the same immutable answer
//! slice and writes one score.

use super::cache::GuessCache;
use super::entropy::score_guess;
use crate::core::Word;
use crate::error::WordleError;
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Opening guess for the standard vocabulary. Precomputed offline; must
/// be re-derived if the vocabulary changes.
pub const DEFAULT_OPENING: &str = "salet";

/// How many ranked candidates to keep for tie-breaking and display.
pub const DEFAULT_TOP_K: usize = 10;

/// Tunables for guess selection.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// The fixed turn-one guess.
    pub opening: Word,
    /// Size of the ranked shortlist.
    pub top_k: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            opening: Word::new(DEFAULT_OPENING).expect("default opening word is valid"),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// A guess with its expected information gain.
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    pub word: Word,
    pub bits: f64,
}

/// The outcome of one selection: the chosen guess, plus the ranked
/// shortlist when a scoring pass actually ran (empty on the fast paths).
#[derive(Debug, Clone)]
pub struct Choice {
    pub guess: Word,
    pub ranked: Vec<ScoredGuess>,
}

/// Selects the next guess for a game in progress.
#[derive(Debug, Clone, Default)]
pub struct GuessSelector {
    config: SelectorConfig,
}

impl GuessSelector {
    #[must_use]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// The configured turn-one guess.
    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.config.opening
    }

    /// Choose the guess for 1-based `turn`.
    ///
    /// When `known_answer` is given, the choice is recorded into `cache`
    /// so later solves of the same answer can skip the scoring pass; a
    /// cache miss falls through to scoring.
    ///
    /// # Errors
    /// - `NoCandidates` if `allowed` is empty (an upstream filtering bug)
    /// - `EmptyAnswerSet` propagated from scoring if `answers` is empty
    pub fn select(
        &self,
        answers: &[Word],
        allowed: &[Word],
        turn: usize,
        known_answer: Option<&Word>,
        cache: &mut GuessCache,
    ) -> Result<Choice, WordleError> {
        if allowed.is_empty() {
            return Err(WordleError::NoCandidates { turn });
        }

        let choice = if turn <= 1 {
            Choice {
                guess: self.config.opening.clone(),
                ranked: Vec::new(),
            }
        } else if answers.len() == 1 {
            Choice {
                guess: answers[0].clone(),
                ranked: Vec::new(),
            }
        } else if let Some(cached) = known_answer.and_then(|a| cache.lookup(a, turn)) {
            debug!("cache hit for turn {turn}: {cached}");
            Choice {
                guess: cached,
                ranked: Vec::new(),
            }
        } else {
            let ranked = self.rank(answers, allowed)?;
            let guess = pick_best(&ranked, answers);
            debug!(
                "scored {} guesses on turn {turn}, best {} at {:.3} bits",
                allowed.len(),
                guess,
                ranked[0].bits
            );
            Choice { guess, ranked }
        };

        if let Some(answer) = known_answer {
            cache.record(answer, &choice.guess);
        }

        Ok(choice)
    }

    /// Score every allowed word and return the top-K shortlist, sorted by
    /// descending bits with ties in lexicographic word order.
    ///
    /// # Errors
    /// `EmptyAnswerSet` propagated from scoring.
    pub fn rank(&self, answers: &[Word], allowed: &[Word]) -> Result<Vec<ScoredGuess>, WordleError> {
        let mut ranked: Vec<ScoredGuess> = allowed
            .par_iter()
            .map(|word| {
                score_guess(word, answers).map(|bits| ScoredGuess {
                    word: word.clone(),
                    bits,
                })
            })
            .collect::<Result<_, _>>()?;

        ranked.sort_by(|a, b| b.bits.total_cmp(&a.bits).then_with(|| a.word.cmp(&b.word)));
        // a shortlist of at least one keeps pick_best total
        ranked.truncate(self.config.top_k.max(1));
        Ok(ranked)
    }
}

/// Among the words tied for the top score, prefer one that could itself
/// be the answer; otherwise the shortlist's first entry (lexicographically
/// smallest of the tie) wins.
fn pick_best(ranked: &[ScoredGuess], answers: &[Word]) -> Word {
    let top = ranked[0].bits;
    ranked
        .iter()
        .take_while(|s| s.bits.total_cmp(&top) == Ordering::Equal)
        .find(|s| answers.contains(&s.word))
        .unwrap_or(&ranked[0])
        .word
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn turn_one_returns_opening_regardless_of_vocabulary() {
        let selector = GuessSelector::default();
        let answers = words(&["crane", "slate"]);
        let allowed = words(&["crane", "slate"]);
        let mut cache = GuessCache::new();

        let choice = selector
            .select(&answers, &allowed, 1, None, &mut cache)
            .unwrap();
        assert_eq!(choice.guess.text(), DEFAULT_OPENING);
        assert!(choice.ranked.is_empty());
    }

    #[test]
    fn opening_is_configurable() {
        let selector = GuessSelector::new(SelectorConfig {
            opening: word("crane"),
            top_k: DEFAULT_TOP_K,
        });
        let set = words(&["slate"]);
        let mut cache = GuessCache::new();

        let choice = selector.select(&set, &set, 1, None, &mut cache).unwrap();
        assert_eq!(choice.guess.text(), "crane");
    }

    #[test]
    fn single_candidate_is_returned_directly() {
        let selector = GuessSelector::default();
        let answers = words(&["crane"]);
        let allowed = words(&["crane", "slate", "pound"]);
        let mut cache = GuessCache::new();

        let choice = selector
            .select(&answers, &allowed, 3, None, &mut cache)
            .unwrap();
        assert_eq!(choice.guess.text(), "crane");
        assert!(choice.ranked.is_empty());
    }

    #[test]
    fn cache_hit_skips_scoring() {
        let selector = GuessSelector::default();
        let answer = word("crane");
        let mut cache = GuessCache::new();
        cache.record(&answer, &word("salet"));
        cache.record(&answer, &word("corny"));
        cache.record(&answer, &word("crane"));

        let answers = words(&["crane", "crate", "plane"]);
        let allowed = words(&["crane", "crate", "plane", "salet"]);

        let choice = selector
            .select(&answers, &allowed, 2, Some(&answer), &mut cache)
            .unwrap();
        // cached sequence position 2, with no scoring pass run
        assert_eq!(choice.guess.text(), "corny");
        assert!(choice.ranked.is_empty());
    }

    #[test]
    fn cache_miss_falls_through_to_scoring() {
        let selector = GuessSelector::default();
        let answer = word("crane");
        let mut cache = GuessCache::new();
        cache.record(&answer, &word("salet"));

        let answers = words(&["crane", "crate", "plane"]);
        let allowed = words(&["crane", "crate", "plane"]);

        // turn 2 wants sequence position 2; only one guess is recorded
        let choice = selector
            .select(&answers, &allowed, 2, Some(&answer), &mut cache)
            .unwrap();
        assert!(!choice.ranked.is_empty());
        // the fallthrough result is now recorded for next time
        assert_eq!(cache.sequence(&answer).unwrap().len(), 2);
    }

    #[test]
    fn selection_is_recorded_for_known_answers() {
        let selector = GuessSelector::default();
        let answer = word("crane");
        let mut cache = GuessCache::new();
        let set = words(&["crane", "slate"]);

        selector
            .select(&set, &set, 1, Some(&answer), &mut cache)
            .unwrap();
        assert_eq!(cache.sequence(&answer).unwrap(), &[DEFAULT_OPENING]);
    }

    #[test]
    fn nothing_is_recorded_without_known_answer() {
        let selector = GuessSelector::default();
        let mut cache = GuessCache::new();
        let set = words(&["crane", "slate"]);

        selector.select(&set, &set, 1, None, &mut cache).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn empty_allowed_set_is_no_candidates() {
        let selector = GuessSelector::default();
        let answers = words(&["crane"]);
        let mut cache = GuessCache::new();

        let result = selector.select(&answers, &[], 2, None, &mut cache);
        assert!(matches!(
            result,
            Err(WordleError::NoCandidates { turn: 2 })
        ));
    }

    #[test]
    fn rank_sorts_by_bits_then_word() {
        let selector = GuessSelector::default();
        let answers = words(&["pound", "mound", "bound", "manor"]);
        // ZZZZZ scores zero bits, the others tie above it
        let allowed = words(&["zzzzz", "pound", "mound"]);

        let ranked = selector.rank(&answers, &allowed).unwrap();
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].bits >= ranked[1].bits);
        assert_eq!(ranked[2].word.text(), "zzzzz");
    }

    #[test]
    fn rank_respects_top_k() {
        let selector = GuessSelector::new(SelectorConfig {
            opening: word(DEFAULT_OPENING),
            top_k: 2,
        });
        let answers = words(&["crane", "slate", "pound"]);
        let allowed = words(&["crane", "slate", "pound", "manor", "bingo"]);

        let ranked = selector.rank(&answers, &allowed).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ties_prefer_answer_set_members() {
        let selector = GuessSelector::default();
        // All three guesses split {CCCCC, DDDDD} perfectly and tie at
        // 1 bit. ACCCC sorts first but cannot be the answer; CCCCC can.
        let answers = words(&["ccccc", "ddddd"]);
        let allowed = words(&["acccc", "ccccc", "ddddd"]);

        let choice = selector
            .select(&answers, &allowed, 2, None, &mut GuessCache::new())
            .unwrap();
        assert_eq!(choice.ranked[0].word.text(), "acccc");
        assert_eq!(choice.guess.text(), "ccccc");
    }

    #[test]
    fn selection_is_deterministic() {
        let selector = GuessSelector::default();
        let answers = words(&["crane", "crate", "plane", "slate", "stare"]);
        let allowed = answers.clone();

        let a = selector
            .select(&answers, &allowed, 2, None, &mut GuessCache::new())
            .unwrap();
        let b = selector
            .select(&answers, &allowed, 2, None, &mut GuessCache::new())
            .unwrap();
        assert_eq!(a.guess, b.guess);
    }
}
