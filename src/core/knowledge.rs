//! Accumulated puzzle knowledge
//!
//! Everything learned from the feedback rows of one game, reduced to the
//! minimal statistic the candidate filter needs: letters absent from the
//! whole answer, the confirmed letter per position, and per-position
//! lists of letters known present-but-not-here or absent-here-only.
//!
//! Absorbing rows one at a time is equivalent to replaying the entire
//! history; each field has its own merge rule.

use super::feedback::{FeedbackRow, Verdict};
use super::word::WORD_LENGTH;
use rustc_hash::FxHashSet;

/// Knowledge accumulated across all guesses of one game.
#[derive(Debug, Clone, Default)]
pub struct AccumulatedKnowledge {
    /// Letters confirmed absent at every position.
    absent: FxHashSet<u8>,
    /// Confirmed letter per position, if any.
    correct: [Option<u8>; WORD_LENGTH],
    /// Letters seen misplaced at each position: in the answer, not here.
    present_at: [Vec<u8>; WORD_LENGTH],
    /// Letters confirmed absent specifically at each position.
    absent_at: [Vec<u8>; WORD_LENGTH],
}

impl AccumulatedKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one feedback row.
    ///
    /// Merge rules: union into the absent set, overwrite-if-empty for the
    /// per-position correct letter, append (skipping duplicates) for the
    /// per-position lists.
    pub fn absorb(&mut self, row: &FeedbackRow) {
        for (i, verdict) in row.verdicts().iter().enumerate() {
            let letter = row.guess().letter_at(i);
            match verdict {
                Verdict::Correct => {
                    if self.correct[i].is_none() {
                        self.correct[i] = Some(letter);
                    }
                }
                Verdict::Present => {
                    if !self.present_at[i].contains(&letter) {
                        self.present_at[i].push(letter);
                    }
                }
                Verdict::Absent => {
                    self.absent.insert(letter);
                }
                Verdict::AbsentAtPosition => {
                    if !self.absent_at[i].contains(&letter) {
                        self.absent_at[i].push(letter);
                    }
                }
            }
        }
    }

    /// Whether `letter` is confirmed absent from the whole answer.
    #[inline]
    #[must_use]
    pub fn is_letter_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    /// The confirmed letter at `position`, if known.
    #[inline]
    #[must_use]
    pub const fn correct_at(&self, position: usize) -> Option<u8> {
        self.correct[position]
    }

    /// Letters known to be in the answer but not at `position`.
    #[inline]
    #[must_use]
    pub fn present_at(&self, position: usize) -> &[u8] {
        &self.present_at[position]
    }

    /// Letters confirmed absent specifically at `position`.
    #[inline]
    #[must_use]
    pub fn absent_at(&self, position: usize) -> &[u8] {
        &self.absent_at[position]
    }

    /// Compact single-line rendering for logs and error context.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut absent: Vec<char> = self.absent.iter().map(|&b| b as char).collect();
        absent.sort_unstable();
        let correct: String = self
            .correct
            .iter()
            .map(|slot| slot.map_or('.', |b| b as char))
            .collect();
        let misplaced: usize = self.present_at.iter().map(Vec::len).sum();
        format!(
            "correct={correct} absent={} misplaced={misplaced}",
            absent.into_iter().collect::<String>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn row(guess: &str, symbols: &str) -> FeedbackRow {
        FeedbackRow::parse(Word::new(guess).unwrap(), symbols).unwrap()
    }

    #[test]
    fn absorb_routes_each_verdict() {
        let mut knowledge = AccumulatedKnowledge::new();
        knowledge.absorb(&row("crane", "gy_/_"));

        assert_eq!(knowledge.correct_at(0), Some(b'c'));
        assert_eq!(knowledge.present_at(1), &[b'r']);
        assert!(knowledge.is_letter_absent(b'a'));
        assert!(knowledge.is_letter_absent(b'e'));
        assert_eq!(knowledge.absent_at(3), &[b'n']);
    }

    #[test]
    fn correct_letter_is_not_overwritten() {
        let mut knowledge = AccumulatedKnowledge::new();
        knowledge.absorb(&row("crane", "g____"));
        knowledge.absorb(&row("slate", "g____"));
        // first confirmation wins; a conflicting later row cannot clobber it
        assert_eq!(knowledge.correct_at(0), Some(b'c'));
    }

    #[test]
    fn lists_append_without_duplicates() {
        let mut knowledge = AccumulatedKnowledge::new();
        knowledge.absorb(&row("crane", "_y___"));
        knowledge.absorb(&row("brand", "_y___"));
        assert_eq!(knowledge.present_at(1), &[b'r']);

        knowledge.absorb(&row("weary", "__y__"));
        assert_eq!(knowledge.present_at(2), &[b'a']);
    }

    #[test]
    fn absent_set_is_a_union() {
        let mut knowledge = AccumulatedKnowledge::new();
        knowledge.absorb(&row("crane", "_____"));
        knowledge.absorb(&row("limbs", "_____"));
        for letter in *b"cranelimbs" {
            assert!(knowledge.is_letter_absent(letter));
        }
        assert!(!knowledge.is_letter_absent(b'z'));
    }

    #[test]
    fn absorb_order_does_not_change_membership() {
        let rows = [
            row("crane", "gy__y"),
            row("salet", "_y/_g"),
            row("pours", "__y__"),
        ];

        let mut forward = AccumulatedKnowledge::new();
        for r in &rows {
            forward.absorb(r);
        }

        let mut backward = AccumulatedKnowledge::new();
        for r in rows.iter().rev() {
            backward.absorb(r);
        }

        for i in 0..WORD_LENGTH {
            assert_eq!(forward.correct_at(i), backward.correct_at(i));
            for letter in forward.present_at(i) {
                assert!(backward.present_at(i).contains(letter));
            }
            for letter in forward.absent_at(i) {
                assert!(backward.absent_at(i).contains(letter));
            }
        }
        for letter in b'a'..=b'z' {
            assert_eq!(
                forward.is_letter_absent(letter),
                backward.is_letter_absent(letter)
            );
        }
    }

    #[test]
    fn summary_is_compact() {
        let mut knowledge = AccumulatedKnowledge::new();
        knowledge.absorb(&row("crane", "gy___"));
        let summary = knowledge.summary();
        assert!(summary.contains("correct=c...."));
        assert!(summary.contains("misplaced=1"));
    }
}
