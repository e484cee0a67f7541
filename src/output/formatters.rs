//! Formatting utilities for terminal output

use crate::core::{FeedbackRow, Verdict};
use colored::Colorize;

/// Render a feedback row as colored letters: green for correct, yellow
/// for present, black-on-white for absent, plain for absent-at-position.
#[must_use]
pub fn colored_row(row: &FeedbackRow) -> String {
    let mut out = String::new();
    for (i, verdict) in row.verdicts().iter().enumerate() {
        let letter = (row.guess().letter_at(i) as char).to_string();
        let rendered = match verdict {
            Verdict::Correct => letter.green().bold().to_string(),
            Verdict::Present => letter.yellow().to_string(),
            Verdict::Absent => letter.black().on_white().to_string(),
            Verdict::AbsentAtPosition => letter,
        };
        out.push_str(&rendered);
    }
    out
}

/// A fixed-width bar: filled proportional to `value / max`.
#[must_use]
pub fn histogram_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value * width) / max).max(usize::from(value > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
