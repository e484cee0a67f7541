//! Display functions for command results

use super::formatters::colored_row;
use crate::commands::solve::SolveReport;
use crate::core::Word;
use crate::solver::ScoredGuess;
use colored::Colorize;

/// Print the trace of a solved (or failed) target word.
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, colored_row(&step.row));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(bits) = step.bits {
                println!("  Expected:   {bits:.3} bits");
            }
            if step.candidates_after > 0 {
                let gained =
                    (step.candidates_before as f64 / step.candidates_after as f64).log2();
                println!("  Gained:     {gained:.3} bits");
            }
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved within {} guesses", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the ranked shortlist of candidate guesses. Words still possible
/// as the answer are marked.
pub fn print_top_candidates(ranked: &[ScoredGuess], answers: &[Word]) {
    if ranked.is_empty() {
        return;
    }
    println!("{}", "Top candidates:".bright_cyan());
    for scored in ranked {
        let marker = if answers.contains(&scored.word) {
            "*"
        } else {
            " "
        };
        println!(
            "  {marker} {}  {:.3} bits",
            scored.word.text().to_uppercase(),
            scored.bits
        );
    }
}
