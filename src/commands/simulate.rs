//! Full-vocabulary simulation
//!
//! Plays the solver against every answer word once and aggregates
//! win/loss counts, average guesses, and the guesses-to-finish
//! histogram. Games run sequentially: they share the known-answer cache,
//! which is what makes repeated runs cheap.

use crate::core::Word;
use crate::error::WordleError;
use crate::game::{GameOutcome, MAX_GUESSES, play_game};
use crate::output::formatters::histogram_bar;
use crate::solver::{GuessCache, GuessSelector};
use crate::vocab::Vocabulary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

/// Aggregate statistics over a simulation run.
#[derive(Debug, Default, Clone)]
pub struct SimulationStats {
    pub n_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_guesses: usize,
    /// Games by guesses played, index 0 = one guess.
    pub histogram: [usize; MAX_GUESSES],
}

impl SimulationStats {
    fn record(&mut self, outcome: &GameOutcome) {
        self.n_games += 1;
        if outcome.solved {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.total_guesses += outcome.guess_count();
        self.histogram[outcome.guess_count() - 1] += 1;
    }

    /// Mean guesses per game, over all games.
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.n_games == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.n_games as f64
        }
    }

    /// Fraction of games solved within the budget.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.n_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.n_games as f64
        }
    }
}

/// Play every answer word (or the first `limit`) once.
///
/// # Errors
/// Propagates the first game that fails with a solver or filtering
/// error; individual losses are statistics, not errors.
pub fn simulate_all_games(
    vocab: &Vocabulary,
    selector: &GuessSelector,
    cache: &mut GuessCache,
    limit: Option<usize>,
) -> Result<SimulationStats, WordleError> {
    let targets: Vec<Word> = vocab
        .answers()
        .iter()
        .take(limit.unwrap_or(vocab.answers().len()))
        .cloned()
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut stats = SimulationStats::default();
    for secret in &targets {
        let outcome = play_game(vocab, secret, selector, cache)?;
        debug!(
            "{secret}: {} in {} guesses",
            if outcome.solved { "solved" } else { "lost" },
            outcome.guess_count()
        );
        stats.record(&outcome);
        pb.set_message(format!("avg {:.2}", stats.average_guesses()));
        pb.inc(1);
    }
    pb.finish_with_message("done");

    Ok(stats)
}

/// Print the aggregate simulation results.
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Games played:     {}", stats.n_games);
    println!(
        "  Solved:           {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate() * 100.0).green()
    );
    if stats.losses > 0 {
        println!(
            "  Lost:             {} {}",
            stats.losses,
            format!(
                "({:.1}%)",
                stats.losses as f64 / stats.n_games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:  {}",
        format!("{:.3}", stats.average_guesses())
            .bright_yellow()
            .bold()
    );

    println!("\n{}", "Guess distribution".bright_cyan().bold());
    let max_count = stats.histogram.iter().copied().max().unwrap_or(1);
    for (i, &count) in stats.histogram.iter().enumerate() {
        let guesses = i + 1;
        let pct = if stats.n_games > 0 {
            count as f64 / stats.n_games as f64 * 100.0
        } else {
            0.0
        };
        let bar = histogram_bar(count, max_count, 40);
        println!("  {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
