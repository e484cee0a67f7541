//! Wordle Oracle - CLI
//!
//! Play a game, get live help with an external puzzle, watch the solver
//! trace a known target, or simulate the full answer list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_oracle::{
    commands::{print_simulation_stats, run_assist, run_play, simulate_all_games, solve_target},
    core::Word,
    output::print_solve_report,
    solver::{DEFAULT_CACHE_FILE, DEFAULT_OPENING, GuessCache, GuessSelector, SelectorConfig},
    vocab::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_oracle",
    about = "Wordle player and solver driven by one-step information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the allowed-guess word list
    #[arg(long, global = true, default_value = "data/allowed.txt")]
    allowed: PathBuf,

    /// Path to the answer word list (subset of the allowed list)
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Turn-one opening guess; re-derive when changing vocabularies
    #[arg(long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Known-answer cache file
    #[arg(long, global = true, default_value = DEFAULT_CACHE_FILE)]
    cache: PathBuf,

    /// Skip loading and saving the known-answer cache
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game yourself against a random secret (default)
    Play {
        /// Do not show candidate hints after each guess
        #[arg(long)]
        no_hints: bool,
    },

    /// Recommend guesses for a Wordle you are playing elsewhere
    Assist,

    /// Watch the solver play out a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and information gained per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver over every answer word and report statistics
    Simulate {
        /// Limit the number of answers simulated
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let vocab = Vocabulary::from_files(&cli.allowed, &cli.answers)?;
    let selector = GuessSelector::new(SelectorConfig {
        opening: Word::new(cli.opening.as_str())?,
        ..SelectorConfig::default()
    });
    let mut cache = if cli.no_cache {
        GuessCache::new()
    } else {
        GuessCache::load(&cli.cache)
    };

    let command = cli.command.unwrap_or(Commands::Play { no_hints: false });
    match command {
        Commands::Play { no_hints } => run_play(&vocab, !no_hints)?,
        Commands::Assist => run_assist(&vocab, &selector, &mut cache)?,
        Commands::Solve { word, verbose } => {
            let report = solve_target(&word, &vocab, &selector, &mut cache)?;
            print_solve_report(&report, verbose);
        }
        Commands::Simulate { limit } => {
            let stats = simulate_all_games(&vocab, &selector, &mut cache, limit)?;
            print_simulation_stats(&stats);
        }
    }

    if !cli.no_cache {
        cache.save(&cli.cache);
    }

    Ok(())
}
