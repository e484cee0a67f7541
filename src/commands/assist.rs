//! External-puzzle assist mode
//!
//! Recommends guesses for a Wordle being played elsewhere. The user
//! reports any guesses already made and the colors each one earned; from
//! there the solver proposes a word per turn and reads back its colors.
//! Malformed input is re-prompted here at the boundary; feedback that
//! contradicts the word lists surfaces as an error.

use super::prompt;
use crate::core::{FeedbackRow, Word};
use crate::game::{GameSession, MAX_GUESSES};
use crate::output::{colored_row, print_top_candidates};
use crate::solver::{GuessCache, GuessSelector};
use crate::vocab::Vocabulary;
use anyhow::Result;
use colored::Colorize;

const INTRO: &str = "Report each guess and its colors; I'll suggest the next word.\n\
    Symbols: g = green, y = yellow, _ = grey, / = grey at this position only";

/// Run the assist loop.
///
/// # Errors
/// Fails on terminal I/O problems, or when the reported feedback is
/// inconsistent with the word lists (`EmptyCandidateSet`).
pub fn run_assist(
    vocab: &Vocabulary,
    selector: &GuessSelector,
    cache: &mut GuessCache,
) -> Result<()> {
    println!("{INTRO}\n");

    let mut session = GameSession::new(vocab);

    // replay what the user has already played
    let prior = prompt_prior_count()?;
    for turn in 1..=prior {
        let guess = prompt_word(turn)?;
        let row = prompt_colors(&guess)?;
        session.apply_feedback(row)?;
        if session.is_solved() {
            println!("{}", "That game is already won!".green());
            return Ok(());
        }
    }

    while !session.is_solved() && !session.budget_exhausted() {
        println!("Calculating...");
        let choice = selector.select(
            session.answers(),
            session.allowed(),
            session.next_turn(),
            None,
            cache,
        )?;
        print_top_candidates(&choice.ranked, session.answers());
        println!(
            "Try {} for guess {} ({} candidates remain)",
            choice.guess.text().to_uppercase().bright_yellow().bold(),
            session.next_turn(),
            session.answers().len()
        );

        let row = prompt_colors(&choice.guess)?;
        session.apply_feedback(row)?;
        if let Some(last) = session.history().last() {
            println!("{}: {}", session.guesses_made(), colored_row(last));
        }
    }

    if session.is_solved() {
        println!(
            "{}",
            format!("Solved in {} guesses!", session.guesses_made())
                .green()
                .bold()
        );
    } else {
        println!("Out of guesses. Better luck next time.");
    }
    Ok(())
}

/// Ask how many guesses were already played, 0 through 5.
fn prompt_prior_count() -> Result<usize> {
    loop {
        let input = prompt("How many guesses have you made so far?")?;
        match input.parse::<usize>() {
            Ok(n) if n < MAX_GUESSES => return Ok(n),
            _ => println!("Enter a number between 0 and {}", MAX_GUESSES - 1),
        }
    }
}

/// Read one already-played word, re-prompting until valid.
fn prompt_word(turn: usize) -> Result<Word> {
    loop {
        let input = prompt(&format!("guess {turn} word"))?;
        match Word::new(input) {
            Ok(word) => return Ok(word),
            Err(e) => println!("{e}"),
        }
    }
}

/// Read the colors for `guess`, re-prompting until they parse.
fn prompt_colors(guess: &Word) -> Result<FeedbackRow> {
    loop {
        let input = prompt(&format!("colors for {guess} (e.g. _g_y/)"))?;
        match FeedbackRow::parse(guess.clone(), &input) {
            Ok(row) => return Ok(row),
            Err(e) => println!("{e}"),
        }
    }
}
