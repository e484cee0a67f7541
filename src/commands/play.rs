//! Human play mode
//!
//! A game against a randomly drawn secret: the player types guesses,
//! the game colors the feedback and, optionally, samples a few remaining
//! candidates as hints.

use super::prompt;
use crate::core::Word;
use crate::game::GameSession;
use crate::output::colored_row;
use crate::vocab::Vocabulary;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::prelude::IndexedRandom;

const BAD_INPUT: &str = "Invalid input. Use a valid lowercase five letter word.";

/// How many candidate words a hint shows at most.
const HINT_SAMPLE: usize = 10;

/// Run one interactive game.
///
/// # Errors
/// Fails on I/O problems with the terminal; game-level inconsistencies
/// cannot occur because feedback is computed from the secret itself.
pub fn run_play(vocab: &Vocabulary, use_hints: bool) -> Result<()> {
    let mut rng = rand::rng();
    let secret = vocab
        .answers()
        .choose(&mut rng)
        .cloned()
        .context("answer list is empty")?;

    println!("--- Wordle ---");
    println!("Guess the unknown five-letter word within six guesses.");
    println!(
        "{} exact match, {} elsewhere in the word, {} not in the word.\n",
        "green".green(),
        "yellow".yellow(),
        "grey".black().on_white()
    );

    let mut session = GameSession::new(vocab);

    while !session.budget_exhausted() && !session.is_solved() {
        let guess = prompt_player_guess(&session)?;
        let row = session.observe(&guess, &secret)?;
        println!("{}: {}", session.guesses_made(), colored_row(&row));

        if use_hints && !row.is_solved() {
            print_hints(&session, &mut rng);
        }
    }

    if session.is_solved() {
        println!("{}", "You won!".green().bold());
    } else {
        println!("You lost. The answer was {}", secret.text().to_uppercase());
    }
    Ok(())
}

/// Re-prompt until the input is a word from the remaining allowed set.
fn prompt_player_guess(session: &GameSession) -> Result<Word> {
    loop {
        let input = prompt(&session.next_turn().to_string())?;
        if let Ok(word) = Word::new(input)
            && session.allowed().contains(&word)
        {
            return Ok(word);
        }
        println!("{BAD_INPUT}");
    }
}

fn print_hints(session: &GameSession, rng: &mut impl rand::Rng) {
    let sample: Vec<&str> = session
        .answers()
        .choose_multiple(rng, HINT_SAMPLE)
        .map(Word::text)
        .collect();
    match sample.as_slice() {
        [] => {}
        [only] => println!("hint: {only}"),
        many => println!("hints: {}", many.join(", ")),
    }
}
