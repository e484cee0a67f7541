//! Game sessions and the automated game loop

mod runner;
mod session;

pub use runner::{GameOutcome, play_game};
pub use session::{GameSession, MAX_GUESSES};
