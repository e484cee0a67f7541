//! Wordle Oracle
//!
//! Plays and solves Wordle puzzles by maximizing one-step expected
//! information: every allowed guess is scored by the Shannon entropy of
//! the feedback-pattern distribution it induces over the remaining
//! answers, and the best-scoring word is played next.
//!
//! # Quick Start
//!
//! ```
//! use wordle_oracle::core::{Word, classify::classify_row};
//!
//! let guess = Word::new("crate")?;
//! let answer = Word::new("crane")?;
//!
//! let row = classify_row(&guess, &answer);
//! assert_eq!(row.to_string(), "crate ggg_g");
//! # Ok::<(), wordle_oracle::error::WordleError>(())
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game sessions and the automated game loop
pub mod game;

// Solving algorithms and the known-answer cache
pub mod solver;

// Word-list loading and validation
pub mod vocab;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
