//! Wordle Minimax
//!
//! A Wordle solver that picks each guess by greedy minimax over feedback
//! partitions, adjusted by letter-exploration heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{Pattern, Word};
//! use wordle_minimax::solver::{Game, Outcome, Selector};
//! use wordle_minimax::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let selector = Selector::default();
//! let mut game = Game::new(&dictionary, &selector);
//!
//! let guess = game.suggest().unwrap();
//! assert_eq!(guess.as_str(), "COURT");
//!
//! // Feedback for COURT when the answer is CRATE
//! let pattern = Pattern::calculate(&guess, &Word::new("crate").unwrap());
//! assert_eq!(pattern.to_string(), "GBBYY");
//! assert!(matches!(game.apply(guess, pattern), Ok(Outcome::Continue { .. })));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
