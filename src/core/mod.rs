//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. Everything here is pure
//! and `Copy`-cheap where possible, so solver code can pass words and patterns
//! around by value.

mod knowledge;
mod letters;
mod pattern;
mod word;

pub use knowledge::KnowledgeState;
pub use letters::LetterSet;
pub use pattern::{Feedback, ParsePatternError, Pattern};
pub use word::{WORD_LEN, Word, WordError};
