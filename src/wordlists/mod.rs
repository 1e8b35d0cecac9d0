//! Word lists for Wordle solving
//!
//! Provides the embedded default dictionary and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::collections::HashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_uppercase() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
            assert!(Word::new(word).is_ok());
        }
    }

    #[test]
    fn words_are_distinct() {
        let unique: HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn contains_both_openers() {
        assert!(WORDS.contains(&"COURT"));
        assert!(WORDS.contains(&"ADIEU"));
    }
}
