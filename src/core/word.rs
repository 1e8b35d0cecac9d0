//! Wordle word representation
//!
//! A Word stores five uppercase ASCII letters inline, so it is `Copy`, hashable
//! and ordered the same way as its text.

use super::LetterSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only the letters A-Z, got {0:?}")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalised to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    ///
    /// let word = Word::new("court").unwrap();
    /// assert_eq!(word.as_str(), "COURT");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text.to_string()));
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self(letters))
    }

    /// Build a word from letters already known to be uppercase ASCII
    pub(crate) const fn from_letters(letters: [u8; WORD_LEN]) -> Self {
        Self(letters)
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// The distinct letters of this word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }

    /// Get the word as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only constructed from ASCII letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("COURT").unwrap();
        assert_eq!(word.as_str(), "COURT");
        assert_eq!(word.letters(), b"COURT");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("court").unwrap().as_str(), "COURT");
        assert_eq!(Word::new("CoUrT").unwrap(), Word::new("COURT").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_counts_chars_not_bytes() {
        // Five chars, more than five bytes
        assert!(matches!(
            Word::new("caf\u{e9}s"),
            Err(WordError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("SPEED").unwrap();
        assert_eq!(word.letters()[0], b'S');
        assert_eq!(word.letters()[4], b'D');
        assert!(word.contains(b'E'));
        assert!(!word.contains(b'Z'));
        assert_eq!(word.count_of(b'E'), 2);
        assert_eq!(word.count_of(b'Z'), 0);
        assert_eq!(word.letter_set().len(), 4);
    }

    #[test]
    fn word_ordering_matches_text() {
        let mut words: Vec<Word> = ["SLATE", "ADIEU", "COURT"]
            .iter()
            .map(|s| Word::new(s).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["ADIEU", "COURT", "SLATE"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "raise".parse().unwrap();
        assert_eq!(format!("{word}"), "RAISE");
    }
}
