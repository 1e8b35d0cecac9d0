//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Black (letter not in any unconsumed position of the target)
//! - 1 = Yellow (letter in target, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Black = 0,
    Yellow = 1,
    Green = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Black,
        }
    }

    /// Single-letter code: `G`, `Y` or `B`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

/// Error returned when feedback text matches none of the accepted formats
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid feedback format: {0:?}")]
pub struct ParsePatternError(String);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode per-position feedback
    #[must_use]
    pub fn from_feedback(marks: [Feedback; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark as u8 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode into per-position feedback
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut marks = [Feedback::Black; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Feedback::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements Wordle's duplicate-letter rules: greens claim their target
    /// letter first, then each remaining guess letter left to right turns
    /// yellow only while an unclaimed copy of it is left in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Pattern, Word};
    ///
    /// let guess = Word::new("ARISE").unwrap();
    /// let target = Word::new("RAISE").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "YYGGG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Feedback::Black; WORD_LEN];
        let mut remaining = [0u8; 26];

        // First pass: greens, everything else stays in the target pool
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                marks[i] = Feedback::Green;
            } else {
                remaining[usize::from(t - b'A')] += 1;
            }
        }

        // Second pass: yellows consume one pooled copy each
        for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Feedback::Green {
                continue;
            }
            let pooled = &mut remaining[usize::from(g - b'A')];
            if *pooled > 0 {
                *mark = Feedback::Yellow;
                *pooled -= 1;
            }
        }

        Self::from_feedback(marks)
    }

    /// Convert pattern to emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|m| m.emoji()).collect()
    }

    fn from_codes(codes: &[char], decode: impl Fn(char) -> Option<Feedback>) -> Option<Self> {
        if codes.len() != WORD_LEN {
            return None;
        }
        let mut marks = [Feedback::Black; WORD_LEN];
        for (mark, &c) in marks.iter_mut().zip(codes) {
            *mark = decode(c)?;
        }
        Some(Self::from_feedback(marks))
    }
}

const fn decode_letter(c: char) -> Option<Feedback> {
    match c {
        'G' => Some(Feedback::Green),
        'Y' => Some(Feedback::Yellow),
        'B' => Some(Feedback::Black),
        _ => None,
    }
}

const fn decode_digit(c: char) -> Option<Feedback> {
    match c {
        '2' => Some(Feedback::Green),
        '1' => Some(Feedback::Yellow),
        '0' => Some(Feedback::Black),
        _ => None,
    }
}

const fn decode_square(c: char) -> Option<Feedback> {
    match c {
        '🟩' => Some(Feedback::Green),
        '🟨' => Some(Feedback::Yellow),
        '⬛' | '⬜' => Some(Feedback::Black),
        _ => None,
    }
}

const COLOR_WORDS: [(&str, &str); 5] = [
    ("GREEN", "G"),
    ("YELLOW", "Y"),
    ("BLACK", "B"),
    ("GRAY", "B"),
    ("GREY", "B"),
];

impl FromStr for Pattern {
    type Err = ParsePatternError;

    /// Parse user feedback
    ///
    /// Case-insensitive; spaces, commas and dashes are ignored. Accepts
    /// `GYBBB`, `21000` (2 = green, 1 = yellow, 0 = black),
    /// `🟩🟨⬛⬛⬛` (⬜ also means black) and colour words such as
    /// `green yellow black grey gray`.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Pattern;
    ///
    /// let p1: Pattern = "GYBBB".parse().unwrap();
    /// let p2: Pattern = "2 1 0 0 0".parse().unwrap();
    /// let p3: Pattern = "🟩🟨⬛⬜⬛".parse().unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | ',' | '-'))
            .collect();
        let chars: Vec<char> = normalized.chars().collect();

        if let Some(pattern) = Self::from_codes(&chars, decode_letter)
            .or_else(|| Self::from_codes(&chars, decode_digit))
        {
            return Ok(pattern);
        }

        if chars.iter().any(|&c| decode_square(c).is_some()) {
            let squares: Vec<char> = chars
                .iter()
                .copied()
                .filter(|&c| decode_square(c).is_some())
                .collect();
            if let Some(pattern) = Self::from_codes(&squares, decode_square) {
                return Ok(pattern);
            }
        }

        let mut spelled = normalized;
        for (name, code) in COLOR_WORDS {
            spelled = spelled.replace(name, code);
        }
        let spelled: Vec<char> = spelled.chars().collect();
        Self::from_codes(&spelled, decode_letter).ok_or_else(|| ParsePatternError(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    /// Letter codes, e.g. `GYBBB`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.feedback() {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}
