//! Letter knowledge accumulated across turns
//!
//! A `KnowledgeState` is an immutable snapshot. Callers derive the next one
//! from a (guess, pattern) pair with [`KnowledgeState::observe`] and pass the
//! snapshot into the selector each turn.

use super::{Feedback, LetterSet, Pattern, WORD_LEN, Word};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeState {
    known: LetterSet,
    excluded: LetterSet,
    fixed: [Option<u8>; WORD_LEN],
    misplaced: [LetterSet; WORD_LEN],
}

impl KnowledgeState {
    /// Start from explicit known and excluded letters, with no fixed positions
    #[must_use]
    pub fn new(known: LetterSet, excluded: LetterSet) -> Self {
        Self {
            known,
            excluded,
            ..Self::default()
        }
    }

    /// Derive the next snapshot from one turn of feedback
    ///
    /// - Green: letter known, position fixed
    /// - Yellow: letter known, recorded as misplaced at that position
    /// - Black: letter excluded, unless already known
    ///
    /// Positions are read left to right, so the "already known" guard sees
    /// greens and yellows from earlier turns and earlier positions of the same
    /// guess. A letter excluded earlier is never removed from the excluded set.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{KnowledgeState, Word};
    ///
    /// let guess = Word::new("SPEED").unwrap();
    /// let pattern = "BBYBY".parse().unwrap();
    /// let next = KnowledgeState::default().observe(&guess, pattern);
    ///
    /// assert!(next.known().contains(b'E'));
    /// assert!(!next.excluded().contains(b'E'));
    /// assert!(next.excluded().contains(b'S'));
    /// ```
    #[must_use]
    pub fn observe(&self, guess: &Word, pattern: Pattern) -> Self {
        let mut next = self.clone();

        for (i, (&letter, mark)) in guess.letters().iter().zip(pattern.feedback()).enumerate() {
            match mark {
                Feedback::Green => {
                    next.fixed[i] = Some(letter);
                    next.known.insert(letter);
                }
                Feedback::Yellow => {
                    next.known.insert(letter);
                    next.misplaced[i].insert(letter);
                }
                Feedback::Black => {
                    if !next.known.contains(letter) {
                        next.excluded.insert(letter);
                    }
                }
            }
        }

        next
    }

    /// Letters confirmed present
    #[must_use]
    pub const fn known(&self) -> LetterSet {
        self.known
    }

    /// Letters reported absent
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Letters seen yellow at `position`
    #[must_use]
    pub const fn misplaced(&self, position: usize) -> LetterSet {
        self.misplaced[position]
    }

    /// Letters of `word` that are neither known nor excluded
    #[must_use]
    pub fn unexplored(&self, word: &Word) -> usize {
        word.letter_set()
            .difference(self.known)
            .difference(self.excluded)
            .len()
    }

    /// Letters of `word` already known to be present
    #[must_use]
    pub fn known_overlap(&self, word: &Word) -> usize {
        word.letter_set().intersection(self.known).len()
    }

    /// Letters of `word` already reported absent
    #[must_use]
    pub fn excluded_overlap(&self, word: &Word) -> usize {
        word.letter_set().intersection(self.excluded).len()
    }

    /// Fixed letters with `_` for open positions, e.g. `C_U__`
    #[must_use]
    pub fn revealed_pattern(&self) -> String {
        self.fixed
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }
}
