//! Game session
//!
//! Owns the per-game state (candidates, knowledge, history) and advances it
//! one guess at a time. The selector itself is stateless.

use super::SolverError;
use super::partition::filter_candidates;
use super::selector::Selector;
use crate::core::{KnowledgeState, Pattern, Word};
use log::{debug, warn};

/// Default number of guesses per game
pub const MAX_TURNS: usize = 6;

/// Result of applying one turn of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All green on this turn
    Solved { turns: usize },
    /// Game continues with this many candidates
    Continue { remaining: usize },
    /// Turn budget used up without solving
    Exhausted { remaining: usize },
}

/// A single Wordle game
pub struct Game<'a> {
    dictionary: &'a [Word],
    selector: &'a Selector,
    max_turns: usize,
    candidates: Vec<Word>,
    knowledge: KnowledgeState,
    history: Vec<(Word, Pattern)>,
    finished: bool,
}

impl<'a> Game<'a> {
    /// Start a new game where every dictionary word is a candidate
    #[must_use]
    pub fn new(dictionary: &'a [Word], selector: &'a Selector) -> Self {
        Self {
            dictionary,
            selector,
            max_turns: MAX_TURNS,
            candidates: dictionary.to_vec(),
            knowledge: KnowledgeState::default(),
            history: Vec::new(),
            finished: false,
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Current turn, starting at 1
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeState {
        &self.knowledge
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Suggest the next guess
    ///
    /// # Errors
    /// `SolverError::GameOver` once the game is finished, and
    /// `SolverError::NoCandidates` if feedback has ruled out every word.
    pub fn suggest(&self) -> Result<Word, SolverError> {
        if self.finished {
            return Err(SolverError::GameOver);
        }
        self.selector
            .select(&self.candidates, self.dictionary, self.turn(), &self.knowledge)
    }

    /// Record feedback for `guess` and narrow the candidates
    ///
    /// The turn is recorded even when it empties the candidate set, so it can
    /// be undone.
    ///
    /// # Errors
    /// `SolverError::GameOver` once the game is finished, and
    /// `SolverError::NoCandidates` if no dictionary word is consistent with
    /// the feedback so far.
    pub fn apply(&mut self, guess: Word, pattern: Pattern) -> Result<Outcome, SolverError> {
        if self.finished {
            return Err(SolverError::GameOver);
        }

        self.history.push((guess, pattern));
        self.knowledge = self.knowledge.observe(&guess, pattern);

        if pattern.is_perfect() {
            self.candidates = vec![guess];
            self.finished = true;
            return Ok(Outcome::Solved {
                turns: self.history.len(),
            });
        }

        let before = self.candidates.len();
        self.candidates = filter_candidates(&guess, pattern, &self.candidates);
        let remaining = self.candidates.len();
        debug!("{guess} {pattern}: {before} -> {remaining} candidates");

        if remaining == 0 {
            warn!("no candidates left after {guess} {pattern}");
            return Err(SolverError::NoCandidates);
        }

        if self.history.len() >= self.max_turns {
            self.finished = true;
            return Ok(Outcome::Exhausted { remaining });
        }

        Ok(Outcome::Continue { remaining })
    }

    /// Drop the last turn, rebuilding state from the remaining history
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        let history = std::mem::take(&mut self.history);
        self.reset();
        for (guess, pattern) in history {
            // Only the last replayed turn can empty the candidates
            let replayed = self.apply(guess, pattern);
            debug_assert!(
                matches!(replayed, Ok(_) | Err(SolverError::NoCandidates)),
                "replaying {guess} {pattern} failed: {replayed:?}"
            );
        }
        true
    }

    /// Start over with every dictionary word as a candidate
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.to_vec();
        self.knowledge = KnowledgeState::default();
        self.history.clear();
        self.finished = false;
    }
}
