//! Word solving command
//!
//! Plays a full game against a known secret word and records every step.

use crate::core::{Pattern, Word};
use crate::solver::{Game, Outcome, PartitionStats, Selector, SolverError};
use anyhow::{Context, Result};
use log::warn;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// How a solve attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    OutOfGuesses,
    /// Feedback ruled out the whole dictionary (the target is not in it)
    NoCandidates,
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub in_dictionary: bool,
    pub outcome: SolveOutcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest group the guess could have left
    pub worst_case: usize,
}

/// Solve a specific word using the given dictionary and selector
///
/// A target outside the dictionary is still played; the game then usually
/// ends with [`SolveOutcome::NoCandidates`].
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word.
pub fn solve_word(
    config: &SolveConfig,
    dictionary: &[Word],
    selector: &Selector,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word {:?}", config.target))?;

    let in_dictionary = dictionary.contains(&target);
    if !in_dictionary {
        warn!("{target} is not in the dictionary, solving anyway");
    }

    let mut game = Game::new(dictionary, selector).with_max_turns(config.max_guesses);
    let mut guesses = Vec::new();

    let outcome = loop {
        let candidates_before = game.candidates().len();
        let guess = match game.suggest() {
            Ok(guess) => guess,
            Err(SolverError::NoCandidates) => break SolveOutcome::NoCandidates,
            Err(SolverError::GameOver) => break SolveOutcome::OutOfGuesses,
        };
        let worst_case = PartitionStats::of(&guess, game.candidates()).worst_case;

        let pattern = Pattern::calculate(&guess, &target);
        let result = game.apply(guess, pattern);

        guesses.push(GuessStep {
            word: guess,
            pattern,
            candidates_before,
            candidates_after: game.candidates().len(),
            worst_case,
        });

        match result {
            Ok(Outcome::Solved { .. }) => break SolveOutcome::Solved,
            Ok(Outcome::Continue { .. }) => {}
            Ok(Outcome::Exhausted { .. }) | Err(SolverError::GameOver) => {
                break SolveOutcome::OutOfGuesses;
            }
            Err(SolverError::NoCandidates) => break SolveOutcome::NoCandidates,
        }
    };

    Ok(SolveResult {
        target,
        in_dictionary,
        outcome,
        guesses,
    })
}
