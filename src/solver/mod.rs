//! Wordle solving algorithms
//!
//! Partitioning and filtering of candidate sets, the heuristic guess scorer,
//! the staged guess selector, and a game session that threads candidates and
//! letter knowledge from turn to turn.

mod engine;
pub mod partition;
pub mod scorer;
pub mod selector;

use thiserror::Error;

pub use engine::{Game, Outcome};
pub use partition::{PartitionStats, filter_candidates, partition, partition_counts};
pub use scorer::{GuessScore, Scorer, Weights};
pub use selector::{Selector, SelectorConfig, Stage};

/// Errors reported by the solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Feedback ruled out every dictionary word
    #[error("no candidates remain: the feedback may be wrong or the word is not in the dictionary")]
    NoCandidates,
    /// The game was already solved or ran out of turns
    #[error("the game is over")]
    GameOver,
}
