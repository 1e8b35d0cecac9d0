//! Partitioning and filtering candidate sets by feedback
//!
//! Given a guess, every candidate falls into exactly one group: the pattern
//! the guess would produce if that candidate were the secret.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Group candidates by the pattern they produce with the guess
///
/// Relative order of candidates is preserved inside each group.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Pattern, Word};
/// use wordle_minimax::solver::partition;
///
/// let guess = Word::new("COURT").unwrap();
/// let candidates: Vec<Word> = ["COURT", "COUNT", "MOUNT"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let groups = partition(&guess, &candidates);
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups[&Pattern::PERFECT], vec![guess]);
/// ```
#[must_use]
pub fn partition(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, Vec<Word>> {
    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

    for candidate in candidates {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(*candidate);
    }

    groups
}

/// Group sizes only, without collecting the words
#[must_use]
pub fn partition_counts(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts
            .entry(Pattern::calculate(guess, candidate))
            .or_insert(0) += 1;
    }

    counts
}

/// Candidates consistent with observing `pattern` after playing `guess`
///
/// Keeps relative order. Never returns more words than it was given.
#[must_use]
pub fn filter_candidates(guess: &Word, pattern: Pattern, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| Pattern::calculate(guess, candidate) == pattern)
        .copied()
        .collect()
}

/// Summary of how a guess splits a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionStats {
    /// Size of the largest group
    pub worst_case: usize,
    /// Average group size, 0 for an empty candidate set
    pub mean_case: f64,
    /// Number of distinct patterns
    pub groups: usize,
}

impl PartitionStats {
    #[must_use]
    pub fn of(guess: &Word, candidates: &[Word]) -> Self {
        let counts = partition_counts(guess, candidates);
        let groups = counts.len();
        let worst_case = counts.values().max().copied().unwrap_or(0);
        let mean_case = if groups == 0 {
            0.0
        } else {
            candidates.len() as f64 / groups as f64
        };

        Self {
            worst_case,
            mean_case,
            groups,
        }
    }
}
