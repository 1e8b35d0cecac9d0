//! Staged guess selection
//!
//! Chooses the next guess from the candidate count and turn number:
//!
//! ```text
//! 1 candidate                         → Single (guess it)
//! turn 1                              → Opening (fixed opener)
//! 3..=small_set_threshold candidates  → Distinguishing search
//! 2 candidates                        → Pair (word separating the two)
//! > elimination_threshold             → Elimination pool, full scorer
//! > medium_threshold                  → Medium pool, full scorer
//! ```
//!
//! Pools scan bounded prefixes of the dictionary, so selection depends on
//! dictionary order. Every prefix length is a field of [`SelectorConfig`].

use super::SolverError;
use super::partition::PartitionStats;
use super::scorer::{GuessScore, Scorer, frequency_score, letter_frequencies};
use crate::core::{KnowledgeState, LetterSet, Pattern, Word};
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// Preferred first guess
pub const DEFAULT_OPENER: Word = Word::from_letters(*b"COURT");

/// First guess when the preferred opener is not in the dictionary
pub const FALLBACK_OPENER: Word = Word::from_letters(*b"ADIEU");

/// Thresholds and pool bounds for each selection stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub opener: Word,
    pub fallback_opener: Word,
    /// At most this many candidates use the distinguishing search
    pub small_set_threshold: usize,
    /// Above this many candidates the elimination pool is used
    pub elimination_threshold: usize,

    /// Dictionary prefix scanned by the distinguishing search
    pub distinguishing_prefix: usize,
    /// The distinguishing pool also contains the candidates at or below this count
    pub include_answers_threshold: usize,

    /// Dictionary prefix scanned when two candidates remain
    pub pair_prefix: usize,

    /// Dictionary prefix scanned for the elimination pool
    pub elimination_prefix: usize,
    pub elimination_min_unexplored: usize,
    /// Below this many words the elimination pool widens by letter frequency
    pub elimination_min_pool: usize,
    pub elimination_pool_cap: usize,

    /// Dictionary prefix scanned for the medium pool
    pub medium_prefix: usize,
    pub medium_min_unexplored: usize,
    pub medium_pool_cap: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            opener: DEFAULT_OPENER,
            fallback_opener: FALLBACK_OPENER,
            small_set_threshold: 10,
            elimination_threshold: 15,
            distinguishing_prefix: 500,
            include_answers_threshold: 3,
            pair_prefix: 300,
            elimination_prefix: 800,
            elimination_min_unexplored: 3,
            elimination_min_pool: 50,
            elimination_pool_cap: 150,
            medium_prefix: 600,
            medium_min_unexplored: 2,
            medium_pool_cap: 100,
        }
    }
}

/// Selection stage for a given candidate count and turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Exactly one candidate left
    Single,
    /// First turn: fixed opener, no scoring
    Opening,
    /// Exactly two candidates: find a word telling them apart
    Pair,
    /// Few candidates: minimise the worst-case group
    Distinguishing,
    /// Many candidates: eliminating words with several new letters
    Elimination,
    /// Mid-size sets: words ranked by unexplored letters
    Medium,
}

/// Guess selector
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectorConfig,
    scorer: Scorer,
}

impl Selector {
    #[must_use]
    pub const fn new(config: SelectorConfig, scorer: Scorer) -> Self {
        Self { config, scorer }
    }

    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Stage used for `remaining` candidates on `turn`
    #[must_use]
    pub const fn stage(&self, remaining: usize, turn: usize) -> Stage {
        if remaining == 1 {
            Stage::Single
        } else if turn == 1 {
            Stage::Opening
        } else if remaining == 2 {
            Stage::Pair
        } else if remaining <= self.config.small_set_threshold {
            Stage::Distinguishing
        } else if remaining > self.config.elimination_threshold {
            Stage::Elimination
        } else if remaining > self.scorer.medium_threshold {
            Stage::Medium
        } else {
            Stage::Distinguishing
        }
    }

    /// Choose the next guess
    ///
    /// Falls back to the first candidate whenever a stage finds nothing to
    /// evaluate, so this only fails when no candidates remain.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{KnowledgeState, Word};
    /// use wordle_minimax::solver::Selector;
    ///
    /// let dictionary: Vec<Word> = ["SLATE", "COURT", "CRANE"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let selector = Selector::default();
    /// let guess = selector
    ///     .select(&dictionary, &dictionary, 1, &KnowledgeState::default())
    ///     .unwrap();
    /// assert_eq!(guess.as_str(), "COURT");
    /// ```
    pub fn select(
        &self,
        candidates: &[Word],
        dictionary: &[Word],
        turn: usize,
        knowledge: &KnowledgeState,
    ) -> Result<Word, SolverError> {
        let Some(&first) = candidates.first() else {
            return Err(SolverError::NoCandidates);
        };

        let stage = self.stage(candidates.len(), turn);
        debug!(
            "turn {turn}: {} candidates, stage {stage:?}",
            candidates.len()
        );

        let members: FxHashSet<Word> = candidates.iter().copied().collect();
        let choice = match stage {
            Stage::Single => Some(first),
            Stage::Opening => Some(self.opening(dictionary)),
            Stage::Pair => self.pair(candidates, dictionary, knowledge, &members),
            Stage::Distinguishing => {
                self.distinguishing(candidates, dictionary, knowledge, &members)
            }
            Stage::Elimination => {
                let pool = self.elimination_pool(candidates, dictionary, knowledge, &members);
                self.best_scored(&pool, candidates, knowledge, turn)
            }
            Stage::Medium => {
                let pool = self.medium_pool(dictionary, knowledge, &members);
                self.best_scored(&pool, candidates, knowledge, turn)
            }
        };

        let guess = choice.unwrap_or_else(|| {
            debug!("{stage:?} found nothing to evaluate, falling back to {first}");
            first
        });
        debug!("chose {guess}");
        Ok(guess)
    }

    fn opening(&self, dictionary: &[Word]) -> Word {
        if dictionary.contains(&self.config.opener) {
            self.config.opener
        } else {
            self.config.fallback_opener
        }
    }

    /// Word whose feedback differs between the two candidates, favouring new
    /// letters and letters where the two differ
    fn pair(
        &self,
        candidates: &[Word],
        dictionary: &[Word],
        knowledge: &KnowledgeState,
        members: &FxHashSet<Word>,
    ) -> Option<Word> {
        let (a, b) = (candidates[0], candidates[1]);

        let differing: LetterSet = a
            .letters()
            .iter()
            .zip(b.letters())
            .filter(|(x, y)| x != y)
            .flat_map(|(&x, &y)| [x, y])
            .collect();
        if differing.is_empty() {
            return None;
        }
        debug!("{a} vs {b}, differing letters: {differing}");

        dictionary
            .iter()
            .take(self.config.pair_prefix)
            .filter(|word| !members.contains(*word))
            .filter(|word| Pattern::calculate(word, &a) != Pattern::calculate(word, &b))
            .map(|word| {
                let gain = knowledge.unexplored(word)
                    + word.letter_set().intersection(differing).len();
                (*word, gain)
            })
            .min_by_key(|&(_, gain)| Reverse(gain))
            .map(|(word, _)| word)
    }

    fn distinguishing(
        &self,
        candidates: &[Word],
        dictionary: &[Word],
        knowledge: &KnowledgeState,
        members: &FxHashSet<Word>,
    ) -> Option<Word> {
        let mut pool: Vec<Word> = dictionary
            .iter()
            .take(self.config.distinguishing_prefix)
            .filter(|word| !members.contains(*word))
            .copied()
            .collect();
        if candidates.len() <= self.config.include_answers_threshold {
            pool.extend_from_slice(candidates);
        }
        debug!("distinguishing pool: {} words", pool.len());

        let scores: Vec<f64> = pool
            .par_iter()
            .map(|word| {
                self.scorer
                    .distinguishing_score(word, candidates, knowledge)
            })
            .collect();

        let (best, value) = first_minimum(pool.iter().copied().zip(scores), |&(_, v)| v)?;
        if log::log_enabled!(log::Level::Debug) {
            let stats = PartitionStats::of(&best, candidates);
            debug!(
                "best distinguishing word {best}: score {value:.3}, worst {}, mean {:.1}, {} groups",
                stats.worst_case, stats.mean_case, stats.groups
            );
        }
        Some(best)
    }

    /// Non-answers with no excluded letters and several new ones; widened by
    /// letter frequency when too few qualify
    fn elimination_pool(
        &self,
        candidates: &[Word],
        dictionary: &[Word],
        knowledge: &KnowledgeState,
        members: &FxHashSet<Word>,
    ) -> Vec<Word> {
        let non_answers: Vec<Word> = dictionary
            .iter()
            .take(self.config.elimination_prefix)
            .filter(|word| !members.contains(*word))
            .copied()
            .collect();

        let mut pool: Vec<Word> = non_answers
            .iter()
            .filter(|word| knowledge.excluded_overlap(word) == 0)
            .filter(|word| knowledge.unexplored(word) >= self.config.elimination_min_unexplored)
            .copied()
            .collect();

        if pool.len() < self.config.elimination_min_pool {
            let freq = letter_frequencies(candidates);
            debug!(
                "only {} unexplored eliminators, widening by letter frequency",
                pool.len()
            );
            pool.extend(
                non_answers
                    .iter()
                    .filter(|word| frequency_score(word, &freq) > 0),
            );
        }

        pool.truncate(self.config.elimination_pool_cap);
        debug!("elimination pool: {} words", pool.len());
        pool
    }

    /// Non-answers with enough new letters, most unexplored first
    fn medium_pool(
        &self,
        dictionary: &[Word],
        knowledge: &KnowledgeState,
        members: &FxHashSet<Word>,
    ) -> Vec<Word> {
        let mut ranked: Vec<(usize, Word)> = dictionary
            .iter()
            .take(self.config.medium_prefix)
            .filter(|word| !members.contains(*word))
            .filter_map(|word| {
                let unexplored = knowledge.unexplored(word);
                (unexplored >= self.config.medium_min_unexplored).then_some((unexplored, *word))
            })
            .collect();

        // Descending by count, then by word
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked.truncate(self.config.medium_pool_cap);
        debug!("medium pool: {} words", ranked.len());

        ranked.into_iter().map(|(_, word)| word).collect()
    }

    fn best_scored(
        &self,
        pool: &[Word],
        candidates: &[Word],
        knowledge: &KnowledgeState,
        turn: usize,
    ) -> Option<Word> {
        let scores: Vec<GuessScore> = pool
            .par_iter()
            .map(|word| self.scorer.score(word, candidates, knowledge, turn))
            .collect();

        if log::log_enabled!(log::Level::Trace) {
            let mut ranked = scores.clone();
            ranked.sort_by(GuessScore::total_cmp);
            for s in ranked.iter().take(8) {
                trace!(
                    "  {}: worst={}, mean={:.1}, new={}, known={}, score={:.3}{}",
                    s.word,
                    s.stats.worst_case,
                    s.stats.mean_case,
                    s.unexplored,
                    s.known_overlap,
                    s.value,
                    if s.is_answer { " (answer)" } else { "" }
                );
            }
        }

        first_minimum(scores, |s| s.value).map(|s| s.word)
    }

    /// Score every pool word with the full scorer, best first
    ///
    /// Ties keep pool order.
    #[must_use]
    pub fn rank(
        &self,
        pool: &[Word],
        candidates: &[Word],
        knowledge: &KnowledgeState,
        turn: usize,
    ) -> Vec<GuessScore> {
        let mut scores: Vec<GuessScore> = pool
            .par_iter()
            .map(|word| self.scorer.score(word, candidates, knowledge, turn))
            .collect();
        scores.sort_by(GuessScore::total_cmp);
        scores
    }
}

/// First item with the strictly smallest key; later ties never replace it
fn first_minimum<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let value = key(&item);
        if best.as_ref().is_none_or(|(_, current)| value < *current) {
            best = Some((item, value));
        }
    }
    best.map(|(item, _)| item)
}
