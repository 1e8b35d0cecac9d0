//! Heuristic guess scoring
//!
//! A guess is scored by the partition it induces on the remaining candidates,
//! adjusted by letter-exploration and answer-versus-elimination terms.
//! Lower scores are better.

use super::partition::PartitionStats;
use crate::core::{KnowledgeState, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Named weights of the scoring formula
///
/// Bonuses are subtracted from the score and penalties added, so every field
/// is a non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Mean group size is divided by this and added as a tie-breaker
    pub tie_break_divisor: f64,
    /// Per unexplored letter, non-answers on larger sets
    pub exploration_bonus: f64,
    /// Per already-known letter, non-answers on larger sets
    pub known_letter_penalty: f64,
    /// Possible answers once few candidates remain or late in the game
    pub finishing_bonus: f64,
    /// Possible answers guessed while elimination is still worthwhile
    pub early_answer_penalty: f64,
    /// Non-answers on larger sets
    pub elimination_bonus: f64,
    /// Per unexplored letter in the distinguishing search
    pub distinguishing_exploration: f64,
    /// Per excluded letter reused in the distinguishing search
    pub excluded_letter_penalty: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            tie_break_divisor: 1000.0,
            exploration_bonus: 0.5,
            known_letter_penalty: 0.3,
            finishing_bonus: 1.0,
            early_answer_penalty: 2.0,
            elimination_bonus: 0.5,
            distinguishing_exploration: 0.1,
            excluded_letter_penalty: 0.5,
        }
    }
}

/// Scoring formula with the thresholds that switch its terms on and off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub weights: Weights,
    /// Candidate sets larger than this get exploration and elimination terms
    pub medium_threshold: usize,
    /// At or below this many candidates, possible answers get the finishing bonus
    pub finishing_threshold: usize,
    /// From this turn on, possible answers get the finishing bonus
    pub late_turn: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            medium_threshold: 6,
            finishing_threshold: 2,
            late_turn: 5,
        }
    }
}

/// Score of one guess together with the terms that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    pub value: f64,
    pub stats: PartitionStats,
    pub is_answer: bool,
    pub unexplored: usize,
    pub known_overlap: usize,
}

impl GuessScore {
    /// Total order on the score value
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Scorer {
    /// Score `word` against the remaining `candidates`
    ///
    /// `worst_case + mean_case / divisor + answer + exploration`, where
    /// exploration only applies to non-answers on sets above the medium
    /// threshold, and the answer term rewards possible answers near the end,
    /// penalises them earlier, and rewards non-answers on larger sets.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{KnowledgeState, Word};
    /// use wordle_minimax::solver::Scorer;
    ///
    /// let candidates: Vec<Word> = ["IRATE", "GRATE"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// // Two candidates left: guessing one of them earns the finishing bonus
    /// let score = Scorer::default().score(&candidates[0], &candidates, &KnowledgeState::default(), 3);
    /// assert!(score.is_answer);
    /// assert!((score.value - 0.001).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn score(
        &self,
        word: &Word,
        candidates: &[Word],
        knowledge: &KnowledgeState,
        turn: usize,
    ) -> GuessScore {
        let w = &self.weights;
        let stats = PartitionStats::of(word, candidates);
        let remaining = candidates.len();
        let is_answer = candidates.contains(word);
        let unexplored = knowledge.unexplored(word);
        let known_overlap = knowledge.known_overlap(word);
        let larger_set = remaining > self.medium_threshold;

        let exploration = if !is_answer && larger_set {
            -w.exploration_bonus * unexplored as f64 + w.known_letter_penalty * known_overlap as f64
        } else {
            0.0
        };

        let answer = if is_answer {
            if remaining <= self.finishing_threshold || turn >= self.late_turn {
                -w.finishing_bonus
            } else {
                w.early_answer_penalty
            }
        } else if larger_set {
            -w.elimination_bonus
        } else {
            0.0
        };

        let value = stats.worst_case as f64
            + stats.mean_case / w.tie_break_divisor
            + answer
            + exploration;

        GuessScore {
            word: *word,
            value,
            stats,
            is_answer,
            unexplored,
            known_overlap,
        }
    }

    /// Score used by the distinguishing search on small candidate sets
    ///
    /// `worst_case + mean_case / divisor`, minus a small bonus per unexplored
    /// letter, plus a penalty per excluded letter the word reuses.
    #[must_use]
    pub fn distinguishing_score(
        &self,
        word: &Word,
        candidates: &[Word],
        knowledge: &KnowledgeState,
    ) -> f64 {
        let w = &self.weights;
        let stats = PartitionStats::of(word, candidates);

        stats.worst_case as f64 + stats.mean_case / w.tie_break_divisor
            - w.distinguishing_exploration * knowledge.unexplored(word) as f64
            + w.excluded_letter_penalty * knowledge.excluded_overlap(word) as f64
    }
}

/// Number of words each letter appears in (counted once per word)
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FxHashMap<u8, usize> {
    let mut freq = FxHashMap::default();
    for word in words {
        for letter in word.letter_set().iter() {
            *freq.entry(letter).or_insert(0) += 1;
        }
    }
    freq
}

/// Sum of the frequencies of the distinct letters in `word`
#[must_use]
pub fn frequency_score(word: &Word, freq: &FxHashMap<u8, usize>) -> usize {
    word.letter_set()
        .iter()
        .map(|letter| freq.get(&letter).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn letters(s: &str) -> LetterSet {
        s.bytes().collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_weights() {
        let w = Weights::default();
        assert_close(w.tie_break_divisor, 1000.0);
        assert_close(w.exploration_bonus, 0.5);
        assert_close(w.known_letter_penalty, 0.3);
        assert_close(w.finishing_bonus, 1.0);
        assert_close(w.early_answer_penalty, 2.0);
        assert_close(w.elimination_bonus, 0.5);
    }

    #[test]
    fn early_answer_is_penalised() {
        let candidates = words(&["IRATE", "GRATE", "SLATE", "CRATE"]);
        let score = Scorer::default().score(
            &word("CRATE"),
            &candidates,
            &KnowledgeState::default(),
            2,
        );

        assert!(score.is_answer);
        assert_eq!(score.stats.worst_case, 2);
        assert_close(score.value, 2.0 + (4.0 / 3.0) / 1000.0 + 2.0);
    }

    #[test]
    fn late_answer_earns_finishing_bonus() {
        let candidates = words(&["IRATE", "GRATE", "SLATE", "CRATE"]);
        let score = Scorer::default().score(
            &word("CRATE"),
            &candidates,
            &KnowledgeState::default(),
            5,
        );

        assert_close(score.value, 2.0 + (4.0 / 3.0) / 1000.0 - 1.0);
    }

    #[test]
    fn non_answer_on_small_set_has_no_bonus_terms() {
        let candidates = words(&["IRATE", "GRATE", "SLATE", "CRATE"]);
        let knowledge = KnowledgeState::new(letters("A"), letters("S"));
        let score = Scorer::default().score(&word("CRANE"), &candidates, &knowledge, 2);

        assert!(!score.is_answer);
        assert_close(score.value, 2.0 + (4.0 / 3.0) / 1000.0);
    }

    #[test]
    fn non_answer_on_larger_set_gets_exploration_and_elimination() {
        let candidates = words(&[
            "IRATE", "GRATE", "SLATE", "CRATE", "TRACE", "COURT", "COUNT", "MOUNT",
        ]);
        let knowledge = KnowledgeState::new(letters("AT"), letters("S"));
        let score = Scorer::default().score(&word("CHAMP"), &candidates, &knowledge, 2);

        assert_eq!(score.unexplored, 4); // C, H, M, P
        assert_eq!(score.known_overlap, 1); // A
        let stats = PartitionStats::of(&word("CHAMP"), &candidates);
        let expected = stats.worst_case as f64 + stats.mean_case / 1000.0 - 0.5 * 4.0 + 0.3
            - 0.5;
        assert_close(score.value, expected);
    }

    #[test]
    fn answer_on_larger_set_skips_exploration() {
        let candidates = words(&[
            "IRATE", "GRATE", "SLATE", "CRATE", "TRACE", "COURT", "COUNT", "MOUNT",
        ]);
        let score = Scorer::default().score(
            &word("COURT"),
            &candidates,
            &KnowledgeState::default(),
            3,
        );

        let stats = PartitionStats::of(&word("COURT"), &candidates);
        assert_close(
            score.value,
            stats.worst_case as f64 + stats.mean_case / 1000.0 + 2.0,
        );
    }

    #[test]
    fn weights_are_configurable() {
        let candidates = words(&["IRATE", "GRATE"]);
        let scorer = Scorer {
            weights: Weights {
                finishing_bonus: 5.0,
                ..Weights::default()
            },
            ..Scorer::default()
        };
        let score = scorer.score(&word("IRATE"), &candidates, &KnowledgeState::default(), 2);

        // Two singleton groups, mean 1
        assert_close(score.value, 1.0 + 0.001 - 5.0);
    }

    #[test]
    fn distinguishing_score_terms() {
        let candidates = words(&["IRATE", "GRATE", "CRATE"]);
        let knowledge = KnowledgeState::new(letters("RATE"), letters("SN"));

        // GUIDS: G, U, I, D unexplored; S excluded; separates all three
        let value = Scorer::default().distinguishing_score(&word("GUIDS"), &candidates, &knowledge);
        assert_close(value, 1.0 + 0.001 - 0.4 + 0.5);
    }

    #[test]
    fn letter_frequency_counts_once_per_word() {
        let freq = letter_frequencies(&words(&["SPEED", "ERASE"]));

        assert_eq!(freq[&b'E'], 2);
        assert_eq!(freq[&b'S'], 2);
        assert_eq!(freq[&b'P'], 1);
        assert!(!freq.contains_key(&b'Z'));

        assert_eq!(frequency_score(&word("SEEDS"), &freq), 2 + 2 + 1);
        assert_eq!(frequency_score(&word("QUIZZ"), &freq), 0);
    }

    #[test]
    fn scores_order_totally() {
        let candidates = words(&["IRATE", "GRATE", "SLATE", "CRATE"]);
        let scorer = Scorer::default();
        let knowledge = KnowledgeState::default();
        let answer = scorer.score(&word("CRATE"), &candidates, &knowledge, 2);
        let probe = scorer.score(&word("CRANE"), &candidates, &knowledge, 2);

        assert_eq!(probe.total_cmp(&answer), Ordering::Less);
    }
}
