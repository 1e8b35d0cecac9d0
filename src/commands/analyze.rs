//! Word analysis command
//!
//! Shows how a word splits the dictionary and how the scorer rates it.

use crate::core::{KnowledgeState, Pattern, Word};
use crate::solver::{GuessScore, Selector, partition_counts};
use anyhow::{Context, Result};

/// Turn the score is computed for: the first scored turn after the opener
const ANALYSIS_TURN: usize = 2;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub in_dictionary: bool,
    pub total_candidates: usize,
    pub score: GuessScore,
    /// Feedback groups, largest first
    pub groups: Vec<(Pattern, usize)>,
}

/// Analyze `word` against the whole dictionary
///
/// The word does not need to be in the dictionary.
///
/// # Errors
///
/// Returns an error if the word is not a valid five-letter word.
pub fn analyze_word(word: &str, dictionary: &[Word], selector: &Selector) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;

    let knowledge = KnowledgeState::default();
    let score = selector
        .scorer()
        .score(&word, dictionary, &knowledge, ANALYSIS_TURN);

    let mut groups: Vec<(Pattern, usize)> = partition_counts(&word, dictionary).into_iter().collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.value().cmp(&b.0.value())));

    Ok(AnalysisResult {
        word,
        in_dictionary: dictionary.contains(&word),
        total_candidates: dictionary.len(),
        score,
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_opener_against_dictionary() {
        let dictionary = words_from_slice(WORDS);
        let result = analyze_word("court", &dictionary, &Selector::default()).unwrap();

        assert_eq!(result.word.as_str(), "COURT");
        assert!(result.in_dictionary);
        assert_eq!(result.total_candidates, dictionary.len());
        assert_eq!(result.groups.len(), result.score.stats.groups);
        assert_eq!(result.groups[0], ("BBBBB".parse().unwrap(), 158));
        assert_eq!(result.score.stats.worst_case, 158);

        // Possible answer early on a large set carries the early-answer penalty
        let mean = dictionary.len() as f64 / result.groups.len() as f64;
        assert!((result.score.value - (158.0 + mean / 1000.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn groups_cover_dictionary() {
        let dictionary = words_from_slice(&WORDS[..200]);
        let result = analyze_word("ADIEU", &dictionary, &Selector::default()).unwrap();

        let total: usize = result.groups.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 200);
        assert!(result.groups.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn word_outside_dictionary_is_analyzed() {
        let dictionary = words_from_slice(&WORDS[..100]);
        let result = analyze_word("XYLYX", &dictionary, &Selector::default()).unwrap();

        assert!(!result.in_dictionary);
        assert!(!result.score.is_answer);
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = words_from_slice(&WORDS[..100]);
        assert!(analyze_word("abc", &dictionary, &Selector::default()).is_err());
        assert!(analyze_word("ab1de", &dictionary, &Selector::default()).is_err());
    }
}
