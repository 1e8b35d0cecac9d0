//! Formatting utilities for terminal output

use crate::core::{KnowledgeState, LetterSet, WORD_LEN, Word};

/// Format a letter set as `A, C, R`, or `None` when empty
#[must_use]
pub fn format_letters(letters: LetterSet) -> String {
    if letters.is_empty() {
        "None".to_string()
    } else {
        letters.to_string()
    }
}

/// Format misplaced letters as `O@2, U@3` (1-based positions), or `None`
#[must_use]
pub fn format_misplaced(knowledge: &KnowledgeState) -> String {
    let entries: Vec<String> = (0..WORD_LEN)
        .flat_map(|position| {
            knowledge
                .misplaced(position)
                .iter()
                .map(move |letter| format!("{}@{}", letter as char, position + 1))
        })
        .collect();

    if entries.is_empty() {
        "None".to_string()
    } else {
        entries.join(", ")
    }
}

/// Join words with a separator, e.g. a guess line `COURT -> SLATE`
#[must_use]
pub fn join_words<'a>(words: impl IntoIterator<Item = &'a Word>, separator: &str) -> String {
    words
        .into_iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_letters_empty() {
        assert_eq!(format_letters(LetterSet::EMPTY), "None");
    }

    #[test]
    fn format_letters_sorted() {
        let letters: LetterSet = b"RCA".iter().copied().collect();
        assert_eq!(format_letters(letters), "A, C, R");
    }

    #[test]
    fn format_misplaced_lists_positions() {
        assert_eq!(format_misplaced(&KnowledgeState::default()), "None");

        let court = Word::new("COURT").unwrap();
        let tours = Word::new("TOURS").unwrap();
        let knowledge = KnowledgeState::default()
            .observe(&court, "BYYBB".parse().unwrap())
            .observe(&tours, "YBBBB".parse().unwrap());
        assert_eq!(format_misplaced(&knowledge), "T@1, O@2, U@3");
    }

    #[test]
    fn join_guesses() {
        let words = [Word::new("court").unwrap(), Word::new("slate").unwrap()];
        assert_eq!(join_words(&words, " -> "), "COURT -> SLATE");
        assert_eq!(join_words(&Vec::<Word>::new(), ", "), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
