//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! and to normalise whitespace-separated lists into one word per line.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and upper-cased; anything that is not a five-letter word
/// is skipped, as are repeats of an earlier word. File order is kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_word_list(&content);
    debug!("loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Parse one word per line, skipping invalid lines and duplicates
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_minimax::wordlists::loader::words_from_slice;
/// use wordle_minimax::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Split a whitespace-separated list into one entry per line
#[must_use]
pub fn normalize_word_list(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    for word in content.split_whitespace() {
        output.push_str(word);
        output.push('\n');
    }
    output
}

/// Rewrite a whitespace-separated word list file as one word per line
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or the output written.
pub fn clean_word_list<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> io::Result<usize> {
    let content = fs::read_to_string(input)?;
    let normalized = normalize_word_list(&content);
    fs::write(output, &normalized)?;
    Ok(normalized.lines().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].as_str(), "CRANE");
        assert_eq!(words[1].as_str(), "SLATE");
        assert_eq!(words[2].as_str(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].as_str(), "CRANE");
        assert_eq!(words[1].as_str(), "SLATE");
    }

    #[test]
    fn parse_word_list_trims_filters_and_dedupes() {
        let content = "# comment line\n  court \nadieu\n\nnot-a-word\nCOURT\nab\nslate\n";
        let words = parse_word_list(content);
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();

        assert_eq!(texts, ["COURT", "ADIEU", "SLATE"]);
    }

    #[test]
    fn normalize_splits_on_any_whitespace() {
        assert_eq!(
            normalize_word_list("  COURT ADIEU\tSLATE\n\nCRANE  "),
            "COURT\nADIEU\nSLATE\nCRANE\n"
        );
        assert_eq!(normalize_word_list(" \n "), "");
    }

    #[test]
    fn clean_and_load_roundtrip_through_files() {
        let dir = std::env::temp_dir().join(format!("wordle_minimax_loader_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("raw.txt");
        let output = dir.join("clean.txt");
        fs::write(&input, "court adieu  slate\ncrane").unwrap();

        let written = clean_word_list(&input, &output).unwrap();
        let words = load_from_file(&output).unwrap();

        assert_eq!(written, 4);
        assert_eq!(words.len(), 4);
        assert_eq!(words[3].as_str(), "CRANE");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
