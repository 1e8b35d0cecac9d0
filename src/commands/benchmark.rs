//! Benchmark command
//!
//! Solves a sample of dictionary words and collects guess statistics.

use super::solve::{SolveConfig, SolveOutcome, solve_word};
use crate::core::Word;
use crate::solver::Selector;
use anyhow::Result;
use indicatif::ProgressBar;
use log::info;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How many of the slowest solves are kept for the report
const WORST_WORDS: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses summed over solved words
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved words by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    /// Solved words needing the most guesses, most first
    pub worst_words: Vec<(Word, usize)>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the dictionary
///
/// `None` takes every word in dictionary order. Otherwise `count` distinct
/// words are sampled, reproducibly when a seed is given.
#[must_use]
pub fn sample_targets(dictionary: &[Word], count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let Some(count) = count else {
        return dictionary.to_vec();
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    dictionary.choose_multiple(&mut rng, count).copied().collect()
}

/// Solve every target and gather statistics
///
/// # Errors
///
/// Returns an error if a solve cannot be started.
pub fn run_benchmark(
    targets: &[Word],
    dictionary: &[Word],
    selector: &Selector,
    max_guesses: usize,
    progress: &ProgressBar,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved_words = Vec::new();
    let mut failures = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        let mut config = SolveConfig::new(target.to_string());
        config.max_guesses = max_guesses;
        let result = solve_word(&config, dictionary, selector)?;
        let guesses = result.guesses.len();

        if result.outcome == SolveOutcome::Solved {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
            solved_words.push((*target, guesses));
        } else {
            info!("failed to solve {target}: {:?}", result.outcome);
            failures.push(*target);
        }

        if idx % 10 == 0 && !solved_words.is_empty() {
            let avg = total_guesses as f64 / solved_words.len() as f64;
            progress.set_message(format!("Avg: {avg:.2}"));
        }
        progress.inc(1);
    }
    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let solved = solved_words.len();

    // Stable sort keeps target order among equal counts
    solved_words.sort_by(|a, b| b.1.cmp(&a.1));
    solved_words.truncate(WORST_WORDS);

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved,
        failed: failures.len(),
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        worst_words: solved_words,
        failures,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
