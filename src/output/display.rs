//! Display functions for command results

use super::formatters::{create_progress_bar, join_words};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveOutcome, SolveResult};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Feedback groups listed by `analyze`
const TOP_GROUPS: usize = 10;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.as_str().bright_yellow().bold());
    if !result.in_dictionary {
        println!("{}", "(not in the dictionary)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!("\nTurn {}: {} {}", i + 1, step.word, step.pattern.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {}", step.worst_case);
        }
    }

    println!();
    let count = result.guesses.len();
    match result.outcome {
        SolveOutcome::Solved => println!(
            "{}",
            format!("✅ Solved in {count} guesses!").green().bold()
        ),
        SolveOutcome::OutOfGuesses => println!(
            "{}",
            format!("❌ Failed to solve in {count} guesses").red().bold()
        ),
        SolveOutcome::NoCandidates => println!(
            "{}",
            format!("❌ No candidates left after {count} guesses").red().bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let score = &result.score;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.as_str().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} dictionary words:", result.total_candidates);
    println!("   Groups:      {}", score.stats.groups);
    println!(
        "   Worst case:  {}",
        score.stats.worst_case.to_string().bright_yellow()
    );
    println!("   Mean case:   {:.2}", score.stats.mean_case);
    println!("   New letters: {}", score.unexplored);
    println!(
        "   Answer:      {}",
        if score.is_answer { "yes" } else { "no" }
    );
    println!(
        "   Score:       {}",
        format!("{:.3}", score.value).bright_yellow().bold()
    );

    println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
    let largest = result.groups.first().map_or(0, |&(_, count)| count);
    for &(pattern, count) in result.groups.iter().take(TOP_GROUPS) {
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        println!("   {} {} {count:5}", pattern.to_emoji(), bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            result.failed.to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {word}: {guesses}");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failed words:".red().bold());
        println!("   {}", join_words(&result.failures, ", "));
    }
}

/// Progress bar used while benchmarking
///
/// # Errors
///
/// Returns an error if the progress template is invalid.
pub fn benchmark_progress(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}
