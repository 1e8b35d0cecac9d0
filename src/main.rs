//! Wordle Minimax - CLI
//!
//! Interactive helper, automatic solver, benchmark and word analysis.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io;
use std::path::PathBuf;
use wordle_minimax::{
    commands::{SolveConfig, analyze_word, run_benchmark, run_play, sample_targets, solve_word},
    core::Word,
    output::{benchmark_progress, print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Scorer, Selector, SelectorConfig},
    wordlists::{
        WORDS,
        loader::{clean_word_list, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver using greedy minimax partition scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Opening guess (default: COURT, falling back to ADIEU)
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Number of guesses allowed per game
    #[arg(long, global = true, default_value_t = 6)]
    max_turns: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper: suggests guesses for a game you play elsewhere (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance over dictionary words
    Benchmark {
        /// Number of random words to test (default: the whole dictionary)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for picking the random words
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how a word splits the dictionary and how it scores
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rewrite a whitespace-separated word list as one word per line
    Clean {
        /// Word list to read
        input: PathBuf,

        /// File to write
        output: PathBuf,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
    };
    anyhow::ensure!(!words.is_empty(), "word list {wordlist} has no five-letter words");
    info!("dictionary has {} words", words.len());
    Ok(words)
}

fn build_selector(opener: Option<&str>) -> Result<Selector> {
    let mut config = SelectorConfig::default();
    if let Some(opener) = opener {
        config.opener =
            Word::new(opener).with_context(|| format!("invalid opener {opener:?}"))?;
    }
    Ok(Selector::new(config, Scorer::default()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Clean { input, output } = &command {
        let count = clean_word_list(input, output)
            .with_context(|| format!("failed to clean {}", input.display()))?;
        println!("Wrote {count} words to {}", output.display());
        return Ok(());
    }

    let dictionary = load_dictionary(&cli.wordlist)?;
    let selector = build_selector(cli.opener.as_deref())?;
    if !dictionary.contains(&selector.config().opener) {
        warn!(
            "opener {} is not in the dictionary, {} will be used instead",
            selector.config().opener,
            selector.config().fallback_opener
        );
    }

    match command {
        Commands::Play => {
            let stdin = io::stdin();
            run_play(
                stdin.lock(),
                &mut io::stdout(),
                &dictionary,
                &selector,
                cli.max_turns,
            )?;
        }
        Commands::Solve { word, verbose } => {
            let mut config = SolveConfig::new(word);
            config.max_guesses = cli.max_turns;
            let result = solve_word(&config, &dictionary, &selector)?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark { count, seed } => {
            let targets = sample_targets(&dictionary, count, seed);
            println!("Running benchmark on {} words...", targets.len());
            let progress = benchmark_progress(targets.len())?;
            let result = run_benchmark(
                &targets,
                &dictionary,
                &selector,
                cli.max_turns,
                &progress,
            )?;
            print_benchmark_result(&result);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, &selector)?;
            print_analysis_result(&result);
        }
        Commands::Clean { .. } => {}
    }

    Ok(())
}
