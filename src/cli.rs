//! Command-line interface: argument parsing and console output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wordle_opener::dictionary::{
    load_dictionary_from_file, parse_word_list, DEFAULT_DICTIONARY_PATH,
};
use wordle_opener::search::{
    SearchBackend, SearchConfig, SearchCoordinator, DEFAULT_POLL_INTERVAL, DEFAULT_THREADS,
};
use wordle_opener::{count_viable_for_answer, evaluate_opening, Word};

/// Score Wordle openings by how much they narrow the answer list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newline-delimited list of possible answers
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the answers still possible after playing guesses against an answer
    Options {
        /// Comma-separated guesses, e.g. trace,loins
        wordlist: String,
        /// The answer to play the guesses against
        fake_answer: String,
    },
    /// Show how well an opening narrows the answer list
    #[command(name = "evalopen")]
    EvalOpen {
        /// Comma-separated guesses, e.g. trace,loins
        wordlist: String,
    },
    /// Search the dictionary for the best single-word opening
    Opening {
        /// Number of worker threads
        #[arg(short, long, default_value_t = DEFAULT_THREADS)]
        threads: usize,
        /// Interval between completion checks, in milliseconds
        #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
        poll_ms: u64,
        /// Print the best N openings
        #[arg(long, default_value_t = 1)]
        top: usize,
        #[arg(long, value_enum, default_value_t = Backend::Pool)]
        backend: Backend,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Pool,
    Rayon,
}

impl From<Backend> for SearchBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Pool => SearchBackend::Pool,
            Backend::Rayon => SearchBackend::Rayon,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn run(cli: Cli) -> Result<()> {
    let dictionary = load_dictionary_from_file(&cli.dictionary)
        .with_context(|| format!("failed to read dictionary '{}'", cli.dictionary.display()))?;
    println!("Loaded {} words.", dictionary.len());

    match cli.command {
        Command::Options {
            wordlist,
            fake_answer,
        } => {
            let guesses = parse_word_list(&wordlist).context("invalid guess list")?;
            let answer = Word::new(&fake_answer).context("invalid answer")?;
            run_options(&guesses, &answer, &dictionary);
        }
        Command::EvalOpen { wordlist } => {
            let guesses = parse_word_list(&wordlist).context("invalid guess list")?;
            run_evalopen(&guesses, &dictionary)?;
        }
        Command::Opening {
            threads,
            poll_ms,
            top,
            backend,
        } => {
            let config = SearchConfig {
                threads,
                poll_interval: Duration::from_millis(poll_ms),
                backend: backend.into(),
            };
            run_opening(config, top, dictionary)?;
        }
    }
    Ok(())
}

fn format_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.as_str().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_options(guesses: &[Word], answer: &Word, dictionary: &[Word]) {
    println!(
        "Counting options for [{}] on {}.",
        format_words(guesses),
        answer.as_str().to_uppercase()
    );
    let start = Instant::now();
    let mut options = Vec::new();
    let count = count_viable_for_answer(guesses, answer, dictionary, Some(&mut options));
    println!("  {} options computed in {:.2?}", count, start.elapsed());
    println!("Options are:");
    for word in &options {
        println!("{word}");
    }
}

fn run_evalopen(guesses: &[Word], dictionary: &[Word]) -> Result<()> {
    println!("Evaluating opening [{}].", format_words(guesses));
    let start = Instant::now();
    let evaluation = evaluate_opening(guesses, dictionary)?;
    println!("Found distribution in {:.2?}:", start.elapsed());
    println!("{:>8} {:>8}", "Options", "Answers");
    println!("{}", "-".repeat(17));
    let last = evaluation.histogram.buckets().len() - 1;
    for (bucket, count) in evaluation.histogram.buckets().iter().enumerate() {
        let label = if bucket == last {
            format!("{bucket}+")
        } else {
            bucket.to_string()
        };
        println!("{label:>8} {count:>8}");
    }
    println!(
        "  Mean: {:.3}  Median: {}",
        evaluation.result.mean, evaluation.result.median
    );
    Ok(())
}

fn run_opening(config: SearchConfig, top: usize, dictionary: Vec<Word>) -> Result<()> {
    println!(
        "Searching {} openings with {} threads ({:?} backend)...",
        dictionary.len(),
        config.threads,
        config.backend
    );
    let coordinator = SearchCoordinator::new(config);
    let report = coordinator.find_best_opening(Arc::from(dictionary))?;

    if top > 1 {
        println!();
        println!("{:>4} {:>8} {:>10} {:>8}", "#", "Word", "Mean", "Median");
        println!("{}", "-".repeat(33));
        for (rank, opening) in report.top(top).iter().enumerate() {
            println!(
                "{:>4} {:>8} {:>10.3} {:>8}",
                rank + 1,
                opening.word.as_str().to_uppercase(),
                opening.result.mean,
                opening.result.median
            );
        }
        println!();
    }

    println!("Best opening: {}", report.best.word.as_str().to_uppercase());
    println!(
        "  with mean: {:.3} and median: {}",
        report.best.result.mean, report.best.result.median
    );
    println!("Time elapsed: {:.2?}", report.elapsed);
    Ok(())
}
