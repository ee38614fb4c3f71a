//! Hard-Mode Wordle Solver - CLI
//!
//! Every guess is drawn from the words still consistent with the feedback,
//! choosing the one with the smallest worst-case remaining space.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use wordle_hardmode::{
    commands::{analyze_word, run_benchmark, run_interactive, sample_secrets, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    session::{DEFAULT_MAX_GUESSES, SessionConfig},
    solver::{DEFAULT_OPENING, GuessSelector},
    wordlists::{DEFAULT_DICTIONARY_FILE, Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_hardmode",
    about = "Hard-mode Wordle solver that minimizes the worst-case remaining words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one five-letter word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY_FILE)]
    dictionary: PathBuf,

    /// Fixed first guess, used when it is in the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Compute the first guess instead of using a fixed opening
    #[arg(long, global = true, conflicts_with = "opening")]
    no_opening: bool,

    /// Maximum number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant: enter the feedback from a real game
    Solve,

    /// Solve a known secret word
    Play {
        /// The secret word to solve
        secret: String,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every dictionary word (or a random sample) and report statistics
    Bench {
        /// Number of random secrets to draw instead of the whole dictionary
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Only play the first N dictionary words
        #[arg(short, long, conflicts_with = "sample")]
        limit: Option<usize>,
    },

    /// Show how a word partitions the dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let Some(dictionary) = load_dictionary(&cli.dictionary)? else {
        return Ok(ExitCode::FAILURE);
    };

    let opening = if cli.no_opening {
        None
    } else {
        Some(Word::new(&cli.opening).with_context(|| format!("invalid opening '{}'", cli.opening))?)
    };
    let selector = GuessSelector::new(opening);
    let config = SessionConfig::new(cli.max_guesses);

    match command {
        Commands::Solve => {
            run_interactive(&dictionary, &selector, config).context("interactive session")?;
        }
        Commands::Play { secret, verbose } => {
            let outcome = solve_word(&dictionary, &selector, &secret, config)?;
            print_solve_result(&secret, &outcome, verbose);
        }
        Commands::Bench {
            sample,
            seed,
            limit,
        } => run_bench_command(&dictionary, &selector, config, sample, seed, limit)?,
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the dictionary, printing a hint and returning `None` if the file is missing
fn load_dictionary(path: &Path) -> Result<Option<Dictionary>> {
    let dictionary = match load_from_file(path) {
        Ok(dictionary) => dictionary,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            eprintln!(
                "{} {}",
                "Dictionary not found:".red().bold(),
                path.display()
            );
            eprintln!("Pass a word list with --dictionary, e.g. -d data/sample_words.txt");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading dictionary {}", path.display()));
        }
    };

    if dictionary.is_empty() {
        bail!("dictionary {} has no valid five-letter words", path.display());
    }
    Ok(Some(dictionary))
}

fn run_bench_command(
    dictionary: &Dictionary,
    selector: &GuessSelector,
    config: SessionConfig,
    sample: Option<usize>,
    seed: Option<u64>,
    limit: Option<usize>,
) -> Result<()> {
    let secrets: Vec<Word> = match sample {
        Some(count) => sample_secrets(dictionary, count, seed),
        None => dictionary
            .words()
            .iter()
            .take(limit.unwrap_or(dictionary.len()))
            .copied()
            .collect(),
    };

    match selector.opening() {
        Some(opening) => println!(
            "🎯 Playing {} words (opening {opening}, cap {})...",
            secrets.len(),
            config.max_guesses
        ),
        None => println!(
            "🎯 Playing {} words (computed opening, cap {})...",
            secrets.len(),
            config.max_guesses
        ),
    }

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")?
            .progress_chars("█▓▒░"),
    );

    let report = run_benchmark(dictionary, selector, &secrets, config, Some(&pb));
    pb.finish_and_clear();

    print_benchmark_result(&report);
    Ok(())
}
