//! Benchmark harness
//!
//! Plays one session per secret word, using the evaluator as the feedback
//! source, and aggregates guess-count statistics.

use crate::core::Word;
use crate::session::{GameSession, SecretFeedback, SessionConfig};
use crate::solver::GuessSelector;
use crate::wordlists::Dictionary;
use indicatif::ProgressBar;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of one benchmarked game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub secret: Word,
    pub guesses: usize,
    pub solved: bool,
}

/// Aggregated result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub total_words: usize,
    pub solved: usize,
    /// Secrets that were not solved within the cap, in input order
    pub failures: Vec<Word>,
    /// Guess count → number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Mean guesses over solved games (0 when nothing was solved)
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub max_allowed: usize,
    pub duration: Duration,
}

impl BenchmarkReport {
    /// Share of solved games that took `guesses` guesses, in percent
    #[must_use]
    pub fn percentage(&self, guesses: usize) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        let count = self.distribution.get(&guesses).copied().unwrap_or(0);
        count as f64 / self.solved as f64 * 100.0
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn words_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total_words as f64 / secs
        } else {
            0.0
        }
    }

    /// Fold per-game results into a report
    #[must_use]
    pub fn from_results(results: &[GameResult], max_allowed: usize, duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failures = Vec::new();
        let mut total_guesses = 0;

        for result in results {
            if result.solved {
                *distribution.entry(result.guesses).or_insert(0) += 1;
                total_guesses += result.guesses;
            } else {
                failures.push(result.secret);
            }
        }

        let solved = results.len() - failures.len();
        let average_guesses = if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        };

        Self {
            total_words: results.len(),
            solved,
            failures,
            min_guesses: distribution.keys().next().copied().unwrap_or(0),
            max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
            distribution,
            average_guesses,
            max_allowed,
            duration,
        }
    }
}

/// Play a single game against a known secret
#[must_use]
pub fn play_secret(
    dictionary: &Dictionary,
    selector: &GuessSelector,
    secret: Word,
    config: SessionConfig,
) -> GameResult {
    let outcome = GameSession::new(dictionary, selector, config)
        .and_then(|mut session| session.play(&mut SecretFeedback::new(secret)));

    match outcome {
        Ok(outcome) => GameResult {
            secret,
            guesses: outcome.guess_count(),
            solved: outcome.solved,
        },
        Err(e) => {
            warn!("'{secret}' could not be played: {e}");
            GameResult {
                secret,
                guesses: 0,
                solved: false,
            }
        }
    }
}

/// Run the benchmark over `secrets`
///
/// Games are independent, so they run in parallel; results are gathered in
/// input order and reduced once every game is finished. The report is the
/// same from run to run for the same inputs, apart from `duration`.
#[must_use]
pub fn run_benchmark(
    dictionary: &Dictionary,
    selector: &GuessSelector,
    secrets: &[Word],
    config: SessionConfig,
    progress: Option<&ProgressBar>,
) -> BenchmarkReport {
    info!(
        "benchmarking {} secrets against {} words (cap {})",
        secrets.len(),
        dictionary.len(),
        config.max_guesses
    );
    let start = Instant::now();

    let results: Vec<GameResult> = secrets
        .par_iter()
        .map(|&secret| {
            let result = play_secret(dictionary, selector, secret, config);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            result
        })
        .collect();

    let report = BenchmarkReport::from_results(&results, config.max_guesses, start.elapsed());
    info!(
        "solved {}/{} (avg {:.3}, max {})",
        report.solved, report.total_words, report.average_guesses, report.max_guesses
    );
    report
}

/// Draw `count` secrets from the dictionary, with replacement
///
/// A seed makes the draw reproducible.
#[must_use]
pub fn sample_secrets(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count)
        .filter_map(|_| dictionary.words().choose(&mut rng).copied())
        .collect()
}
