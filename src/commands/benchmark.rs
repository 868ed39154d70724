//! Benchmark command
//!
//! Auto-solves many random secrets in parallel and collects guess statistics.

use crate::config::GameConfig;
use crate::core::Word;
use crate::lexicon::Lexicon;
use crate::solver::{Outcome, Session};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub lost: usize,
    /// Games the solver abandoned (no consistent candidate or no opener)
    pub no_solution: usize,
    /// Guesses across solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by number of guesses
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Draw `count` secrets uniformly (with replacement) from the lexicon
#[must_use]
pub fn pick_secrets(config: &GameConfig, lexicon: &Lexicon, count: usize) -> Vec<Word> {
    let mut rng = config.rng();
    (0..count)
        .filter_map(|_| lexicon.entries().choose(&mut rng).map(|entry| entry.word))
        .collect()
}

/// Auto-solve every secret, one independent session per secret
///
/// Sessions run on the rayon pool; each gets its own RNG stream, so a seeded
/// run is reproducible regardless of scheduling.
#[must_use]
pub fn run_benchmark(
    config: &GameConfig,
    lexicon: &Lexicon,
    secrets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let solver = config.solver();
    let start = Instant::now();

    let outcomes: Vec<Outcome> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, &secret)| {
            let mut rng = config.rng_for(index as u64);
            let mut session = Session::new(lexicon, secret, config.max_guesses);
            let outcome = solver.solve(&mut session, lexicon, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(&outcomes, duration);
    info!(
        "benchmark: {}/{} solved in {:.2?}",
        result.solved, result.total_words, result.duration
    );
    result
}

fn summarize(outcomes: &[Outcome], duration: Duration) -> BenchmarkResult {
    let mut solved = 0;
    let mut lost = 0;
    let mut no_solution = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Solved { guesses } => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(*guesses);
                max_guesses = max_guesses.max(*guesses);
                *distribution.entry(*guesses).or_insert(0) += 1;
            }
            Outcome::Lost => lost += 1,
            Outcome::NoSolution(_) => no_solution += 1,
        }
    }

    let total_words = outcomes.len();
    BenchmarkResult {
        total_words,
        solved,
        lost,
        no_solution,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
