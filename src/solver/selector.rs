//! Guess selection
//!
//! Picks the opening guess by score-threshold rejection sampling, later
//! guesses by sampling the narrowed candidates, and hints from the whole
//! lexicon. Every sampling loop is bounded.

use crate::core::{LetterSet, Word};
use crate::error::SolverError;
use crate::lexicon::Lexicon;
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Tunables for [`GuessSelector`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// An opening guess must score strictly above this
    pub opening_threshold: f64,
    /// Samples drawn looking for a candidate holding every misplaced letter
    pub retry_limit: usize,
    /// Rejection-sampling draws before scanning for qualifying openers
    pub opening_attempts: usize,
}

impl SelectorConfig {
    pub const DEFAULT_THRESHOLD: f64 = 0.375;
    pub const DEFAULT_RETRY_LIMIT: usize = 500;
    pub const DEFAULT_OPENING_ATTEMPTS: usize = 10_000;
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            opening_threshold: Self::DEFAULT_THRESHOLD,
            retry_limit: Self::DEFAULT_RETRY_LIMIT,
            opening_attempts: Self::DEFAULT_OPENING_ATTEMPTS,
        }
    }
}

/// Chooses guesses for the auto-solver
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessSelector {
    config: SelectorConfig,
}

impl GuessSelector {
    #[must_use]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Whether `word` may open a game: five distinct letters and a score
    /// above the threshold
    #[must_use]
    pub fn qualifies_as_opener(&self, word: &Word, score: f64) -> bool {
        score > self.config.opening_threshold && word.has_distinct_letters()
    }

    /// Pick a high-scoring opening guess with no repeated letters
    ///
    /// Samples the lexicon uniformly and accepts the first qualifying word.
    /// If `opening_attempts` draws all miss, picks uniformly among every
    /// qualifying word instead.
    ///
    /// # Errors
    /// Returns `SolverError::NoQualifyingWord` if no lexicon word qualifies.
    pub fn select_opening_guess<R: Rng + ?Sized>(
        &self,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Result<Word, SolverError> {
        let entries = lexicon.entries();
        let no_word = SolverError::NoQualifyingWord {
            threshold: self.config.opening_threshold,
        };

        if entries.is_empty() {
            return Err(no_word);
        }

        for _ in 0..self.config.opening_attempts {
            if let Some(entry) = entries.choose(rng)
                && self.qualifies_as_opener(&entry.word, entry.score)
            {
                return Ok(entry.word);
            }
        }

        debug!(
            "no opener after {} draws, scanning lexicon",
            self.config.opening_attempts
        );
        let qualifying: Vec<Word> = entries
            .iter()
            .filter(|entry| self.qualifies_as_opener(&entry.word, entry.score))
            .map(|entry| entry.word)
            .collect();

        qualifying.choose(rng).copied().ok_or(no_word)
    }

    /// Pick the next guess from the narrowed candidates
    ///
    /// Draws up to `retry_limit` samples looking for one that contains every
    /// misplaced letter. If none does, returns the sample that covered the
    /// most misplaced letters (earliest wins ties).
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` if `candidates` is empty.
    pub fn select_next_guess<R: Rng + ?Sized>(
        &self,
        candidates: &[Word],
        misplaced: LetterSet,
        rng: &mut R,
    ) -> Result<Word, SolverError> {
        let mut best: Option<(Word, usize)> = None;

        for _ in 0..self.config.retry_limit.max(1) {
            let word = *candidates
                .choose(rng)
                .ok_or(SolverError::EmptyCandidates)?;
            let covered = misplaced.intersection(word.letter_set()).len();

            if covered == misplaced.len() {
                return Ok(word);
            }
            if best.is_none_or(|(_, most)| covered > most) {
                best = Some((word, covered));
            }
        }

        let (word, covered) = best.ok_or(SolverError::EmptyCandidates)?;
        warn!(
            "retry budget spent: {word} covers {covered} of {} misplaced letters",
            misplaced.len()
        );
        Ok(word)
    }

    /// A uniformly random lexicon word, regardless of game state
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` if the lexicon is empty.
    pub fn hint<R: Rng + ?Sized>(&self, lexicon: &Lexicon, rng: &mut R) -> Result<Word, SolverError> {
        lexicon
            .entries()
            .choose(rng)
            .map(|entry| entry.word)
            .ok_or(SolverError::EmptyCandidates)
    }
}
