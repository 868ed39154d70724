//! Error types
//!
//! Startup and data errors live in [`LexiconError`]; per-guess solver
//! failures in [`SolverError`]; bad player input in [`GuessError`].

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or extending the lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A data source is missing, empty or malformed
    #[error("could not load {source_name}: {reason}")]
    DataLoad { source_name: String, reason: String },

    /// The frequency table has no weight for a letter being scored
    #[error("no frequency weight for letter '{0}'")]
    UnknownLetter(char),

    /// A word offered to `add_word` was rejected; the word list is unchanged
    #[error("cannot add \"{word}\": {reason}")]
    Validation { word: String, reason: String },

    /// Reading or writing a backing file failed
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LexiconError {
    pub(crate) fn data_load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(word: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            word: word.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the feedback model, narrower and selector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Feedback did not have one mark per letter
    #[error("expected {expected} feedback marks, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// No word in the candidate set satisfies the accumulated feedback
    #[error("no candidate words are consistent with the feedback")]
    ExhaustedCandidates,

    /// A guess was requested from an empty candidate set
    #[error("cannot pick a guess from an empty candidate set")]
    EmptyCandidates,

    /// No word meets the opening-guess requirements
    #[error("no word scores above {threshold} with five distinct letters")]
    NoQualifyingWord { threshold: f64 },
}

/// Errors returned for a rejected player guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),

    /// Well-formed but unknown; the caller may offer to add it
    #[error("{0} is not in the word list")]
    NotInLexicon(String),

    #[error("the game is already over")]
    GameOver,
}

/// Rejected game settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max guesses must be between 1 and {max}, got {value}")]
    MaxGuesses { value: usize, max: usize },

    #[error("opening threshold must be a finite number, got {0}")]
    Threshold(f64),
}

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
