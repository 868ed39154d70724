//! Wordpie
//!
//! A Wordle-style word game with a candidate-narrowing solver. Feedback from
//! each guess is folded into per-position letter sets, the candidate list is
//! filtered against them, and the next guess is sampled from what remains.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordpie::core::{Evaluation, Word};
//! use wordpie::lexicon::Lexicon;
//! use wordpie::solver::{AutoSolver, DEFAULT_MAX_GUESSES, Session};
//!
//! let lexicon = Lexicon::embedded().unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! // Score a single guess
//! let guess = Word::new("trace").unwrap();
//! println!("{}", Evaluation::evaluate(&secret, &guess).to_emoji());
//!
//! // Let the solver play a whole game
//! let mut session = Session::new(&lexicon, secret, DEFAULT_MAX_GUESSES);
//! let outcome = AutoSolver::default().solve(&mut session, &lexicon, &mut rand::rng());
//! println!("{outcome:?}");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Tunables
pub mod config;

// Scored word list
pub mod lexicon;

// Feedback model, narrowing and guess selection
pub mod solver;

// Word list sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
