//! The candidate-narrowing solver
//!
//! Feedback accumulates in a [`FeedbackModel`], the [`CandidateSet`] is
//! narrowed against it after every guess, and the [`GuessSelector`] picks the
//! next word. A [`Session`] ties these together for one game.

mod feedback;
mod narrower;
mod selector;
mod session;

pub use feedback::FeedbackModel;
pub use narrower::{CandidateSet, narrow};
pub use selector::{GuessSelector, SelectorConfig};
pub use session::{
    AutoSolver, DEFAULT_MAX_GUESSES, GameStatus, GuessRecord, MAX_GUESS_LIMIT, Outcome, Session,
};
