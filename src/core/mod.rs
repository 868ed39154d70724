//! Core domain types for the word game
//!
//! Words, letter sets and guess evaluation. Everything here is pure and
//! free of I/O.

mod evaluation;
mod letters;
mod word;

pub use evaluation::{Evaluation, Mark};
pub use letters::{LetterSet, letter_index};
pub use word::{WORD_LEN, Word, WordError};
