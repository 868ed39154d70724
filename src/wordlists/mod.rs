//! Word lists and frequency data
//!
//! Provides the embedded default data compiled into the binary and the
//! sources a lexicon reads from and appends to.

mod embedded;
pub mod loader;

pub use embedded::{FREQUENCIES, WORDS, WORDS_COUNT};
pub use loader::{FileSource, MemorySource, WordSource, parse_words};
