//! Five-letter word representation
//!
//! A `Word` stores exactly five uppercase ASCII letters. It is `Copy`, so
//! candidate sets and guess histories can hold words by value.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A validated five-letter word (A–Z, uppercase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only the letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// Surrounding whitespace is not trimmed; callers reading lines should
    /// trim first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordpie::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only A-Z bytes are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific (uppercase) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// The set of distinct letters in this word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }

    /// True when all five letters differ
    #[inline]
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        self.letter_set().len() == WORD_LEN
    }

    /// Count occurrences of each letter, indexed 0 (A) to 25 (Z)
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.0 {
            counts[usize::from(letter - b'A')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
