//! Guess evaluation against a secret word
//!
//! Each letter of a guess is classified as one of:
//! - `Correct` (green): right letter, right position
//! - `Present` (yellow): letter occurs in the secret, elsewhere
//! - `Absent` (gray): no unmatched occurrence left in the secret

use super::{WORD_LEN, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Mark; WORD_LEN]);

impl Evaluation {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Duplicate letters follow Wordle rules:
    /// 1. Exact-position matches are resolved first and consume one
    ///    occurrence of that letter from the secret
    /// 2. Remaining guess letters, in index order, are marked present while
    ///    the secret still has unmatched occurrences of that letter
    /// 3. Excess occurrences are absent
    ///
    /// # Examples
    /// ```
    /// use wordpie::core::{Evaluation, Mark, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("crate").unwrap();
    /// let eval = Evaluation::evaluate(&secret, &guess);
    /// assert_eq!(eval.to_string(), "GGG-G");
    /// assert_eq!(eval.marks()[3], Mark::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut available = secret.letter_counts();

        // First pass: greens
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                *mark = Mark::Correct;
                available[usize::from(letter - b'A')] -= 1;
            }
        }

        // Second pass: yellows from what is left
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let count = &mut available[usize::from(guess.letter_at(i) - b'A')];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count(&self, kind: Mark) -> usize {
        self.0.iter().filter(|&&mark| mark == kind).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordpie::core::Evaluation;
    ///
    /// let p1 = Evaluation::parse("GY-GY").unwrap();
    /// let p2 = Evaluation::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks: Vec<Mark> = s.chars().map(Mark::from_char).collect::<Option<_>>()?;
        marks.try_into().ok().map(Self)
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
