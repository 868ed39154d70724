//! Sets of letters
//!
//! A `LetterSet` is a 26-bit mask keyed by letter index (A = 0 … Z = 25).

use std::fmt;

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of uppercase letters A–Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

/// Index (0-25) of an uppercase ASCII letter, or `None` for anything else
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter A–Z
    pub const ALPHABET: Self = Self(FULL_MASK);

    /// A set holding exactly one letter
    #[must_use]
    pub fn single(letter: u8) -> Self {
        let mut set = Self::EMPTY;
        set.insert(letter);
        set
    }

    /// Add a letter; non-letters are ignored
    pub fn insert(&mut self, letter: u8) {
        if let Some(idx) = letter_index(letter) {
            self.0 |= 1 << idx;
        }
    }

    /// Remove a letter
    pub fn remove(&mut self, letter: u8) {
        if let Some(idx) = letter_index(letter) {
            self.0 &= !(1 << idx);
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter_index(letter).is_some_and(|idx| self.0 & (1 << idx) != 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_all_letters() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains(b'A'));
        assert!(LetterSet::ALPHABET.contains(b'Z'));
        assert!(!LetterSet::ALPHABET.contains(b'a'));
    }

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'Q');
        set.insert(b'Q');
        assert_eq!(set.len(), 1);
        set.remove(b'Q');
        assert!(set.is_empty());
    }

    #[test]
    fn non_letters_ignored() {
        let set: LetterSet = b"A1!b".iter().copied().collect();
        assert_eq!(set, LetterSet::single(b'A'));
    }

    #[test]
    fn subset_relation() {
        let small: LetterSet = b"AE".iter().copied().collect();
        let big: LetterSet = b"CRANE".iter().copied().collect();
        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"TEA".iter().copied().collect();
        assert_eq!(set.to_string(), "{AET}");
    }
}
