//! Letter frequency weights
//!
//! Weights are kept in a fixed array keyed by letter index, parsed from
//! `LETTER,weight` CSV lines.

use crate::core::{Word, letter_index};
use crate::error::LexiconError;
use std::fs;
use std::path::Path;

/// Per-letter desirability weights, A–Z
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    weights: [Option<f64>; 26],
}

impl FrequencyTable {
    /// Parse `LETTER,weight` lines
    ///
    /// Blank lines are skipped and letters are case-normalized. The table may
    /// be partial; [`Lexicon::build`](super::Lexicon::build) rejects
    /// incomplete tables.
    ///
    /// # Errors
    /// Returns `LexiconError::DataLoad` if the content is empty, a line is
    /// malformed, a weight is negative or not a number, or a letter repeats.
    pub fn parse(source_name: &str, content: &str) -> Result<Self, LexiconError> {
        let mut weights = [None; 26];
        let mut seen_any = false;

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let bad_line = |reason: &str| {
                LexiconError::data_load(source_name, format!("line {}: {reason}", line_no + 1))
            };

            let (key, value) = line
                .split_once(',')
                .ok_or_else(|| bad_line("expected LETTER,weight"))?;

            let key = key.trim();
            let idx = match key.as_bytes() {
                [letter] => letter_index(letter.to_ascii_uppercase()),
                _ => None,
            }
            .ok_or_else(|| bad_line(&format!("\"{key}\" is not a single letter")))?;

            let weight: f64 = value
                .trim()
                .parse()
                .map_err(|_| bad_line(&format!("\"{}\" is not a number", value.trim())))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(bad_line("weight must be a non-negative number"));
            }

            if weights[idx].replace(weight).is_some() {
                return Err(bad_line(&format!("duplicate entry for {}", key.to_uppercase())));
            }
            seen_any = true;
        }

        if !seen_any {
            return Err(LexiconError::data_load(source_name, "frequency table is empty"));
        }

        Ok(Self { weights })
    }

    /// Load a frequency table from a CSV file
    ///
    /// # Errors
    /// Returns `LexiconError::DataLoad` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| LexiconError::data_load(&name, e.to_string()))?;
        Self::parse(&name, &content)
    }

    /// The table compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::parse("embedded frequency table", crate::wordlists::FREQUENCIES)
    }

    /// Weight for a letter, case-insensitive
    #[must_use]
    pub fn weight(&self, letter: char) -> Option<f64> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(letter_index)
            .and_then(|idx| self.weights[idx])
    }

    /// Letters without a weight, in alphabetical order
    #[must_use]
    pub fn missing_letters(&self) -> Vec<char> {
        (b'A'..=b'Z')
            .zip(&self.weights)
            .filter(|(_, weight)| weight.is_none())
            .map(|(letter, _)| char::from(letter))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.weights.iter().all(Option::is_some)
    }

    /// Sum of letter weights for a word, letters case-normalized
    ///
    /// # Errors
    /// Returns `LexiconError::UnknownLetter` for any character without a
    /// weight.
    pub fn score(&self, word: &str) -> Result<f64, LexiconError> {
        word.chars().try_fold(0.0, |total, ch| {
            self.weight(ch)
                .map(|weight| total + weight)
                .ok_or(LexiconError::UnknownLetter(ch))
        })
    }

    /// Score of an already-validated word
    ///
    /// # Errors
    /// Returns `LexiconError::UnknownLetter` if the table is partial.
    pub fn score_word(&self, word: &Word) -> Result<f64, LexiconError> {
        self.score(word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_csv(weight: f64) -> String {
        (b'A'..=b'Z')
            .map(|l| format!("{},{weight}\n", char::from(l)))
            .collect()
    }

    #[test]
    fn parses_complete_table() {
        let table = FrequencyTable::parse("test", &uniform_csv(0.5)).unwrap();
        assert!(table.is_complete());
        assert_eq!(table.weight('q'), Some(0.5));
        assert_eq!(table.weight('Q'), Some(0.5));
    }

    #[test]
    fn lowercase_keys_accepted() {
        let table = FrequencyTable::parse("test", "a,0.1\n\n b , 0.2 \n").unwrap();
        assert_eq!(table.weight('A'), Some(0.1));
        assert_eq!(table.weight('B'), Some(0.2));
        assert!(!table.is_complete());
        assert_eq!(table.missing_letters().len(), 24);
    }

    #[test]
    fn score_sums_weights() {
        let table = FrequencyTable::embedded().unwrap();
        let expected: f64 = "CRANE".chars().map(|c| table.weight(c).unwrap()).sum();
        let score = table.score("crane").unwrap();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn score_unknown_letter() {
        let table = FrequencyTable::parse("test", "A,1.0\nB,2.0").unwrap();
        assert_eq!(table.score("ab").unwrap(), 3.0);
        assert!(matches!(
            table.score("abc"),
            Err(LexiconError::UnknownLetter('c'))
        ));
        assert!(matches!(
            table.score("a1"),
            Err(LexiconError::UnknownLetter('1'))
        ));
    }

    #[test]
    fn rejects_malformed_lines() {
        for bad in ["A", "AB,0.1", "A,abc", "A,-1", "1,0.5", "A,0.1\nA,0.2"] {
            assert!(
                matches!(
                    FrequencyTable::parse("test", bad),
                    Err(LexiconError::DataLoad { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            FrequencyTable::parse("test", "\n  \n"),
            Err(LexiconError::DataLoad { .. })
        ));
    }

    #[test]
    fn embedded_table_is_complete() {
        assert!(FrequencyTable::embedded().unwrap().is_complete());
    }
}
