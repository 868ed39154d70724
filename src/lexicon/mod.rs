//! The lexicon: every playable word with its desirability score
//!
//! Built once from a word source and a frequency table, then read-only
//! except for [`Lexicon::add_word`].

mod frequency;

pub use frequency::FrequencyTable;

use crate::core::Word;
use crate::error::LexiconError;
use crate::wordlists::{MemorySource, WordSource, parse_words};
use log::{debug, info};
use rustc_hash::FxHashMap;

/// A word and its frequency score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub word: Word,
    pub score: f64,
}

/// All valid words with their scores
///
/// Entries keep word-list order so they can be sampled uniformly by index.
pub struct Lexicon {
    entries: Vec<Entry>,
    index: FxHashMap<Word, usize>,
    frequencies: FrequencyTable,
    source: Box<dyn WordSource>,
}

impl Lexicon {
    /// Build a lexicon from a word source and a frequency table
    ///
    /// Loading is strict: a single malformed line rejects the whole list.
    /// Repeated words are kept once.
    ///
    /// # Errors
    /// Returns `LexiconError::DataLoad` if the frequency table does not cover
    /// all 26 letters, or the word source is missing, empty or contains a
    /// line that is not a five-letter word.
    pub fn build<S: WordSource + 'static>(
        source: S,
        frequencies: FrequencyTable,
    ) -> Result<Self, LexiconError> {
        if !frequencies.is_complete() {
            let missing: String = frequencies.missing_letters().into_iter().collect();
            return Err(LexiconError::data_load(
                "frequency table",
                format!("no weight for letters {missing}"),
            ));
        }

        let name = source.name();
        let words = parse_words(&name, &source.load()?)?;

        let mut lexicon = Self {
            entries: Vec::with_capacity(words.len()),
            index: FxHashMap::default(),
            frequencies,
            source: Box::new(source),
        };

        for word in words {
            if lexicon.index.contains_key(&word) {
                debug!("skipping duplicate {word} in {name}");
                continue;
            }
            let score = lexicon.frequencies.score_word(&word)?;
            lexicon.insert(Entry { word, score });
        }

        info!("loaded {} words from {name}", lexicon.len());
        Ok(lexicon)
    }

    /// Lexicon over the embedded word list and frequency table
    ///
    /// # Errors
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::build(MemorySource::embedded(), FrequencyTable::embedded()?)
    }

    fn insert(&mut self, entry: Entry) {
        self.index.insert(entry.word, self.entries.len());
        self.entries.push(entry);
    }

    /// Score a word by summing its letters' weights
    ///
    /// # Errors
    /// Returns `LexiconError::UnknownLetter` for characters outside A–Z.
    pub fn score(&self, word: &str) -> Result<f64, LexiconError> {
        self.frequencies.score(word)
    }

    /// Stored score of a lexicon word
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.index.get(word).map(|&idx| self.entries[idx].score)
    }

    /// Membership test for raw text, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word.trim()).is_ok_and(|w| self.contains_word(&w))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Add a word to the backing list and to this lexicon
    ///
    /// The new entry's score is computed from the frequency table, so the
    /// word is immediately eligible as an opening guess.
    ///
    /// # Errors
    /// Returns `LexiconError::Validation` if the word is malformed or already
    /// present, or `LexiconError::Io` if the backing store cannot be written.
    /// The lexicon is unchanged on error.
    pub fn add_word(&mut self, text: &str) -> Result<Word, LexiconError> {
        let text = text.trim();
        let word = Word::new(text).map_err(|e| LexiconError::validation(text, e.to_string()))?;

        if self.contains_word(&word) {
            return Err(LexiconError::validation(
                word.as_str(),
                "already in the word list",
            ));
        }

        let score = self.frequencies.score_word(&word)?;
        self.source.append(&word)?;
        self.insert(Entry { word, score });

        info!("added {word} (score {score:.4}) to {}", self.source.name());
        Ok(word)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.entries.iter().map(|entry| entry.word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Name of the backing word source
    #[must_use]
    pub fn source_name(&self) -> String {
        self.source.name()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("source", &self.source.name())
            .field("words", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FileSource;
    use std::fs;

    fn small() -> Lexicon {
        Lexicon::build(
            MemorySource::from_slice(&["crane", "crate", "trace", "speed"]),
            FrequencyTable::embedded().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn builds_with_scores() {
        let lexicon = small();
        assert_eq!(lexicon.len(), 4);

        let crane = Word::new("crane").unwrap();
        let expected = lexicon.score("CRANE").unwrap();
        assert_eq!(lexicon.score_of(&crane), Some(expected));
        assert!(expected > 0.0);
    }

    #[test]
    fn scores_are_deterministic() {
        let a = small();
        let b = small();
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let lexicon = small();
        assert!(lexicon.contains("crane"));
        assert!(lexicon.contains("SPEED"));
        assert!(!lexicon.contains("slate"));
        assert!(!lexicon.contains("nonsense"));
    }

    #[test]
    fn duplicates_collapse() {
        let lexicon = Lexicon::build(
            MemorySource::from_slice(&["crane", "CRANE", "slate"]),
            FrequencyTable::embedded().unwrap(),
        )
        .unwrap();
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn rejects_malformed_word() {
        let result = Lexicon::build(
            MemorySource::from_slice(&["crane", "cranes"]),
            FrequencyTable::embedded().unwrap(),
        );
        assert!(matches!(result, Err(LexiconError::DataLoad { .. })));
    }

    #[test]
    fn rejects_empty_list() {
        let result = Lexicon::build(
            MemorySource::from_slice(&[]),
            FrequencyTable::embedded().unwrap(),
        );
        assert!(matches!(result, Err(LexiconError::DataLoad { .. })));
    }

    #[test]
    fn rejects_incomplete_frequencies() {
        let partial = FrequencyTable::parse("partial", "A,0.1\nB,0.2").unwrap();
        let result = Lexicon::build(MemorySource::from_slice(&["crane"]), partial);
        assert!(matches!(result, Err(LexiconError::DataLoad { .. })));
    }

    #[test]
    fn add_word_recomputes_score() {
        let mut lexicon = small();
        let word = lexicon.add_word("slate").unwrap();

        assert_eq!(lexicon.len(), 5);
        assert!(lexicon.contains("SLATE"));
        assert_eq!(lexicon.score_of(&word), Some(lexicon.score("slate").unwrap()));
    }

    #[test]
    fn add_word_rejects_bad_input() {
        let mut lexicon = small();
        assert!(matches!(
            lexicon.add_word("toolong"),
            Err(LexiconError::Validation { .. })
        ));
        assert!(matches!(
            lexicon.add_word("crane"),
            Err(LexiconError::Validation { .. })
        ));
        assert_eq!(lexicon.len(), 4);
    }

    #[test]
    fn add_word_persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "CRANE\nSLATE\n").unwrap();

        let mut lexicon =
            Lexicon::build(FileSource::new(&path), FrequencyTable::embedded().unwrap()).unwrap();
        lexicon.add_word("irate").unwrap();

        let reloaded =
            Lexicon::build(FileSource::new(&path), FrequencyTable::embedded().unwrap()).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert!(reloaded.contains("irate"));
    }

    #[test]
    fn failed_duplicate_add_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "CRANE\n").unwrap();

        let mut lexicon =
            Lexicon::build(FileSource::new(&path), FrequencyTable::embedded().unwrap()).unwrap();
        assert!(lexicon.add_word("crane").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "CRANE\n");
    }

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(lexicon.len(), crate::wordlists::WORDS_COUNT);
    }
}
