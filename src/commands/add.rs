//! Word-list extension command

use crate::core::Word;
use crate::error::CommandError;
use crate::lexicon::Lexicon;

/// A word accepted into the lexicon
#[derive(Debug, Clone)]
pub struct AddResult {
    pub word: Word,
    pub score: f64,
    pub source: String,
    pub lexicon_size: usize,
}

/// Validate, score and persist a new word
///
/// # Errors
///
/// Returns an error if the word is malformed, already known, or the word
/// list could not be written. The lexicon is unchanged on error.
pub fn add_word(lexicon: &mut Lexicon, text: &str) -> Result<AddResult, CommandError> {
    let word = lexicon.add_word(text)?;
    let score = lexicon.score_of(&word).unwrap_or_default();

    Ok(AddResult {
        word,
        score,
        source: lexicon.source_name(),
        lexicon_size: lexicon.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;
    use crate::lexicon::FrequencyTable;
    use crate::wordlists::FileSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_lexicon(content: &str) -> (NamedTempFile, Lexicon) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let lexicon = Lexicon::build(
            FileSource::new(file.path()),
            FrequencyTable::embedded().unwrap(),
        )
        .unwrap();
        (file, lexicon)
    }

    #[test]
    fn add_persists_word() {
        let (file, mut lexicon) = file_lexicon("CRANE\nSLATE\n");

        let result = add_word(&mut lexicon, "irate").unwrap();

        assert_eq!(result.word.as_str(), "IRATE");
        assert_eq!(result.lexicon_size, 3);
        assert!((result.score - 0.417_339).abs() < 1e-6);
        let saved = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(saved.lines().last(), Some("IRATE"));
    }

    #[test]
    fn add_duplicate_is_rejected() {
        let (file, mut lexicon) = file_lexicon("CRANE\nSLATE\n");

        let result = add_word(&mut lexicon, "crane");

        assert!(matches!(
            result,
            Err(CommandError::Lexicon(LexiconError::Validation { .. }))
        ));
        assert_eq!(lexicon.len(), 2);
        let saved = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(saved, "CRANE\nSLATE\n");
    }
}
