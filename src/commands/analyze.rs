//! Word analysis command
//!
//! Reports a word's letter-frequency score and whether the solver could open
//! a game with it.

use crate::core::{LetterSet, Word};
use crate::error::CommandError;
use crate::lexicon::Lexicon;
use crate::solver::{GuessSelector, SelectorConfig};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub score: f64,
    pub threshold: f64,
    pub letters: LetterSet,
    pub distinct_letters: bool,
    pub in_lexicon: bool,
    pub qualifies_as_opener: bool,
    /// Position of the score among all lexicon words, 1 = highest
    pub rank: usize,
    pub lexicon_size: usize,
}

/// Analyze a word against the lexicon's frequency table
///
/// Words outside the lexicon can still be scored; they never qualify as an
/// opener since the selector only draws from the lexicon.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - A letter has no frequency weight
pub fn analyze_word(
    word: &str,
    lexicon: &Lexicon,
    config: &SelectorConfig,
) -> Result<AnalysisResult, CommandError> {
    let word = Word::new(word)?;
    let score = lexicon.frequencies().score_word(&word)?;
    let in_lexicon = lexicon.contains_word(&word);
    let distinct_letters = word.has_distinct_letters();
    let opener = GuessSelector::new(*config).qualifies_as_opener(&word, score);

    let rank = 1 + lexicon
        .entries()
        .iter()
        .filter(|entry| entry.score > score)
        .count();

    Ok(AnalysisResult {
        word,
        score,
        threshold: config.opening_threshold,
        letters: word.letter_set(),
        distinct_letters,
        in_lexicon,
        qualifies_as_opener: in_lexicon && opener,
        rank,
        lexicon_size: lexicon.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn analyze_strong_opener() {
        let lexicon = Lexicon::embedded().unwrap();
        let result = analyze_word("irate", &lexicon, &SelectorConfig::default()).unwrap();

        assert_eq!(result.word.as_str(), "IRATE");
        assert!((result.score - 0.417_339).abs() < 1e-6);
        assert!(result.distinct_letters);
        assert!(result.in_lexicon);
        assert!(result.qualifies_as_opener);
        assert!(result.rank <= result.lexicon_size);
    }

    #[test]
    fn repeated_letters_never_qualify() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SelectorConfig {
            opening_threshold: 0.0,
            ..SelectorConfig::default()
        };
        let result = analyze_word("speed", &lexicon, &config).unwrap();

        assert!(!result.distinct_letters);
        assert!(!result.qualifies_as_opener);
        assert_eq!(result.letters.len(), 4);
    }

    #[test]
    fn unknown_word_is_scored_but_not_an_opener() {
        let lexicon = Lexicon::embedded().unwrap();
        let result = analyze_word("fjord", &lexicon, &SelectorConfig::default()).unwrap();

        assert!(!result.in_lexicon);
        assert!(!result.qualifies_as_opener);
        assert!(result.score > 0.0);
    }

    #[test]
    fn opener_flag_matches_selector() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SelectorConfig {
            opening_threshold: 0.4,
            ..SelectorConfig::default()
        };
        let selector = GuessSelector::new(config);

        for entry in lexicon.entries().iter().step_by(7) {
            let result = analyze_word(entry.word.as_str(), &lexicon, &config).unwrap();
            assert_eq!(
                result.qualifies_as_opener,
                selector.qualifies_as_opener(&entry.word, entry.score),
                "{}",
                entry.word
            );
        }
    }

    #[test]
    fn analyze_invalid_word() {
        let lexicon = Lexicon::embedded().unwrap();
        let result = analyze_word("zz", &lexicon, &SelectorConfig::default());
        assert!(matches!(
            result,
            Err(CommandError::Word(WordError::InvalidLength(2)))
        ));
    }

    #[test]
    fn top_scorer_ranks_first() {
        let lexicon = Lexicon::embedded().unwrap();
        let best = lexicon
            .entries()
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap();

        let result = analyze_word(best.word.as_str(), &lexicon, &SelectorConfig::default()).unwrap();
        assert_eq!(result.rank, 1);
    }
}
