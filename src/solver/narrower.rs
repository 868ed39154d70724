//! Candidate narrowing
//!
//! Filters a candidate set down to the words consistent with a
//! [`FeedbackModel`]. Narrowing only ever removes words.

use super::FeedbackModel;
use crate::core::Word;
use crate::error::SolverError;
use crate::lexicon::Lexicon;
use log::debug;

/// Keep the candidates the feedback still allows
///
/// A word survives iff every letter is in its position's set and the word
/// contains every misplaced letter. Order is preserved, and narrowing twice
/// with the same model gives the same result as narrowing once.
///
/// # Errors
/// Returns `SolverError::ExhaustedCandidates` if nothing survives.
pub fn narrow(candidates: &[Word], model: &FeedbackModel) -> Result<Vec<Word>, SolverError> {
    let survivors: Vec<Word> = candidates
        .iter()
        .copied()
        .filter(|word| model.allows(word))
        .collect();

    if survivors.is_empty() {
        return Err(SolverError::ExhaustedCandidates);
    }

    Ok(survivors)
}

/// The live set of words a game has not yet ruled out
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Every lexicon word, in lexicon order
    #[must_use]
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self::new(lexicon.words().collect())
    }

    /// Narrow in place, returning the new size
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedCandidates` if no word survives; the set
    /// is left as it was.
    pub fn narrow(&mut self, model: &FeedbackModel) -> Result<usize, SolverError> {
        let before = self.words.len();
        self.words = narrow(&self.words, model)?;
        debug!("narrowed candidates {before} -> {}", self.words.len());
        Ok(self.words.len())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Mark};

    fn words(items: &[&str]) -> Vec<Word> {
        items.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn model_after(secret: &str, guesses: &[&str]) -> FeedbackModel {
        let secret = Word::new(secret).unwrap();
        let mut model = FeedbackModel::initial();
        for guess in guesses {
            let guess = Word::new(guess).unwrap();
            model.apply(&guess, &Evaluation::evaluate(&secret, &guess));
        }
        model
    }

    #[test]
    fn keeps_only_consistent_words() {
        let candidates = words(&["CRANE", "CRATE", "TRACE", "SPEED"]);
        let model = model_after("CRANE", &["CRATE"]);

        let result = narrow(&candidates, &model).unwrap();
        assert_eq!(result, words(&["CRANE"]));
    }

    #[test]
    fn secret_always_survives() {
        let candidates = words(&["CRANE", "SLATE", "IRATE", "GRATE", "STARE", "TRACE"]);
        let model = model_after("GRATE", &["CRANE", "SLATE"]);

        let result = narrow(&candidates, &model).unwrap();
        assert!(result.contains(&Word::new("GRATE").unwrap()));
        assert!(result.len() < candidates.len());
    }

    #[test]
    fn idempotent() {
        let candidates = words(&["CRANE", "SLATE", "IRATE", "GRATE", "STARE", "TRACE"]);
        let model = model_after("IRATE", &["TRACE"]);

        let once = narrow(&candidates, &model).unwrap();
        let twice = narrow(&once, &model).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unsatisfiable_model_is_exhausted() {
        let candidates = words(&["CRANE", "SLATE"]);
        let mut model = FeedbackModel::initial();
        model
            .update(&Word::new("ZZZZZ").unwrap(), &[Mark::Correct; 5])
            .unwrap();

        assert_eq!(
            narrow(&candidates, &model),
            Err(SolverError::ExhaustedCandidates)
        );
    }

    #[test]
    fn empty_input_is_exhausted() {
        assert_eq!(
            narrow(&[], &FeedbackModel::initial()),
            Err(SolverError::ExhaustedCandidates)
        );
    }

    #[test]
    fn candidate_set_unchanged_on_exhaustion() {
        let mut set = CandidateSet::new(words(&["CRANE", "SLATE"]));
        let mut model = FeedbackModel::initial();
        model
            .update(&Word::new("QQQQQ").unwrap(), &[Mark::Correct; 5])
            .unwrap();

        assert!(set.narrow(&model).is_err());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn candidate_set_narrows_in_place() {
        let mut set = CandidateSet::new(words(&["CRANE", "CRATE", "TRACE", "SPEED"]));
        let remaining = set.narrow(&model_after("CRANE", &["CRATE"])).unwrap();
        assert_eq!(remaining, 1);
        assert!(set.contains(&Word::new("CRANE").unwrap()));
    }
}
