//! Word solving command
//!
//! Auto-solves a given or random secret and returns the solution path.

use crate::config::GameConfig;
use crate::core::{Evaluation, Word};
use crate::error::{CommandError, SolverError};
use crate::lexicon::Lexicon;
use crate::solver::{Outcome, Session};
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub word: Word,
    pub evaluation: Evaluation,
    pub candidates_before: usize,
    /// `None` when no candidate survived this guess
    pub candidates_after: Option<usize>,
}

/// Auto-solve `target`, or a random lexicon word when `target` is `None`
///
/// A target outside the lexicon is allowed; the solver will usually run out
/// of candidates and report `Outcome::NoSolution`.
///
/// # Errors
///
/// Returns an error if the target is not five ASCII letters, or if no
/// target is given and the lexicon is empty.
pub fn solve_word<R: Rng + ?Sized>(
    config: &GameConfig,
    lexicon: &Lexicon,
    target: Option<&str>,
    rng: &mut R,
) -> Result<SolveResult, CommandError> {
    let target = match target {
        Some(text) => Word::new(text)?,
        None => lexicon
            .entries()
            .choose(rng)
            .map(|entry| entry.word)
            .ok_or(SolverError::EmptyCandidates)?,
    };
    if !lexicon.contains_word(&target) {
        warn!("{target} is not in the word list; the solver cannot guess it");
    }

    let solver = config.solver();
    let mut session = Session::new(lexicon, target, config.max_guesses);
    let mut guesses = Vec::new();

    loop {
        let candidates_before = session.candidates().len();
        let Some(record) = solver.step(&mut session, lexicon, rng) else {
            break;
        };
        guesses.push(GuessStep {
            word: record.word,
            evaluation: record.evaluation,
            candidates_before,
            candidates_after: record.candidates_after,
        });
    }

    let outcome = session.outcome().cloned().unwrap_or(Outcome::Lost);
    Ok(SolveResult {
        target,
        outcome,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use crate::lexicon::FrequencyTable;
    use crate::wordlists::MemorySource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_lexicon() -> Lexicon {
        Lexicon::build(
            MemorySource::from_slice(&["CRANE", "CRATE", "TRACE", "SLATE", "IRATE", "GRATE"]),
            FrequencyTable::embedded().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = GameConfig {
            max_guesses: 20,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(31);

        let result = solve_word(&config, &lexicon, Some("crane"), &mut rng).unwrap();

        assert!(result.success(), "{:?}", result.outcome);
        assert_eq!(result.guesses.last().unwrap().word.as_str(), "CRANE");
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let lexicon = small_lexicon();
        let mut rng = StdRng::seed_from_u64(6);

        let result = solve_word(&GameConfig::default(), &lexicon, Some("GRATE"), &mut rng).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            let after = step.candidates_after.unwrap();
            assert!(after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let lexicon = small_lexicon();
        let mut rng = StdRng::seed_from_u64(6);

        let result = solve_word(&GameConfig::default(), &lexicon, Some("abc"), &mut rng);
        assert!(matches!(
            result,
            Err(CommandError::Word(WordError::InvalidLength(3)))
        ));
    }

    #[test]
    fn solve_unknown_target_reports_no_solution() {
        let lexicon = small_lexicon();
        let mut rng = StdRng::seed_from_u64(6);

        let result = solve_word(&GameConfig::default(), &lexicon, Some("FUZZY"), &mut rng).unwrap();
        assert_eq!(
            result.outcome,
            Outcome::NoSolution(SolverError::ExhaustedCandidates)
        );
        assert_eq!(result.guesses.last().unwrap().candidates_after, None);
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = GameConfig {
            max_guesses: 1,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);

        let result = solve_word(&config, &lexicon, Some("QUEEN"), &mut rng).unwrap();

        // QUEEN repeats a letter, so it can never be the opener
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.outcome, Outcome::Lost);
    }

    #[test]
    fn solve_random_target_is_from_lexicon() {
        let lexicon = small_lexicon();
        let mut rng = StdRng::seed_from_u64(12);

        let result = solve_word(&GameConfig::default(), &lexicon, None, &mut rng).unwrap();
        assert!(lexicon.contains_word(&result.target));
    }
}
