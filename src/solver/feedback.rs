//! Accumulated letter-position feedback
//!
//! Tracks, per board position, which letters are still possible, plus the
//! letters known to be in the secret but not yet placed.

use crate::core::{Evaluation, LetterSet, Mark, WORD_LEN, Word};
use crate::error::SolverError;

/// Constraints gathered from every evaluated guess in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackModel {
    position_sets: [LetterSet; WORD_LEN],
    misplaced: LetterSet,
}

impl Default for FeedbackModel {
    fn default() -> Self {
        Self::initial()
    }
}

impl FeedbackModel {
    /// Every letter possible everywhere, nothing misplaced
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            position_sets: [LetterSet::ALPHABET; WORD_LEN],
            misplaced: LetterSet::EMPTY,
        }
    }

    /// Fold one guess's feedback into the model
    ///
    /// - `Correct` pins the position to that letter
    /// - `Present` removes the letter from that position and records it as
    ///   misplaced
    /// - `Absent` removes the letter from that position only; the same letter
    ///   may be correct or present elsewhere in the guess
    ///
    /// # Errors
    /// Returns `SolverError::Arity` if `marks` does not hold exactly one mark
    /// per letter. The model is unchanged in that case.
    pub fn update(&mut self, guess: &Word, marks: &[Mark]) -> Result<(), SolverError> {
        if marks.len() != WORD_LEN {
            return Err(SolverError::Arity {
                expected: WORD_LEN,
                actual: marks.len(),
            });
        }

        self.fold(guess, marks);
        Ok(())
    }

    /// Typed variant of [`update`](Self::update); an `Evaluation` always has
    /// the right length
    pub fn apply(&mut self, guess: &Word, evaluation: &Evaluation) {
        self.fold(guess, evaluation.marks());
    }

    fn fold(&mut self, guess: &Word, marks: &[Mark]) {
        for (i, (&letter, &mark)) in guess.letters().iter().zip(marks).enumerate() {
            let set = &mut self.position_sets[i];
            match mark {
                Mark::Correct => *set = LetterSet::single(letter),
                Mark::Present => {
                    set.remove(letter);
                    self.misplaced.insert(letter);
                }
                Mark::Absent => set.remove(letter),
            }
        }
    }

    /// Letters still possible at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn position_set(&self, position: usize) -> LetterSet {
        self.position_sets[position]
    }

    #[must_use]
    pub const fn position_sets(&self) -> &[LetterSet; WORD_LEN] {
        &self.position_sets
    }

    /// Letters known to be in the secret at an unconfirmed position
    #[must_use]
    pub const fn misplaced(&self) -> LetterSet {
        self.misplaced
    }

    /// Whether `word` is consistent with every constraint
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        word.letters()
            .iter()
            .zip(&self.position_sets)
            .all(|(&letter, set)| set.contains(letter))
            && self.misplaced.is_subset(word.letter_set())
    }
}
