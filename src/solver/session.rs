//! A single game
//!
//! A `Session` owns everything one game mutates: the feedback model, the
//! candidate set and the guess history. The lexicon is only borrowed for the
//! duration of each call, so words can be added between guesses.

use super::{CandidateSet, FeedbackModel, GuessSelector};
use crate::core::{Evaluation, Mark, Word};
use crate::error::{GuessError, SolverError};
use crate::lexicon::Lexicon;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Largest guess budget the CLI accepts
pub const MAX_GUESS_LIMIT: usize = 100;

/// One evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
    /// Candidates left after this guess, or `None` if narrowing ran dry
    pub candidates_after: Option<usize>,
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Solved { guesses: usize },
    /// Guess budget spent without finding the secret
    Lost,
    /// The auto-solver could not produce a consistent guess
    NoSolution(SolverError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// State of one game against a fixed secret
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    max_guesses: usize,
    feedback: FeedbackModel,
    candidates: CandidateSet,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl Session {
    /// Start a game; every lexicon word begins as a candidate
    #[must_use]
    pub fn new(lexicon: &Lexicon, secret: Word, max_guesses: usize) -> Self {
        Self {
            secret,
            max_guesses,
            feedback: FeedbackModel::initial(),
            candidates: CandidateSet::from_lexicon(lexicon),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game with a secret drawn uniformly from the lexicon
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` if the lexicon is empty.
    pub fn random<R: Rng + ?Sized>(
        lexicon: &Lexicon,
        max_guesses: usize,
        rng: &mut R,
    ) -> Result<Self, SolverError> {
        let secret = lexicon
            .entries()
            .choose(rng)
            .map(|entry| entry.word)
            .ok_or(SolverError::EmptyCandidates)?;
        debug!("secret word chosen: {secret}");
        Ok(Self::new(lexicon, secret, max_guesses))
    }

    /// Submit a player's guess
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the game has finished
    /// - `GuessError::InvalidWord` if the text is not five letters
    /// - `GuessError::NotInLexicon` if the word is unknown
    pub fn submit(&mut self, lexicon: &Lexicon, text: &str) -> Result<GuessRecord, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let word = Word::new(text.trim())?;
        if !lexicon.contains_word(&word) {
            return Err(GuessError::NotInLexicon(word.to_string()));
        }

        let (record, _) = self.play(word);
        Ok(record)
    }

    /// Evaluate a guess and fold it into the game state
    ///
    /// The narrowing result is returned alongside the record so the
    /// auto-solver can stop on exhaustion.
    pub(crate) fn play(&mut self, word: Word) -> (GuessRecord, Result<usize, SolverError>) {
        let evaluation = Evaluation::evaluate(&self.secret, &word);
        self.feedback.apply(&word, &evaluation);
        let narrowed = self.candidates.narrow(&self.feedback);

        let record = GuessRecord {
            word,
            evaluation,
            candidates_after: narrowed.as_ref().ok().copied(),
        };
        self.history.push(record);
        debug!(
            "guess {} of {}: {word} {evaluation}",
            self.history.len(),
            self.max_guesses
        );

        if evaluation.is_solved() {
            self.status = GameStatus::Finished(Outcome::Solved {
                guesses: self.history.len(),
            });
        } else if self.history.len() >= self.max_guesses {
            self.status = GameStatus::Finished(Outcome::Lost);
        }

        (record, narrowed)
    }

    pub(crate) fn abandon(&mut self, error: SolverError) {
        debug!("auto-solve stopped: {error}");
        self.status = GameStatus::Finished(Outcome::NoSolution(error));
    }

    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn feedback(&self) -> &FeedbackModel {
        &self.feedback
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> &GameStatus {
        &self.status
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        match &self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished(outcome) => Some(outcome),
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// Best mark seen for each letter A–Z, for keyboard coloring
    #[must_use]
    pub fn keyboard(&self) -> [Option<Mark>; 26] {
        let mut keys = [None; 26];
        for record in &self.history {
            for (&letter, &mark) in record.word.letters().iter().zip(record.evaluation.marks()) {
                let key = &mut keys[usize::from(letter - b'A')];
                *key = (*key).max(Some(mark));
            }
        }
        keys
    }
}

/// Plays a session to the end using a [`GuessSelector`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoSolver {
    selector: GuessSelector,
}

impl AutoSolver {
    #[must_use]
    pub const fn new(selector: GuessSelector) -> Self {
        Self { selector }
    }

    #[must_use]
    pub const fn selector(&self) -> &GuessSelector {
        &self.selector
    }

    /// Pick the guess the solver would make next
    ///
    /// # Errors
    /// Propagates selector errors (`NoQualifyingWord`, `EmptyCandidates`).
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        session: &Session,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Result<Word, SolverError> {
        if session.history().is_empty() {
            self.selector.select_opening_guess(lexicon, rng)
        } else {
            self.selector.select_next_guess(
                session.candidates().words(),
                session.feedback().misplaced(),
                rng,
            )
        }
    }

    /// Make one guess; returns `None` once the game is over
    pub fn step<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Option<GuessRecord> {
        if session.is_over() {
            return None;
        }

        let guess = match self.next_guess(session, lexicon, rng) {
            Ok(word) => word,
            Err(error) => {
                session.abandon(error);
                return None;
            }
        };

        let (record, narrowed) = session.play(guess);
        if let Err(error) = narrowed
            && !session.is_over()
        {
            session.abandon(error);
        }
        Some(record)
    }

    /// Play until solved, out of guesses, or out of candidates
    pub fn solve<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Outcome {
        while self.step(session, lexicon, rng).is_some() {}

        session
            .outcome()
            .cloned()
            .unwrap_or(Outcome::NoSolution(SolverError::EmptyCandidates))
    }
}
