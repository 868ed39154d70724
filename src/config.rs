//! Game configuration
//!
//! Tunables shared by every command: selector thresholds, the guess budget
//! and an optional RNG seed for reproducible games.

use crate::error::ConfigError;
use crate::solver::{
    AutoSolver, DEFAULT_MAX_GUESSES, GuessSelector, MAX_GUESS_LIMIT, SelectorConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a run of the program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub selector: SelectorConfig,
    pub max_guesses: usize,
    /// Fixed seed; `None` draws one from the thread RNG
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings a user can supply
    ///
    /// # Errors
    /// Returns `ConfigError` if the guess budget is outside
    /// `1..=MAX_GUESS_LIMIT` or the threshold is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GUESS_LIMIT).contains(&self.max_guesses) {
            return Err(ConfigError::MaxGuesses {
                value: self.max_guesses,
                max: MAX_GUESS_LIMIT,
            });
        }
        if !self.selector.opening_threshold.is_finite() {
            return Err(ConfigError::Threshold(self.selector.opening_threshold));
        }
        Ok(())
    }

    /// RNG for a session: seeded if configured, otherwise random
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// RNG for the `index`-th of several independent games
    ///
    /// With a seed, each game gets its own deterministic stream, distinct
    /// from the one [`GameConfig::rng`] returns.
    #[must_use]
    pub fn rng_for(&self, index: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index).wrapping_add(1)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    #[must_use]
    pub const fn solver(&self) -> AutoSolver {
        AutoSolver::new(GuessSelector::new(self.selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.selector.retry_limit, 500);
        assert!((config.selector.opening_threshold - 0.375).abs() < f64::EPSILON);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn validate_bounds_guess_budget() {
        let with_budget = |max_guesses| GameConfig {
            max_guesses,
            ..GameConfig::default()
        };

        assert!(with_budget(1).validate().is_ok());
        assert!(with_budget(MAX_GUESS_LIMIT).validate().is_ok());
        for bad in [0, MAX_GUESS_LIMIT + 1, usize::MAX] {
            assert_eq!(
                with_budget(bad).validate(),
                Err(ConfigError::MaxGuesses {
                    value: bad,
                    max: MAX_GUESS_LIMIT
                })
            );
        }
    }

    #[test]
    fn validate_rejects_nan_threshold() {
        let mut config = GameConfig::default();
        config.selector.opening_threshold = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Threshold(_))));
    }

    #[test]
    fn seeded_rng_repeats() {
        let config = GameConfig::default().with_seed(17);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn per_game_streams_differ() {
        let config = GameConfig::default().with_seed(17);
        let a: u64 = config.rng_for(0).random();
        let b: u64 = config.rng_for(1).random();
        assert_ne!(a, b);
    }

    #[test]
    fn first_game_stream_differs_from_base() {
        let config = GameConfig::default().with_seed(17);
        let base: u64 = config.rng().random();
        let first: u64 = config.rng_for(0).random();
        assert_ne!(base, first);
    }
}
