//! Session configuration.
//!
//! A `GameConfig` picks the dice strategy (seeded random or a fixed
//! replay sequence) and tunes the Giul doubling boost.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::dice::{DiceSource, ReplayDice};

/// Default number of recorded rotations before Giul allows a doubling boost.
pub const DEFAULT_BOOST_MIN_ROTATIONS: u32 = 5;

/// Game session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the random dice source.
    pub seed: u64,

    /// Fixed dice values to replay instead of rolling.
    /// Takes precedence over `seed` when set.
    pub replay: Option<Vec<u8>>,

    /// Rotations required before Giul grants a doubling boost.
    pub boost_min_rotations: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            replay: None,
            boost_min_rotations: DEFAULT_BOOST_MIN_ROTATIONS,
        }
    }
}

impl GameConfig {
    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replay a fixed dice sequence.
    #[must_use]
    pub fn with_replay(mut self, values: impl Into<Vec<u8>>) -> Self {
        self.replay = Some(values.into());
        self
    }

    /// Set the rotation threshold for the doubling boost.
    #[must_use]
    pub fn with_boost_min_rotations(mut self, rotations: u32) -> Self {
        self.boost_min_rotations = rotations;
        self
    }

    /// Build the configured dice source.
    #[must_use]
    pub fn dice_source(&self) -> Box<dyn DiceSource> {
        match &self.replay {
            Some(values) => Box::new(ReplayDice::new(values.clone())),
            None => Box::new(GameRng::new(self.seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.replay, None);
        assert_eq!(config.boost_min_rotations, 5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_replay(vec![3, 4])
            .with_boost_min_rotations(2);

        assert_eq!(config.seed, 123);
        assert_eq!(config.replay, Some(vec![3, 4]));
        assert_eq!(config.boost_min_rotations, 2);
    }

    #[test]
    fn test_replay_source_wins_over_seed() {
        let config = GameConfig::default().with_replay(vec![2, 5]);
        let mut source = config.dice_source();
        assert_eq!(source.roll(2), vec![2, 5]);
        assert_eq!(source.roll(2), vec![2, 5]);
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let config = GameConfig::default().with_seed(9);
        let mut a = config.dice_source();
        let mut b = config.dice_source();
        assert_eq!(a.roll(2), b.roll(2));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_replay(vec![1, 1]);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
