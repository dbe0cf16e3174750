//! Giul: Fevga with a doubling boost.
//!
//! From the fifth rotation on, a player who rolls a double and can play
//! all four dice goes on to play the next higher double, and so on up to
//! double six.

use crate::core::{GameConfig, TurnStatistics, DEFAULT_BOOST_MIN_ROTATIONS};
use crate::dice::{DiceSet, MAX_DIE_VALUE};
use crate::rules::VariantRules;

/// Giul rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Giul {
    min_rotations: u32,
}

impl Default for Giul {
    fn default() -> Self {
        Self {
            min_rotations: DEFAULT_BOOST_MIN_ROTATIONS,
        }
    }
}

impl Giul {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Giul with the boost threshold taken from `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            min_rotations: config.boost_min_rotations,
        }
    }

    /// Rotations required before a boost is granted.
    #[must_use]
    pub fn min_rotations(&self) -> u32 {
        self.min_rotations
    }
}

impl VariantRules for Giul {
    fn name(&self) -> &str {
        "Giul"
    }

    fn has_doubling_boost(&self, stats: &TurnStatistics, dice: &DiceSet) -> bool {
        if stats.rotations() < self.min_rotations {
            return false;
        }
        // There is no double seven.
        if !dice.is_double_dice() || dice.value() >= MAX_DIE_VALUE {
            return false;
        }
        !dice.has_blocked()
    }
}
