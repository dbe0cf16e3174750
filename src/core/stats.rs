//! Turn statistics shared across a game.
//!
//! Every finished dice set is fed into `TurnStatistics::add_dice`, which
//! counts one rotation. Variant rules read the counters; nothing but the
//! session writes them.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::dice::{DiceSet, DieStatus};

/// Running statistics for a whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStatistics {
    rotations: u32,

    /// Double rolls recorded (boosted doubles included).
    pub doubles: u32,

    /// Dice that ended a turn Blocked.
    pub blocked_dice: u32,

    /// Doubling boosts granted.
    pub boosts: u32,

    /// Dice recorded per face value, index 0 for a one.
    pub face_counts: [u32; 6],
}

impl TurnStatistics {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed rotations so far.
    #[must_use]
    pub fn rotations(&self) -> u32 {
        self.rotations
    }

    /// Record a finished dice set. Counts exactly one rotation.
    pub fn add_dice(&mut self, dice: &DiceSet) {
        self.rotations += 1;
        if dice.is_double_dice() {
            self.doubles += 1;
        }
        for die in dice.iter() {
            self.face_counts[(die.value() - 1) as usize] += 1;
            if die.status() == DieStatus::Blocked {
                self.blocked_dice += 1;
            }
        }
    }

    /// Record a granted doubling boost.
    pub fn add_boost(&mut self) {
        self.boosts += 1;
    }

    /// Encode for a checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a checkpoint produced by [`TurnStatistics::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
