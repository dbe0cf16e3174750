//! A single die and its per-turn status.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Highest face of a die.
pub const MAX_DIE_VALUE: u8 = 6;

/// Status of a die within one turn.
///
/// Transitions only `Unused -> Used` or `Unused -> Blocked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieStatus {
    /// Not played yet.
    #[default]
    Unused,
    /// Consumed by a move.
    Used,
    /// Proven unplayable for the rest of the turn.
    Blocked,
}

/// A rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    value: u8,
    status: DieStatus,
}

impl Die {
    /// Create an unused die. Fails for values outside 1..=6.
    pub fn new(value: u8) -> Result<Self, GameError> {
        if !(1..=MAX_DIE_VALUE).contains(&value) {
            return Err(GameError::InvalidDieValue(value));
        }
        Ok(Self {
            value,
            status: DieStatus::Unused,
        })
    }

    /// Rolled value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> DieStatus {
        self.status
    }

    #[must_use]
    pub fn is_unused(&self) -> bool {
        self.status == DieStatus::Unused
    }

    #[must_use]
    pub fn is_used(&self) -> bool {
        self.status == DieStatus::Used
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == DieStatus::Blocked
    }

    /// Move an unused die to `status`. Settled dice keep their status.
    ///
    /// Returns whether the die changed.
    pub(crate) fn settle(&mut self, status: DieStatus) -> bool {
        if self.is_unused() && status != DieStatus::Unused {
            self.status = status;
            true
        } else {
            false
        }
    }
}
