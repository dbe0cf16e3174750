//! The dice of one turn.
//!
//! A distinct roll gives two dice; a double roll gives four dice of the
//! same value. The set is mutated in place while the turn is played and
//! its final state is read once by statistics and variant rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::die::{Die, DieStatus, MAX_DIE_VALUE};
use super::source::DiceSource;
use crate::core::GameError;

/// Dice for one turn: 2 dice, or 4 on a double.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: SmallVec<[Die; 4]>,
}

impl DiceSet {
    /// Roll two dice from `source`, expanding a double to four.
    pub fn roll(source: &mut dyn DiceSource) -> Result<Self, GameError> {
        let values = source.roll(2);
        match values.as_slice() {
            &[a, b] => Self::from_values(a, b),
            other => Err(GameError::ShortRoll {
                wanted: 2,
                got: other.len(),
            }),
        }
    }

    /// Build the set for a roll of `a` and `b`.
    pub fn from_values(a: u8, b: u8) -> Result<Self, GameError> {
        if a == b {
            return Self::double(a);
        }
        Ok(Self {
            dice: SmallVec::from_slice(&[Die::new(a)?, Die::new(b)?]),
        })
    }

    /// Four unused dice of `value`.
    pub fn double(value: u8) -> Result<Self, GameError> {
        let die = Die::new(value)?;
        Ok(Self {
            dice: SmallVec::from_slice(&[die; 4]),
        })
    }

    /// The next higher double, if there is one.
    ///
    /// Returns `None` for a non-double or a double six.
    #[must_use]
    pub fn next_double(&self) -> Option<Self> {
        if !self.is_double_dice() || self.value() >= MAX_DIE_VALUE {
            return None;
        }
        Self::double(self.value() + 1).ok()
    }

    /// Number of dice (2 or 4).
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Value of the first die; the rolled value of a double.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.dice[0].value()
    }

    /// The i-th die.
    pub fn get(&self, index: usize) -> Result<&Die, GameError> {
        self.dice.get(index).ok_or(GameError::DieIndexOutOfRange {
            index,
            len: self.dice.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    /// Both rolled dice show the same value.
    #[must_use]
    pub fn is_double_dice(&self) -> bool {
        self.dice.len() >= 2 && self.dice[0].value() == self.dice[1].value()
    }

    /// Every die was consumed by a move.
    #[must_use]
    pub fn all_used(&self) -> bool {
        self.dice.iter().all(Die::is_used)
    }

    #[must_use]
    pub fn used_count(&self) -> usize {
        self.dice.iter().filter(|d| d.is_used()).count()
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.dice.iter().filter(|d| d.is_blocked()).count()
    }

    /// No die is left to play: each one is Used or Blocked.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.dice.iter().any(Die::is_unused)
    }

    #[must_use]
    pub fn has_blocked(&self) -> bool {
        self.dice.iter().any(Die::is_blocked)
    }

    /// Values of the unused dice, in index order.
    pub fn unused_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.dice.iter().filter(|d| d.is_unused()).map(Die::value)
    }

    /// Index of the first unused die showing `value`.
    #[must_use]
    pub fn first_unused_with(&self, value: u8) -> Option<usize> {
        self.dice
            .iter()
            .position(|d| d.is_unused() && d.value() == value)
    }

    /// Mark the i-th die Used. Dice already settled keep their status.
    pub fn mark_used(&mut self, index: usize) -> Result<(), GameError> {
        self.settle(index, DieStatus::Used)
    }

    /// Mark the i-th die Blocked. Dice already settled keep their status.
    pub fn mark_blocked(&mut self, index: usize) -> Result<(), GameError> {
        self.settle(index, DieStatus::Blocked)
    }

    /// Block every die still unused. Returns how many were blocked.
    pub fn block_unused(&mut self) -> usize {
        let mut blocked = 0;
        for die in self.dice.iter_mut() {
            if die.settle(DieStatus::Blocked) {
                blocked += 1;
            }
        }
        blocked
    }

    /// Copy the Blocked marks of `plan` onto this set's unused dice.
    ///
    /// `plan` is an outcome of the legality search over this same set.
    pub fn adopt_blocked(&mut self, plan: &DiceSet) -> usize {
        let mut blocked = 0;
        for (die, planned) in self.dice.iter_mut().zip(plan.iter()) {
            if planned.is_blocked() && die.settle(DieStatus::Blocked) {
                blocked += 1;
            }
        }
        blocked
    }

    /// Copy with the dice in `used_mask` (bit i for die i) Used and every
    /// other unused die Blocked.
    #[must_use]
    pub(crate) fn with_plan(&self, used_mask: u8) -> DiceSet {
        let mut plan = self.clone();
        for (index, die) in plan.dice.iter_mut().enumerate() {
            let status = if used_mask & (1 << index) != 0 {
                DieStatus::Used
            } else {
                DieStatus::Blocked
            };
            die.settle(status);
        }
        plan
    }

    fn settle(&mut self, index: usize, status: DieStatus) -> Result<(), GameError> {
        let len = self.dice.len();
        let die = self
            .dice
            .get_mut(index)
            .ok_or(GameError::DieIndexOutOfRange { index, len })?;
        die.settle(status);
        Ok(())
    }
}

impl Index<usize> for DiceSet {
    type Output = Die;

    fn index(&self, index: usize) -> &Self::Output {
        &self.dice[index]
    }
}

impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let mark = match die.status() {
                DieStatus::Unused => "",
                DieStatus::Used => "*",
                DieStatus::Blocked => "x",
            };
            write!(f, "{}{}", die.value(), mark)?;
        }
        Ok(())
    }
}
