//! Alternative outcomes of the legality search.
//!
//! Most rolls have one maximal play. When two maximal plays leave
//! different dice blocked (a 3 then a 5 versus the 5 alone), both are kept
//! and the acting player picks one.

use serde::{Deserialize, Serialize};

use super::set::DiceSet;

/// One or two mutually exclusive maximal outcomes for a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceChoice {
    /// A single maximal outcome.
    Single(DiceSet),
    /// Two outcomes that differ in which dice end Used or Blocked.
    Dual(DiceSet, DiceSet),
}

/// Which option of a [`DiceChoice`] to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceOption {
    #[default]
    First,
    Second,
}

impl DiceChoice {
    #[must_use]
    pub fn is_single_option(&self) -> bool {
        matches!(self, DiceChoice::Single(_))
    }

    /// The first (or only) outcome.
    #[must_use]
    pub fn option1(&self) -> &DiceSet {
        match self {
            DiceChoice::Single(dice) | DiceChoice::Dual(dice, _) => dice,
        }
    }

    /// The second outcome; the same as `option1` for a single choice.
    #[must_use]
    pub fn option2(&self) -> &DiceSet {
        match self {
            DiceChoice::Single(dice) | DiceChoice::Dual(_, dice) => dice,
        }
    }

    /// The outcome picked by `option`.
    #[must_use]
    pub fn get(&self, option: ChoiceOption) -> &DiceSet {
        match option {
            ChoiceOption::First => self.option1(),
            ChoiceOption::Second => self.option2(),
        }
    }

    /// Take the outcome picked by `option`.
    #[must_use]
    pub fn into_option(self, option: ChoiceOption) -> DiceSet {
        match (self, option) {
            (DiceChoice::Single(dice), _) => dice,
            (DiceChoice::Dual(first, _), ChoiceOption::First) => first,
            (DiceChoice::Dual(_, second), ChoiceOption::Second) => second,
        }
    }
}
