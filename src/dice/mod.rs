//! Dice model: single dice, per-turn dice sets, alternative outcomes, and
//! the sources dice values are drawn from.

mod choice;
mod die;
mod set;
mod source;

pub use choice::{ChoiceOption, DiceChoice};
pub use die::{Die, DieStatus, MAX_DIE_VALUE};
pub use set::DiceSet;
pub use source::{DiceSource, ReplayDice};
