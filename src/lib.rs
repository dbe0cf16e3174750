//! # fevga-rules
//!
//! Rules engine for the Fevga family of backgammon games.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: The resolver and turn engine never branch
//!    on the variant. Variants plug in through `VariantRules`.
//!
//! 2. **Board Behind a Trait**: Legality of single moves belongs to the
//!    `Board`. The engine only decides which dice remain playable.
//!
//! 3. **Cheap Trial Boards**: The resolver explores move orders on cloned
//!    boards, so boards keep their checkers in `im-rs` vectors.
//!
//! ## Modules
//!
//! - `core`: Players, errors, RNG, configuration, turn statistics
//! - `dice`: Dice, dice sets, dice choices and dice sources
//! - `board`: The `Board` trait and the reference `LaneBoard`
//! - `rules`: Move legality resolver, turn engine, variant hooks
//! - `command`: Command sources that drive a turn
//! - `games`: Fevga, Giul and the game session

pub mod core;
pub mod dice;
pub mod board;
pub mod rules;
pub mod command;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, PlayerId, PlayerMap, TurnStatistics,
};

pub use crate::dice::{ChoiceOption, DiceChoice, DiceSet, DiceSource, Die, DieStatus, ReplayDice};

pub use crate::board::{Board, LaneBoard, Move, Position};

pub use crate::rules::{TurnEngine, TurnPhase, VariantRules};

pub use crate::command::{Command, CommandSource, ScriptedCommands};

pub use crate::games::{Fevga, Giul, Session, SessionBuilder};
