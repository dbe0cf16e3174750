//! Rules shared by every variant.
//!
//! - `resolver`: which dice of a roll can still be played
//! - `turn`: the per-turn state machine
//! - `variant`: hooks a variant plugs into the engine
//!
//! The engine calls into `VariantRules` but never interprets
//! variant-specific concepts directly.

pub mod resolver;
pub mod turn;
pub mod variant;

pub use resolver::{check_if_any_move_is_possible, find_playable_dice, playable_count};
pub use turn::{TurnEngine, TurnPhase};
pub use variant::VariantRules;
