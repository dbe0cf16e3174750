//! Engine error type.
//!
//! "No legal move" is not an error: the resolver reports it as a boolean.
//! `Exit` is a deliberate termination requested by a command source and
//! unwinds the whole game session through `?`.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the rules engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// A die slot beyond the set's length was requested.
    #[error("die index {index} out of range (len={len})")]
    DieIndexOutOfRange { index: usize, len: usize },

    /// A dice source produced a value outside 1..=6.
    #[error("invalid die value {0}")]
    InvalidDieValue(u8),

    /// A dice source returned the wrong number of values.
    #[error("dice source returned {got} values, wanted {wanted}")]
    ShortRoll { wanted: usize, got: usize },

    /// A board was set up with a checker off the 1..=24 track.
    #[error("invalid board position {0}")]
    InvalidPosition(u8),

    /// The board oracle rejected a move.
    #[error("{player} cannot move {distance} from point {from}")]
    IllegalMove {
        player: PlayerId,
        from: u8,
        distance: u8,
    },

    /// The move is legal on its own but leaves dice unplayed that the
    /// maximal play would use.
    #[error("{player} moving {distance} from point {from} leaves {allowed} dice playable, {required} required")]
    MustPlayMaximal {
        player: PlayerId,
        from: u8,
        distance: u8,
        required: usize,
        allowed: usize,
    },

    /// A command asked for a distance no unused die shows.
    #[error("no unused die shows {distance}")]
    NoDieForDistance { distance: u8 },

    /// The command source asked to leave the game.
    #[error("game exited by command source")]
    Exit,

    /// Checkpoint encoding or decoding failed.
    #[error("checkpoint: {0}")]
    Checkpoint(#[from] bincode::Error),
}

impl GameError {
    /// True for the deliberate termination signal.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        matches!(self, GameError::Exit)
    }
}
