//! Board oracle.
//!
//! The rules engine never interprets board topology. It asks a `Board`
//! whether a checker may advance and tells it to apply moves. Boards must
//! be cheap to clone: the legality search plays hypothetical moves on
//! copies.

mod lane;

pub use lane::LaneBoard;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// A point index in the moving player's direction of travel (1..=24).
pub type Position = u8;

/// Number of points on a board.
pub const POINTS: u8 = 24;

/// Advance the checker on `from` by `distance` points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub distance: u8,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, distance: u8) -> Self {
        Self { from, distance }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.from.saturating_add(self.distance))
    }
}

/// Single-move legality and application.
///
/// ## Implementation Notes
///
/// - `can_move` must be pure and deterministic
/// - `apply_move` must reject anything `can_move` rejects
pub trait Board: Clone {
    /// Positions of `player`'s checkers still on the board.
    fn checkers(&self, player: PlayerId) -> Vec<Position>;

    /// Can the checker of `player` on `from` advance `distance` points?
    fn can_move(&self, player: PlayerId, from: Position, distance: u8) -> bool;

    /// Advance a checker, failing with `GameError::IllegalMove`.
    fn apply_move(&mut self, player: PlayerId, from: Position, distance: u8)
        -> Result<(), GameError>;

    /// Distinct positions from which `player` can move `distance`.
    fn movable_from(&self, player: PlayerId, distance: u8) -> Vec<Position> {
        let mut positions = self.checkers(player);
        positions.sort_unstable();
        positions.dedup();
        positions.retain(|&from| self.can_move(player, from, distance));
        positions
    }
}
