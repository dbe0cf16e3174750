//! Minimal two-player board used to drive the engine.
//!
//! Each player counts points 1..=24 in their own direction of travel, and
//! the two start points sit opposite each other, so an opposing checker on
//! point `p` is seen twelve points further on. The lane rules:
//! - a move may only land on an empty point
//! - no checker may pass or land on a point held by the opponent
//! - checkers never leave the board
//!
//! Stacks are only possible as set up. Checker lists use `im::Vector` so
//! the legality search clones boards in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Board, Position, POINTS};
use crate::core::{GameError, PlayerId, PlayerMap};

/// Checkers per player in a full game.
pub const CHECKERS_PER_PLAYER: usize = 15;

/// Single-file lane board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneBoard {
    checkers: PlayerMap<Vector<Position>>,
}

impl LaneBoard {
    /// Place checkers for both players, each in their own numbering.
    ///
    /// Positions are not checked; see [`LaneBoard::try_new`].
    #[must_use]
    pub fn new(player_one: &[Position], player_two: &[Position]) -> Self {
        Self {
            checkers: PlayerMap::new(|player| {
                let positions = if player == PlayerId::ONE {
                    player_one
                } else {
                    player_two
                };
                positions.iter().copied().collect()
            }),
        }
    }

    /// Like [`LaneBoard::new`], rejecting positions outside 1..=24.
    pub fn try_new(player_one: &[Position], player_two: &[Position]) -> Result<Self, GameError> {
        let invalid = player_one
            .iter()
            .chain(player_two)
            .find(|&&p| !(1..=POINTS).contains(&p));
        match invalid {
            Some(&point) => Err(GameError::InvalidPosition(point)),
            None => Ok(Self::new(player_one, player_two)),
        }
    }

    /// Every checker stacked on its owner's start point.
    #[must_use]
    pub fn starting() -> Self {
        let start = [1; CHECKERS_PER_PLAYER];
        Self::new(&start, &start)
    }

    /// The number of `point` in the other player's numbering.
    #[must_use]
    pub fn mirror(point: Position) -> Position {
        let points = u16::from(POINTS);
        ((u16::from(point) + points / 2 + points - 1) % points + 1) as Position
    }

    fn occupied_by(&self, player: PlayerId, point: Position) -> bool {
        self.checkers[player].iter().any(|&p| p == point)
    }

    fn opponent_between(&self, player: PlayerId, from: Position, to: Position) -> bool {
        self.checkers[player.opponent()]
            .iter()
            .map(|&p| Self::mirror(p))
            .any(|p| p > from && p <= to)
    }
}

impl Board for LaneBoard {
    fn checkers(&self, player: PlayerId) -> Vec<Position> {
        self.checkers[player].iter().copied().collect()
    }

    fn can_move(&self, player: PlayerId, from: Position, distance: u8) -> bool {
        if distance == 0 || !self.occupied_by(player, from) {
            return false;
        }
        let to = u16::from(from) + u16::from(distance);
        if to > u16::from(POINTS) {
            return false;
        }
        let to = to as Position;
        !self.occupied_by(player, to) && !self.opponent_between(player, from, to)
    }

    fn apply_move(
        &mut self,
        player: PlayerId,
        from: Position,
        distance: u8,
    ) -> Result<(), GameError> {
        if !self.can_move(player, from, distance) {
            return Err(GameError::IllegalMove {
                player,
                from,
                distance,
            });
        }
        let checkers = &mut self.checkers[player];
        if let Some(index) = checkers.iter().position(|&p| p == from) {
            checkers.remove(index);
        }
        checkers.push_back(from + distance);
        Ok(())
    }
}
