//! Turn engine: plays one dice set for one player.
//!
//! ## States
//!
//! `AwaitingMove -> MoveApplied -> (AwaitingMove | Finished)`
//!
//! Each step re-runs the resolver on the dice still unused, blocks what
//! can no longer be played, and asks the command source for the next
//! move. A move is tried on a copy of the board first and refused when the
//! remaining dice could no longer complete the maximal play. The turn
//! finishes once no die is left unused.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::resolver;
use crate::board::{Board, Move};
use crate::command::{Command, CommandSource};
use crate::core::{GameError, PlayerId};
use crate::dice::{ChoiceOption, DiceSet};

/// Where a turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the command source.
    AwaitingMove,
    /// A move was just applied.
    MoveApplied,
    /// No die left to play.
    Finished,
}

/// Runs one turn against a board and a command source.
///
/// The engine mutates the dice set it is handed and nothing else besides
/// the board. Recording the finished turn is the caller's job.
pub struct TurnEngine<'a, B: Board, C: CommandSource + ?Sized> {
    board: &'a mut B,
    commands: &'a mut C,
    player: PlayerId,
    phase: TurnPhase,
    moves: Vec<Move>,
}

impl<'a, B: Board, C: CommandSource + ?Sized> TurnEngine<'a, B, C> {
    pub fn new(board: &'a mut B, commands: &'a mut C, player: PlayerId) -> Self {
        Self {
            board,
            commands,
            player,
            phase: TurnPhase::AwaitingMove,
            moves: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Moves applied so far this turn.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Play until the dice are exhausted.
    ///
    /// Returns `Ok(true)` once the turn is over. `GameError::Exit` and
    /// illegal moves abort the turn immediately.
    pub fn run(&mut self, dice: &mut DiceSet) -> Result<bool, GameError> {
        while self.step(dice)? != TurnPhase::Finished {}
        info!(
            player = %self.player,
            dice = %dice,
            moves = self.moves.len(),
            "turn finished"
        );
        Ok(true)
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, dice: &mut DiceSet) -> Result<TurnPhase, GameError> {
        if self.phase == TurnPhase::Finished {
            return Ok(TurnPhase::Finished);
        }
        self.phase = TurnPhase::AwaitingMove;

        if dice.is_exhausted() {
            return Ok(self.finish());
        }
        if !resolver::check_if_any_move_is_possible(&*self.board, self.player, dice) {
            let blocked = dice.block_unused();
            debug!(player = %self.player, blocked, "no move possible");
            return Ok(self.finish());
        }

        let choice = resolver::find_playable_dice(&*self.board, self.player, dice);
        let option = if choice.is_single_option() {
            ChoiceOption::First
        } else {
            self.commands.choose_dice(&choice)
        };
        let plan = choice.get(option);
        let playable = plan.used_count().saturating_sub(dice.used_count());
        dice.adopt_blocked(plan);
        if dice.is_exhausted() {
            return Ok(self.finish());
        }

        let mv = match self.commands.get_command() {
            Command::Move(mv) => mv,
            Command::Exit => {
                info!(player = %self.player, "command source exited");
                return Err(GameError::Exit);
            }
        };
        let index = dice
            .first_unused_with(mv.distance)
            .ok_or(GameError::NoDieForDistance {
                distance: mv.distance,
            })?;
        let mut trial = self.board.clone();
        trial.apply_move(self.player, mv.from, mv.distance)?;
        let mut rest = dice.clone();
        rest.mark_used(index)?;

        // The rest of the dice must still reach the maximal play.
        let required = playable.saturating_sub(1);
        let allowed = resolver::playable_count(&trial, self.player, &rest);
        if allowed < required {
            return Err(GameError::MustPlayMaximal {
                player: self.player,
                from: mv.from,
                distance: mv.distance,
                required,
                allowed,
            });
        }

        *self.board = trial;
        *dice = rest;
        self.moves.push(mv);

        debug!(player = %self.player, mv = %mv, dice = %dice, "move applied");
        self.phase = TurnPhase::MoveApplied;
        Ok(self.phase)
    }

    fn finish(&mut self) -> TurnPhase {
        self.phase = TurnPhase::Finished;
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LaneBoard;
    use crate::command::ScriptedCommands;
    use crate::dice::DieStatus;

    #[test]
    fn test_plays_all_dice() {
        let mut board = LaneBoard::new(&[2, 10], &[20]);
        let mut commands = ScriptedCommands::moves([Move::new(10, 5), Move::new(2, 3)]);
        let mut dice = DiceSet::from_values(3, 5).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        assert!(engine.run(&mut dice).unwrap());
        assert_eq!(engine.moves().len(), 2);
        assert_eq!(engine.phase(), TurnPhase::Finished);

        assert!(dice.all_used());
        let mut checkers = board.checkers(PlayerId::ONE);
        checkers.sort_unstable();
        assert_eq!(checkers, vec![5, 15]);
    }

    #[test]
    fn test_step_transitions() {
        let mut board = LaneBoard::new(&[2], &[20]);
        let mut commands = ScriptedCommands::moves([Move::new(2, 1), Move::new(3, 2)]);
        let mut dice = DiceSet::from_values(1, 2).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        assert_eq!(engine.phase(), TurnPhase::AwaitingMove);
        assert_eq!(engine.step(&mut dice).unwrap(), TurnPhase::MoveApplied);
        assert_eq!(engine.step(&mut dice).unwrap(), TurnPhase::MoveApplied);
        assert_eq!(engine.step(&mut dice).unwrap(), TurnPhase::Finished);
        assert_eq!(engine.step(&mut dice).unwrap(), TurnPhase::Finished);
    }

    #[test]
    fn test_no_move_blocks_all_without_asking() {
        let mut board = LaneBoard::new(&[17, 17, 17], &[1, 6]);
        let mut commands = ScriptedCommands::default();
        let mut dice = DiceSet::double(1).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        assert!(engine.run(&mut dice).unwrap());
        assert!(engine.moves().is_empty());
        assert!(dice.iter().all(|d| d.status() == DieStatus::Blocked));
    }

    #[test]
    fn test_unplayable_rest_is_blocked() {
        let mut board = LaneBoard::new(&[17, 17, 17], &[1, 7]);
        let mut commands = ScriptedCommands::moves([Move::new(17, 1)]);
        let mut dice = DiceSet::double(1).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        assert!(engine.run(&mut dice).unwrap());
        assert_eq!(dice.used_count(), 1);
        assert_eq!(dice.blocked_count(), 3);
        assert_eq!(commands.remaining(), 0);
    }

    #[test]
    fn test_exit_propagates() {
        let mut board = LaneBoard::new(&[2], &[20]);
        let mut commands = ScriptedCommands::default();
        let mut dice = DiceSet::from_values(1, 2).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        let err = engine.run(&mut dice).unwrap_err();
        assert!(err.is_exit());
        assert_eq!(dice.used_count(), 0);
    }

    #[test]
    fn test_illegal_move_is_fatal() {
        let mut board = LaneBoard::new(&[2, 3], &[20]);
        let mut commands = ScriptedCommands::moves([Move::new(2, 1)]);
        let mut dice = DiceSet::from_values(1, 2).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        let err = engine.run(&mut dice).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { from: 2, distance: 1, .. }));
        assert_eq!(dice.used_count(), 0);
    }

    #[test]
    fn test_distance_without_die_is_fatal() {
        let mut board = LaneBoard::new(&[2], &[20]);
        let mut commands = ScriptedCommands::moves([Move::new(2, 4)]);
        let mut dice = DiceSet::from_values(1, 2).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        let err = engine.run(&mut dice).unwrap_err();
        assert!(matches!(err, GameError::NoDieForDistance { distance: 4 }));
    }

    #[test]
    fn test_dual_choice_asks_command_source() {
        // Only one of 3 and 5 can be played; the script picks the 3.
        let mut board = LaneBoard::new(&[10], &[4]);
        let mut commands =
            ScriptedCommands::moves([Move::new(10, 3)]).with_choices([ChoiceOption::Second]);
        let mut dice = DiceSet::from_values(3, 5).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        assert!(engine.run(&mut dice).unwrap());
        assert!(dice[0].is_used());
        assert!(dice[1].is_blocked());
    }

    #[test]
    fn test_blocked_die_cannot_be_played() {
        // The default choice plays the 5 and blocks the 3.
        let mut board = LaneBoard::new(&[10], &[4]);
        let mut commands = ScriptedCommands::moves([Move::new(10, 3)]);
        let mut dice = DiceSet::from_values(3, 5).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        let err = engine.run(&mut dice).unwrap_err();
        assert!(matches!(err, GameError::NoDieForDistance { distance: 3 }));
        assert!(dice[0].is_blocked());
    }

    #[test]
    fn test_move_stranding_a_die_is_refused() {
        // 22/23 leaves the 2 nowhere to go; 22/24 then 21/22 plays both.
        let mut board = LaneBoard::new(&[21, 22], &[1]);
        let mut commands = ScriptedCommands::moves([Move::new(22, 1), Move::new(21, 2)]);
        let mut dice = DiceSet::from_values(1, 2).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        let err = engine.run(&mut dice).unwrap_err();
        assert!(matches!(
            err,
            GameError::MustPlayMaximal {
                from: 22,
                distance: 1,
                required: 1,
                allowed: 0,
                ..
            }
        ));
        assert!(engine.moves().is_empty());
        assert_eq!(dice.used_count() + dice.blocked_count(), 0);

        let mut checkers = board.checkers(PlayerId::ONE);
        checkers.sort_unstable();
        assert_eq!(checkers, vec![21, 22]);
    }

    #[test]
    fn test_maximal_order_is_accepted() {
        let mut board = LaneBoard::new(&[21, 22], &[1]);
        let mut commands = ScriptedCommands::moves([Move::new(22, 2), Move::new(21, 1)]);
        let mut dice = DiceSet::from_values(1, 2).unwrap();

        let mut engine = TurnEngine::new(&mut board, &mut commands, PlayerId::ONE);
        assert!(engine.run(&mut dice).unwrap());
        assert!(dice.all_used());

        let mut checkers = board.checkers(PlayerId::ONE);
        checkers.sort_unstable();
        assert_eq!(checkers, vec![22, 24]);
    }
}
