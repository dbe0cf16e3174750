//! Command sources: whoever decides the moves.
//!
//! Humans, AIs and network peers all sit behind `CommandSource`. The
//! engine blocks on `get_command` and has no timeout of its own.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::Move;
use crate::dice::{ChoiceOption, DiceChoice, DiceSet};

/// What a command source asks the engine to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Play one die.
    Move(Move),
    /// Leave the game.
    Exit,
}

/// Supplies moves and decisions for the acting player.
pub trait CommandSource {
    /// Next command for the current turn.
    fn get_command(&mut self) -> Command;

    /// Pick one outcome when a roll admits two maximal plays.
    fn choose_dice(&mut self, _choice: &DiceChoice) -> ChoiceOption {
        ChoiceOption::First
    }

    /// Accept the escalated double offered by a doubling boost.
    fn accept_doubling_boost(&mut self, _next: &DiceSet) -> bool {
        true
    }
}

/// Replays a fixed list of commands, then exits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedCommands {
    commands: VecDeque<Command>,
    choices: VecDeque<ChoiceOption>,
    decline_boosts: bool,
}

impl ScriptedCommands {
    /// Script the given moves.
    pub fn moves(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            commands: moves.into_iter().map(Command::Move).collect(),
            ..Self::default()
        }
    }

    /// Script the answers to dice choices, in order.
    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.choices = choices.into_iter().collect();
        self
    }

    /// Turn down every doubling boost.
    #[must_use]
    pub fn declining_boosts(mut self) -> Self {
        self.decline_boosts = true;
        self
    }

    /// Append a command.
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Commands not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for ScriptedCommands {
    fn get_command(&mut self) -> Command {
        self.commands.pop_front().unwrap_or(Command::Exit)
    }

    fn choose_dice(&mut self, _choice: &DiceChoice) -> ChoiceOption {
        self.choices.pop_front().unwrap_or_default()
    }

    fn accept_doubling_boost(&mut self, _next: &DiceSet) -> bool {
        !self.decline_boosts
    }
}
