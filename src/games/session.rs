//! Game session: wires a board, a variant and the external collaborators
//! together and plays whole turns, doubling boosts included.

use tracing::info;

use crate::board::Board;
use crate::command::CommandSource;
use crate::core::{GameConfig, GameError, PlayerId, TurnStatistics};
use crate::dice::{DiceChoice, DiceSet, DiceSource};
use crate::rules::{resolver, TurnEngine, VariantRules};

use super::Fevga;

/// A running game.
pub struct Session<B: Board> {
    config: GameConfig,
    board: B,
    variant: Box<dyn VariantRules>,
    dice_source: Box<dyn DiceSource>,
    commands: Box<dyn CommandSource>,
    statistics: TurnStatistics,
    dice: Option<DiceSet>,
}

/// Builder for creating a Session.
pub struct SessionBuilder<B: Board> {
    board: B,
    config: GameConfig,
    variant: Option<Box<dyn VariantRules>>,
    dice_source: Option<Box<dyn DiceSource>>,
    commands: Option<Box<dyn CommandSource>>,
}

impl<B: Board> SessionBuilder<B> {
    pub fn new(board: B) -> Self {
        Self {
            board,
            config: GameConfig::default(),
            variant: None,
            dice_source: None,
            commands: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn variant(mut self, variant: impl VariantRules + 'static) -> Self {
        self.variant = Some(Box::new(variant));
        self
    }

    /// Override the dice source built from the config.
    pub fn dice_source(mut self, source: impl DiceSource + 'static) -> Self {
        self.dice_source = Some(Box::new(source));
        self
    }

    pub fn commands(mut self, commands: impl CommandSource + 'static) -> Self {
        self.commands = Some(Box::new(commands));
        self
    }

    /// Build the session. Defaults: Fevga rules, dice from the config, and
    /// a command source that exits at once.
    pub fn build(self) -> Session<B> {
        let dice_source = self
            .dice_source
            .unwrap_or_else(|| self.config.dice_source());
        Session {
            board: self.board,
            variant: self.variant.unwrap_or_else(|| Box::new(Fevga)),
            dice_source,
            commands: self
                .commands
                .unwrap_or_else(|| Box::new(crate::command::ScriptedCommands::default())),
            statistics: TurnStatistics::new(),
            dice: None,
            config: self.config,
        }
    }
}

impl<B: Board> Session<B> {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    #[must_use]
    pub fn variant(&self) -> &dyn VariantRules {
        self.variant.as_ref()
    }

    #[must_use]
    pub fn statistics(&self) -> &TurnStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut TurnStatistics {
        &mut self.statistics
    }

    /// The dice of the latest turn, if any was rolled.
    #[must_use]
    pub fn dice(&self) -> Option<&DiceSet> {
        self.dice.as_ref()
    }

    /// Roll a fresh dice set and make it current.
    pub fn roll(&mut self) -> Result<&DiceSet, GameError> {
        let dice = DiceSet::roll(self.dice_source.as_mut())?;
        Ok(&*self.dice.insert(dice))
    }

    pub fn check_if_any_move_is_possible(&self, player: PlayerId, dice: &DiceSet) -> bool {
        resolver::check_if_any_move_is_possible(&self.board, player, dice)
    }

    pub fn find_playable_dice(&self, player: PlayerId, dice: &DiceSet) -> DiceChoice {
        resolver::find_playable_dice(&self.board, player, dice)
    }

    /// Ask the active variant whether `dice` earns a doubling boost.
    pub fn has_doubling_boost(&self, dice: &DiceSet) -> bool {
        self.variant.has_doubling_boost(&self.statistics, dice)
    }

    /// Play `player`'s turn: roll, play, record, and keep playing the next
    /// higher double for as long as a doubling boost is granted.
    ///
    /// Every played dice set counts one rotation. An exit leaves the
    /// unfinished set unrecorded and is returned as `GameError::Exit`.
    pub fn next_moves(&mut self, player: PlayerId) -> Result<bool, GameError> {
        let mut dice = DiceSet::roll(self.dice_source.as_mut())?;
        info!(%player, dice = %dice, variant = self.variant.name(), "rolled");

        let result = self.play_boosted(player, &mut dice);
        self.dice = Some(dice);
        result
    }

    fn play_boosted(&mut self, player: PlayerId, dice: &mut DiceSet) -> Result<bool, GameError> {
        loop {
            let finished =
                TurnEngine::new(&mut self.board, self.commands.as_mut(), player).run(dice)?;
            self.statistics.add_dice(dice);

            if !self.variant.has_doubling_boost(&self.statistics, dice) {
                return Ok(finished);
            }
            let Some(next) = dice.next_double() else {
                return Ok(finished);
            };
            if !self.commands.accept_doubling_boost(&next) {
                info!(%player, next = %next, "doubling boost declined");
                return Ok(finished);
            }

            self.statistics.add_boost();
            info!(
                %player,
                rotations = self.statistics.rotations(),
                value = next.value(),
                "doubling boost"
            );
            *dice = next;
        }
    }

    /// Snapshot of the statistics.
    pub fn checkpoint(&self) -> Result<Vec<u8>, GameError> {
        self.statistics.to_bytes()
    }

    /// Replace the statistics with a snapshot from [`Session::checkpoint`].
    pub fn restore_statistics(&mut self, bytes: &[u8]) -> Result<(), GameError> {
        self.statistics = TurnStatistics::from_bytes(bytes)?;
        Ok(())
    }
}
