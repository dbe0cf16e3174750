//! Where dice values come from.
//!
//! Live games roll through [`GameRng`]; tests and replays pre-load a fixed
//! sequence into [`ReplayDice`]. Both sit behind the same trait and are
//! injected at session setup.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// A source of die values in 1..=6.
pub trait DiceSource {
    /// Produce `count` die values.
    fn roll(&mut self, count: usize) -> Vec<u8>;
}

impl DiceSource for GameRng {
    fn roll(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.roll_die()).collect()
    }
}

/// Replays a pre-loaded value sequence, starting over when it runs out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayDice {
    values: Vec<u8>,
    cursor: usize,
}

impl ReplayDice {
    /// Load a sequence. An empty sequence replays sixes.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Replace the sequence and rewind.
    pub fn load(&mut self, values: impl Into<Vec<u8>>) {
        self.values = values.into();
        self.cursor = 0;
    }

    fn next_value(&mut self) -> u8 {
        if self.values.is_empty() {
            return 6;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl DiceSource for ReplayDice {
    fn roll(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.next_value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_in_order() {
        let mut dice = ReplayDice::new(vec![1, 2, 3, 4]);
        assert_eq!(dice.roll(2), vec![1, 2]);
        assert_eq!(dice.roll(2), vec![3, 4]);
    }

    #[test]
    fn test_replay_cycles() {
        let mut dice = ReplayDice::new(vec![1, 1]);
        for _ in 0..5 {
            assert_eq!(dice.roll(2), vec![1, 1]);
        }
    }

    #[test]
    fn test_load_rewinds() {
        let mut dice = ReplayDice::new(vec![5, 3]);
        dice.roll(1);
        dice.load(vec![2, 2]);
        assert_eq!(dice.roll(2), vec![2, 2]);
    }

    #[test]
    fn test_rng_source() {
        let mut rng = GameRng::new(3);
        let values = rng.roll(10);
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn test_sources_are_interchangeable() {
        let mut sources: Vec<Box<dyn DiceSource>> =
            vec![Box::new(GameRng::new(1)), Box::new(ReplayDice::new(vec![4]))];
        for source in sources.iter_mut() {
            assert_eq!(source.roll(2).len(), 2);
        }
    }
}
