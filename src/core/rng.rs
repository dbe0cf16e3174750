//! Deterministic random number generation for dice rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore for checkpoints
//!
//! ```
//! use fevga_rules::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let first = rng.roll_die();
//! assert!((1..=6).contains(&first));
//!
//! // Same seed, same rolls
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used as the live dice source.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Roll one six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
