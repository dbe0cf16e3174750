//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two sides of a Fevga-family game.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a two-slot array, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players of a game.
///
/// Indices are 0-based internally: `PlayerId::ONE` is index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const ONE: PlayerId = PlayerId(0);
    /// The second player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both players in turn order.
    ///
    /// ```
    /// use fevga_rules::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use fevga_rules::core::{PlayerId, PlayerMap};
///
/// let mut borne_off: PlayerMap<u32> = PlayerMap::with_value(0);
/// borne_off[PlayerId::TWO] = 3;
/// assert_eq!(borne_off[PlayerId::ONE], 0);
/// assert_eq!(borne_off[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
