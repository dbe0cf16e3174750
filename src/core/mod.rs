//! Core engine types: players, RNG, configuration, statistics, errors.
//!
//! These building blocks are shared by every variant. Variants configure
//! them via `GameConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod stats;

pub use config::{GameConfig, DEFAULT_BOOST_MIN_ROTATIONS};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use stats::TurnStatistics;
