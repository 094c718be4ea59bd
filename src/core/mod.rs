//! Core types: RNG, configuration, errors.
//!
//! Everything else in the crate is configured through `SceneConfig` and
//! reports failures through `SceneError`.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::{MinuteRollover, SceneConfig, MAX_CELLS, PLAYER_NAME_KEY};
pub use error::{LeaderboardError, Result, SceneError};
