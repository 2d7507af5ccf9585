//! Core engine types: seats, RNG, configuration, errors.
//!
//! Nothing in here knows about card combinations or positions; those live in
//! `rules` and `round`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{LeaderPolicy, SlaveConfig, PLAYER_COUNT};
pub use error::GameError;
