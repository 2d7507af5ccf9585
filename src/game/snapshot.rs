//! Checkpoints of a running match.
//!
//! A `GameSnapshot` holds everything `GameState` owns, with the RNG reduced
//! to its O(1) `GameRngState`. Serialize it with serde (JSON for humans,
//! [`GameSnapshot::to_bytes`] for compact storage).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::public::{ActionRecord, Phase};
use crate::core::{GameError, GameRngState, PlayerMap, SlaveConfig};
use crate::round::{ExchangePlan, PlayerState, RoundState};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: SlaveConfig,
    pub rng: GameRngState,
    pub players: PlayerMap<PlayerState>,
    pub round: RoundState,
    pub phase: Phase,
    pub exchange: Option<ExchangePlan>,
    pub history: Vector<ActionRecord>,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// Decode bytes produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        bincode::deserialize(bytes).map_err(|e| GameError::Snapshot(e.to_string()))
    }
}
