//! Match configuration.
//!
//! `SlaveConfig` is validated once, when the `GameState` is built. Anything
//! wrong here is a configuration error and surfaces immediately instead of
//! at the first deal.

use serde::{Deserialize, Serialize};

use super::GameError;
use crate::cards::DECK_SIZE;

/// Seats at the table. Positions (King..Slave) are defined for exactly four.
pub const PLAYER_COUNT: usize = 4;

/// Who leads the first trick of a round after the first.
///
/// Round 1 is always led by the holder of the 3 of Clubs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaderPolicy {
    /// The player who holds the Slave position this round.
    #[default]
    PreviousSlave,
    /// The player who holds the King position this round.
    PreviousKing,
    /// Whoever holds the 3 of Clubs once the exchange is done.
    LowestCardHolder,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaveConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Starting-leader rule for rounds after the first.
    pub leader_policy: LeaderPolicy,

    /// Seed used by `reset(None)`. With no seed at all, one is drawn from
    /// entropy and reported in the public state.
    pub default_seed: Option<u64>,
}

impl Default for SlaveConfig {
    fn default() -> Self {
        Self {
            player_count: PLAYER_COUNT,
            leader_policy: LeaderPolicy::default(),
            default_seed: None,
        }
    }
}

impl SlaveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_leader_policy(mut self, policy: LeaderPolicy) -> Self {
        self.leader_policy = policy;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Check the configuration can actually be played.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_count == 0 || DECK_SIZE % self.player_count != 0 {
            return Err(GameError::DeckSizeMismatch {
                deck_size: DECK_SIZE,
                players: self.player_count,
            });
        }
        if self.player_count != PLAYER_COUNT {
            return Err(GameError::UnsupportedPlayerCount(self.player_count));
        }
        Ok(())
    }
}
