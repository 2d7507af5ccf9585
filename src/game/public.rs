//! What the outside world sees: public snapshots, step results, history.
//!
//! ## PublicState
//!
//! Observable information for one viewer:
//! - The viewer's own hand (never anybody else's)
//! - Card counts of every seat
//! - Cards played this round and the current table
//! - Positions, round number, active players, whose turn it is
//!
//! Encoding any of this into tensors or action ids is left to the caller.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::round::Position;
use crate::rules::Play;

/// Where the match is between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A round is being played.
    Play,
    /// The round closed; positions are final. Waiting for the next deal.
    RoundOver,
    /// Next round dealt, waiting for `apply_exchange`.
    Exchange,
}

/// Read-only view of the game for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Whose view this is.
    pub viewer: PlayerId,

    /// The viewer's hand, sorted ascending.
    pub hand: Vec<Card>,

    /// Cards held by each seat (public knowledge).
    pub hand_sizes: PlayerMap<usize>,

    /// Cards played so far this round, in play order.
    pub played_cards: Vec<Card>,

    /// Current table: who set it and with what.
    pub last_play: Option<(PlayerId, Play)>,

    /// Position held by each seat. All `None` during round 1.
    pub positions: PlayerMap<Option<Position>>,

    /// Starts at 1.
    pub round_number: u32,

    pub active_players: Vec<PlayerId>,

    /// Whose turn it is. `None` between rounds.
    pub current_player: Option<PlayerId>,

    /// Players out so far this round, first out first.
    pub finish_order: Vec<PlayerId>,

    pub phase: Phase,

    /// Seed of the match, for replay.
    pub seed: u64,
}

impl PublicState {
    /// Is it the viewer's turn?
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.current_player == Some(self.viewer)
    }

    /// Cards held by `player`.
    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.hand_sizes[player]
    }
}

/// Outcome of a successful `step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// The acting player's view after the action.
    pub state: PublicState,

    /// The table was cleared.
    pub trick_closed: bool,

    /// The acting player emptied their hand.
    pub player_finished: bool,

    /// The finish order is complete; see `finish_positions`.
    pub round_closed: bool,

    /// Positions for the next round, demotion applied. Set when the round closes.
    pub finish_positions: Option<PlayerMap<Position>>,
}

/// One accepted action, for replay and training data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,

    pub play: Play,

    /// Round the action was taken in.
    pub round: u32,

    /// Position in the match-wide action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, play: Play, round: u32, sequence: u32) -> Self {
        Self {
            player,
            play,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::rules::classify;

    fn sample() -> PublicState {
        PublicState {
            viewer: PlayerId::new(1),
            hand: parse_cards("3C 9D").unwrap(),
            hand_sizes: PlayerMap::from_vec(vec![13, 2, 13, 12]),
            played_cards: parse_cards("4S").unwrap(),
            last_play: Some((PlayerId::new(3), classify(&parse_cards("4S").unwrap()).unwrap())),
            positions: PlayerMap::with_value(4, None),
            round_number: 1,
            active_players: PlayerId::all(4).collect(),
            current_player: Some(PlayerId::new(1)),
            finish_order: Vec::new(),
            phase: Phase::Play,
            seed: 7,
        }
    }

    #[test]
    fn test_accessors() {
        let state = sample();
        assert!(state.is_my_turn());
        assert_eq!(state.hand_size(PlayerId::new(3)), 12);
    }

    #[test]
    fn test_public_state_serialization() {
        let state = sample();
        let json = serde_json::to_string(&state).unwrap();
        let back: PublicState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(2), Play::pass(), 3, 41);
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
