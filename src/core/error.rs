//! Error kinds surfaced by the engine.
//!
//! Every error is detected synchronously before any state is touched, so a
//! caller receiving one of these can keep using the same `GameState`.

use thiserror::Error;

use super::PlayerId;

/// Everything that can go wrong when talking to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The card set is not a single-rank combination of 1-4 distinct cards.
    #[error("invalid combination: {0}")]
    InvalidCombination(String),

    /// Well-formed combination that may not be played right now.
    #[error("illegal action: {0}")]
    IllegalAction(String),

    #[error("not {player}'s turn (current: {current:?})")]
    NotPlayersTurn {
        player: PlayerId,
        current: Option<PlayerId>,
    },

    /// A seat id beyond the table's player count.
    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("card {card} not in hand of {player}")]
    CardNotInHand { player: PlayerId, card: String },

    #[error("wrong exchange count: expected {expected}, got {got}")]
    WrongExchangeCount { expected: usize, got: usize },

    /// `apply_exchange` outside of the exchange phase.
    #[error("round not ready for exchange")]
    RoundNotReadyForExchange,

    #[error("cannot deal {deck_size} cards evenly to {players} players")]
    DeckSizeMismatch { deck_size: usize, players: usize },

    #[error("unsupported player count {0}: positions need exactly 4 seats")]
    UnsupportedPlayerCount(usize),

    #[error("card index {0} out of range 0..=51")]
    InvalidCardIndex(u8),

    #[error("cannot parse card: {0:?}")]
    ParseCard(String),

    /// The round has closed; `start_next_round` must be called first.
    #[error("round closed")]
    RoundClosed,

    /// Cards cannot be played until the exchange is applied.
    #[error("exchange pending")]
    ExchangePending,

    /// A snapshot could not be decoded or is not a consistent game.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

impl GameError {
    /// Shorthand for an [`GameError::IllegalAction`] with a message.
    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        GameError::IllegalAction(msg.into())
    }

    /// Shorthand for an [`GameError::InvalidCombination`] with a message.
    pub(crate) fn invalid_combination(msg: impl Into<String>) -> Self {
        GameError::InvalidCombination(msg.into())
    }

    /// True for the errors that report misconfiguration rather than a bad move.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::DeckSizeMismatch { .. } | GameError::UnsupportedPlayerCount(_)
        )
    }
}
