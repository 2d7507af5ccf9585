//! Card exchange between rounds.
//!
//! After the deal of a round after the first:
//! - the Slave hands their two highest cards to the King, and the King hands
//!   back any two cards of their choice;
//! - the Commoner hands their highest card to the Queen, and the Queen hands
//!   back any one card of their choice.
//!
//! The forced halves are computed from the hands (see [`ExchangePlan`]); the
//! chosen halves come from the caller. Validation of both chosen halves
//! happens before any card moves, so the exchange applies completely or not
//! at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::position::Position;
use super::state::PlayerState;
use crate::cards::Card;
use crate::core::{GameError, PlayerId, PlayerMap};

/// Cards swapped between King and Slave.
pub const KING_SLAVE_CARDS: usize = 2;

/// Cards swapped between Queen and Commoner.
pub const QUEEN_COMMONER_CARDS: usize = 1;

/// Who exchanges with whom, and the forced transfers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangePlan {
    pub king: PlayerId,
    pub queen: PlayerId,
    pub commoner: PlayerId,
    pub slave: PlayerId,
    /// The Slave's two highest cards, highest first.
    pub slave_gives: [Card; KING_SLAVE_CARDS],
    /// The Commoner's highest card.
    pub commoner_gives: [Card; QUEEN_COMMONER_CARDS],
}

/// The `N` highest cards of `hand`, highest first.
fn highest<const N: usize>(hand: &[Card]) -> Option<[Card; N]> {
    let mut sorted = hand.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.get(..N)?.try_into().ok()
}

impl ExchangePlan {
    /// Work out the exchange from assigned positions and freshly dealt hands.
    ///
    /// Fails with `RoundNotReadyForExchange` when positions are not all
    /// assigned yet (round 1) or a hand is too small.
    pub fn compute(players: &PlayerMap<PlayerState>) -> Result<Self, GameError> {
        let seat = |pos: Position| {
            players
                .find(|s| s.position == Some(pos))
                .ok_or(GameError::RoundNotReadyForExchange)
        };
        let king = seat(Position::King)?;
        let queen = seat(Position::Queen)?;
        let commoner = seat(Position::Commoner)?;
        let slave = seat(Position::Slave)?;

        let slave_gives = highest::<KING_SLAVE_CARDS>(&players[slave].hand)
            .ok_or(GameError::RoundNotReadyForExchange)?;
        let commoner_gives = highest::<QUEEN_COMMONER_CARDS>(&players[commoner].hand)
            .ok_or(GameError::RoundNotReadyForExchange)?;

        Ok(Self {
            king,
            queen,
            commoner,
            slave,
            slave_gives,
            commoner_gives,
        })
    }

    /// Check that `chosen` is exactly `expected` distinct cards from `giver`'s hand.
    fn check_choice(
        players: &PlayerMap<PlayerState>,
        giver: PlayerId,
        chosen: &[Card],
        expected: usize,
    ) -> Result<(), GameError> {
        if chosen.len() != expected {
            return Err(GameError::WrongExchangeCount {
                expected,
                got: chosen.len(),
            });
        }
        let mut sorted = chosen.to_vec();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(GameError::illegal(format!(
                "{giver} names {} twice in the exchange",
                pair[0]
            )));
        }
        if let Some(card) = players[giver].missing(chosen) {
            return Err(GameError::CardNotInHand {
                player: giver,
                card: card.to_string(),
            });
        }
        Ok(())
    }

    /// Validate both chosen halves without moving anything.
    pub fn validate(
        &self,
        players: &PlayerMap<PlayerState>,
        king_gives: &[Card],
        queen_gives: &[Card],
    ) -> Result<(), GameError> {
        Self::check_choice(players, self.king, king_gives, KING_SLAVE_CARDS)?;
        Self::check_choice(players, self.queen, queen_gives, QUEEN_COMMONER_CARDS)
    }

    /// Perform both exchanges.
    ///
    /// The King and Queen choose from the hands they were dealt, before the
    /// forced cards arrive.
    pub fn apply(
        &self,
        players: &mut PlayerMap<PlayerState>,
        king_gives: &[Card],
        queen_gives: &[Card],
    ) -> Result<(), GameError> {
        self.validate(players, king_gives, queen_gives)?;

        transfer(players, self.slave, self.king, &self.slave_gives);
        transfer(players, self.king, self.slave, king_gives);
        transfer(players, self.commoner, self.queen, &self.commoner_gives);
        transfer(players, self.queen, self.commoner, queen_gives);

        debug!(
            king = %self.king,
            slave = %self.slave,
            queen = %self.queen,
            commoner = %self.commoner,
            "exchange applied"
        );
        Ok(())
    }
}

fn transfer(players: &mut PlayerMap<PlayerState>, from: PlayerId, to: PlayerId, cards: &[Card]) {
    players[from].remove_cards(cards);
    players[to].add_cards(cards);
}
