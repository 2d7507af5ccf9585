//! The 52-card deck: construction, seeded shuffle and deal.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameError, GameRng};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards once each, in ascending card order.
    #[must_use]
    pub fn new() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Shuffle with a fresh stream keyed only by `seed`.
    pub fn shuffle(&mut self, seed: u64) {
        self.shuffle_with(&mut GameRng::new(seed));
    }

    /// Shuffle drawing from an existing stream.
    pub fn shuffle_with(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Split the deck into `players` equal hands, each sorted ascending.
    ///
    /// Consecutive blocks of the current order go to seats 0, 1, ...
    pub fn deal(&self, players: usize) -> Result<Vec<Vec<Card>>, GameError> {
        if players == 0 || self.cards.len() % players != 0 {
            return Err(GameError::DeckSizeMismatch {
                deck_size: self.cards.len(),
                players,
            });
        }

        let per_hand = self.cards.len() / players;
        Ok(self
            .cards
            .chunks(per_hand)
            .map(|chunk| {
                let mut hand = chunk.to_vec();
                hand.sort_unstable();
                hand
            })
            .collect())
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
