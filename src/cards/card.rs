//! Card value type and its total order.
//!
//! Ranks run `3 < 4 < ... < K < A < 2`; the 2 is the top card. Suits break
//! ties `Clubs < Diamonds < Hearts < Spades`. `Card` derives `Ord` with rank
//! as the first field, so the derived order is exactly the game order.
//!
//! Every card has a dense index `0..=51`: `(rank - 3) * 4 + suit`, so the
//! 3 of Clubs is 0 and the 2 of Spades is 51, and index order equals card
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::GameError;

/// Card rank. Discriminants are the game value (2 maps to 15).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
    Two = 15,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Game value, 3..=15.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its game value (3..=15).
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value.checked_sub(3)?)).copied()
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    // Field order matters: derived Ord compares rank, then suit.
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// The lowest card in the deck; its holder leads round 1.
    pub const LOWEST: Card = Card::new(Rank::Three, Suit::Clubs);

    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Dense index in `0..=51`.
    #[must_use]
    pub const fn encode(self) -> u8 {
        (self.rank as u8 - 3) * 4 + self.suit as u8
    }

    /// Inverse of [`Card::encode`].
    pub fn decode(index: u8) -> Result<Card, GameError> {
        if index > 51 {
            return Err(GameError::InvalidCardIndex(index));
        }
        let rank = Rank::ALL[usize::from(index / 4)];
        let suit = Suit::ALL[usize::from(index % 4)];
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses `"3C"`, `"TD"` or `"10D"`, `"QH"`, `"2S"` (case-insensitive).
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let err = || GameError::ParseCard(s.to_string());

        let mut chars = upper.chars();
        let suit_ch = chars.next_back().ok_or_else(err)?;
        let rank = match chars.as_str() {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            _ => return Err(err()),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };
        Ok(Card::new(rank, suit))
    }
}

/// Parse whitespace-separated card tokens, e.g. `"3C 3D 10H"`.
pub fn parse_cards(tokens: &str) -> Result<Vec<Card>, GameError> {
    tokens.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_beats_suit() {
        let low_spade = Card::new(Rank::Four, Suit::Spades);
        let high_club = Card::new(Rank::Five, Suit::Clubs);
        assert!(high_club > low_spade);
    }

    #[test]
    fn test_two_is_highest_rank() {
        let two = Card::new(Rank::Two, Suit::Clubs);
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert!(two > ace);
        assert_eq!(Rank::Two.value(), 15);
    }

    #[test]
    fn test_suit_order_within_rank() {
        let c = Card::new(Rank::Nine, Suit::Clubs);
        let d = Card::new(Rank::Nine, Suit::Diamonds);
        let h = Card::new(Rank::Nine, Suit::Hearts);
        let s = Card::new(Rank::Nine, Suit::Spades);
        assert!(s > h && h > d && d > c);
    }

    #[test]
    fn test_specific_encodings() {
        assert_eq!(Card::LOWEST.encode(), 0);
        assert_eq!(Card::new(Rank::Three, Suit::Spades).encode(), 3);
        assert_eq!(Card::new(Rank::Four, Suit::Clubs).encode(), 4);
        assert_eq!(Card::new(Rank::Two, Suit::Spades).encode(), 51);
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(Card::decode(52), Err(GameError::InvalidCardIndex(52)));
        assert_eq!(Card::decode(255), Err(GameError::InvalidCardIndex(255)));
    }

    #[test]
    fn test_rank_from_value() {
        assert_eq!(Rank::from_value(3), Some(Rank::Three));
        assert_eq!(Rank::from_value(15), Some(Rank::Two));
        assert_eq!(Rank::from_value(2), None);
        assert_eq!(Rank::from_value(16), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Two, Suit::Spades).to_string(), "2♠");
        assert_eq!(Card::LOWEST.to_string(), "3♣");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3C".parse::<Card>(), Ok(Card::LOWEST));
        assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("TD".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("2S".parse::<Card>(), Ok(Card::new(Rank::Two, Suit::Spades)));
        assert!("1S".parse::<Card>().is_err());
        assert!("3X".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn test_parse_cards() {
        let cards = parse_cards("3C 3D KS").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::new(Rank::King, Suit::Spades));
        assert!(parse_cards("3C ZZ").is_err());
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
