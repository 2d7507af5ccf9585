//! Card model and deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: ordered enums, 2 is the top rank, Spades the top suit
//! - `Card`: immutable (rank, suit) value with a total order and a dense
//!   `0..=51` index
//! - `Deck`: the 52 cards, seeded shuffle, even deal

pub mod card;
pub mod deck;

pub use card::{parse_cards, Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
