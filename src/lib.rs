//! # slave-engine
//!
//! A deterministic rule engine for the four-player shedding card game Slave
//! (also known as President), built to drive reinforcement-learning
//! self-play.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and same action sequence give the same
//!    hands, finish order and positions, bit for bit.
//!
//! 2. **Validate, then mutate**: Every rejected action returns a
//!    `GameError` and leaves the state exactly as it was.
//!
//! 3. **No hidden leaks**: `PublicState` carries the viewer's own hand and
//!    only card counts for everyone else.
//!
//! ## Architecture
//!
//! - **Synchronous state machine**: Every call computes eagerly and returns.
//!   One `GameState` per match, single writer; parallel rollouts build
//!   independent states.
//!
//! - **Persistent history**: Accepted actions are kept in an `im::Vector`, so
//!   cloning a match for search is cheap.
//!
//! - **Caller-owned policy**: Rewards, action encoding and the King/Queen
//!   exchange choices belong to the caller. The engine reports positions and
//!   enumerates legal plays.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Ranks, suits, cards, the deck
//! - `rules`: Combination classifier, comparator, legal plays
//! - `round`: Trick engine, positions and demotion, the exchange
//! - `game`: Match state machine and public views

pub mod cards;
pub mod core;
pub mod game;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameRngState, LeaderPolicy, PlayerId, PlayerMap, SlaveConfig,
    PLAYER_COUNT,
};

pub use crate::cards::{parse_cards, Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::rules::{beats, classify, legal_plays, Play, PlayType, Precedence};

pub use crate::round::{determine_positions, ExchangePlan, Position, RoundState};

pub use crate::game::{ActionRecord, GameSnapshot, GameState, Phase, PublicState, StepResult};
