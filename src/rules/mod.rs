//! Combination rules: classification, precedence, legal-play enumeration.
//!
//! Pure functions over cards; no game state lives here.

pub mod combination;
pub mod legal;

pub use combination::{beats, classify, precedence, Parity, Play, PlayType, Precedence};
pub use legal::{combinations, legal_plays};
