//! Round lifecycle: tricks, finish order, positions and the exchange.
//!
//! ## Key Types
//!
//! - `RoundState` / `PlayerState`: owned state the engines mutate
//! - `apply_play`: the trick engine's transition function
//! - `determine_positions`: finish order to King..Slave, with demotion
//! - `ExchangePlan`: the between-round card exchange

pub mod exchange;
pub mod position;
pub mod state;
pub mod trick;

pub use exchange::{ExchangePlan, KING_SLAVE_CARDS, QUEEN_COMMONER_CARDS};
pub use position::{demoted_king, determine_positions, Position};
pub use state::{PlayerState, RoundState};
pub use trick::{apply_play, TrickEvent};
