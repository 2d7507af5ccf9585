//! Match orchestration.
//!
//! ## Key Types
//!
//! - `GameState`: owns hands, the round in progress, positions and the RNG
//! - `PublicState`: what one seat may observe
//! - `StepResult`: outcome flags of one accepted action
//! - `GameSnapshot`: serializable checkpoint

pub mod public;
pub mod snapshot;
pub mod state;

pub use public::{ActionRecord, Phase, PublicState, StepResult};
pub use snapshot::GameSnapshot;
pub use state::GameState;
