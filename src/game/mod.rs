//! Turn engine and match session.
//!
//! `Engine` is the pure state machine: it takes a `GameState` and a
//! placement and returns the next state. `Match` wraps one live state,
//! schedules AI moves with cancellation and pays credits when the match
//! ends.

pub mod engine;
pub mod error;
pub mod session;

pub use engine::Engine;
pub use error::PlacementError;
pub use session::{Match, NoRewards, PendingMove, RewardSink};
