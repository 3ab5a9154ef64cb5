//! Rules: stat aggregation, captures, the win condition and the
//! `RulesEngine` trait.
//!
//! Everything here is a pure function of a board (plus the active map and
//! the ability catalog). The turn engine and the AI both build on it, so
//! there is exactly one implementation of how a placement plays out.

pub mod capture;
pub mod engine;
pub mod modifiers;
pub mod outcome;

pub use capture::{captures_with, CaptureResolver, Captures};
pub use engine::{Resolution, RulesEngine};
pub use modifiers::{effective_with, ModifierAggregator, ModifierEntry, ModifierSource};
pub use outcome::{decide, evaluate_outcome, score, MatchOutcome, Score};
