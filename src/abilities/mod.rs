//! Card abilities: ids, definitions, handlers and resolution.
//!
//! ## Key Types
//!
//! - `AbilityId`: Closed set of every ability, each with a fixed trigger
//! - `AbilityDefinition`: Name, rules text and exactly one handler
//! - `AbilityCatalog`: Immutable id-to-definition table
//! - `AbilityResolver`: Runs on-reveal handlers and collects ongoing deltas

pub mod catalog;
pub mod context;
pub mod definition;
pub mod ongoing;
pub mod resolver;
pub mod reveal;

pub use catalog::AbilityCatalog;
pub use context::{Contribution, OngoingContext, RevealContext, RevealEffects};
pub use definition::{
    AbilityDefinition, AbilityHandler, AbilityId, AbilityTrigger, OngoingHandler, RevealHandler,
};
pub use resolver::{AbilityResolver, OngoingSource, RevealOutcome};
