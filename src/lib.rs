//! # rust-triad
//!
//! Rules engine and AI for a two-sided tactical card battler on a 3x3 grid.
//!
//! ## Design Principles
//!
//! 1. **One Rules Implementation**: Real placements, hover previews and AI
//!    simulations all run through the same on-reveal and capture code.
//!
//! 2. **Derived, Never Stored**: Ongoing abilities and map effects are
//!    recomputed from the board on every read; only on-reveal effects
//!    change a card.
//!
//! 3. **Deterministic**: Every random decision goes through a seeded,
//!    forkable `GameRng`, so a seed replays a match exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands and decks are `im::Vector`, so
//!   cloning a state for simulation is cheap.
//!
//! - **Tagged Ability Dispatch**: A closed `AbilityId` enum maps to exactly
//!   one handler function through an immutable catalog.
//!
//! ## Modules
//!
//! - `core`: Sides, ids, RNG, stats, board, configuration, state
//! - `cards`: Characters, catalog, card instances, deck building
//! - `abilities`: Ability catalog, handlers and resolution
//! - `maps`: Map definitions and map modifiers
//! - `rules`: Stat aggregation, captures, outcome, `RulesEngine` trait
//! - `game`: Turn engine and match session
//! - `ai`: Move policies and difficulty selection

pub mod core;
pub mod cards;
pub mod abilities;
pub mod maps;
pub mod rules;
pub mod game;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    InstanceId, InstanceIds,
    GameRng, GameRngState,
    CardStats, Direction, StatModifier,
    Board, BOARD_SLOTS, GRID_SIZE,
    Move, LastMove,
    MatchConfig, ModifierMap, GameState,
};

pub use crate::cards::{
    Card, Character, CharacterId, Rarity,
    CardCatalog, CatalogError, DeckBuilder,
};

pub use crate::abilities::{
    AbilityId, AbilityTrigger, AbilityDefinition, AbilityCatalog, AbilityResolver,
};

pub use crate::maps::{MapId, MapDefinition, MapEffect, MapEffectKind, TileKind};

pub use crate::rules::{
    RulesEngine, Resolution, MatchOutcome, Score,
    CaptureResolver, Captures,
    ModifierAggregator, ModifierEntry, ModifierSource,
};

pub use crate::game::{Engine, Match, PendingMove, PlacementError, RewardSink, NoRewards};

pub use crate::ai::{
    Difficulty, MoveSelector, MovePolicy,
    RandomPolicy, GreedyPolicy, LookaheadPolicy,
};
