//! Maps: environmental stat modifiers.
//!
//! A map is an optional rule layer that adds per-slot deltas on top of
//! card stats and ongoing abilities. Each map may also mark special tiles
//! (a relic, hazards) for presentation.

pub mod definition;
pub mod rules;

pub use definition::{
    MapDefinition, MapEffect, MapEffectKind, MapId, MapTile, TileKind, LAVA_TILES, MAPS,
    RELIC_INDEX,
};
pub use rules::{map_effect_for, map_modifiers};
