//! Map identifiers, metadata and tile tables.

use serde::{Deserialize, Serialize};

/// Every map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapId {
    /// No environmental effects.
    #[default]
    None,
    AncientRuins,
    ArcaneLibrary,
    VolcanicRift,
    RoyalArena,
}

/// Slot of the Ancient Ruins relic.
pub const RELIC_INDEX: usize = 4;

/// Lava vents on the Volcanic Rift.
pub const LAVA_TILES: [usize; 2] = [1, 7];

/// Display metadata of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapDefinition {
    pub id: MapId,
    pub name: &'static str,
    pub description: &'static str,
}

/// Every map, in menu order.
pub const MAPS: [MapDefinition; 5] = [
    MapDefinition {
        id: MapId::None,
        name: "None",
        description: "No environmental effects - pure strategy.",
    },
    MapDefinition {
        id: MapId::AncientRuins,
        name: "Ancient Ruins",
        description: "Center relic: cards on the four adjacent tiles gain +1 to all four sides.",
    },
    MapDefinition {
        id: MapId::ArcaneLibrary,
        name: "Arcane Library",
        description: "All common cards gain +1 to all four sides.",
    },
    MapDefinition {
        id: MapId::VolcanicRift,
        name: "Volcanic Rift",
        description: "Cards on the glowing lava tiles lose 1 from all four sides.",
    },
    MapDefinition {
        id: MapId::RoyalArena,
        name: "Royal Arena",
        description: "The player controlling fewer cards gains +1 top and +1 bottom on all their cards.",
    },
];

/// Classification of a special tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Relic,
    Hazard,
}

/// A special tile on a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapTile {
    pub kind: TileKind,
    pub label: &'static str,
}

/// Direction of a per-card map effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapEffectKind {
    Buff,
    Debuff,
    Special,
}

/// Explanation of how the map is affecting one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapEffect {
    pub label: &'static str,
    pub description: &'static str,
    pub kind: MapEffectKind,
}

impl MapId {
    /// Every map id, in menu order.
    pub const ALL: [MapId; 5] = [
        MapId::None,
        MapId::AncientRuins,
        MapId::ArcaneLibrary,
        MapId::VolcanicRift,
        MapId::RoyalArena,
    ];

    /// Display metadata.
    #[must_use]
    pub fn definition(self) -> &'static MapDefinition {
        let position = Self::ALL.iter().position(|&id| id == self).unwrap_or(0);
        &MAPS[position]
    }

    /// Special tile at a slot, if any.
    #[must_use]
    pub fn tile(self, index: usize) -> Option<MapTile> {
        match self {
            MapId::AncientRuins if index == RELIC_INDEX => Some(MapTile {
                kind: TileKind::Relic,
                label: "Ancient Relic",
            }),
            MapId::VolcanicRift if LAVA_TILES.contains(&index) => Some(MapTile {
                kind: TileKind::Hazard,
                label: "Lava Vent",
            }),
            _ => None,
        }
    }

    /// Explanation shown for a card this map is modifying.
    #[must_use]
    pub fn effect(self) -> Option<MapEffect> {
        let (label, description, kind) = match self {
            MapId::None => return None,
            MapId::AncientRuins => (
                "Relic Aura",
                "Environment: This card is next to the ancient relic and gains +1 to all four sides.",
                MapEffectKind::Buff,
            ),
            MapId::ArcaneLibrary => (
                "Arcane Shelves",
                "Environment: Common cards gain +1 to all four sides in the Arcane Library.",
                MapEffectKind::Buff,
            ),
            MapId::VolcanicRift => (
                "Lava Vent",
                "Environment: Standing on a lava tile gives this card -1 to all four sides.",
                MapEffectKind::Debuff,
            ),
            MapId::RoyalArena => (
                "Crowd Favor",
                "Environment: While your side controls fewer cards, this card gains +1 top and +1 bottom.",
                MapEffectKind::Buff,
            ),
        };
        Some(MapEffect {
            label,
            description,
            kind,
        })
    }
}

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition().name)
    }
}
