//! Card instances - runtime card state.
//!
//! `Card` is one physical card in a match. It carries its own mutable
//! `stats` (the baseline fed into the modifier aggregator; on-reveal
//! abilities may change it permanently) and an optional `base_stats`
//! snapshot taken at deck-build time for before/after display.
//!
//! Ongoing abilities and map rules never write into a card; their deltas
//! are merged at read time.

use serde::{Deserialize, Serialize};

use super::definition::{Character, CharacterId, Rarity};
use crate::abilities::{AbilityId, AbilityTrigger};
use crate::core::{CardStats, InstanceId, Side};

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance ID (distinct from the character id).
    pub instance_id: InstanceId,

    /// Catalog character this card was built from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<CharacterId>,

    /// Display name.
    pub name: String,

    /// Art reference. Opaque to the engine.
    #[serde(default)]
    pub image_url: String,

    /// Side currently controlling the card.
    pub owner: Side,

    pub rarity: Rarity,

    /// Current stats; the input to the modifier aggregator.
    pub stats: CardStats,

    /// Snapshot from deck-build time. Display only; never used for captures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_stats: Option<CardStats>,

    /// Ability, removed by silence effects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<AbilityId>,
}

impl Card {
    /// Create a card with no catalog link, ability or base snapshot.
    #[must_use]
    pub fn new(
        instance_id: InstanceId,
        name: impl Into<String>,
        owner: Side,
        rarity: Rarity,
        stats: CardStats,
    ) -> Self {
        Self {
            instance_id,
            character_id: None,
            name: name.into(),
            image_url: String::new(),
            owner,
            rarity,
            stats,
            base_stats: None,
            ability: None,
        }
    }

    /// Instantiate a catalog character for a side.
    #[must_use]
    pub fn from_character(character: &Character, instance_id: InstanceId, owner: Side) -> Self {
        Self {
            instance_id,
            character_id: Some(character.id.clone()),
            name: character.name.clone(),
            image_url: character.image_url.clone(),
            owner,
            rarity: character.rarity,
            stats: character.stats,
            base_stats: Some(character.stats),
            ability: character.ability,
        }
    }

    /// Set the ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Snapshot the current stats as base stats (builder pattern).
    #[must_use]
    pub fn with_base_snapshot(mut self) -> Self {
        self.base_stats = Some(self.stats);
        self
    }

    /// Check for a specific ability.
    #[must_use]
    pub fn has_ability(&self, ability: AbilityId) -> bool {
        self.ability == Some(ability)
    }

    /// Trigger kind of this card's ability, if it has one.
    #[must_use]
    pub fn ability_trigger(&self) -> Option<AbilityTrigger> {
        self.ability.map(AbilityId::trigger)
    }

    /// Anchored cards cannot be moved or destroyed.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.has_ability(AbilityId::Anchor)
    }

    /// Invisible cards ignore enemy ability targeting.
    #[must_use]
    pub fn is_invisible(&self) -> bool {
        self.has_ability(AbilityId::Invisible)
    }

    /// Add to every edge of `stats`, and of `base_stats` when `permanent`.
    pub fn buff_all(&mut self, delta: i32, permanent: bool) {
        self.stats.add_all(delta);
        if permanent {
            if let Some(base) = self.base_stats.as_mut() {
                base.add_all(delta);
            }
        }
    }
}
