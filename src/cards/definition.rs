//! Character definitions - static catalog data.
//!
//! A `Character` is the template a card instance is built from: base
//! stats, rarity and an optional ability. Instance-specific data (owner,
//! current stats) lives in `Card`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::abilities::AbilityId;
use crate::core::CardStats;

/// Catalog identifier of a character, e.g. `"dragon"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    /// Create a character ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for CharacterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        f.write_str(name)
    }
}

/// Static character definition.
///
/// ## Example
///
/// ```
/// use rust_triad::abilities::AbilityId;
/// use rust_triad::cards::{Character, Rarity};
/// use rust_triad::core::CardStats;
///
/// let lich = Character::new("lich", "Lich King", CardStats::uniform(8), Rarity::Legendary)
///     .with_ability(AbilityId::LichDebuff);
///
/// assert_eq!(lich.stats.total(), 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,

    pub name: String,

    /// Stats every instance starts with.
    pub stats: CardStats,

    pub rarity: Rarity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<AbilityId>,

    /// Flavor text.
    #[serde(default)]
    pub description: String,

    /// Art reference. Opaque to the engine.
    #[serde(default)]
    pub image_url: String,
}

impl Character {
    /// Create a character with no ability.
    #[must_use]
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        stats: CardStats,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            rarity,
            ability: None,
            description: String::new(),
            image_url: String::new(),
        }
    }

    /// Set the ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the art reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_builder() {
        let wolf = Character::new("wolf", "Dire Wolf", CardStats::new(5, 5, 2, 2), Rarity::Rare)
            .with_ability(AbilityId::Rally)
            .with_description("Hunts in packs.");

        assert_eq!(wolf.id.as_str(), "wolf");
        assert_eq!(wolf.ability, Some(AbilityId::Rally));
        assert_eq!(wolf.description, "Hunts in packs.");
    }

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Legendary > Rarity::Epic);
        assert!(Rarity::Rare > Rarity::Common);
        assert_eq!(Rarity::Epic.to_string(), "epic");
    }

    #[test]
    fn test_character_json() {
        let json = r#"{"id":"rat","name":"Giant Rat","stats":{"top":1,"right":4,"bottom":1,"left":4},"rarity":"common"}"#;
        let rat: Character = serde_json::from_str(json).unwrap();

        assert_eq!(rat.id, CharacterId::from("rat"));
        assert_eq!(rat.rarity, Rarity::Common);
        assert!(rat.ability.is_none());
    }
}
