//! Character catalog for definition lookup.
//!
//! The `CardCatalog` stores every character a deck may be built from and
//! provides lookup by `CharacterId`. Iteration follows registration order,
//! so random picks driven by a seeded `GameRng` are reproducible.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::builtin::builtin_characters;
use super::definition::{Character, CharacterId, Rarity};
use crate::core::GameRng;

/// Errors raised while building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("character `{0}` already registered")]
    DuplicateCharacter(CharacterId),
}

/// Registry of character definitions.
///
/// ## Example
///
/// ```
/// use rust_triad::cards::{CardCatalog, Character, Rarity};
/// use rust_triad::core::CardStats;
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(Character::new("rat", "Giant Rat", CardStats::new(1, 4, 1, 4), Rarity::Common))
///     .unwrap();
///
/// assert_eq!(catalog.get("rat").unwrap().name, "Giant Rat");
/// assert!(catalog.get("dragon").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    characters: FxHashMap<CharacterId, Character>,
    order: Vec<CharacterId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin roster.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for character in builtin_characters() {
            catalog.insert(character);
        }
        catalog
    }

    /// Build a catalog from an owned-character list.
    pub fn from_characters(
        characters: impl IntoIterator<Item = Character>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for character in characters {
            catalog.register(character)?;
        }
        Ok(catalog)
    }

    /// Register a character definition.
    pub fn register(&mut self, character: Character) -> Result<(), CatalogError> {
        if self.characters.contains_key(&character.id) {
            return Err(CatalogError::DuplicateCharacter(character.id));
        }
        self.insert(character);
        Ok(())
    }

    fn insert(&mut self, character: Character) {
        self.order.push(character.id.clone());
        self.characters.insert(character.id.clone(), character);
    }

    /// Get a character by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Check if a character ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.characters.contains_key(id)
    }

    /// Get the number of registered characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all characters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.order.iter().filter_map(|id| self.characters.get(id))
    }

    /// Characters of one rarity, in registration order.
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Character> {
        self.iter().filter(move |c| c.rarity == rarity)
    }

    /// Uniformly random character, or `None` for an empty catalog.
    pub fn random(&self, rng: &mut GameRng) -> Option<&Character> {
        rng.choose(&self.order).and_then(|id| self.characters.get(id))
    }
}
