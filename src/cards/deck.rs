//! Deck construction.
//!
//! Two modes:
//!
//! - **Explicit**: an ordered list of character ids becomes that many
//!   instances in the same order. Unknown or missing entries are replaced
//!   by a random catalog pick.
//! - **Fair**: no list given. The deck holds exactly one legendary, two
//!   epics and three rares, and commons fill the rest.

use tracing::warn;

use super::definition::{Character, CharacterId, Rarity};
use super::instance::Card;
use super::registry::CardCatalog;
use crate::core::{GameRng, InstanceIds, Side};

/// Default number of cards in a deck.
pub const DEFAULT_DECK_SIZE: usize = 10;

/// Rarity quotas for a fair deck. Whatever is left is filled with commons.
pub const RARITY_QUOTA: [(Rarity, usize); 3] =
    [(Rarity::Legendary, 1), (Rarity::Epic, 2), (Rarity::Rare, 3)];

/// Builds decks of card instances from a catalog.
///
/// ## Example
///
/// ```
/// use rust_triad::cards::{CardCatalog, DeckBuilder, Rarity};
/// use rust_triad::core::{GameRng, InstanceIds, Side};
///
/// let catalog = CardCatalog::builtin();
/// let mut rng = GameRng::new(7);
/// let mut ids = InstanceIds::new();
///
/// let deck = DeckBuilder::new(&catalog, Side::Opponent).build(&mut rng, &mut ids);
///
/// assert_eq!(deck.len(), 10);
/// assert_eq!(deck.iter().filter(|c| c.rarity == Rarity::Legendary).count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder<'a> {
    catalog: &'a CardCatalog,
    owner: Side,
    count: usize,
    character_ids: Option<Vec<CharacterId>>,
}

impl<'a> DeckBuilder<'a> {
    /// A fair deck of the default size for `owner`.
    #[must_use]
    pub fn new(catalog: &'a CardCatalog, owner: Side) -> Self {
        Self {
            catalog,
            owner,
            count: DEFAULT_DECK_SIZE,
            character_ids: None,
        }
    }

    /// Set the number of cards (builder pattern).
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Use an explicit, ordered character list (builder pattern).
    #[must_use]
    pub fn character_ids<I, C>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CharacterId>,
    {
        self.character_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Build the deck.
    ///
    /// A deck may come out short only if the catalog is empty.
    pub fn build(&self, rng: &mut GameRng, ids: &mut InstanceIds) -> Vec<Card> {
        let picks = match &self.character_ids {
            Some(list) => self.explicit_picks(list, rng),
            None => self.fair_picks(rng),
        };

        if picks.len() < self.count {
            warn!(owner = %self.owner, wanted = self.count, built = picks.len(), "catalog too small for deck");
        }

        picks
            .into_iter()
            .map(|character| Card::from_character(character, ids.alloc(), self.owner))
            .collect()
    }

    fn explicit_picks(&self, list: &[CharacterId], rng: &mut GameRng) -> Vec<&'a Character> {
        let catalog = self.catalog;
        (0..self.count)
            .filter_map(|slot| {
                let requested = list.get(slot);
                match requested.and_then(|id| catalog.get(id.as_str())) {
                    Some(character) => Some(character),
                    None => {
                        if let Some(id) = requested {
                            warn!(owner = %self.owner, character = %id, "unknown character in deck list, substituting");
                        }
                        catalog.random(rng)
                    }
                }
            })
            .collect()
    }

    fn fair_picks(&self, rng: &mut GameRng) -> Vec<&'a Character> {
        let catalog = self.catalog;
        let mut picks = Vec::with_capacity(self.count);

        for (rarity, quota) in RARITY_QUOTA {
            let wanted = quota.min(self.count - picks.len());
            picks.extend(pick_distinct(catalog, rarity, wanted, rng));
        }

        let commons = self.count - picks.len();
        picks.extend(pick_distinct(catalog, Rarity::Common, commons, rng));
        picks
    }
}

/// `wanted` characters of one rarity, distinct while the pool lasts.
///
/// A pool smaller than `wanted` is cycled; an empty pool falls back to the
/// whole catalog.
fn pick_distinct<'a>(
    catalog: &'a CardCatalog,
    rarity: Rarity,
    wanted: usize,
    rng: &mut GameRng,
) -> Vec<&'a Character> {
    let mut pool: Vec<&Character> = catalog.by_rarity(rarity).collect();
    if pool.is_empty() {
        return (0..wanted).filter_map(|_| catalog.random(rng)).collect();
    }
    rng.shuffle(&mut pool);
    pool.iter().copied().cycle().take(wanted).collect()
}
