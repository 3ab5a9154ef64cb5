//! Modifier aggregation and effective stats.
//!
//! Effective stats are `stats + ongoing + map`, summed per side. The
//! ongoing and map layers are rebuilt on every read and never written back
//! into a card, so reading twice on an unchanged board gives the same
//! answer.

use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityCatalog, AbilityId, AbilityResolver};
use crate::core::{Board, CardStats, ModifierMap, StatModifier};
use crate::maps::{map_effect_for, map_modifiers, MapId};

/// Where a modifier came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModifierSource {
    /// An ongoing ability on the board.
    Ability {
        source_index: usize,
        source_name: String,
        ability: AbilityId,
    },
    /// The active map.
    Map { map: MapId, label: String },
}

/// One line of a stat explanation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierEntry {
    pub source: ModifierSource,
    pub modifier: StatModifier,
}

/// Merges ongoing-ability and map deltas.
#[derive(Clone, Copy, Debug)]
pub struct ModifierAggregator<'a> {
    resolver: AbilityResolver<'a>,
}

impl<'a> ModifierAggregator<'a> {
    #[must_use]
    pub fn new(catalog: &'a AbilityCatalog) -> Self {
        Self {
            resolver: AbilityResolver::new(catalog),
        }
    }

    /// Combined per-slot deltas for the board.
    #[must_use]
    pub fn collect(&self, board: &Board, map: MapId) -> ModifierMap {
        let mut modifiers = self.resolver.collect_ongoing(board);
        modifiers.merge(&map_modifiers(board, map));
        modifiers
    }

    /// Effective stats of the card at `index`, `None` for an empty slot.
    #[must_use]
    pub fn effective_stats(&self, board: &Board, index: usize, map: MapId) -> Option<CardStats> {
        effective_with(&self.collect(board, map), board, index)
    }

    /// Every source modifying the card at `index`: ongoing abilities in
    /// board order, then the map.
    #[must_use]
    pub fn breakdown(&self, board: &Board, index: usize, map: MapId) -> Vec<ModifierEntry> {
        if board.get(index).is_none() {
            return Vec::new();
        }

        let mut entries: Vec<ModifierEntry> = self
            .resolver
            .sources_for(board, index)
            .into_iter()
            .map(|source| ModifierEntry {
                source: ModifierSource::Ability {
                    source_index: source.source_index,
                    source_name: source.source_name,
                    ability: source.ability,
                },
                modifier: source.modifier,
            })
            .collect();

        if let (Some(effect), Some(modifier)) = (
            map_effect_for(board, index, map),
            map_modifiers(board, map).get(index),
        ) {
            entries.push(ModifierEntry {
                source: ModifierSource::Map {
                    map,
                    label: effect.label.to_string(),
                },
                modifier: *modifier,
            });
        }
        entries
    }
}

/// Effective stats of a slot against a precomputed modifier map.
#[must_use]
pub fn effective_with(modifiers: &ModifierMap, board: &Board, index: usize) -> Option<CardStats> {
    let card = board.get(index)?;
    Some(match modifiers.get(index) {
        Some(modifier) => card.stats.with_modifier(modifier),
        None => card.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rarity};
    use crate::core::{Direction, InstanceId, Side};

    fn card(id: u32, owner: Side, ability: Option<AbilityId>) -> Card {
        let card = Card::new(InstanceId(id), "Test", owner, Rarity::Common, CardStats::uniform(5));
        match ability {
            Some(ability) => card.with_ability(ability),
            None => card,
        }
    }

    #[test]
    fn test_all_three_layers_sum() {
        let catalog = AbilityCatalog::standard();
        let aggregator = ModifierAggregator::new(&catalog);
        let mut board = Board::new();
        board.set(1, Some(card(1, Side::Player, None)));
        board.set(4, Some(card(2, Side::Player, Some(AbilityId::DragonFire))));

        let stats = aggregator.effective_stats(&board, 1, MapId::VolcanicRift).unwrap();
        assert_eq!(stats, CardStats::new(6, 4, 4, 4));
    }

    #[test]
    fn test_empty_slot_has_no_stats() {
        let catalog = AbilityCatalog::standard();
        let aggregator = ModifierAggregator::new(&catalog);
        assert!(aggregator.effective_stats(&Board::new(), 0, MapId::None).is_none());
        assert!(aggregator.breakdown(&Board::new(), 0, MapId::None).is_empty());
    }

    #[test]
    fn test_breakdown_lists_ability_then_map() {
        let catalog = AbilityCatalog::standard();
        let aggregator = ModifierAggregator::new(&catalog);
        let mut board = Board::new();
        board.set(1, Some(card(1, Side::Player, None)));
        board.set(4, Some(card(2, Side::Player, Some(AbilityId::DragonFire))));

        let entries = aggregator.breakdown(&board, 1, MapId::VolcanicRift);
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            entries[0].source,
            ModifierSource::Ability { source_index: 4, ability: AbilityId::DragonFire, .. }
        ));
        assert_eq!(entries[0].modifier, StatModifier::only(Direction::Top, 2));
        assert!(matches!(entries[1].source, ModifierSource::Map { map: MapId::VolcanicRift, .. }));
    }
}
