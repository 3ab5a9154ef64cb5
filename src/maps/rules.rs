//! Map modifier rules.
//!
//! `map_modifiers` is a pure function of (board, map). Each map is an
//! independent rule; `None` yields an empty map.

use super::definition::{MapEffect, MapId, LAVA_TILES, RELIC_INDEX};
use crate::cards::Rarity;
use crate::core::{board, Board, Direction, ModifierMap, Side, StatModifier};

/// Per-slot deltas the map applies to the current board.
#[must_use]
pub fn map_modifiers(board: &Board, map: MapId) -> ModifierMap {
    match map {
        MapId::None => ModifierMap::new(),
        MapId::AncientRuins => ancient_ruins(board),
        MapId::ArcaneLibrary => arcane_library(board),
        MapId::VolcanicRift => volcanic_rift(board),
        MapId::RoyalArena => royal_arena(board),
    }
}

/// The map effect touching the card at `index`, if the map modifies it.
#[must_use]
pub fn map_effect_for(board: &Board, index: usize, map: MapId) -> Option<MapEffect> {
    board.get(index)?;
    map_modifiers(board, map).get(index)?;
    map.effect()
}

fn ancient_ruins(board: &Board) -> ModifierMap {
    let mut map = ModifierMap::new();
    for (_, index) in board::neighbors(RELIC_INDEX) {
        if board.get(index).is_some() {
            map.add(index, &StatModifier::uniform(1));
        }
    }
    map
}

fn arcane_library(board: &Board) -> ModifierMap {
    let mut map = ModifierMap::new();
    for (index, card) in board.cards() {
        if card.rarity == Rarity::Common {
            map.add(index, &StatModifier::uniform(1));
        }
    }
    map
}

fn volcanic_rift(board: &Board) -> ModifierMap {
    let mut map = ModifierMap::new();
    for index in LAVA_TILES {
        if board.get(index).is_some() {
            map.add(index, &StatModifier::uniform(-1));
        }
    }
    map
}

fn royal_arena(board: &Board) -> ModifierMap {
    let mut map = ModifierMap::new();
    let (player, opponent) = (board.count(Side::Player), board.count(Side::Opponent));
    let underdog = match player.cmp(&opponent) {
        std::cmp::Ordering::Less => Side::Player,
        std::cmp::Ordering::Greater => Side::Opponent,
        std::cmp::Ordering::Equal => return map,
    };

    let momentum = StatModifier::only(Direction::Top, 1).and(Direction::Bottom, 1);
    for (index, card) in board.cards() {
        if card.owner == underdog {
            map.add(index, &momentum);
        }
    }
    map
}
