//! Ability tests through the turn engine.

use rust_triad::abilities::{AbilityCatalog, AbilityId, AbilityTrigger};
use rust_triad::cards::{Card, CardCatalog, Rarity};
use rust_triad::core::{CardStats, GameState, InstanceId, Side};
use rust_triad::game::Engine;
use rust_triad::maps::MapId;

fn card(id: u32, owner: Side, stats: CardStats) -> Card {
    Card::new(InstanceId(id), format!("Card {}", id), owner, Rarity::Epic, stats).with_base_snapshot()
}

fn player_to_move(hand: &[Card]) -> GameState {
    let mut state = GameState::new(Side::Player, MapId::None, 21);
    for c in hand {
        state.hands[Side::Player].push_back(c.clone());
    }
    state.hands[Side::Opponent].push_back(card(99, Side::Opponent, CardStats::uniform(1)));
    state
}

fn owner_at(state: &GameState, index: usize) -> Option<Side> {
    state.board.get(index).map(|c| c.owner)
}

// =============================================================================
// Catalog coverage
// =============================================================================

#[test]
fn test_every_ability_has_one_handler() {
    let catalog = AbilityCatalog::standard();
    assert_eq!(catalog.len(), AbilityId::ALL.len());

    for id in AbilityId::ALL {
        let definition = catalog.get(id).unwrap();
        assert_eq!(definition.trigger(), id.trigger());
        match id.trigger() {
            AbilityTrigger::OnReveal => assert!(definition.on_reveal().is_some(), "{}", id),
            AbilityTrigger::Ongoing => assert!(definition.ongoing().is_some(), "{}", id),
        }
    }
}

#[test]
fn test_builtin_roster_carries_every_ability() {
    let cards = CardCatalog::builtin();
    for id in AbilityId::ALL {
        assert!(cards.iter().any(|c| c.ability == Some(id)), "no carrier for {}", id);
    }
}

// =============================================================================
// Movement and removal
// =============================================================================

#[test]
fn test_swap_captures_from_new_slot() {
    let engine = Engine::standard();
    let swapper = card(1, Side::Player, CardStats::new(1, 1, 1, 9)).with_ability(AbilityId::Swap);
    let mut state = player_to_move(&[swapper.clone()]);
    state.board.set(5, Some(card(2, Side::Opponent, CardStats::uniform(1))));

    let next = engine.try_place(&state, &swapper, 4).unwrap();

    assert_eq!(next.board.get(5).unwrap().instance_id, InstanceId(1));
    assert_eq!(next.board.get(4).unwrap().instance_id, InstanceId(2));
    assert_eq!(owner_at(&next, 4), Some(Side::Player));
    // Last move still records where the card was dropped.
    assert_eq!(next.last_move.as_ref().unwrap().index, 4);
}

#[test]
fn test_swap_takes_first_enemy_in_targeting_order() {
    let engine = Engine::standard();
    let swapper = card(1, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Swap);
    let mut state = player_to_move(&[swapper.clone()]);
    state.board.set(3, Some(card(2, Side::Opponent, CardStats::uniform(1))));
    state.board.set(5, Some(card(3, Side::Opponent, CardStats::uniform(1))));

    let next = engine.try_place(&state, &swapper, 4).unwrap();

    // Left is scanned before right.
    assert_eq!(next.board.get(3).unwrap().instance_id, InstanceId(1));
    assert_eq!(next.board.get(4).unwrap().instance_id, InstanceId(2));
    assert_eq!(next.board.get(5).unwrap().instance_id, InstanceId(3));
}

#[test]
fn test_pull_then_capture() {
    let engine = Engine::standard();
    let puller = card(1, Side::Player, CardStats::new(1, 9, 1, 1)).with_ability(AbilityId::Pull);
    let mut state = player_to_move(&[puller.clone()]);
    state.board.set(2, Some(card(2, Side::Opponent, CardStats::uniform(1))));

    let next = engine.try_place(&state, &puller, 0).unwrap();

    assert!(next.board.get(2).is_none());
    assert_eq!(next.board.get(1).unwrap().instance_id, InstanceId(2));
    assert_eq!(owner_at(&next, 1), Some(Side::Player));
}

#[test]
fn test_assassin_respects_anchor() {
    let engine = Engine::standard();
    let assassin = card(1, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Assassin);

    let mut state = player_to_move(&[assassin.clone()]);
    state.board.set(8, Some(card(2, Side::Opponent, CardStats::uniform(5))));
    let next = engine.try_place(&state, &assassin, 0).unwrap();
    assert!(next.board.get(8).is_none());

    let mut anchored = player_to_move(&[assassin.clone()]);
    anchored.board.set(8, Some(card(2, Side::Opponent, CardStats::uniform(5)).with_ability(AbilityId::Anchor)));
    let next = engine.try_place(&anchored, &assassin, 0).unwrap();
    assert!(next.board.get(8).is_some());
}

#[test]
fn test_sniper_needs_a_corner() {
    let engine = Engine::standard();
    let sniper = card(1, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Sniper);
    let mut state = player_to_move(&[sniper.clone()]);
    state.board.set(7, Some(card(2, Side::Opponent, CardStats::uniform(5))));
    state.board.set(8, Some(card(3, Side::Opponent, CardStats::uniform(5))));

    let edge = engine.try_place(&state, &sniper, 1).unwrap();
    assert!(edge.board.get(7).is_some());

    let corner = engine.try_place(&state, &sniper, 0).unwrap();
    assert!(corner.board.get(8).is_none());
    assert!(corner.board.get(7).is_some());
}

#[test]
fn test_invisible_enemy_is_skipped() {
    let engine = Engine::standard();
    let swapper = card(1, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Swap);
    let mut state = player_to_move(&[swapper.clone()]);
    state.board.set(1, Some(card(2, Side::Opponent, CardStats::uniform(1)).with_ability(AbilityId::Invisible)));
    state.board.set(5, Some(card(3, Side::Opponent, CardStats::uniform(1))));

    let next = engine.try_place(&state, &swapper, 4).unwrap();

    assert_eq!(next.board.get(1).unwrap().instance_id, InstanceId(2));
    assert_eq!(next.board.get(5).unwrap().instance_id, InstanceId(1));
}

#[test]
fn test_volatile_clears_area_without_captures() {
    let engine = Engine::standard();
    let bomb = card(1, Side::Player, CardStats::uniform(9)).with_ability(AbilityId::Volatile);
    let mut state = player_to_move(&[bomb.clone()]);
    state.board.set(1, Some(card(2, Side::Opponent, CardStats::uniform(1))));
    state.board.set(3, Some(card(3, Side::Player, CardStats::uniform(1))));
    state.board.set(0, Some(card(4, Side::Opponent, CardStats::uniform(1))));

    let next = engine.try_place(&state, &bomb, 4).unwrap();

    assert!(next.board.get(4).is_none());
    assert!(next.board.get(1).is_none());
    assert!(next.board.get(3).is_none());
    assert_eq!(owner_at(&next, 0), Some(Side::Opponent));
    assert_eq!(next.current, Side::Opponent);
}

#[test]
fn test_phantom_copy_gets_fresh_id() {
    let engine = Engine::standard();
    let phantom = card(1, Side::Player, CardStats::uniform(2)).with_ability(AbilityId::Phantom);
    let mut state = player_to_move(&[phantom.clone()]);
    state.ids = rust_triad::core::InstanceIds::after(InstanceId(200));

    let next = engine.try_place(&state, &phantom, 0).unwrap();

    // Bottom comes before right when picking the empty neighbor.
    assert!(next.board.get(1).is_none());
    let copy = next.board.get(3).unwrap();
    assert_ne!(copy.instance_id, InstanceId(1));
    assert_eq!(copy.owner, Side::Player);
    assert_eq!(copy.stats, CardStats::uniform(2));
    assert_eq!(next.board.count(Side::Player), 2);
}

#[test]
fn test_phantom_skips_taken_top_for_bottom() {
    let engine = Engine::standard();
    let phantom = card(1, Side::Player, CardStats::uniform(2)).with_ability(AbilityId::Phantom);
    let mut state = player_to_move(&[phantom.clone()]);
    state.ids = rust_triad::core::InstanceIds::after(InstanceId(200));
    state.board.set(1, Some(card(5, Side::Player, CardStats::uniform(1))));

    let next = engine.try_place(&state, &phantom, 4).unwrap();

    assert!(next.board.get(7).is_some_and(|c| c.instance_id != InstanceId(1)));
    assert!(next.board.get(3).is_none());
    assert!(next.board.get(5).is_none());
}

// =============================================================================
// Buffs, debuffs and board-wide rules
// =============================================================================

#[test]
fn test_echo_repeats_last_reveal() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Opponent, MapId::None, 21);
    let rally = card(1, Side::Opponent, CardStats::uniform(1)).with_ability(AbilityId::Rally);
    let echo = card(2, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Echo);
    state.hands[Side::Opponent].push_back(rally.clone());
    state.hands[Side::Opponent].push_back(card(3, Side::Opponent, CardStats::uniform(1)));
    state.hands[Side::Player].push_back(echo.clone());
    state.board.set(1, Some(card(4, Side::Player, CardStats::uniform(2))));

    let s1 = engine.try_place(&state, &rally, 8).unwrap();
    let s2 = engine.try_place(&s1, &echo, 4).unwrap();

    assert_eq!(s2.board.get(1).unwrap().stats, CardStats::uniform(3));
}

#[test]
fn test_suppression_blocks_new_reveals() {
    let engine = Engine::standard();
    let rally = card(1, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Rally);
    let mut state = player_to_move(&[rally.clone()]);
    state.board.set(0, Some(card(2, Side::Opponent, CardStats::uniform(1)).with_ability(AbilityId::SuppressionField)));
    state.board.set(1, Some(card(3, Side::Player, CardStats::uniform(2))));

    let next = engine.try_place(&state, &rally, 4).unwrap();

    assert_eq!(next.board.get(1).unwrap().stats, CardStats::uniform(2));
}

#[test]
fn test_suppression_silences_other_ongoing() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Player, MapId::None, 21);
    state.board.set(4, Some(card(1, Side::Player, CardStats::uniform(3)).with_ability(AbilityId::Aura)));
    state.board.set(1, Some(card(2, Side::Player, CardStats::uniform(3))));
    assert_eq!(engine.effective_stats(&state, 1), Some(CardStats::uniform(4)));

    state.board.set(8, Some(card(3, Side::Opponent, CardStats::uniform(1)).with_ability(AbilityId::SuppressionField)));
    assert_eq!(engine.effective_stats(&state, 1), Some(CardStats::uniform(3)));
}

#[test]
fn test_amplify_doubles_neighbor_source() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Player, MapId::None, 21);
    state.board.set(4, Some(card(1, Side::Player, CardStats::uniform(3)).with_ability(AbilityId::Aura)));
    state.board.set(1, Some(card(2, Side::Player, CardStats::uniform(3))));
    state.board.set(5, Some(card(3, Side::Player, CardStats::uniform(3)).with_ability(AbilityId::Amplify)));

    assert_eq!(engine.effective_stats(&state, 1), Some(CardStats::uniform(5)));
}

#[test]
fn test_silence_removes_enemy_ongoing() {
    let engine = Engine::standard();
    let silencer = card(1, Side::Player, CardStats::uniform(3)).with_ability(AbilityId::Silence);
    let mut state = player_to_move(&[silencer.clone()]);
    state.board.set(1, Some(card(2, Side::Opponent, CardStats::uniform(5)).with_ability(AbilityId::NecroticChill)));
    state.board.set(8, Some(card(3, Side::Player, CardStats::uniform(3))));
    assert_eq!(engine.effective_stats(&state, 8), Some(CardStats::uniform(2)));

    let next = engine.try_place(&state, &silencer, 4).unwrap();

    assert_eq!(next.board.get(1).unwrap().ability, None);
    assert_eq!(engine.effective_stats(&next, 8), Some(CardStats::uniform(3)));
}

#[test]
fn test_necrotic_chill_blocks_capture() {
    let engine = Engine::standard();
    let attacker = card(1, Side::Player, CardStats::new(3, 1, 1, 1));
    let mut state = player_to_move(&[attacker.clone()]);
    state.board.set(1, Some(card(2, Side::Opponent, CardStats::new(1, 1, 2, 1)).with_ability(AbilityId::NecroticChill)));

    let next = engine.try_place(&state, &attacker, 4).unwrap();
    assert_eq!(owner_at(&next, 1), Some(Side::Opponent));
}

#[test]
fn test_gambit_moves_stats_by_one() {
    let engine = Engine::standard();
    let gambler = card(1, Side::Player, CardStats::uniform(5)).with_ability(AbilityId::Gambit);
    let state = player_to_move(&[gambler.clone()]);

    let next = engine.try_place(&state, &gambler, 4).unwrap();
    let stats = next.board.get(4).unwrap().stats;

    assert!(stats == CardStats::uniform(6) || stats == CardStats::uniform(4));
    assert_eq!(engine.try_place(&state, &gambler, 4).unwrap(), next);
}

#[test]
fn test_breakdown_names_sources() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Player, MapId::ArcaneLibrary, 21);
    state.board.set(4, Some(card(1, Side::Player, CardStats::uniform(3)).with_ability(AbilityId::DragonFire)));
    let mut common = card(2, Side::Player, CardStats::uniform(3));
    common.rarity = Rarity::Common;
    state.board.set(1, Some(common));

    let entries = engine.breakdown(&state, 1);
    assert_eq!(entries.len(), 2);
    assert_eq!(engine.effective_stats(&state, 1), Some(CardStats::new(6, 4, 4, 4)));
}
