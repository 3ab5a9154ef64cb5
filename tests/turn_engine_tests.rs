//! Turn engine and match session tests.

use std::cell::Cell;

use rust_triad::ai::{Difficulty, MoveSelector};
use rust_triad::abilities::AbilityId;
use rust_triad::cards::{Card, CardCatalog, CharacterId, Rarity};
use rust_triad::core::{Board, CardStats, GameRng, GameState, InstanceId, MatchConfig, Side};
use rust_triad::game::{Engine, Match, PlacementError};
use rust_triad::maps::MapId;
use rust_triad::rules::{evaluate_outcome, score, MatchOutcome, RulesEngine, Score};

fn card(id: u32, owner: Side, stats: CardStats) -> Card {
    Card::new(InstanceId(id), format!("Card {}", id), owner, Rarity::Common, stats).with_base_snapshot()
}

fn full_board(player_slots: usize) -> Board {
    let mut board = Board::new();
    for i in 0..9 {
        let owner = if i < player_slots { Side::Player } else { Side::Opponent };
        board.set(i, Some(card(i as u32, owner, CardStats::uniform(1))));
    }
    board
}

fn quick_engine(difficulty: Difficulty) -> Engine {
    Engine::new(
        CardCatalog::builtin(),
        MatchConfig::default().with_difficulty(difficulty).with_ai_delay_ms(0),
    )
}

// =============================================================================
// Win condition
// =============================================================================

#[test]
fn test_bonus_goes_to_non_starter() {
    let board = full_board(5);

    assert_eq!(score(&board, Side::Player), Score { player: 5, opponent: 5 });
    assert_eq!(evaluate_outcome(&board, Side::Player), Some(MatchOutcome::Draw));

    assert_eq!(score(&board, Side::Opponent), Score { player: 6, opponent: 4 });
    assert_eq!(evaluate_outcome(&board, Side::Opponent), Some(MatchOutcome::PlayerWins));
}

#[test]
fn test_asymmetric_counts_flip_with_starter() {
    let board = full_board(4);

    assert_eq!(score(&board, Side::Player), Score { player: 4, opponent: 6 });
    assert_eq!(evaluate_outcome(&board, Side::Player), Some(MatchOutcome::OpponentWins));

    assert_eq!(score(&board, Side::Opponent), Score { player: 5, opponent: 5 });
    assert_eq!(evaluate_outcome(&board, Side::Opponent), Some(MatchOutcome::Draw));
}

#[test]
fn test_undecided_until_full() {
    let mut board = full_board(9);
    board.take(0);
    assert_eq!(evaluate_outcome(&board, Side::Player), None);
}

// =============================================================================
// Placement transaction
// =============================================================================

#[test]
fn test_illegal_placement_is_a_no_op() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Player, MapId::None, 1);
    state.board.set(4, Some(card(1, Side::Opponent, CardStats::uniform(3))));
    let held = card(2, Side::Player, CardStats::uniform(9));
    state.hands[Side::Player].push_back(held.clone());

    assert_eq!(engine.place(&state, &held, 4), state);
    assert_eq!(engine.try_place(&state, &held, 4), Err(PlacementError::SlotOccupied(4)));

    let stranger = card(3, Side::Opponent, CardStats::uniform(9));
    assert_eq!(engine.place(&state, &stranger, 0), state);
    assert_eq!(
        engine.try_place(&state, &stranger, 0),
        Err(PlacementError::CardNotInHand { card: InstanceId(3), side: Side::Player })
    );
}

#[test]
fn test_place_after_completion_is_rejected() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Player, MapId::None, 1);
    state.board = full_board(5);
    state.outcome = evaluate_outcome(&state.board, state.starting);
    let spare = card(50, Side::Player, CardStats::uniform(1));
    state.hands[Side::Player].push_back(spare.clone());

    assert_eq!(engine.try_place(&state, &spare, 0), Err(PlacementError::MatchComplete));
    assert_eq!(engine.place(&state, &spare, 0), state);
}

#[test]
fn test_placement_draws_and_switches() {
    let engine = Engine::standard();
    let state = engine.new_match(Side::Opponent, None);
    let played = state.hand(Side::Opponent)[0].clone();
    let next_draw = state.deck(Side::Opponent)[0].instance_id;

    let next = engine.try_place(&state, &played, 0).unwrap();

    assert_eq!(next.current, Side::Player);
    assert_eq!(next.hand(Side::Opponent).len(), 5);
    assert_eq!(next.deck(Side::Opponent).len(), 4);
    assert!(next.hand_card(Side::Opponent, played.instance_id).is_none());
    assert!(next.hand_card(Side::Opponent, next_draw).is_some());

    let last = next.last_move.as_ref().unwrap();
    assert_eq!((last.side, last.index), (Side::Opponent, 0));
    assert_eq!(last.card.instance_id, played.instance_id);

    // The input state is untouched.
    assert_eq!(state.hand(Side::Opponent).len(), 5);
    assert!(state.board.get(0).is_none());
}

#[test]
fn test_hand_stops_growing_on_empty_deck() {
    let engine = Engine::new(CardCatalog::builtin(), MatchConfig::default().with_deck_size(5));
    let state = engine.new_match(Side::Player, None);
    assert!(state.deck(Side::Player).is_empty());

    let played = state.hand(Side::Player)[0].clone();
    let next = engine.try_place(&state, &played, 0).unwrap();
    assert_eq!(next.hand(Side::Player).len(), 4);
}

#[test]
fn test_timeshift_returns_enemy_card() {
    let engine = Engine::standard();
    let mut state = GameState::new(Side::Opponent, MapId::None, 3);
    let enemy = card(1, Side::Opponent, CardStats::uniform(2));
    let shifter = card(2, Side::Player, CardStats::uniform(1)).with_ability(AbilityId::Timeshift);
    state.hands[Side::Opponent].push_back(enemy.clone());
    state.hands[Side::Opponent].push_back(card(3, Side::Opponent, CardStats::uniform(1)));
    state.hands[Side::Player].push_back(shifter.clone());
    state.hands[Side::Player].push_back(card(4, Side::Player, CardStats::uniform(1)));

    let s1 = engine.try_place(&state, &enemy, 8).unwrap();
    let s2 = engine.try_place(&s1, &shifter, 0).unwrap();

    assert!(s2.board.get(8).is_none());
    let returned = s2.hand_card(Side::Opponent, InstanceId(1)).unwrap();
    assert_eq!(returned.owner, Side::Opponent);
    assert_eq!(returned.stats, CardStats::uniform(2));
}

#[test]
fn test_seeded_matches_replay() {
    let engine = quick_engine(Difficulty::Normal);

    let play = |seed: u64| {
        let mut state = engine.new_match_seeded(Side::Player, None, seed);
        let mut rng = GameRng::new(seed);
        let selector = MoveSelector::new(Difficulty::Normal);
        while let Some(mv) = selector.select_for(&engine, &state, state.current, &mut rng) {
            state = engine.apply_move(&state, mv).unwrap();
        }
        state
    };

    let a = play(17);
    let b = play(17);
    assert_eq!(a, b);
    assert!(a.is_complete());
}

#[test]
fn test_random_matches_always_finish() {
    let engine = quick_engine(Difficulty::Easy);
    let selector = MoveSelector::new(Difficulty::Easy);

    for seed in 0..20 {
        let starting = if seed % 2 == 0 { Side::Player } else { Side::Opponent };
        let mut state = engine.new_match_seeded(starting, None, seed);
        let mut rng = GameRng::new(seed);
        let mut placements = 0;

        while let Some(mv) = selector.select_for(&engine, &state, state.current, &mut rng) {
            state = engine.apply_move(&state, mv).unwrap();
            placements += 1;
            assert!(placements <= 60, "match did not end");
        }

        assert!(state.is_complete(), "seed {} stalled", seed);
        assert!(engine.legal_moves(&state, state.current).is_empty());
    }
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_session_rewards_paid_once() {
    let total = Cell::new(0u32);
    let calls = Cell::new(0u32);
    let mut session = Match::with_rewards(quick_engine(Difficulty::Hard), Side::Player, None, |amount: u32| {
        total.set(total.get() + amount);
        calls.set(calls.get() + 1);
    });

    while !session.state().is_complete() {
        if session.state().current == Side::Player {
            let card = session.state().hand(Side::Player)[0].instance_id;
            let slot = session.state().board.empty_slots().next().unwrap();
            session.place(card, slot).unwrap();
        } else {
            session.play_ai_turn().unwrap().unwrap();
        }
    }

    let outcome = session.outcome().unwrap();
    assert_eq!(session.place(InstanceId(0), 0).err(), Some(PlacementError::MatchComplete));
    assert_eq!(calls.get(), 1);
    let expected = if outcome == MatchOutcome::PlayerWins { 50 } else { 10 };
    assert_eq!(total.get(), expected);
}

#[test]
fn test_pending_move_goes_stale_after_commit() {
    let mut session = Match::new(quick_engine(Difficulty::Normal), Side::Opponent, None);
    let pending = session.plan_ai_move().unwrap();

    session.commit(pending).unwrap();
    assert_eq!(session.commit(pending).err(), Some(PlacementError::StaleMove));
}

#[test]
fn test_reset_deals_a_new_match() {
    let deck: Vec<CharacterId> = vec!["squire".into(); 10];
    let mut session = Match::new(quick_engine(Difficulty::Easy), Side::Opponent, Some(&deck));
    session.play_ai_turn().unwrap().unwrap();
    assert_eq!(session.state().last_move.as_ref().map(|m| m.side), Some(Side::Opponent));

    session.reset(Side::Player, Some(&deck));
    assert!(session.state().board.cards().next().is_none());
    assert_eq!(session.state().current, Side::Player);
    assert!(session.plan_ai_move().is_none());
}
