//! The turn engine.
//!
//! `Engine` owns the two catalogs and the match configuration and is the
//! only thing that moves a `GameState` forward. A placement runs as one
//! pipeline:
//!
//! 1. Validate (match open, slot on the board and empty, card in the
//!    current side's hand).
//! 2. Apply any pending blessing to the card and write it to the board.
//! 3. Run its on-reveal ability.
//! 4. Resolve captures from wherever the card ended up.
//! 5. Commit: hand bookkeeping, returned cards, win check, draw, last
//!    move, turn switch.
//!
//! Steps 2-4 are `RulesEngine::resolve_placement`, which the AI calls on
//! clones; step 5 only happens in `apply_move`.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::PlacementError;
use crate::abilities::{AbilityCatalog, AbilityResolver};
use crate::cards::{Card, CardCatalog, CharacterId, DeckBuilder};
use crate::core::{
    CardStats, GameRng, GameState, LastMove, MatchConfig, Move, Side, BOARD_SLOTS,
};
use crate::maps::{map_effect_for, MapEffect};
use crate::rules::{
    decide, evaluate_outcome, score, CaptureResolver, Captures, ModifierAggregator, ModifierEntry,
    Resolution, RulesEngine, Score,
};

/// Turn engine for one configuration.
///
/// Cheap to clone; catalogs are shared.
#[derive(Clone, Debug)]
pub struct Engine {
    abilities: Arc<AbilityCatalog>,
    cards: Arc<CardCatalog>,
    config: MatchConfig,
}

impl Engine {
    /// Engine over the standard abilities and a given card catalog.
    #[must_use]
    pub fn new(cards: CardCatalog, config: MatchConfig) -> Self {
        Self::with_catalogs(Arc::new(AbilityCatalog::standard()), Arc::new(cards), config)
    }

    /// Engine over shared catalogs.
    #[must_use]
    pub fn with_catalogs(
        abilities: Arc<AbilityCatalog>,
        cards: Arc<CardCatalog>,
        config: MatchConfig,
    ) -> Self {
        Self {
            abilities,
            cards,
            config,
        }
    }

    /// Builtin roster, standard abilities, default configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CardCatalog::builtin(), MatchConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn abilities(&self) -> &AbilityCatalog {
        &self.abilities
    }

    #[must_use]
    pub fn cards(&self) -> &CardCatalog {
        &self.cards
    }

    /// Set up a match with the configured seed.
    ///
    /// `player_deck` is the human's chosen character list; `None` builds a
    /// fair random deck. The opponent always gets a fair deck.
    #[must_use]
    pub fn new_match(&self, starting: Side, player_deck: Option<&[CharacterId]>) -> GameState {
        self.new_match_seeded(starting, player_deck, self.config.seed)
    }

    /// Set up a match with an explicit seed.
    #[must_use]
    pub fn new_match_seeded(
        &self,
        starting: Side,
        player_deck: Option<&[CharacterId]>,
        seed: u64,
    ) -> GameState {
        let mut state = GameState::new(starting, self.config.map, seed);

        for side in Side::BOTH {
            let mut builder = DeckBuilder::new(&self.cards, side).count(self.config.deck_size);
            if let (Side::Player, Some(list)) = (side, player_deck) {
                builder = builder.character_ids(list.iter().cloned());
            }

            let mut cards = builder.build(&mut state.rng, &mut state.ids);
            state.rng.shuffle(&mut cards);

            let deck = cards.split_off(self.config.hand_size.min(cards.len()));
            state.hands[side] = cards.into_iter().collect();
            state.decks[side] = deck.into_iter().collect();
        }

        info!(
            %starting,
            map = %self.config.map,
            seed,
            "match started"
        );
        state
    }

    /// Place a hand card for the side to act.
    ///
    /// The input state is never modified; on error nothing happened.
    pub fn try_place(
        &self,
        state: &GameState,
        card: &Card,
        index: usize,
    ) -> Result<GameState, PlacementError> {
        self.apply_move(state, Move::new(card.instance_id, index))
    }

    /// Like `try_place`, but an illegal placement returns an unchanged copy.
    #[must_use]
    pub fn place(&self, state: &GameState, card: &Card, index: usize) -> GameState {
        match self.try_place(state, card, index) {
            Ok(next) => next,
            Err(err) => {
                debug!(%err, "placement ignored");
                state.clone()
            }
        }
    }

    /// Slots `card` would capture at `index`, ignoring its on-reveal.
    ///
    /// Empty if the slot is off the board or taken.
    #[must_use]
    pub fn preview_capture(&self, state: &GameState, card: &Card, index: usize) -> Captures {
        if index >= BOARD_SLOTS || !state.board.is_empty_at(index) {
            return Captures::new();
        }
        let mut board = state.board.clone();
        board.set(index, Some(card.clone()));
        CaptureResolver::new(&self.abilities).resolve(&board, index, state.map)
    }

    /// Effective stats of the card at `index`.
    #[must_use]
    pub fn effective_stats(&self, state: &GameState, index: usize) -> Option<CardStats> {
        ModifierAggregator::new(&self.abilities).effective_stats(&state.board, index, state.map)
    }

    /// Every modifier acting on the card at `index`, by source.
    #[must_use]
    pub fn breakdown(&self, state: &GameState, index: usize) -> Vec<ModifierEntry> {
        ModifierAggregator::new(&self.abilities).breakdown(&state.board, index, state.map)
    }

    /// The map effect active on `index`, if any.
    #[must_use]
    pub fn map_effect(&self, state: &GameState, index: usize) -> Option<MapEffect> {
        map_effect_for(&state.board, index, state.map)
    }

    /// Current adjusted score.
    #[must_use]
    pub fn score(&self, state: &GameState) -> Score {
        score(&state.board, state.starting)
    }

    fn validate<'s>(
        &self,
        state: &'s GameState,
        side: Side,
        mv: Move,
    ) -> Result<&'s Card, PlacementError> {
        if state.is_complete() {
            return Err(PlacementError::MatchComplete);
        }
        if mv.index >= BOARD_SLOTS {
            return Err(PlacementError::IndexOutOfRange(mv.index));
        }
        if !state.board.is_empty_at(mv.index) {
            return Err(PlacementError::SlotOccupied(mv.index));
        }
        state
            .hand_card(side, mv.card)
            .ok_or(PlacementError::CardNotInHand { card: mv.card, side })
    }

    fn resolve_validated(
        &self,
        state: &GameState,
        side: Side,
        card: &Card,
        index: usize,
        rng: &mut GameRng,
    ) -> Resolution {
        let mut placed = card.clone();
        placed.owner = side;
        if let Some(blessing) = &state.blessings[side] {
            placed.stats = placed.stats.with_modifier(blessing);
            if let Some(base) = placed.base_stats.as_mut() {
                *base = base.with_modifier(blessing);
            }
        }

        let mut board = state.board.clone();
        board.set(index, Some(placed.clone()));

        let mut ids = state.ids.clone();
        let reveal = AbilityResolver::new(&self.abilities).apply_on_reveal(
            state,
            board,
            index,
            rng,
            &mut ids,
        );
        let mut board = reveal.board;

        let captured = match reveal.index {
            Some(at) => CaptureResolver::new(&self.abilities).resolve(&board, at, state.map),
            None => Captures::new(),
        };
        for &slot in &captured {
            if let Some(card) = board.get_mut(slot) {
                card.owner = side;
            }
        }

        Resolution {
            board,
            placed,
            final_index: reveal.index,
            captured,
            effects: reveal.effects,
            ids,
        }
    }
}

impl RulesEngine for Engine {
    fn resolve_placement(
        &self,
        state: &GameState,
        side: Side,
        mv: Move,
        rng: &mut GameRng,
    ) -> Option<Resolution> {
        let card = self.validate(state, side, mv).ok()?;
        Some(self.resolve_validated(state, side, card, mv.index, rng))
    }

    fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, PlacementError> {
        let side = state.current;
        let card = self.validate(state, side, mv)?;

        let mut next = state.clone();
        let resolution = self.resolve_validated(state, side, card, mv.index, &mut next.rng);
        let Resolution {
            board,
            placed,
            final_index,
            captured,
            effects,
            ids,
        } = resolution;

        next.board = board;
        next.ids = ids;
        next.blessings[side] = effects.blessing;
        next.remove_from_hand(side, mv.card);
        for (owner, card) in effects.returned {
            next.hands[owner].push_back(card);
        }

        debug!(
            %side,
            card = %placed.name,
            index = mv.index,
            ?final_index,
            captured = ?captured.as_slice(),
            fired = ?effects.fired.as_slice(),
            "placement resolved"
        );

        next.outcome = evaluate_outcome(&next.board, next.starting);
        if next.outcome.is_none() {
            next.draw(side);
        }
        next.last_move = Some(LastMove {
            side,
            card: placed,
            index: mv.index,
        });

        if next.outcome.is_none() {
            next.current = side.other();
            if next.hands[next.current].is_empty() {
                if next.hands[side].is_empty() {
                    next.outcome = Some(decide(&next.board, next.starting));
                } else {
                    debug!(skipped = %next.current, "no cards to place, turn passes back");
                    next.current = side;
                }
            }
        }

        if let Some(outcome) = next.outcome {
            let score = score(&next.board, next.starting);
            info!(
                %outcome,
                player = score.player,
                opponent = score.opponent,
                "match complete"
            );
        }
        Ok(next)
    }
}
