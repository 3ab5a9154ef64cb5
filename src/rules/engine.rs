//! Rules engine trait.
//!
//! The turn engine implements `RulesEngine`; the AI only talks to the
//! trait. Simulation and real play go through the same
//! `resolve_placement`, so there is one rules implementation.
//!
//! ## Implementation Notes
//!
//! - `resolve_placement`: must not touch `state`; all randomness comes from
//!   the `rng` argument
//! - `apply_move`: returns a new state, leaving the input unchanged
//! - `outcome`: `None` while the match continues

use crate::abilities::RevealEffects;
use crate::cards::Card;
use crate::core::{Board, GameRng, GameState, InstanceIds, Move, Side};
use crate::game::PlacementError;

use super::capture::Captures;
use super::outcome::{evaluate_outcome, MatchOutcome};

/// Board-level result of one placement: on-reveal plus captures, with
/// captured slots already flipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub board: Board,

    /// The card as written to the board, before its on-reveal ran.
    pub placed: Card,

    /// Where the placed card ended up, `None` if it left the board.
    pub final_index: Option<usize>,

    pub captured: Captures,

    pub effects: RevealEffects,

    /// Id allocator after any cards minted during the placement.
    pub ids: InstanceIds,
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Resolve a placement against a board without committing it.
    ///
    /// Returns `None` if the move is illegal for `side`.
    fn resolve_placement(
        &self,
        state: &GameState,
        side: Side,
        mv: Move,
        rng: &mut GameRng,
    ) -> Option<Resolution>;

    /// Apply a move for the side to act and return the next state.
    fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, PlacementError>;

    /// Check if the match is over.
    fn outcome(&self, state: &GameState) -> Option<MatchOutcome> {
        evaluate_outcome(&state.board, state.starting)
    }

    // === Convenience Methods ===

    /// Every (hand card, empty slot) pair for a side, hand order then slot order.
    fn legal_moves(&self, state: &GameState, side: Side) -> Vec<Move> {
        if state.is_complete() {
            return Vec::new();
        }
        let empty: Vec<usize> = state.board.empty_slots().collect();
        state
            .hand(side)
            .iter()
            .flat_map(|card| empty.iter().map(move |&index| Move::new(card.instance_id, index)))
            .collect()
    }
}
