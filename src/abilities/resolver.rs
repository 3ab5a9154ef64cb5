//! Ability resolution.
//!
//! ## On reveal
//!
//! `apply_on_reveal` runs the placed card's on-reveal handler once against
//! a working copy of the board and reports where the card ended up (swap
//! moves it, volatile removes it) along with any off-board effects.
//!
//! ## Ongoing
//!
//! `collect_ongoing` asks every ongoing source on the board for its
//! contributions and sums them per slot. Two board-wide rules apply here:
//!
//! - A suppression field silences every *other* card's ongoing
//!   contributions and blocks on-reveal abilities of newly placed cards.
//! - A source next to an allied amplifier has its contributions doubled.

use tracing::debug;

use super::catalog::AbilityCatalog;
use super::context::{Contribution, OngoingContext, RevealContext, RevealEffects};
use super::definition::AbilityId;
use crate::core::{board, Board, GameRng, GameState, InstanceIds, ModifierMap, StatModifier};

/// Result of an on-reveal pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealOutcome {
    pub board: Board,

    /// Where the revealed card sits now, `None` if it left the board.
    pub index: Option<usize>,

    pub effects: RevealEffects,
}

/// One ongoing source affecting one slot, for explanations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OngoingSource {
    pub source_index: usize,
    pub source_name: String,
    pub ability: AbilityId,
    pub modifier: StatModifier,
}

/// Dispatches ability handlers by id.
#[derive(Clone, Copy, Debug)]
pub struct AbilityResolver<'a> {
    catalog: &'a AbilityCatalog,
}

impl<'a> AbilityResolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a AbilityCatalog) -> Self {
        Self { catalog }
    }

    /// True if a suppression field other than the card at `index` is on the board.
    #[must_use]
    pub fn is_suppressed(board: &Board, index: usize) -> bool {
        board
            .cards()
            .any(|(i, c)| i != index && c.has_ability(AbilityId::SuppressionField))
    }

    /// Multiplier for the ongoing contributions of the card at `index`.
    #[must_use]
    pub fn amplification(board: &Board, index: usize) -> i32 {
        let Some(source) = board.get(index) else {
            return 1;
        };
        let amplified = board::neighbors(index).any(|(_, n)| {
            board
                .get(n)
                .is_some_and(|c| c.owner == source.owner && c.has_ability(AbilityId::Amplify))
        });
        if amplified {
            2
        } else {
            1
        }
    }

    /// Run the on-reveal ability of the card at `index`, if it has one.
    ///
    /// `state` is the match state before the placement; `board` already
    /// holds the placed card.
    pub fn apply_on_reveal(
        &self,
        state: &GameState,
        mut board: Board,
        index: usize,
        rng: &mut GameRng,
        ids: &mut InstanceIds,
    ) -> RevealOutcome {
        let Some(card) = board.get(index) else {
            return RevealOutcome {
                board,
                index: None,
                effects: RevealEffects::default(),
            };
        };
        let (source, owner) = (card.instance_id, card.owner);
        let handler = card
            .ability
            .and_then(|id| self.catalog.get(id))
            .and_then(|definition| definition.on_reveal().map(|h| (definition.id, h)));

        let Some((ability, handler)) = handler else {
            return RevealOutcome {
                board,
                index: Some(index),
                effects: RevealEffects::default(),
            };
        };
        if Self::is_suppressed(&board, index) {
            debug!(%ability, index, "on-reveal suppressed");
            return RevealOutcome {
                board,
                index: Some(index),
                effects: RevealEffects::default(),
            };
        }

        let mut ctx = RevealContext {
            board: &mut board,
            index,
            source,
            owner,
            state,
            catalog: self.catalog,
            rng,
            ids,
            effects: RevealEffects::default(),
        };
        ctx.effects.fired.push(ability);
        handler(&mut ctx);

        let (tracked, effects) = (ctx.index, ctx.effects);
        let index = if board.get(tracked).is_some_and(|c| c.instance_id == source) {
            Some(tracked)
        } else {
            board.find(source)
        };
        debug!(%ability, %source, ?index, "on-reveal resolved");

        RevealOutcome {
            board,
            index,
            effects,
        }
    }

    /// Contributions of the card at `index`, after suppression and amplification.
    #[must_use]
    pub fn contributions(&self, board: &Board, index: usize) -> Vec<Contribution> {
        let Some(card) = board.get(index) else {
            return Vec::new();
        };
        let Some(handler) = card
            .ability
            .and_then(|id| self.catalog.get(id))
            .and_then(|definition| definition.ongoing())
        else {
            return Vec::new();
        };
        if Self::is_suppressed(board, index) {
            return Vec::new();
        }

        let mut out = handler(&OngoingContext::new(board, index, card));
        let factor = Self::amplification(board, index);
        if factor != 1 {
            for contribution in &mut out {
                contribution.modifier = contribution.modifier.scaled(factor);
            }
        }
        out
    }

    /// Sum every ongoing contribution on the board per target slot.
    #[must_use]
    pub fn collect_ongoing(&self, board: &Board) -> ModifierMap {
        let mut map = ModifierMap::new();
        for (index, _) in board.cards() {
            for contribution in self.contributions(board, index) {
                map.add(contribution.target, &contribution.modifier);
            }
        }
        map
    }

    /// Every ongoing source touching `target`, each with its summed delta.
    #[must_use]
    pub fn sources_for(&self, board: &Board, target: usize) -> Vec<OngoingSource> {
        let mut out = Vec::new();
        for (index, card) in board.cards() {
            let mut total: Option<StatModifier> = None;
            for contribution in self.contributions(board, index) {
                if contribution.target == target {
                    total
                        .get_or_insert_with(StatModifier::none)
                        .merge(&contribution.modifier);
                }
            }
            if let (Some(modifier), Some(ability)) = (total, card.ability) {
                out.push(OngoingSource {
                    source_index: index,
                    source_name: card.name.clone(),
                    ability,
                    modifier,
                });
            }
        }
        out
    }
}
