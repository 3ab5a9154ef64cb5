//! Handler contexts.
//!
//! ## RevealContext
//!
//! What an on-reveal handler may touch: the working board, the slot the
//! revealing card currently sits in, the pre-placement match state (hands,
//! last move), the RNG and the id allocator. Effects that reach outside the
//! board (return-to-hand, blessings) are collected in `RevealEffects` and
//! applied by the turn engine.
//!
//! ## OngoingContext
//!
//! A read-only view of the board and the source card. Handlers read raw
//! `stats` only, never effective stats.
//!
//! ## Targeting
//!
//! Invisible enemies cannot be targeted by on-reveal effects; anchored
//! cards cannot be moved, destroyed or returned to hand.

use smallvec::SmallVec;

use super::catalog::AbilityCatalog;
use super::definition::AbilityId;
use crate::cards::Card;
use crate::core::{
    board, Board, GameRng, GameState, InstanceId, InstanceIds, LastMove, Side, StatModifier,
};

/// One ongoing delta aimed at one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub target: usize,
    pub modifier: StatModifier,
}

impl Contribution {
    #[must_use]
    pub const fn new(target: usize, modifier: StatModifier) -> Self {
        Self { target, modifier }
    }
}

/// Read-only view for ongoing handlers.
#[derive(Clone, Copy, Debug)]
pub struct OngoingContext<'a> {
    pub board: &'a Board,
    /// Slot of the source card.
    pub index: usize,
    pub card: &'a Card,
}

impl<'a> OngoingContext<'a> {
    #[must_use]
    pub fn new(board: &'a Board, index: usize, card: &'a Card) -> Self {
        Self { board, index, card }
    }

    /// Cards owned by the source's owner, the source included.
    pub fn allies(&self) -> impl Iterator<Item = (usize, &'a Card)> + '_ {
        let owner = self.card.owner;
        let board = self.board;
        board.cards().filter(move |(_, c)| c.owner == owner)
    }

    /// Cards owned by the other side.
    pub fn enemies(&self) -> impl Iterator<Item = (usize, &'a Card)> + '_ {
        let owner = self.card.owner;
        let board = self.board;
        board.cards().filter(move |(_, c)| c.owner != owner)
    }

    /// Occupied orthogonal neighbors of the source.
    pub fn adjacent(&self) -> impl Iterator<Item = (usize, &'a Card)> + '_ {
        let board = self.board;
        board::neighbors(self.index).filter_map(move |(_, i)| board.get(i).map(|c| (i, c)))
    }
}

/// Effects of an on-reveal that land outside the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealEffects {
    /// Cards removed from the board, with the hand they go back to.
    pub returned: Vec<(Side, Card)>,

    /// Bonus for the revealing side's next placement.
    pub blessing: Option<StatModifier>,

    /// Abilities that ran, in order (echo records both itself and its target).
    pub fired: SmallVec<[AbilityId; 2]>,
}

/// Mutable view for on-reveal handlers.
pub struct RevealContext<'a> {
    pub board: &'a mut Board,

    /// Current slot of the revealing card. Handlers that move it update this.
    pub index: usize,

    /// Instance id of the revealing card.
    pub source: InstanceId,

    /// Side that placed the revealing card.
    pub owner: Side,

    /// Match state before this placement.
    pub state: &'a GameState,

    pub catalog: &'a AbilityCatalog,

    pub rng: &'a mut GameRng,

    pub ids: &'a mut InstanceIds,

    pub effects: RevealEffects,
}

impl<'a> RevealContext<'a> {
    /// The revealing card, if it is still where `index` says.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.board
            .get(self.index)
            .filter(|card| card.instance_id == self.source)
    }

    /// Mutable access to the revealing card.
    pub fn card_mut(&mut self) -> Option<&mut Card> {
        let source = self.source;
        self.board
            .get_mut(self.index)
            .filter(|card| card.instance_id == source)
    }

    /// The placement before this one.
    #[must_use]
    pub fn last_move(&self) -> Option<&'a LastMove> {
        self.state.last_move.as_ref()
    }

    /// True if the slot holds a card owned by the revealing side.
    #[must_use]
    pub fn is_ally(&self, index: usize) -> bool {
        self.board.get(index).is_some_and(|c| c.owner == self.owner)
    }

    /// True if the slot holds an enemy that abilities may target.
    #[must_use]
    pub fn is_targetable_enemy(&self, index: usize) -> bool {
        self.board
            .get(index)
            .is_some_and(|c| c.owner != self.owner && !c.is_invisible())
    }

    /// True if the slot holds a targetable enemy that can also be displaced.
    #[must_use]
    pub fn is_removable_enemy(&self, index: usize) -> bool {
        self.is_targetable_enemy(index) && self.board.get(index).is_some_and(|c| !c.is_anchored())
    }

    /// Empty a slot unless its card is anchored. Returns what was removed.
    pub fn destroy(&mut self, index: usize) -> Option<Card> {
        if self.board.get(index).is_some_and(Card::is_anchored) {
            return None;
        }
        self.board.take(index)
    }

    /// Flip a slot to the revealing side.
    pub fn convert(&mut self, index: usize) {
        let owner = self.owner;
        if let Some(card) = self.board.get_mut(index) {
            card.owner = owner;
        }
    }

    /// Orthogonal neighbors of the revealing card's current slot, in
    /// targeting order (top, bottom, left, right).
    #[must_use]
    pub fn neighbors(&self) -> SmallVec<[usize; 4]> {
        board::adjacent(self.index).collect()
    }
}
