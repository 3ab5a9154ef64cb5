//! Moves and the last-move record.
//!
//! A `Move` names a card in the current side's hand by instance id and an
//! empty slot. `LastMove` remembers the most recent placement for abilities
//! that react to it.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::side::Side;
use crate::cards::Card;

/// A placement: which hand card, which slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: InstanceId,
    pub index: usize,
}

impl Move {
    #[must_use]
    pub const fn new(card: InstanceId, index: usize) -> Self {
        Self { card, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.card, self.index)
    }
}

/// The most recent placement.
///
/// `card` is the card as it was written to the board, before its own
/// on-reveal ability ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub side: Side,
    pub card: Card,
    pub index: usize,
}
