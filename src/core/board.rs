//! The 3x3 board.
//!
//! Slots are stored row-major: `row = index / 3`, `col = index % 3`.
//! Adjacency, ability targeting and map tiles all go through the helpers
//! here so the mapping is applied the same way everywhere.
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! An index outside `0..9` reaching the grid math is a programming error
//! and panics.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::entity::InstanceId;
use super::side::Side;
use super::stats::Direction;
use crate::cards::Card;

/// Width and height of the grid.
pub const GRID_SIZE: usize = 3;

/// Number of slots on the board.
pub const BOARD_SLOTS: usize = GRID_SIZE * GRID_SIZE;

/// Fixed-size board of optional cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [Option<Card>; BOARD_SLOTS],
}

/// Row and column of a slot.
#[must_use]
pub fn row_col(index: usize) -> (usize, usize) {
    assert!(index < BOARD_SLOTS, "board index {index} out of range");
    (index / GRID_SIZE, index % GRID_SIZE)
}

/// Slot index for a row and column, if on the grid.
#[must_use]
pub fn index_of(row: i32, col: i32) -> Option<usize> {
    let size = GRID_SIZE as i32;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some((row * size + col) as usize)
    } else {
        None
    }
}

/// Slot `distance` steps from `index` toward `direction`, if on the grid.
#[must_use]
pub fn step(index: usize, direction: Direction, distance: i32) -> Option<usize> {
    let (row, col) = row_col(index);
    let (dr, dc) = direction.offset();
    index_of(row as i32 + dr * distance, col as i32 + dc * distance)
}

/// Orthogonal neighbors of a slot, in top/right/bottom/left order.
pub fn neighbors(index: usize) -> impl Iterator<Item = (Direction, usize)> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| step(index, direction, 1).map(|n| (direction, n)))
}

/// Orthogonal neighbors of a slot, in top/bottom/left/right order.
///
/// Abilities that act on "the first" neighbor scan in this order.
pub fn adjacent(index: usize) -> impl Iterator<Item = usize> {
    [Direction::Top, Direction::Bottom, Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(move |direction| step(index, direction, 1))
}

/// The point-mirrored slot (0 <-> 8, 1 <-> 7, center stays put).
#[must_use]
pub fn mirror(index: usize) -> usize {
    assert!(index < BOARD_SLOTS, "board index {index} out of range");
    BOARD_SLOTS - 1 - index
}

/// True for the four corner slots.
#[must_use]
pub fn is_corner(index: usize) -> bool {
    let (row, col) = row_col(index);
    (row == 0 || row == GRID_SIZE - 1) && (col == 0 || col == GRID_SIZE - 1)
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card in a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots[index].as_ref()
    }

    /// Mutable card in a slot.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.slots[index].as_mut()
    }

    /// Overwrite a slot.
    pub fn set(&mut self, index: usize, card: Option<Card>) {
        self.slots[index] = card;
    }

    /// Empty a slot, returning what was in it.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        self.slots[index].take()
    }

    /// Exchange the contents of two slots.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// True if the slot holds no card.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.slots[index].is_none()
    }

    /// Raw slot view.
    #[must_use]
    pub fn slots(&self) -> &[Option<Card>; BOARD_SLOTS] {
        &self.slots
    }

    /// Occupied slots with their indices.
    pub fn cards(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|card| (i, card)))
    }

    /// Indices of empty slots in ascending order.
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }

    /// True once all nine slots hold a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots owned by a side.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cards().filter(|(_, card)| card.owner == side).count()
    }

    /// Owned-slot difference from one side's point of view.
    #[must_use]
    pub fn margin(&self, side: Side) -> i32 {
        self.count(side) as i32 - self.count(side.other()) as i32
    }

    /// Slot holding a specific card instance.
    #[must_use]
    pub fn find(&self, instance: InstanceId) -> Option<usize> {
        self.cards()
            .find(|(_, card)| card.instance_id == instance)
            .map(|(i, _)| i)
    }
}

impl Index<usize> for Board {
    type Output = Option<Card>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}
