//! Capture resolution.
//!
//! The placed card attacks each occupied enemy neighbor with the effective
//! stat facing it; the neighbor defends with the effective stat facing back.
//! Strictly greater captures, ties do not. All four checks read the same
//! board snapshot, enumerated top, right, bottom, left.

use smallvec::SmallVec;
use tracing::trace;

use super::modifiers::{effective_with, ModifierAggregator};
use crate::abilities::AbilityCatalog;
use crate::core::{board, Board, ModifierMap};
use crate::maps::MapId;

/// Captured slot indices. At most four.
pub type Captures = SmallVec<[usize; 4]>;

/// Computes which neighbors a placed card captures.
#[derive(Clone, Copy, Debug)]
pub struct CaptureResolver<'a> {
    aggregator: ModifierAggregator<'a>,
}

impl<'a> CaptureResolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a AbilityCatalog) -> Self {
        Self {
            aggregator: ModifierAggregator::new(catalog),
        }
    }

    /// Slots captured by the card at `placed_index`. Does not mutate.
    ///
    /// The placed card must already be on the board.
    #[must_use]
    pub fn resolve(&self, board: &Board, placed_index: usize, map: MapId) -> Captures {
        let modifiers = self.aggregator.collect(board, map);
        captures_with(&modifiers, board, placed_index)
    }
}

/// Captures against a precomputed modifier map.
#[must_use]
pub fn captures_with(modifiers: &ModifierMap, board: &Board, placed_index: usize) -> Captures {
    let mut captured = Captures::new();
    let (Some(attacker), Some(attack)) = (
        board.get(placed_index),
        effective_with(modifiers, board, placed_index),
    ) else {
        return captured;
    };

    for (direction, neighbor) in board::neighbors(placed_index) {
        let Some(defender) = board.get(neighbor) else {
            continue;
        };
        if defender.owner == attacker.owner {
            continue;
        }
        let Some(defense) = effective_with(modifiers, board, neighbor) else {
            continue;
        };

        let (a, d) = (attack.get(direction), defense.get(direction.opposite()));
        trace!(from = placed_index, to = neighbor, %direction, attack = a, defense = d, "capture check");
        if a > d {
            captured.push(neighbor);
        }
    }
    captured
}
