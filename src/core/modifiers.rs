//! Sparse per-slot modifier accumulation.

use rustc_hash::FxHashMap;

use super::stats::StatModifier;

/// Slot index to accumulated modifier.
///
/// Built fresh on every read and never stored in the game state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifierMap {
    entries: FxHashMap<usize, StatModifier>,
}

impl ModifierMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contribution to a slot. Additive with whatever is there.
    pub fn add(&mut self, index: usize, modifier: &StatModifier) {
        self.entries.entry(index).or_default().merge(modifier);
    }

    /// Fold another map into this one.
    pub fn merge(&mut self, other: &ModifierMap) {
        for (&index, modifier) in &other.entries {
            self.add(index, modifier);
        }
    }

    /// Accumulated modifier for a slot, if anything touched it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StatModifier> {
        self.entries.get(&index)
    }

    /// Touched slots, ascending.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<_> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
