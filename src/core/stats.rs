//! Directional card stats and sparse stat modifiers.
//!
//! ## CardStats
//!
//! Four signed values, one per edge. Nominally 1-9, but nothing clamps
//! them: debuffs may push a side below zero and it is still compared
//! numerically as-is.
//!
//! ## StatModifier
//!
//! A sparse delta. A side that no source touched is `None`, which lets
//! tooltips tell "no effect" apart from "+0 after cancelling out".

use serde::{Deserialize, Serialize};

/// One edge of a card, and the direction toward the neighbor on that edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Fixed enumeration order used by capture checks and targeting.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The edge that faces back toward us from the neighbor.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Row/column step toward the neighbor on this edge.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// Directional stats of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardStats {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl CardStats {
    /// Create stats from the four edges, clockwise from the top.
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on all four edges.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Read one edge.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Mutable access to one edge.
    pub fn get_mut(&mut self, direction: Direction) -> &mut i32 {
        match direction {
            Direction::Top => &mut self.top,
            Direction::Right => &mut self.right,
            Direction::Bottom => &mut self.bottom,
            Direction::Left => &mut self.left,
        }
    }

    /// Sum of all four edges.
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.top + self.right + self.bottom + self.left
    }

    /// Add `delta` to every edge.
    pub fn add_all(&mut self, delta: i32) {
        for direction in Direction::ALL {
            *self.get_mut(direction) += delta;
        }
    }

    /// Add another set of stats edge by edge.
    pub fn add_stats(&mut self, other: &CardStats) {
        for direction in Direction::ALL {
            *self.get_mut(direction) += other.get(direction);
        }
    }

    /// These stats with a modifier applied.
    #[must_use]
    pub fn with_modifier(&self, modifier: &StatModifier) -> Self {
        let mut out = *self;
        for direction in Direction::ALL {
            *out.get_mut(direction) += modifier.get(direction);
        }
        out
    }
}

impl std::fmt::Display for CardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}/{}", self.top, self.right, self.bottom, self.left)
    }
}

/// Sparse per-edge delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
}

impl StatModifier {
    /// A modifier touching no edge.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    /// The same delta on all four edges.
    #[must_use]
    pub const fn uniform(delta: i32) -> Self {
        Self {
            top: Some(delta),
            right: Some(delta),
            bottom: Some(delta),
            left: Some(delta),
        }
    }

    /// A delta on one edge only.
    #[must_use]
    pub fn only(direction: Direction, delta: i32) -> Self {
        let mut out = Self::none();
        out.set(direction, delta);
        out
    }

    /// Builder: add a delta on one more edge.
    #[must_use]
    pub fn and(mut self, direction: Direction, delta: i32) -> Self {
        self.set(direction, self.get(direction) + delta);
        self
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<i32> {
        match direction {
            Direction::Top => &mut self.top,
            Direction::Right => &mut self.right,
            Direction::Bottom => &mut self.bottom,
            Direction::Left => &mut self.left,
        }
    }

    /// Read one edge; untouched edges read as zero.
    #[must_use]
    pub fn get(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
        .unwrap_or(0)
    }

    /// Overwrite one edge.
    pub fn set(&mut self, direction: Direction, delta: i32) {
        *self.slot_mut(direction) = Some(delta);
    }

    /// Accumulate another modifier into this one. Additive per edge.
    pub fn merge(&mut self, other: &StatModifier) {
        for direction in Direction::ALL {
            if let Some(delta) = match direction {
                Direction::Top => other.top,
                Direction::Right => other.right,
                Direction::Bottom => other.bottom,
                Direction::Left => other.left,
            } {
                let slot = self.slot_mut(direction);
                *slot = Some(slot.unwrap_or(0) + delta);
            }
        }
    }

    /// Every touched edge multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: i32) -> Self {
        Self {
            top: self.top.map(|v| v * factor),
            right: self.right.map(|v| v * factor),
            bottom: self.bottom.map(|v| v * factor),
            left: self.left.map(|v| v * factor),
        }
    }

    /// True if no edge is touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

impl std::fmt::Display for StatModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for direction in Direction::ALL {
            let touched = match direction {
                Direction::Top => self.top,
                Direction::Right => self.right,
                Direction::Bottom => self.bottom,
                Direction::Left => self.left,
            };
            if let Some(delta) = touched {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{delta:+} {direction}")?;
                first = false;
            }
        }
        if first {
            f.write_str("no change")?;
        }
        Ok(())
    }
}
