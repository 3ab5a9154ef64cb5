//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two seats at the table: the human `Player` and the AI `Opponent`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for hands, decks and
//! anything else the engine tracks per seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::rng::GameRng;

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human seat.
    Player,
    /// The AI seat.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Decide a starting side with a fair coin.
    ///
    /// The state machine never flips the coin itself; callers decide the
    /// starting side before a match begins.
    pub fn coin_flip(rng: &mut GameRng) -> Self {
        if rng.gen_bool(0.5) {
            Side::Player
        } else {
            Side::Opponent
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use rust_triad::core::{Side, SideMap};
///
/// let mut captures: SideMap<u32> = SideMap::with_value(0);
/// captures[Side::Opponent] += 2;
///
/// assert_eq!(captures[Side::Player], 0);
/// assert_eq!(captures[Side::Opponent], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    opponent: T,
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            opponent: factory(Side::Opponent),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            opponent: value,
        }
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Opponent, &self.opponent)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
