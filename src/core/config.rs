//! Match configuration.
//!
//! Everything the surrounding application persists or lets the user pick
//! (deck size, rewards, AI difficulty, map) arrives here as plain data.
//! The engine never reads or writes storage itself.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ai::Difficulty;
use crate::maps::MapId;

/// Per-match configuration.
///
/// ## Example
///
/// ```
/// use rust_triad::ai::Difficulty;
/// use rust_triad::core::MatchConfig;
/// use rust_triad::maps::MapId;
///
/// let config = MatchConfig::default()
///     .with_map(MapId::VolcanicRift)
///     .with_difficulty(Difficulty::Hard)
///     .with_seed(7);
///
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.map, MapId::VolcanicRift);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cards built per side before the opening deal.
    pub deck_size: usize,

    /// Cards dealt into each starting hand.
    pub hand_size: usize,

    /// Credits awarded to the human for a win.
    pub win_reward: u32,

    /// Credits awarded for a loss or a draw.
    pub loss_reward: u32,

    /// AI strategy.
    pub difficulty: Difficulty,

    /// Active map.
    pub map: MapId,

    /// Cosmetic delay before an AI move is committed.
    pub ai_delay_ms: u64,

    /// Seed for the match RNG.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 10,
            hand_size: 5,
            win_reward: 50,
            loss_reward: 10,
            difficulty: Difficulty::Normal,
            map: MapId::None,
            ai_delay_ms: 1000,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the deck size (builder pattern).
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the starting hand size (builder pattern).
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the credit rewards (builder pattern).
    #[must_use]
    pub fn with_rewards(mut self, win: u32, loss: u32) -> Self {
        self.win_reward = win;
        self.loss_reward = loss;
        self
    }

    /// Set the AI difficulty (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the map (builder pattern).
    #[must_use]
    pub fn with_map(mut self, map: MapId) -> Self {
        self.map = map;
        self
    }

    /// Set the AI delay in milliseconds (builder pattern).
    #[must_use]
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u64) -> Self {
        self.ai_delay_ms = ai_delay_ms;
        self
    }

    /// Set the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// AI delay as a `Duration`.
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}
