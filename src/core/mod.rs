//! Core types: sides, ids, RNG, stats, the board, configuration and state.
//!
//! Everything here is plain data with small helpers. The rules that move a
//! match forward live in `rules` and `game`.

pub mod action;
pub mod board;
pub mod config;
pub mod entity;
pub mod modifiers;
pub mod rng;
pub mod side;
pub mod state;
pub mod stats;

pub use action::{LastMove, Move};
pub use board::{Board, BOARD_SLOTS, GRID_SIZE};
pub use config::MatchConfig;
pub use entity::{InstanceId, InstanceIds};
pub use modifiers::ModifierMap;
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
pub use state::GameState;
pub use stats::{CardStats, Direction, StatModifier};
