//! AI opponent.
//!
//! ## Overview
//!
//! The AI scores every legal (hand card, empty slot) pair with a
//! `MovePolicy` and plays one of the best. Three policies back the three
//! difficulties:
//!
//! - **Easy** (`RandomPolicy`): any legal move, uniformly
//! - **Normal** (`GreedyPolicy`): best board margin right after the move
//! - **Hard** (`LookaheadPolicy`): greedy margin minus the best margin the
//!   human can reach with one reply
//!
//! Ties are broken uniformly at random with the AI's own `GameRng`.
//!
//! ## Usage
//!
//! ```rust
//! use rust_triad::ai::{Difficulty, MoveSelector};
//! use rust_triad::core::{GameRng, Side};
//! use rust_triad::game::Engine;
//! use rust_triad::rules::RulesEngine;
//!
//! let engine = Engine::standard();
//! let state = engine.new_match(Side::Opponent, None);
//! let mut rng = GameRng::new(7);
//!
//! let mv = MoveSelector::new(Difficulty::Hard)
//!     .select(&engine, &state, &mut rng)
//!     .expect("opponent to move");
//! let next = engine.apply_move(&state, mv).unwrap();
//! assert_eq!(next.current, Side::Player);
//! ```

pub mod policy;
pub mod selector;

pub use policy::{GreedyPolicy, LookaheadPolicy, MovePolicy, RandomPolicy};
pub use selector::{Difficulty, MoveSelector};
