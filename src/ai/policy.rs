//! Move scoring policies.
//!
//! A policy scores one candidate move; the selector keeps the maximal
//! scores and breaks ties uniformly at random. Every policy works through
//! `RulesEngine`, so simulated placements follow exactly the rules real
//! placements do, and it only ever touches clones.

use tracing::trace;

use crate::core::{GameRng, GameState, Move, Side};
use crate::rules::RulesEngine;

/// Scores a candidate move for `side`. Higher is better.
pub trait MovePolicy<E: RulesEngine>: Send + Sync {
    /// Score `mv`. `rng` is the AI's own generator, never the match's.
    fn score(&self, engine: &E, state: &GameState, side: Side, mv: Move, rng: &mut GameRng) -> i32;
}

/// Every legal move scores the same, so the pick is uniform.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl<E: RulesEngine> MovePolicy<E> for RandomPolicy {
    fn score(&self, _: &E, _: &GameState, _: Side, _: Move, _: &mut GameRng) -> i32 {
        0
    }
}

/// Board margin (own slots minus enemy slots) right after the move.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl<E: RulesEngine> MovePolicy<E> for GreedyPolicy {
    fn score(&self, engine: &E, state: &GameState, side: Side, mv: Move, rng: &mut GameRng) -> i32 {
        greedy_margin(engine, state, side, mv, rng).unwrap_or(i32::MIN)
    }
}

/// Greedy margin minus the best margin the other side can reach with one
/// reply.
///
/// Replies are scored on the full committed state after the move (hands,
/// draw and blessing included). No reply available costs nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookaheadPolicy;

impl<E: RulesEngine> MovePolicy<E> for LookaheadPolicy {
    fn score(&self, engine: &E, state: &GameState, side: Side, mv: Move, rng: &mut GameRng) -> i32 {
        let mut sim = state.clone();
        sim.rng = rng.fork();
        sim.current = side;
        let Ok(after) = engine.apply_move(&sim, mv) else {
            return i32::MIN;
        };
        let own = after.board.margin(side);

        let replier = side.other();
        let best_reply = engine
            .legal_moves(&after, replier)
            .into_iter()
            .filter_map(|reply| greedy_margin(engine, &after, replier, reply, rng))
            .max()
            .unwrap_or(0);

        trace!(%mv, own, best_reply, "lookahead");
        own - best_reply
    }
}

/// Margin for `side` after resolving `mv` on a clone, `None` if illegal.
fn greedy_margin<E: RulesEngine>(
    engine: &E,
    state: &GameState,
    side: Side,
    mv: Move,
    rng: &mut GameRng,
) -> Option<i32> {
    let mut branch = rng.fork();
    engine
        .resolve_placement(state, side, mv, &mut branch)
        .map(|resolution| resolution.board.margin(side))
}
