//! Match session: the single writer of a live match.
//!
//! `Match` owns the current `GameState`, takes human placements, plans AI
//! moves and pays credits once when the match ends.
//!
//! ## AI scheduling
//!
//! An AI move is computed immediately by `plan_ai_move` and handed back as
//! a `PendingMove` carrying the configured delay. The caller waits however
//! it likes and then calls `commit`. Each pending move is stamped with the
//! session generation; any commit or reset in between makes it stale and
//! `commit` refuses it. `play_ai_turn` plans and commits in one step for
//! callers that do not want a delay.

use std::time::Duration;

use tracing::info;

use super::engine::Engine;
use super::error::PlacementError;
use crate::ai::MoveSelector;
use crate::cards::CharacterId;
use crate::core::{GameRng, GameState, InstanceId, Move, Side};
use crate::rules::{MatchOutcome, RulesEngine};

/// Receives the credit award when a match ends.
///
/// The session decides the amount; the balance lives with the caller.
pub trait RewardSink {
    fn award_credits(&mut self, amount: u32);
}

impl<F: FnMut(u32)> RewardSink for F {
    fn award_credits(&mut self, amount: u32) {
        self(amount)
    }
}

/// Discards rewards.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRewards;

impl RewardSink for NoRewards {
    fn award_credits(&mut self, _: u32) {}
}

/// An AI move waiting for its delay to pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub mv: Move,
    pub delay: Duration,
    generation: u64,
}

impl PendingMove {
    /// Session generation this move was planned against.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// A live match against the AI.
#[derive(Debug)]
pub struct Match<R: RewardSink = NoRewards> {
    engine: Engine,
    state: GameState,
    selector: MoveSelector,
    ai_rng: GameRng,
    generation: u64,
    matches_played: u64,
    rewarded: bool,
    rewards: R,
}

impl Match<NoRewards> {
    /// Start a match that pays rewards nowhere.
    #[must_use]
    pub fn new(engine: Engine, starting: Side, player_deck: Option<&[CharacterId]>) -> Self {
        Self::with_rewards(engine, starting, player_deck, NoRewards)
    }
}

impl<R: RewardSink> Match<R> {
    /// Start a match that pays rewards into `rewards`.
    #[must_use]
    pub fn with_rewards(
        engine: Engine,
        starting: Side,
        player_deck: Option<&[CharacterId]>,
        rewards: R,
    ) -> Self {
        let config = engine.config();
        let selector = MoveSelector::new(config.difficulty);
        let ai_rng = GameRng::new(config.seed).fork();
        let state = engine.new_match(starting, player_deck);
        Self {
            engine,
            state,
            selector,
            ai_rng,
            generation: 0,
            matches_played: 0,
            rewarded: false,
            rewards,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn rewards(&self) -> &R {
        &self.rewards
    }

    /// Bumped on every committed placement and every reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.state.outcome
    }

    /// Place a card from the human's hand.
    pub fn place(&mut self, card: InstanceId, index: usize) -> Result<&GameState, PlacementError> {
        if self.state.is_complete() {
            return Err(PlacementError::MatchComplete);
        }
        if self.state.current != Side::Player {
            return Err(PlacementError::OutOfTurn(Side::Player));
        }
        self.commit_move(Move::new(card, index))
    }

    /// Compute the AI's move now, to be committed after `delay`.
    ///
    /// `None` unless it is the AI's turn in an open match.
    pub fn plan_ai_move(&mut self) -> Option<PendingMove> {
        let mv = self.selector.select(&self.engine, &self.state, &mut self.ai_rng)?;
        Some(PendingMove {
            mv,
            delay: self.engine.config().ai_delay(),
            generation: self.generation,
        })
    }

    /// Commit a planned AI move, unless something happened since planning.
    pub fn commit(&mut self, pending: PendingMove) -> Result<&GameState, PlacementError> {
        if pending.generation != self.generation {
            return Err(PlacementError::StaleMove);
        }
        self.commit_move(pending.mv)
    }

    /// Plan and commit the AI's move with no delay.
    pub fn play_ai_turn(&mut self) -> Option<Result<&GameState, PlacementError>> {
        let pending = self.plan_ai_move()?;
        Some(self.commit(pending))
    }

    /// Start a fresh match. Any pending AI move goes stale.
    pub fn reset(&mut self, starting: Side, player_deck: Option<&[CharacterId]>) {
        self.matches_played += 1;
        self.generation += 1;
        self.rewarded = false;
        let seed = self.engine.config().seed.wrapping_add(self.matches_played);
        self.state = self.engine.new_match_seeded(starting, player_deck, seed);
    }

    fn commit_move(&mut self, mv: Move) -> Result<&GameState, PlacementError> {
        self.state = self.engine.apply_move(&self.state, mv)?;
        self.generation += 1;
        self.settle();
        Ok(&self.state)
    }

    fn settle(&mut self) {
        if self.rewarded {
            return;
        }
        let Some(outcome) = self.state.outcome else {
            return;
        };
        let config = self.engine.config();
        let amount = if outcome == MatchOutcome::PlayerWins {
            config.win_reward
        } else {
            config.loss_reward
        };
        info!(%outcome, credits = amount, "credits awarded");
        self.rewards.award_credits(amount);
        self.rewarded = true;
    }
}
