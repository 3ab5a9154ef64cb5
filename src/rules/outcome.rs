//! Win condition.
//!
//! Evaluated only on a full board. Each side scores the slots it owns and
//! the side that did not start gets one bonus point. Higher score wins;
//! equal scores draw.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Side};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOutcome {
    PlayerWins,
    OpponentWins,
    Draw,
}

impl MatchOutcome {
    /// The winning side, `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            MatchOutcome::PlayerWins => Some(Side::Player),
            MatchOutcome::OpponentWins => Some(Side::Opponent),
            MatchOutcome::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// Outcome naming a winner.
    #[must_use]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Player => MatchOutcome::PlayerWins,
            Side::Opponent => MatchOutcome::OpponentWins,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::PlayerWins => f.write_str("player wins"),
            MatchOutcome::OpponentWins => f.write_str("opponent wins"),
            MatchOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Adjusted slot counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: i32,
    pub opponent: i32,
}

impl Score {
    /// One side's score.
    #[must_use]
    pub const fn get(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Owned slots per side, plus one for the side that did not start.
///
/// Valid on any board; only a full board decides the match.
#[must_use]
pub fn score(board: &Board, starting: Side) -> Score {
    let mut score = Score {
        player: board.count(Side::Player) as i32,
        opponent: board.count(Side::Opponent) as i32,
    };
    match starting.other() {
        Side::Player => score.player += 1,
        Side::Opponent => score.opponent += 1,
    }
    score
}

/// Outcome of the board, `None` until all nine slots are filled.
#[must_use]
pub fn evaluate_outcome(board: &Board, starting: Side) -> Option<MatchOutcome> {
    if !board.is_full() {
        return None;
    }
    Some(decide(board, starting))
}

/// Score the board as it stands, full or not.
///
/// Used directly only when neither side has a card left to place.
#[must_use]
pub fn decide(board: &Board, starting: Side) -> MatchOutcome {
    let score = score(board, starting);
    match score.player.cmp(&score.opponent) {
        std::cmp::Ordering::Greater => MatchOutcome::PlayerWins,
        std::cmp::Ordering::Less => MatchOutcome::OpponentWins,
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    }
}
