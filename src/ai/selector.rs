//! Difficulty levels and move selection.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::policy::{GreedyPolicy, LookaheadPolicy, MovePolicy, RandomPolicy};
use crate::core::{GameRng, GameState, Move, Side};
use crate::rules::RulesEngine;

/// AI strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Best immediate board margin.
    #[default]
    Normal,
    /// Best margin after the strongest single reply.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Picks the AI's move for a difficulty.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveSelector {
    difficulty: Difficulty,
}

impl MoveSelector {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The opponent's move, if it is the opponent's turn and it can place.
    pub fn select<E: RulesEngine>(
        &self,
        engine: &E,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<Move> {
        self.select_for(engine, state, Side::Opponent, rng)
    }

    /// Move for `side`. `None` unless `side` is to act in an open match and
    /// has at least one legal move.
    pub fn select_for<E: RulesEngine>(
        &self,
        engine: &E,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Option<Move> {
        if state.is_complete() || state.current != side {
            return None;
        }
        let chosen = match self.difficulty {
            Difficulty::Easy => best_moves(&RandomPolicy, engine, state, side, rng),
            Difficulty::Normal => best_moves(&GreedyPolicy, engine, state, side, rng),
            Difficulty::Hard => best_moves(&LookaheadPolicy, engine, state, side, rng),
        };
        if let Some(mv) = chosen {
            debug!(difficulty = %self.difficulty, %side, %mv, "ai move selected");
        }
        chosen
    }
}

/// Score every legal move and pick uniformly among the maximal ones.
fn best_moves<E, P>(
    policy: &P,
    engine: &E,
    state: &GameState,
    side: Side,
    rng: &mut GameRng,
) -> Option<Move>
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    let mut best = Vec::new();
    let mut best_score = i32::MIN;

    for mv in engine.legal_moves(state, side) {
        let score = policy.score(engine, state, side, mv, rng);
        trace!(%mv, score, "candidate");
        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score == best_score {
            best.push(mv);
        }
    }
    rng.choose(&best).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rarity};
    use crate::core::{CardStats, InstanceId};
    use crate::game::Engine;
    use crate::maps::MapId;

    fn card(id: u32, owner: Side, stats: CardStats) -> Card {
        Card::new(InstanceId(id), "Test", owner, Rarity::Common, stats)
    }

    #[test]
    fn test_only_on_own_turn() {
        let engine = Engine::standard();
        let state = engine.new_match(Side::Player, None);
        let mut rng = GameRng::new(1);

        assert!(MoveSelector::new(Difficulty::Easy).select(&engine, &state, &mut rng).is_none());
        assert!(MoveSelector::new(Difficulty::Easy)
            .select_for(&engine, &state, Side::Player, &mut rng)
            .is_some());
    }

    #[test]
    fn test_greedy_takes_the_capture() {
        let engine = Engine::standard();
        let mut state = GameState::new(Side::Opponent, MapId::None, 3);
        state.board.set(4, Some(card(1, Side::Player, CardStats::uniform(1))));
        state.hands[Side::Opponent].push_back(card(2, Side::Opponent, CardStats::new(1, 1, 1, 6)));
        let mut rng = GameRng::new(5);

        let mv = MoveSelector::new(Difficulty::Normal).select(&engine, &state, &mut rng);
        assert_eq!(mv, Some(Move::new(InstanceId(2), 5)));
    }

    #[test]
    fn test_no_legal_moves() {
        let engine = Engine::standard();
        let state = GameState::new(Side::Opponent, MapId::None, 3);
        let mut rng = GameRng::new(5);
        for difficulty in Difficulty::ALL {
            assert!(MoveSelector::new(difficulty).select(&engine, &state, &mut rng).is_none());
        }
    }

    #[test]
    fn test_difficulty_serde() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }
}
