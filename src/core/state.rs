//! Game state.
//!
//! ## GameState
//!
//! The authoritative match state:
//! - Board (nine slots)
//! - Hands and draw decks per side (decks draw from the front)
//! - Whose turn it is and who started
//! - Outcome once the board fills
//! - Active map and the last placement
//! - Pending blessings, RNG and the instance id allocator
//!
//! Hands and decks are `im::Vector`, so cloning a state for AI simulation
//! shares structure instead of copying every card.
//!
//! Only the turn engine moves a state forward; everything else reads it
//! or works on a clone.

use im::Vector;

use super::action::LastMove;
use super::board::Board;
use super::entity::{InstanceId, InstanceIds};
use super::rng::GameRng;
use super::side::{Side, SideMap};
use super::stats::StatModifier;
use crate::cards::Card;
use crate::maps::MapId;
use crate::rules::MatchOutcome;

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    /// Hands, in deal/draw order.
    pub hands: SideMap<Vector<Card>>,

    /// Draw decks; the front is the next card drawn.
    pub decks: SideMap<Vector<Card>>,

    /// Side to place next.
    pub current: Side,

    /// Side that placed first. The other side gets the end-game bonus.
    pub starting: Side,

    /// `None` while the match is in progress.
    pub outcome: Option<MatchOutcome>,

    pub map: MapId,

    pub last_move: Option<LastMove>,

    /// Bonus waiting for each side's next placement.
    pub blessings: SideMap<Option<StatModifier>>,

    pub rng: GameRng,

    pub ids: InstanceIds,
}

impl GameState {
    /// An empty board with empty hands and decks.
    #[must_use]
    pub fn new(starting: Side, map: MapId, seed: u64) -> Self {
        Self {
            board: Board::new(),
            hands: SideMap::default(),
            decks: SideMap::default(),
            current: starting,
            starting,
            outcome: None,
            map,
            last_move: None,
            blessings: SideMap::default(),
            rng: GameRng::new(seed),
            ids: InstanceIds::new(),
        }
    }

    /// True once the outcome is decided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// A side's hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<Card> {
        &self.hands[side]
    }

    /// A side's draw deck.
    #[must_use]
    pub fn deck(&self, side: Side) -> &Vector<Card> {
        &self.decks[side]
    }

    /// Find a card in a side's hand by instance id.
    #[must_use]
    pub fn hand_card(&self, side: Side, instance: InstanceId) -> Option<&Card> {
        self.hands[side].iter().find(|card| card.instance_id == instance)
    }

    /// Remove a card from a side's hand by instance id.
    pub fn remove_from_hand(&mut self, side: Side, instance: InstanceId) -> Option<Card> {
        let hand = &mut self.hands[side];
        let position = hand.iter().position(|card| card.instance_id == instance)?;
        Some(hand.remove(position))
    }

    /// Move the front card of a side's deck into its hand.
    ///
    /// Returns the drawn card's id; an empty deck is a no-op.
    pub fn draw(&mut self, side: Side) -> Option<InstanceId> {
        let card = self.decks[side].pop_front()?;
        let id = card.instance_id;
        self.hands[side].push_back(card);
        Some(id)
    }
}
