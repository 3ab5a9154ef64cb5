//! Placement errors.

use thiserror::Error;

use crate::core::{InstanceId, Side};

/// Why a placement was refused. The state is never changed when one of
/// these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("match is already complete")]
    MatchComplete,

    #[error("slot {0} is occupied")]
    SlotOccupied(usize),

    #[error("slot {0} is off the board")]
    IndexOutOfRange(usize),

    #[error("{card} is not in the {side} hand")]
    CardNotInHand { card: InstanceId, side: Side },

    #[error("it is not the {0} side's turn")]
    OutOfTurn(Side),

    #[error("move was planned for an earlier state")]
    StaleMove,
}
