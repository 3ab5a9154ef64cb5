//! Ongoing handlers.
//!
//! Pure functions of the board. They read raw `stats` and ownership only,
//! so a source can be evaluated while its own effective stats are being
//! computed.
//!
//! Anchor, invisible, amplify and suppression field contribute no deltas;
//! targeting and the resolver check for them directly.

use super::context::{Contribution, OngoingContext};
use crate::core::{Direction, StatModifier};

/// Allies, this card included, gain +1 left.
pub fn guardian_aura(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    ctx.allies()
        .map(|(i, _)| Contribution::new(i, StatModifier::only(Direction::Left, 1)))
        .collect()
}

/// Every enemy loses 1 from all sides.
pub fn necrotic_chill(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    ctx.enemies()
        .map(|(i, _)| Contribution::new(i, StatModifier::uniform(-1)))
        .collect()
}

/// +1 to all sides per other allied card.
pub fn crusader(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    let allies = ctx
        .allies()
        .filter(|(_, c)| c.instance_id != ctx.card.instance_id)
        .count() as i32;
    if allies == 0 {
        return Vec::new();
    }
    vec![Contribution::new(ctx.index, StatModifier::uniform(allies))]
}

/// Adjacent enemies lose 2 from all sides.
pub fn lich_debuff(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    ctx.adjacent()
        .filter(|(_, c)| c.owner != ctx.card.owner)
        .map(|(i, _)| Contribution::new(i, StatModifier::uniform(-2)))
        .collect()
}

/// Allies, this card included, gain +1 bottom.
pub fn knight_rally(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    ctx.allies()
        .map(|(i, _)| Contribution::new(i, StatModifier::only(Direction::Bottom, 1)))
        .collect()
}

/// Adjacent allies gain +2 top.
pub fn dragon_fire(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    ctx.adjacent()
        .filter(|(_, c)| c.owner == ctx.card.owner)
        .map(|(i, _)| Contribution::new(i, StatModifier::only(Direction::Top, 2)))
        .collect()
}

/// Adjacent allies gain +1 to all sides.
pub fn aura(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    ctx.adjacent()
        .filter(|(_, c)| c.owner == ctx.card.owner)
        .map(|(i, _)| Contribution::new(i, StatModifier::uniform(1)))
        .collect()
}

/// +5 to all sides while this is the owner's only card on the board.
pub fn last_stand(ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    if ctx.allies().count() == 1 {
        vec![Contribution::new(ctx.index, StatModifier::uniform(5))]
    } else {
        Vec::new()
    }
}

/// No deltas of its own.
pub fn passive(_ctx: &OngoingContext<'_>) -> Vec<Contribution> {
    Vec::new()
}
