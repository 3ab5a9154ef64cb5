//! On-reveal handlers.
//!
//! Each handler runs once against the working board, right after its card
//! is placed. A handler whose target condition is unmet does nothing.
//!
//! Rally, borrow, study and cleric blessings change `base_stats` along with
//! `stats`; every other stat change here touches `stats` only.

use tracing::debug;

use super::context::RevealContext;
use super::definition::AbilityId;
use crate::core::{board, CardStats, Direction, Side, StatModifier, BOARD_SLOTS};

/// Charge toward the enemy's side of the board: up for the player, down
/// for the opponent. Each of the next two slots in the column is captured
/// if this card's top beats its bottom. Stops at an empty slot or an ally.
pub fn bull_charge(ctx: &mut RevealContext<'_>) {
    let Some(attack) = ctx.card().map(|c| c.stats.top) else {
        return;
    };
    let heading = match ctx.owner {
        Side::Player => Direction::Top,
        Side::Opponent => Direction::Bottom,
    };

    for distance in 1..=2 {
        let Some(target) = board::step(ctx.index, heading, distance) else {
            break;
        };
        let defense = match ctx.board.get(target) {
            Some(card) if card.owner != ctx.owner => (!card.is_invisible()).then_some(card.stats.bottom),
            _ => break,
        };
        if defense.is_some_and(|defense| attack > defense) {
            ctx.convert(target);
        }
    }
}

/// +1 to all sides of adjacent allies.
pub fn rally(ctx: &mut RevealContext<'_>) {
    for target in ctx.neighbors() {
        if ctx.is_ally(target) {
            if let Some(card) = ctx.board.get_mut(target) {
                card.buff_all(1, true);
            }
        }
    }
}

/// Destroy the enemy in the point-mirrored slot.
pub fn assassin(ctx: &mut RevealContext<'_>) {
    let target = board::mirror(ctx.index);
    if target != ctx.index && ctx.is_removable_enemy(target) {
        ctx.destroy(target);
    }
}

/// From a corner, destroy the enemy in the opposite corner.
pub fn sniper(ctx: &mut RevealContext<'_>) {
    if board::is_corner(ctx.index) {
        assassin(ctx);
    }
}

/// Trade places with the first adjacent enemy.
pub fn swap(ctx: &mut RevealContext<'_>) {
    let Some(target) = ctx.neighbors().into_iter().find(|&i| ctx.is_removable_enemy(i)) else {
        return;
    };
    ctx.board.swap(ctx.index, target);
    ctx.index = target;
}

/// Drag an enemy two slots away into the empty slot between.
pub fn pull(ctx: &mut RevealContext<'_>) {
    for direction in Direction::ALL {
        let (Some(gap), Some(far)) = (
            board::step(ctx.index, direction, 1),
            board::step(ctx.index, direction, 2),
        ) else {
            continue;
        };
        if ctx.board.is_empty_at(gap) && ctx.is_removable_enemy(far) {
            ctx.board.swap(gap, far);
            return;
        }
    }
}

/// Put a copy of this card in the first empty neighbor.
pub fn phantom(ctx: &mut RevealContext<'_>) {
    let Some(original) = ctx.card().cloned() else {
        return;
    };
    let Some(target) = ctx.neighbors().into_iter().find(|&i| ctx.board.is_empty_at(i)) else {
        return;
    };

    let mut copy = original;
    copy.instance_id = ctx.ids.alloc();
    copy.owner = ctx.owner;
    ctx.board.set(target, Some(copy));
}

/// Run the last placed card's on-reveal again, with this card as source.
pub fn echo(ctx: &mut RevealContext<'_>) {
    let Some(last) = ctx.last_move() else {
        return;
    };
    // A card silenced since it was played has nothing left to echo.
    let ability = match ctx.board.find(last.card.instance_id) {
        Some(index) => ctx.board.get(index).and_then(|c| c.ability),
        None => last.card.ability,
    };
    let Some(ability) = ability.filter(|&id| id != AbilityId::Echo) else {
        return;
    };

    let catalog = ctx.catalog;
    if let Some(handler) = catalog.get(ability).and_then(|d| d.on_reveal()) {
        debug!(echoed = %ability, "echo");
        ctx.effects.fired.push(ability);
        handler(ctx);
    }
}

/// Copy the raw stats of the strongest neighbor.
pub fn borrow(ctx: &mut RevealContext<'_>) {
    let mut best: Option<(i32, CardStats)> = None;
    for target in ctx.neighbors() {
        let Some(card) = ctx.board.get(target) else {
            continue;
        };
        if card.owner != ctx.owner && card.is_invisible() {
            continue;
        }
        let total = card.stats.total();
        if total > best.map_or(-1, |(t, _)| t) {
            best = Some((total, card.stats));
        }
    }

    if let Some((_, stats)) = best {
        if let Some(card) = ctx.card_mut() {
            card.stats = stats;
            if card.base_stats.is_some() {
                card.base_stats = Some(stats);
            }
        }
    }
}

/// Coin flip: +1 or -1 to all sides.
pub fn gambit(ctx: &mut RevealContext<'_>) {
    let delta = if ctx.rng.gen_bool(0.5) { 1 } else { -1 };
    if let Some(card) = ctx.card_mut() {
        card.buff_all(delta, false);
    }
}

/// Destroy the strongest adjacent ally and absorb its stats.
pub fn sacrifice(ctx: &mut RevealContext<'_>) {
    let mut best: Option<(usize, i32)> = None;
    for target in ctx.neighbors() {
        let Some(card) = ctx.board.get(target) else {
            continue;
        };
        if card.owner != ctx.owner || card.instance_id == ctx.source || card.is_anchored() {
            continue;
        }
        let total = card.stats.total();
        if total > best.map_or(0, |(_, t)| t) {
            best = Some((target, total));
        }
    }

    let Some((target, _)) = best else {
        return;
    };
    if let Some(ally) = ctx.destroy(target) {
        if let Some(card) = ctx.card_mut() {
            card.stats.add_stats(&ally.stats);
        }
    }
}

/// Destroy every neighbor, then this card.
pub fn volatile(ctx: &mut RevealContext<'_>) {
    for target in ctx.neighbors() {
        ctx.destroy(target);
    }
    ctx.destroy(ctx.index);
}

/// Send the enemy's last placed card back to their hand at base stats.
pub fn timeshift(ctx: &mut RevealContext<'_>) {
    let Some(last) = ctx.last_move() else {
        return;
    };
    if last.side == ctx.owner {
        return;
    }
    let still_there = ctx
        .board
        .get(last.index)
        .is_some_and(|c| c.instance_id == last.card.instance_id && !c.is_anchored() && !c.is_invisible());
    if !still_there {
        return;
    }

    if let Some(mut card) = ctx.board.take(last.index) {
        if let Some(base) = card.base_stats {
            card.stats = base;
        }
        card.owner = last.side;
        ctx.effects.returned.push((last.side, card));
    }
}

/// +1 to all sides per card in the owner's hand, this card included.
pub fn study(ctx: &mut RevealContext<'_>) {
    let bonus = ctx.state.hand(ctx.owner).len() as i32;
    if bonus == 0 {
        return;
    }
    if let Some(card) = ctx.card_mut() {
        card.buff_all(bonus, true);
    }
}

/// Strip the abilities of adjacent enemies.
pub fn silence(ctx: &mut RevealContext<'_>) {
    for target in ctx.neighbors() {
        if ctx.is_targetable_enemy(target) {
            if let Some(card) = ctx.board.get_mut(target) {
                card.ability = None;
            }
        }
    }
}

/// Attack the cards two slots away in each direction over an empty gap.
pub fn ranger_snipe(ctx: &mut RevealContext<'_>) {
    let Some(stats) = ctx.card().map(|c| c.stats) else {
        return;
    };

    for direction in Direction::ALL {
        let Some(target) = board::step(ctx.index, direction, 2) else {
            continue;
        };
        let blocked = board::step(ctx.index, direction, 1).is_some_and(|gap| !ctx.board.is_empty_at(gap));
        if blocked || !ctx.is_targetable_enemy(target) {
            continue;
        }
        let defense = ctx.board.get(target).map_or(i32::MAX, |c| c.stats.get(direction.opposite()));
        if stats.get(direction) > defense {
            ctx.convert(target);
        }
    }
}

/// The owner's next placed card gains +1 bottom.
pub fn cleric_blessing(ctx: &mut RevealContext<'_>) {
    ctx.effects
        .blessing
        .get_or_insert_with(StatModifier::none)
        .merge(&StatModifier::only(Direction::Bottom, 1));
}

/// Take 1 from every positive side of every enemy and spread it over this card.
pub fn void_drain(ctx: &mut RevealContext<'_>) {
    let owner = ctx.owner;
    let mut drained = 0;
    for index in 0..BOARD_SLOTS {
        let Some(card) = ctx.board.get_mut(index) else {
            continue;
        };
        if card.owner == owner || card.is_invisible() {
            continue;
        }
        for direction in Direction::ALL {
            let value = card.stats.get_mut(direction);
            if *value > 0 {
                *value -= 1;
                drained += 1;
            }
        }
    }

    let (share, rest) = (drained / 4, drained % 4);
    if let Some(card) = ctx.card_mut() {
        card.stats.top += share + i32::from(rest > 0);
        card.stats.right += share + i32::from(rest > 1);
        card.stats.bottom += share + i32::from(rest > 2);
        card.stats.left += share;
    }
}
