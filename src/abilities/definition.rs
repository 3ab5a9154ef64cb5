//! Ability identifiers and definitions.
//!
//! ## AbilityId
//!
//! A closed enumeration of every ability in the game. Each id has a fixed
//! trigger kind; the catalog pairs it with exactly one handler of that kind.
//!
//! ## Handlers
//!
//! - `OnReveal`: runs once, right after the card is placed and before
//!   captures, against a working copy of the board.
//! - `Ongoing`: re-derived on every stat read; returns per-slot deltas and
//!   never mutates anything.

use serde::{Deserialize, Serialize};

use super::context::{Contribution, OngoingContext, RevealContext};

/// Every ability in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityId {
    GuardianAura,
    NecroticChill,
    BullCharge,
    Rally,
    Assassin,
    Crusader,
    Sniper,
    Swap,
    Pull,
    Anchor,
    Phantom,
    Echo,
    Amplify,
    Borrow,
    SuppressionField,
    Gambit,
    Sacrifice,
    LastStand,
    Volatile,
    Timeshift,
    Invisible,
    Study,
    Aura,
    Silence,
    RangerSnipe,
    LichDebuff,
    KnightRally,
    ClericBlessing,
    DragonFire,
    VoidDrain,
}

impl AbilityId {
    /// Every ability id.
    pub const ALL: [AbilityId; 30] = [
        AbilityId::GuardianAura,
        AbilityId::NecroticChill,
        AbilityId::BullCharge,
        AbilityId::Rally,
        AbilityId::Assassin,
        AbilityId::Crusader,
        AbilityId::Sniper,
        AbilityId::Swap,
        AbilityId::Pull,
        AbilityId::Anchor,
        AbilityId::Phantom,
        AbilityId::Echo,
        AbilityId::Amplify,
        AbilityId::Borrow,
        AbilityId::SuppressionField,
        AbilityId::Gambit,
        AbilityId::Sacrifice,
        AbilityId::LastStand,
        AbilityId::Volatile,
        AbilityId::Timeshift,
        AbilityId::Invisible,
        AbilityId::Study,
        AbilityId::Aura,
        AbilityId::Silence,
        AbilityId::RangerSnipe,
        AbilityId::LichDebuff,
        AbilityId::KnightRally,
        AbilityId::ClericBlessing,
        AbilityId::DragonFire,
        AbilityId::VoidDrain,
    ];

    /// The wire id, e.g. `"bull-charge"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AbilityId::GuardianAura => "guardian-aura",
            AbilityId::NecroticChill => "necrotic-chill",
            AbilityId::BullCharge => "bull-charge",
            AbilityId::Rally => "rally",
            AbilityId::Assassin => "assassin",
            AbilityId::Crusader => "crusader",
            AbilityId::Sniper => "sniper",
            AbilityId::Swap => "swap",
            AbilityId::Pull => "pull",
            AbilityId::Anchor => "anchor",
            AbilityId::Phantom => "phantom",
            AbilityId::Echo => "echo",
            AbilityId::Amplify => "amplify",
            AbilityId::Borrow => "borrow",
            AbilityId::SuppressionField => "suppression-field",
            AbilityId::Gambit => "gambit",
            AbilityId::Sacrifice => "sacrifice",
            AbilityId::LastStand => "last-stand",
            AbilityId::Volatile => "volatile",
            AbilityId::Timeshift => "timeshift",
            AbilityId::Invisible => "invisible",
            AbilityId::Study => "study",
            AbilityId::Aura => "aura",
            AbilityId::Silence => "silence",
            AbilityId::RangerSnipe => "ranger-snipe",
            AbilityId::LichDebuff => "lich-debuff",
            AbilityId::KnightRally => "knight-rally",
            AbilityId::ClericBlessing => "cleric-blessing",
            AbilityId::DragonFire => "dragon-fire",
            AbilityId::VoidDrain => "void-drain",
        }
    }

    /// Fixed trigger kind of this ability.
    #[must_use]
    pub const fn trigger(self) -> AbilityTrigger {
        match self {
            AbilityId::GuardianAura
            | AbilityId::NecroticChill
            | AbilityId::Crusader
            | AbilityId::Anchor
            | AbilityId::Amplify
            | AbilityId::SuppressionField
            | AbilityId::LastStand
            | AbilityId::Invisible
            | AbilityId::Aura
            | AbilityId::LichDebuff
            | AbilityId::KnightRally
            | AbilityId::DragonFire => AbilityTrigger::Ongoing,
            _ => AbilityTrigger::OnReveal,
        }
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When an ability acts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AbilityTrigger {
    /// Once, at placement.
    OnReveal,
    /// Continuously, while on the board.
    Ongoing,
}

/// On-reveal handler: mutates the working board through the context.
pub type RevealHandler = fn(&mut RevealContext<'_>);

/// Ongoing handler: reads the board, returns per-slot deltas.
pub type OngoingHandler = fn(&OngoingContext<'_>) -> Vec<Contribution>;

/// Exactly one handler, matching the trigger kind.
#[derive(Clone, Copy)]
pub enum AbilityHandler {
    OnReveal(RevealHandler),
    Ongoing(OngoingHandler),
}

impl std::fmt::Debug for AbilityHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbilityHandler::OnReveal(_) => f.write_str("OnReveal(..)"),
            AbilityHandler::Ongoing(_) => f.write_str("Ongoing(..)"),
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug)]
pub struct AbilityDefinition {
    pub id: AbilityId,

    /// Display name.
    pub name: &'static str,

    /// Rules text.
    pub text: &'static str,

    pub handler: AbilityHandler,
}

impl AbilityDefinition {
    /// Trigger kind, derived from the populated handler.
    #[must_use]
    pub fn trigger(&self) -> AbilityTrigger {
        match self.handler {
            AbilityHandler::OnReveal(_) => AbilityTrigger::OnReveal,
            AbilityHandler::Ongoing(_) => AbilityTrigger::Ongoing,
        }
    }

    /// The on-reveal handler, if this is an on-reveal ability.
    #[must_use]
    pub fn on_reveal(&self) -> Option<RevealHandler> {
        match self.handler {
            AbilityHandler::OnReveal(handler) => Some(handler),
            AbilityHandler::Ongoing(_) => None,
        }
    }

    /// The ongoing handler, if this is an ongoing ability.
    #[must_use]
    pub fn ongoing(&self) -> Option<OngoingHandler> {
        match self.handler {
            AbilityHandler::Ongoing(handler) => Some(handler),
            AbilityHandler::OnReveal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_ids_match_serde() {
        for id in AbilityId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_trigger_kinds() {
        assert_eq!(AbilityId::BullCharge.trigger(), AbilityTrigger::OnReveal);
        assert_eq!(AbilityId::LichDebuff.trigger(), AbilityTrigger::Ongoing);
        assert_eq!(AbilityId::Echo.trigger(), AbilityTrigger::OnReveal);
        assert_eq!(
            AbilityId::ALL.iter().filter(|id| id.trigger() == AbilityTrigger::Ongoing).count(),
            12
        );
    }

    #[test]
    fn test_trigger_serde() {
        assert_eq!(serde_json::to_string(&AbilityTrigger::OnReveal).unwrap(), "\"onReveal\"");
    }
}
