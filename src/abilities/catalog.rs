//! The ability catalog.
//!
//! An immutable id-to-definition table, built once and shared by
//! reference with the resolver, the aggregator and the AI.

use rustc_hash::FxHashMap;

use super::definition::{AbilityDefinition, AbilityHandler, AbilityId};
use super::{ongoing, reveal};

/// Ability lookup table.
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    definitions: FxHashMap<AbilityId, AbilityDefinition>,
}

impl AbilityCatalog {
    /// An empty catalog. Cards whose ability is missing here do nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ability in the game.
    #[must_use]
    pub fn standard() -> Self {
        use AbilityHandler::{Ongoing, OnReveal};
        use AbilityId as Id;

        let entries: [(AbilityId, &'static str, &'static str, AbilityHandler); 30] = [
            (Id::GuardianAura, "Guardian Aura", "Ongoing: Allied cards gain +1 left.", Ongoing(ongoing::guardian_aura)),
            (Id::NecroticChill, "Necrotic Chill", "Ongoing: All enemy cards lose 1 from all sides.", Ongoing(ongoing::necrotic_chill)),
            (Id::BullCharge, "Bull Charge", "On Reveal: Charges toward the enemy, battling through up to two enemy cards in this column using its top vs their bottom.", OnReveal(reveal::bull_charge)),
            (Id::Rally, "Rally", "On Reveal: +1 to all sides of adjacent allied cards.", OnReveal(reveal::rally)),
            (Id::Assassin, "Assassin", "On Reveal: Destroy the card opposite to this one (if enemy).", OnReveal(reveal::assassin)),
            (Id::Crusader, "Crusader", "Ongoing: Gains +1 to all sides for each other allied card on the board.", Ongoing(ongoing::crusader)),
            (Id::Sniper, "Sniper", "On Reveal: If placed in a corner, destroy the enemy card in the opposite corner.", OnReveal(reveal::sniper)),
            (Id::Swap, "Swap", "On Reveal: Swap positions with an adjacent enemy card.", OnReveal(reveal::swap)),
            (Id::Pull, "Pull", "On Reveal: Pulls an enemy two slots away into the empty slot next to this card.", OnReveal(reveal::pull)),
            (Id::Anchor, "Anchor", "Ongoing: Cannot be moved or destroyed.", Ongoing(ongoing::passive)),
            (Id::Phantom, "Phantom", "On Reveal: Creates a copy of itself in an empty adjacent slot.", OnReveal(reveal::phantom)),
            (Id::Echo, "Echo", "On Reveal: Triggers the On Reveal ability of the last played card.", OnReveal(reveal::echo)),
            (Id::Amplify, "Amplify", "Ongoing: Doubles the effect of adjacent allied ongoing abilities.", Ongoing(ongoing::passive)),
            (Id::Borrow, "Borrow", "On Reveal: Copies the stats of the strongest adjacent card.", OnReveal(reveal::borrow)),
            (Id::SuppressionField, "Suppression", "Ongoing: Negates all other abilities on the board.", Ongoing(ongoing::passive)),
            (Id::Gambit, "Gambit", "On Reveal: 50% chance to gain +1 to all stats, 50% chance to lose 1 from all stats.", OnReveal(reveal::gambit)),
            (Id::Sacrifice, "Sacrifice", "On Reveal: Destroy an adjacent ally to gain its stats.", OnReveal(reveal::sacrifice)),
            (Id::LastStand, "Last Stand", "Ongoing: If this is your last card, it gains +5 to all sides.", Ongoing(ongoing::last_stand)),
            (Id::Volatile, "Volatile", "On Reveal: Explodes, destroying itself and all adjacent cards.", OnReveal(reveal::volatile)),
            (Id::Timeshift, "Timeshift", "On Reveal: Returns the last played enemy card to their hand.", OnReveal(reveal::timeshift)),
            (Id::Invisible, "Invisible", "Ongoing: Cannot be targeted by enemy abilities.", Ongoing(ongoing::passive)),
            (Id::Study, "Study", "On Reveal: Gains +1 to all stats for each card in your hand.", OnReveal(reveal::study)),
            (Id::Aura, "Aura", "Ongoing: Adjacent allies gain +1.", Ongoing(ongoing::aura)),
            (Id::Silence, "Silence", "On Reveal: Silences adjacent enemy cards, removing their abilities.", OnReveal(reveal::silence)),
            (Id::RangerSnipe, "Long Shot", "On Reveal: Attacks cards that are 2 slots away in all directions.", OnReveal(reveal::ranger_snipe)),
            (Id::LichDebuff, "Death Aura", "Ongoing: Adjacent enemy cards lose 2 from all stats.", Ongoing(ongoing::lich_debuff)),
            (Id::KnightRally, "Defensive Formation", "Ongoing: All allied cards gain +1 bottom.", Ongoing(ongoing::knight_rally)),
            (Id::ClericBlessing, "Divine Blessing", "On Reveal: The next card you play gains +1 bottom.", OnReveal(reveal::cleric_blessing)),
            (Id::DragonFire, "Dragon Fire", "Ongoing: Adjacent allied cards gain +2 top.", Ongoing(ongoing::dragon_fire)),
            (Id::VoidDrain, "Void Drain", "On Reveal: Steals 1 from all stats of all enemy cards on the board.", OnReveal(reveal::void_drain)),
        ];

        let mut catalog = Self::new();
        for (id, name, text, handler) in entries {
            catalog.insert(AbilityDefinition { id, name, text, handler });
        }
        catalog
    }

    /// Add or replace a definition.
    ///
    /// Panics if the handler kind disagrees with the id's trigger kind.
    pub fn insert(&mut self, definition: AbilityDefinition) {
        assert_eq!(
            definition.trigger(),
            definition.id.trigger(),
            "handler kind does not match trigger of {}",
            definition.id
        );
        self.definitions.insert(definition.id, definition);
    }

    /// Look up a definition.
    #[must_use]
    pub fn get(&self, id: AbilityId) -> Option<&AbilityDefinition> {
        self.definitions.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions, in `AbilityId` order.
    pub fn iter(&self) -> impl Iterator<Item = &AbilityDefinition> {
        AbilityId::ALL.into_iter().filter_map(|id| self.definitions.get(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_complete() {
        let catalog = AbilityCatalog::standard();
        assert_eq!(catalog.len(), AbilityId::ALL.len());
        for id in AbilityId::ALL {
            let definition = catalog.get(id).unwrap();
            assert_eq!(definition.trigger(), id.trigger());
        }
    }

    #[test]
    fn test_handler_slot_matches_trigger() {
        let catalog = AbilityCatalog::standard();
        let rally = catalog.get(AbilityId::Rally).unwrap();
        assert!(rally.on_reveal().is_some());
        assert!(rally.ongoing().is_none());

        let aura = catalog.get(AbilityId::Aura).unwrap();
        assert!(aura.ongoing().is_some());
        assert!(aura.on_reveal().is_none());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_mismatched_handler_rejected() {
        let mut catalog = AbilityCatalog::new();
        catalog.insert(AbilityDefinition {
            id: AbilityId::Rally,
            name: "Rally",
            text: "",
            handler: AbilityHandler::Ongoing(ongoing::passive),
        });
    }
}
