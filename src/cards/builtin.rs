//! The builtin character roster.

use super::definition::{Character, Rarity};
use crate::abilities::AbilityId;
use crate::core::CardStats;

type Entry = (&'static str, &'static str, [i32; 4], Rarity, Option<AbilityId>, &'static str);

#[rustfmt::skip]
const ROSTER: &[Entry] = &[
    ("squire", "Village Squire", [2, 3, 2, 3], Rarity::Common, None, "Eager, if not especially sharp."),
    ("rat", "Giant Rat", [1, 4, 1, 4], Rarity::Common, None, "Fast on the flanks."),
    ("slime", "Green Slime", [3, 3, 3, 3], Rarity::Common, Some(AbilityId::Phantom), "Splits when it lands."),
    ("goblin", "Goblin Scavenger", [2, 5, 2, 1], Rarity::Common, Some(AbilityId::Gambit), "Sometimes it finds treasure."),
    ("shield-bearer", "Shield Bearer", [4, 2, 4, 2], Rarity::Common, Some(AbilityId::Anchor), "Does not budge."),
    ("sky-scout", "Sky Scout", [3, 2, 1, 4], Rarity::Common, Some(AbilityId::Swap), "Drops in behind enemy lines."),
    ("river-wisp", "River Wisp", [2, 2, 3, 3], Rarity::Common, Some(AbilityId::Invisible), "Hard to pin down."),
    ("apprentice", "Arcane Apprentice", [2, 3, 3, 2], Rarity::Common, Some(AbilityId::Study), "Learns from every card in hand."),
    ("knight", "Royal Knight", [6, 4, 6, 4], Rarity::Rare, Some(AbilityId::KnightRally), "Holds the line for the whole army."),
    ("ranger", "Elven Ranger", [7, 2, 3, 6], Rarity::Rare, Some(AbilityId::RangerSnipe), "Shoots over open ground."),
    ("wolf", "Dire Wolf", [5, 5, 2, 2], Rarity::Rare, Some(AbilityId::Rally), "Hunts in packs."),
    ("cleric", "Holy Cleric", [2, 6, 6, 2], Rarity::Rare, Some(AbilityId::ClericBlessing), "Blesses the next to arrive."),
    ("battle-priest", "Battle Priest", [4, 4, 3, 3], Rarity::Rare, Some(AbilityId::GuardianAura), "Shields the flank of every ally."),
    ("minotaur", "Minotaur", [6, 3, 2, 3], Rarity::Rare, Some(AbilityId::BullCharge), "Charges straight ahead."),
    ("bard", "Wandering Bard", [3, 4, 3, 4], Rarity::Rare, Some(AbilityId::Echo), "Repeats the last song played."),
    ("thief", "Sly Thief", [4, 3, 2, 5], Rarity::Rare, Some(AbilityId::Borrow), "Takes what the strongest neighbor has."),
    ("puppeteer", "Puppeteer", [5, 4, 3, 6], Rarity::Rare, Some(AbilityId::Pull), "Drags enemies closer."),
    ("wizard", "High Wizard", [3, 8, 2, 7], Rarity::Epic, Some(AbilityId::Silence), "Words that end other words."),
    ("golem", "Iron Golem", [8, 1, 8, 1], Rarity::Epic, Some(AbilityId::LastStand), "Strongest when alone."),
    ("assassin", "Shadow Assassin", [9, 1, 1, 8], Rarity::Epic, Some(AbilityId::Assassin), "Strikes from across the field."),
    ("sniper", "Tower Sniper", [6, 5, 3, 4], Rarity::Epic, Some(AbilityId::Sniper), "Needs a corner to shoot from."),
    ("paladin", "Crusader Paladin", [4, 5, 4, 5], Rarity::Epic, Some(AbilityId::Crusader), "Grows with every ally."),
    ("chronomancer", "Chronomancer", [5, 4, 5, 4], Rarity::Epic, Some(AbilityId::Timeshift), "Undoes the enemy's last move."),
    ("warlock", "Blood Warlock", [5, 6, 4, 3], Rarity::Epic, Some(AbilityId::Sacrifice), "Feeds on an ally."),
    ("bomber", "Goblin Bomber", [3, 7, 3, 7], Rarity::Epic, Some(AbilityId::Volatile), "Leaves a crater."),
    ("sage", "Elder Sage", [5, 6, 6, 5], Rarity::Epic, Some(AbilityId::Amplify), "Doubles the auras of neighbors."),
    ("seraph", "Seraph", [6, 5, 6, 5], Rarity::Epic, Some(AbilityId::Aura), "Lifts those beside it."),
    ("dragon", "Red Dragon", [9, 8, 9, 8], Rarity::Legendary, Some(AbilityId::DragonFire), "Fans the flames of nearby allies."),
    ("lich", "Lich King", [8, 8, 8, 8], Rarity::Legendary, Some(AbilityId::LichDebuff), "Withers whatever stands beside it."),
    ("void-tyrant", "Void Tyrant", [6, 6, 6, 6], Rarity::Legendary, Some(AbilityId::VoidDrain), "Drinks the strength of the board."),
    ("necromancer", "Bone Necromancer", [7, 5, 7, 5], Rarity::Legendary, Some(AbilityId::NecroticChill), "Chills every enemy."),
    ("archmage", "Archmage", [6, 7, 5, 6], Rarity::Legendary, Some(AbilityId::SuppressionField), "No magic but theirs."),
];

/// Every builtin character, in roster order.
#[must_use]
pub fn builtin_characters() -> Vec<Character> {
    ROSTER
        .iter()
        .map(|&(id, name, [top, right, bottom, left], rarity, ability, description)| {
            let character = Character::new(id, name, CardStats::new(top, right, bottom, left), rarity)
                .with_description(description)
                .with_image(format!("/cards/{id}.png"));
            match ability {
                Some(ability) => character.with_ability(ability),
                None => character,
            }
        })
        .collect()
}
