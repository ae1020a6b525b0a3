//! Equipment templates for cards and heroes.

use crate::items::types::{EquipmentSlot, Rarity, StatBonus};

#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub bonus: StatBonus,
}

const fn bonus(hp: u32, atk: u32, def: u32, spd: u32, crit: f64) -> StatBonus {
    StatBonus {
        hp,
        atk,
        def,
        spd,
        crit,
    }
}

/// Gear cards can wear (weapon/armor/accessory).
pub static CARD_EQUIPMENT: &[EquipmentTemplate] = &[
    EquipmentTemplate {
        id: "eq_wood_sword",
        name: "Wooden Sword",
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::Common,
        bonus: bonus(0, 10, 0, 0, 0.0),
    },
    EquipmentTemplate {
        id: "eq_iron_sword",
        name: "Iron Sword",
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::Rare,
        bonus: bonus(0, 25, 0, 0, 0.02),
    },
    EquipmentTemplate {
        id: "eq_dragon_blade",
        name: "Dragonbone Blade",
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::UltraRare,
        bonus: bonus(0, 60, 0, 0, 0.05),
    },
    EquipmentTemplate {
        id: "eq_leather_armor",
        name: "Leather Armor",
        slot: EquipmentSlot::Armor,
        rarity: Rarity::Common,
        bonus: bonus(50, 0, 8, 0, 0.0),
    },
    EquipmentTemplate {
        id: "eq_chain_mail",
        name: "Chain Mail",
        slot: EquipmentSlot::Armor,
        rarity: Rarity::Rare,
        bonus: bonus(120, 0, 20, 0, 0.0),
    },
    EquipmentTemplate {
        id: "eq_aegis",
        name: "Aegis Plate",
        slot: EquipmentSlot::Armor,
        rarity: Rarity::UltraRare,
        bonus: bonus(300, 0, 45, 0, 0.0),
    },
    EquipmentTemplate {
        id: "eq_lucky_charm",
        name: "Lucky Charm",
        slot: EquipmentSlot::Accessory,
        rarity: Rarity::Common,
        bonus: bonus(0, 0, 0, 0, 0.03),
    },
    EquipmentTemplate {
        id: "eq_swift_ring",
        name: "Ring of Haste",
        slot: EquipmentSlot::Accessory,
        rarity: Rarity::Rare,
        bonus: bonus(0, 0, 0, 5, 0.0),
    },
    EquipmentTemplate {
        id: "eq_heart_pendant",
        name: "Heart Pendant",
        slot: EquipmentSlot::Accessory,
        rarity: Rarity::SuperRare,
        bonus: bonus(200, 0, 0, 0, 0.0),
    },
];

/// Gear heroes can wear (all five slots).
pub static HERO_EQUIPMENT: &[EquipmentTemplate] = &[
    EquipmentTemplate {
        id: "heq_longsword",
        name: "Captain's Longsword",
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::Rare,
        bonus: bonus(0, 30, 0, 0, 0.02),
    },
    EquipmentTemplate {
        id: "heq_runestaff",
        name: "Runestaff",
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::SuperRare,
        bonus: bonus(0, 45, 0, 0, 0.04),
    },
    EquipmentTemplate {
        id: "heq_iron_helm",
        name: "Iron Helm",
        slot: EquipmentSlot::Helm,
        rarity: Rarity::Common,
        bonus: bonus(40, 0, 8, 0, 0.0),
    },
    EquipmentTemplate {
        id: "heq_crown",
        name: "Circlet of Command",
        slot: EquipmentSlot::Helm,
        rarity: Rarity::UltraRare,
        bonus: bonus(80, 10, 10, 0, 0.03),
    },
    EquipmentTemplate {
        id: "heq_breastplate",
        name: "Breastplate",
        slot: EquipmentSlot::Armor,
        rarity: Rarity::Uncommon,
        bonus: bonus(150, 0, 18, 0, 0.0),
    },
    EquipmentTemplate {
        id: "heq_dragon_mail",
        name: "Dragonscale Mail",
        slot: EquipmentSlot::Armor,
        rarity: Rarity::Legend,
        bonus: bonus(400, 0, 50, 0, 0.0),
    },
    EquipmentTemplate {
        id: "heq_boots",
        name: "Traveller's Boots",
        slot: EquipmentSlot::Boots,
        rarity: Rarity::Common,
        bonus: bonus(0, 0, 3, 4, 0.0),
    },
    EquipmentTemplate {
        id: "heq_windwalkers",
        name: "Windwalkers",
        slot: EquipmentSlot::Boots,
        rarity: Rarity::SuperRare,
        bonus: bonus(0, 0, 5, 10, 0.0),
    },
    EquipmentTemplate {
        id: "heq_signet",
        name: "Signet Ring",
        slot: EquipmentSlot::Accessory,
        rarity: Rarity::Uncommon,
        bonus: bonus(0, 8, 0, 0, 0.02),
    },
    EquipmentTemplate {
        id: "heq_amulet",
        name: "Amulet of Vigor",
        slot: EquipmentSlot::Accessory,
        rarity: Rarity::Rare,
        bonus: bonus(120, 0, 0, 2, 0.0),
    },
];

pub fn get_card_equipment(id: &str) -> Option<&'static EquipmentTemplate> {
    CARD_EQUIPMENT.iter().find(|t| t.id == id)
}

pub fn get_hero_equipment(id: &str) -> Option<&'static EquipmentTemplate> {
    HERO_EQUIPMENT.iter().find(|t| t.id == id)
}
