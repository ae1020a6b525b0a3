use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    SuperRare = 3,
    UltraRare = 4,
    Legend = 5,
    Mythical = 6,
}

impl Rarity {
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::SuperRare,
        Rarity::UltraRare,
        Rarity::Legend,
        Rarity::Mythical,
    ];

    /// Short code shown on card frames.
    pub fn code(&self) -> &'static str {
        match self {
            Rarity::Common => "C",
            Rarity::Uncommon => "U",
            Rarity::Rare => "R",
            Rarity::SuperRare => "SR",
            Rarity::UltraRare => "UR",
            Rarity::Legend => "LEGEND",
            Rarity::Mythical => "MYTHICAL",
        }
    }

    /// Star tier a freshly created card of this rarity starts at.
    pub fn base_star(&self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::SuperRare => 4,
            Rarity::UltraRare => 5,
            Rarity::Legend => 6,
            Rarity::Mythical => 7,
        }
    }

    /// Highest star tier evolution can reach for this rarity.
    pub fn max_star(&self) -> u32 {
        match self {
            Rarity::Common => 3,
            Rarity::Uncommon => 4,
            Rarity::Rare => 5,
            Rarity::SuperRare | Rarity::UltraRare | Rarity::Legend => 6,
            Rarity::Mythical => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Light,
    Dark,
    /// Matches every element preference during gacha filtering.
    Neutral,
}

impl Element {
    pub const ALL: [Element; 7] = [
        Element::Fire,
        Element::Water,
        Element::Wind,
        Element::Earth,
        Element::Light,
        Element::Dark,
        Element::Neutral,
    ];

    pub const WILDCARD: Element = Element::Neutral;

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Wind => "Wind",
            Element::Earth => "Earth",
            Element::Light => "Light",
            Element::Dark => "Dark",
            Element::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Helm,
    Armor,
    Boots,
    Accessory,
}

impl EquipmentSlot {
    /// Slots a card can fill.
    pub const CARD_SLOTS: [EquipmentSlot; 3] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Accessory,
    ];

    /// Slots a hero can fill.
    pub const HERO_SLOTS: [EquipmentSlot; 5] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Helm,
        EquipmentSlot::Armor,
        EquipmentSlot::Boots,
        EquipmentSlot::Accessory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Helm => "Helm",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Boots => "Boots",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// Flat stat bonuses granted by a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBonus {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
    pub crit: f64,
}

impl StatBonus {
    pub const NONE: StatBonus = StatBonus {
        hp: 0,
        atk: 0,
        def: 0,
        spd: 0,
        crit: 0.0,
    };

    pub fn add(&mut self, other: &StatBonus) {
        self.hp += other.hp;
        self.atk += other.atk;
        self.def += other.def;
        self.spd += other.spd;
        self.crit += other.crit;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Gold,
    Gems,
}

impl Currency {
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Gold => "gold",
            Currency::Gems => "gems",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConsumableItem {
    /// Restores stamina, allowed to overflow the cap.
    StaminaPotion,
    /// Grants exp to a card.
    ExpBook,
    /// Grants exp to a hero.
    HeroExpBook,
    /// Raises a capped card's growth tier.
    GrowthStone,
}

impl ConsumableItem {
    pub fn name(&self) -> &'static str {
        match self {
            ConsumableItem::StaminaPotion => "Stamina Potion",
            ConsumableItem::ExpBook => "Tome of Experience",
            ConsumableItem::HeroExpBook => "Hero's Chronicle",
            ConsumableItem::GrowthStone => "Growth Stone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Rare < Rarity::SuperRare);
        assert!(Rarity::Legend < Rarity::Mythical);
    }

    #[test]
    fn test_base_star_mapping() {
        let stars: Vec<u32> = Rarity::ALL.iter().map(|r| r.base_star()).collect();
        assert_eq!(stars, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_max_star_mapping() {
        let stars: Vec<u32> = Rarity::ALL.iter().map(|r| r.max_star()).collect();
        assert_eq!(stars, vec![3, 4, 5, 6, 6, 6, 7]);
    }

    #[test]
    fn test_base_star_never_exceeds_ceiling() {
        // LEGEND and MYTHICAL are born at their ceiling and cannot evolve
        for rarity in Rarity::ALL {
            if rarity == Rarity::Legend || rarity == Rarity::Mythical {
                assert_eq!(rarity.base_star(), rarity.max_star());
            } else {
                assert!(rarity.base_star() < rarity.max_star());
            }
        }
    }

    #[test]
    fn test_card_slots_subset_of_hero_slots() {
        for slot in EquipmentSlot::CARD_SLOTS {
            assert!(EquipmentSlot::HERO_SLOTS.contains(&slot));
        }
    }

    #[test]
    fn test_stat_bonus_add() {
        let mut total = StatBonus::NONE;
        total.add(&StatBonus {
            hp: 10,
            atk: 5,
            def: 2,
            spd: 1,
            crit: 0.05,
        });
        total.add(&StatBonus {
            atk: 3,
            ..StatBonus::NONE
        });
        assert_eq!(total.hp, 10);
        assert_eq!(total.atk, 8);
        assert!((total.crit - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wildcard_is_neutral() {
        assert_eq!(Element::WILDCARD, Element::Neutral);
        assert_eq!(Element::ALL.len(), 7);
    }
}
