//! Card template definitions.

use crate::items::types::{Element, Rarity};

/// Unscaled combat stats of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
    pub crit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Tank,
    Warrior,
    Mage,
    Ranger,
    Support,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Warrior => "Warrior",
            Role::Mage => "Mage",
            Role::Ranger => "Ranger",
            Role::Support => "Support",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Melee,
    Ranged,
    Magic,
}

impl CardType {
    pub fn name(&self) -> &'static str {
        match self {
            CardType::Melee => "Melee",
            CardType::Ranged => "Ranged",
            CardType::Magic => "Magic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub card_type: CardType,
    pub rarity: Rarity,
    /// `None` means owned copies roll a random element at creation.
    pub element: Option<Element>,
    pub base: BaseStats,
    pub description: &'static str,
    pub icon: &'static str,
}

const fn stats(hp: u32, atk: u32, def: u32, spd: u32, crit: f64) -> BaseStats {
    BaseStats {
        hp,
        atk,
        def,
        spd,
        crit,
    }
}

/// Every collectible card. The first entry doubles as the fallback for
/// unknown template ids.
pub static CARD_TEMPLATES: &[CardTemplate] = &[
    // Common
    CardTemplate {
        id: "card_slime",
        name: "Bouncy Slime",
        role: Role::Tank,
        card_type: CardType::Melee,
        rarity: Rarity::Common,
        element: Some(Element::Water),
        base: stats(120, 12, 10, 8, 0.02),
        description: "Absorbs blows with a wet smack.",
        icon: "icons/cards/slime.png",
    },
    CardTemplate {
        id: "card_goblin",
        name: "Goblin Raider",
        role: Role::Warrior,
        card_type: CardType::Melee,
        rarity: Rarity::Common,
        element: Some(Element::Earth),
        base: stats(100, 18, 6, 12, 0.03),
        description: "Small, greedy and surprisingly stabby.",
        icon: "icons/cards/goblin.png",
    },
    CardTemplate {
        id: "card_sprite",
        name: "Wild Sprite",
        role: Role::Support,
        card_type: CardType::Magic,
        rarity: Rarity::Common,
        element: None,
        base: stats(80, 10, 5, 15, 0.05),
        description: "Its colour shifts with the season it was caught in.",
        icon: "icons/cards/sprite.png",
    },
    CardTemplate {
        id: "card_militia",
        name: "Town Militia",
        role: Role::Warrior,
        card_type: CardType::Melee,
        rarity: Rarity::Common,
        element: Some(Element::Neutral),
        base: stats(110, 14, 9, 10, 0.02),
        description: "Pitchfork in hand, courage in short supply.",
        icon: "icons/cards/militia.png",
    },
    // Uncommon
    CardTemplate {
        id: "card_archer",
        name: "Forest Archer",
        role: Role::Ranger,
        card_type: CardType::Ranged,
        rarity: Rarity::Uncommon,
        element: Some(Element::Wind),
        base: stats(110, 26, 8, 18, 0.08),
        description: "Never misses a leaf at fifty paces.",
        icon: "icons/cards/archer.png",
    },
    CardTemplate {
        id: "card_wolf",
        name: "Dire Wolf",
        role: Role::Warrior,
        card_type: CardType::Melee,
        rarity: Rarity::Uncommon,
        element: Some(Element::Earth),
        base: stats(150, 24, 12, 20, 0.05),
        description: "Hunts in packs, fights alone.",
        icon: "icons/cards/wolf.png",
    },
    CardTemplate {
        id: "card_apprentice",
        name: "Flame Apprentice",
        role: Role::Mage,
        card_type: CardType::Magic,
        rarity: Rarity::Uncommon,
        element: Some(Element::Fire),
        base: stats(95, 30, 6, 14, 0.06),
        description: "Eyebrows sold separately.",
        icon: "icons/cards/apprentice.png",
    },
    // Rare
    CardTemplate {
        id: "card_knight",
        name: "Silver Knight",
        role: Role::Tank,
        card_type: CardType::Melee,
        rarity: Rarity::Rare,
        element: Some(Element::Light),
        base: stats(260, 30, 28, 10, 0.04),
        description: "Polished armour, polished manners.",
        icon: "icons/cards/knight.png",
    },
    CardTemplate {
        id: "card_ninja",
        name: "Shadow Ninja",
        role: Role::Warrior,
        card_type: CardType::Melee,
        rarity: Rarity::Rare,
        element: Some(Element::Dark),
        base: stats(160, 42, 12, 28, 0.12),
        description: "You will not see the second strike.",
        icon: "icons/cards/ninja.png",
    },
    CardTemplate {
        id: "card_frost_mage",
        name: "Frost Mage",
        role: Role::Mage,
        card_type: CardType::Magic,
        rarity: Rarity::Rare,
        element: Some(Element::Water),
        base: stats(150, 48, 10, 16, 0.07),
        description: "Cold logic, colder spells.",
        icon: "icons/cards/frost_mage.png",
    },
    // Super rare
    CardTemplate {
        id: "card_paladin",
        name: "Dawn Paladin",
        role: Role::Tank,
        card_type: CardType::Melee,
        rarity: Rarity::SuperRare,
        element: Some(Element::Light),
        base: stats(420, 45, 40, 12, 0.05),
        description: "Holds the line until sunrise.",
        icon: "icons/cards/paladin.png",
    },
    CardTemplate {
        id: "card_phoenix_rider",
        name: "Phoenix Rider",
        role: Role::Ranger,
        card_type: CardType::Ranged,
        rarity: Rarity::SuperRare,
        element: Some(Element::Fire),
        base: stats(280, 70, 18, 30, 0.1),
        description: "Rises from every defeat a little angrier.",
        icon: "icons/cards/phoenix_rider.png",
    },
    CardTemplate {
        id: "card_assassin",
        name: "Night Assassin",
        role: Role::Warrior,
        card_type: CardType::Melee,
        rarity: Rarity::SuperRare,
        element: Some(Element::Dark),
        base: stats(230, 82, 14, 34, 0.18),
        description: "Paid in advance, always.",
        icon: "icons/cards/assassin.png",
    },
    // Ultra rare
    CardTemplate {
        id: "card_archmage",
        name: "Tidal Archmage",
        role: Role::Mage,
        card_type: CardType::Magic,
        rarity: Rarity::UltraRare,
        element: Some(Element::Water),
        base: stats(340, 110, 22, 20, 0.1),
        description: "Commands the sea to stand still.",
        icon: "icons/cards/archmage.png",
    },
    CardTemplate {
        id: "card_dragon_knight",
        name: "Dragon Knight",
        role: Role::Warrior,
        card_type: CardType::Melee,
        rarity: Rarity::UltraRare,
        element: Some(Element::Fire),
        base: stats(520, 95, 45, 18, 0.08),
        description: "Half the armour is dragon scale, half is dragon.",
        icon: "icons/cards/dragon_knight.png",
    },
    // Legend
    CardTemplate {
        id: "card_valkyrie",
        name: "Valkyrie",
        role: Role::Support,
        card_type: CardType::Ranged,
        rarity: Rarity::Legend,
        element: Some(Element::Light),
        base: stats(600, 120, 50, 32, 0.12),
        description: "Chooses who falls and who stands back up.",
        icon: "icons/cards/valkyrie.png",
    },
    CardTemplate {
        id: "card_titan",
        name: "Stone Titan",
        role: Role::Tank,
        card_type: CardType::Melee,
        rarity: Rarity::Legend,
        element: Some(Element::Earth),
        base: stats(1100, 90, 95, 6, 0.03),
        description: "Mountains are its younger siblings.",
        icon: "icons/cards/titan.png",
    },
    // Mythical
    CardTemplate {
        id: "card_void_emperor",
        name: "Void Emperor",
        role: Role::Mage,
        card_type: CardType::Magic,
        rarity: Rarity::Mythical,
        element: Some(Element::Dark),
        base: stats(900, 200, 60, 25, 0.15),
        description: "Rules an empire of nothing, ruthlessly.",
        icon: "icons/cards/void_emperor.png",
    },
    CardTemplate {
        id: "card_world_serpent",
        name: "World Serpent",
        role: Role::Tank,
        card_type: CardType::Melee,
        rarity: Rarity::Mythical,
        element: Some(Element::Water),
        base: stats(1600, 150, 110, 12, 0.06),
        description: "Its tail is somewhere on the other side of the map.",
        icon: "icons/cards/world_serpent.png",
    },
];

/// Returns the template with the given id.
pub fn get_card_template(id: &str) -> Option<&'static CardTemplate> {
    CARD_TEMPLATES.iter().find(|t| t.id == id)
}

/// Returns the template with the given id, or the first catalog entry when
/// the id is unknown.
pub fn card_template_or_default(id: &str) -> &'static CardTemplate {
    match get_card_template(id) {
        Some(template) => template,
        None => {
            log::warn!("unknown card template '{}', using '{}'", id, CARD_TEMPLATES[0].id);
            &CARD_TEMPLATES[0]
        }
    }
}

/// All templates of a rarity, in catalog order.
pub fn cards_of_rarity(rarity: Rarity) -> impl Iterator<Item = &'static CardTemplate> {
    CARD_TEMPLATES.iter().filter(move |t| t.rarity == rarity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_card_ids_unique() {
        let ids: HashSet<&str> = CARD_TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), CARD_TEMPLATES.len());
    }

    #[test]
    fn test_every_rarity_has_cards() {
        for rarity in Rarity::ALL {
            assert!(
                cards_of_rarity(rarity).count() > 0,
                "no cards for {}",
                rarity.code()
            );
        }
    }

    #[test]
    fn test_lookup_known_id() {
        let knight = get_card_template("card_knight").unwrap();
        assert_eq!(knight.rarity, Rarity::Rare);
        assert_eq!(knight.base.hp, 260);
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_entry() {
        assert!(get_card_template("card_missing").is_none());
        let fallback = card_template_or_default("card_missing");
        assert_eq!(fallback.id, CARD_TEMPLATES[0].id);
    }

    #[test]
    fn test_some_template_has_no_element() {
        assert!(CARD_TEMPLATES.iter().any(|t| t.element.is_none()));
    }
}
