//! Hero templates and passive skills.

use super::cards::BaseStats;
use crate::items::types::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Job {
    Knight,
    Mage,
    Ranger,
    Priest,
    Rogue,
}

impl Job {
    pub fn name(&self) -> &'static str {
        match self {
            Job::Knight => "Knight",
            Job::Mage => "Mage",
            Job::Ranger => "Ranger",
            Job::Priest => "Priest",
            Job::Rogue => "Rogue",
        }
    }
}

/// Combat modifier carried by a passive skill. Resolution only attaches it
/// to the stat record; battle code decides how to apply it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassiveEffect {
    TeamAtkPercent(f64),
    TeamDefPercent(f64),
    TeamHpPercent(f64),
    TeamCritBonus(f64),
    TeamSpeedBonus(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassiveSkill {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: PassiveEffect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub job: Job,
    pub element: Element,
    pub base: BaseStats,
    /// Signature passive. Heroes without one use their job's default.
    pub passive: Option<PassiveSkill>,
    pub icon: &'static str,
}

pub const DEFAULT_PASSIVE: PassiveSkill = PassiveSkill {
    name: "Rallying Presence",
    description: "Allies fight a little harder with a leader nearby.",
    effect: PassiveEffect::TeamAtkPercent(0.03),
};

/// Job defaults. Jobs missing here fall through to `DEFAULT_PASSIVE`.
pub static JOB_PASSIVES: &[(Job, PassiveSkill)] = &[
    (
        Job::Knight,
        PassiveSkill {
            name: "Shield Wall",
            description: "Allied defense +10%.",
            effect: PassiveEffect::TeamDefPercent(0.10),
        },
    ),
    (
        Job::Mage,
        PassiveSkill {
            name: "Arcane Focus",
            description: "Allied attack +8%.",
            effect: PassiveEffect::TeamAtkPercent(0.08),
        },
    ),
    (
        Job::Ranger,
        PassiveSkill {
            name: "Eagle Eye",
            description: "Allied crit chance +5%.",
            effect: PassiveEffect::TeamCritBonus(0.05),
        },
    ),
    (
        Job::Priest,
        PassiveSkill {
            name: "Blessing",
            description: "Allied HP +10%.",
            effect: PassiveEffect::TeamHpPercent(0.10),
        },
    ),
];

pub static HERO_TEMPLATES: &[HeroTemplate] = &[
    HeroTemplate {
        id: "hero_knight",
        name: "Sir Aldric",
        job: Job::Knight,
        element: Element::Light,
        base: BaseStats {
            hp: 500,
            atk: 40,
            def: 35,
            spd: 10,
            crit: 0.05,
        },
        passive: Some(PassiveSkill {
            name: "Oathkeeper",
            description: "Allied defense +15%.",
            effect: PassiveEffect::TeamDefPercent(0.15),
        }),
        icon: "icons/heroes/knight.png",
    },
    HeroTemplate {
        id: "hero_mage",
        name: "Lyra Emberveil",
        job: Job::Mage,
        element: Element::Fire,
        base: BaseStats {
            hp: 320,
            atk: 70,
            def: 15,
            spd: 14,
            crit: 0.08,
        },
        passive: None,
        icon: "icons/heroes/mage.png",
    },
    HeroTemplate {
        id: "hero_ranger",
        name: "Kestrel",
        job: Job::Ranger,
        element: Element::Wind,
        base: BaseStats {
            hp: 380,
            atk: 58,
            def: 20,
            spd: 22,
            crit: 0.12,
        },
        passive: Some(PassiveSkill {
            name: "Tailwind",
            description: "Allied speed +5.",
            effect: PassiveEffect::TeamSpeedBonus(5),
        }),
        icon: "icons/heroes/ranger.png",
    },
    HeroTemplate {
        id: "hero_priest",
        name: "Mother Selene",
        job: Job::Priest,
        element: Element::Water,
        base: BaseStats {
            hp: 420,
            atk: 35,
            def: 25,
            spd: 12,
            crit: 0.04,
        },
        passive: None,
        icon: "icons/heroes/priest.png",
    },
    HeroTemplate {
        id: "hero_rogue",
        name: "Vex",
        job: Job::Rogue,
        element: Element::Dark,
        base: BaseStats {
            hp: 340,
            atk: 66,
            def: 14,
            spd: 26,
            crit: 0.15,
        },
        passive: None,
        icon: "icons/heroes/rogue.png",
    },
];

/// Hero every new player starts with.
pub const STARTER_HERO: &str = "hero_knight";

pub fn get_hero_template(id: &str) -> Option<&'static HeroTemplate> {
    HERO_TEMPLATES.iter().find(|t| t.id == id)
}

/// Returns the hero template, falling back to the first entry for unknown ids.
pub fn hero_template_or_default(id: &str) -> &'static HeroTemplate {
    match get_hero_template(id) {
        Some(template) => template,
        None => {
            log::warn!("unknown hero template '{}', using '{}'", id, HERO_TEMPLATES[0].id);
            &HERO_TEMPLATES[0]
        }
    }
}

/// Passive lookup: signature skill, then job default, then `DEFAULT_PASSIVE`.
pub fn passive_for(template: &HeroTemplate) -> PassiveSkill {
    if let Some(passive) = template.passive {
        return passive;
    }
    JOB_PASSIVES
        .iter()
        .find(|(job, _)| *job == template.job)
        .map(|(_, passive)| *passive)
        .unwrap_or(DEFAULT_PASSIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_hero_exists() {
        assert!(get_hero_template(STARTER_HERO).is_some());
        assert!(get_hero_template(crate::core::constants::BOT_REFERENCE_HERO).is_some());
    }

    #[test]
    fn test_passive_signature_wins() {
        let knight = get_hero_template("hero_knight").unwrap();
        assert_eq!(passive_for(knight).name, "Oathkeeper");
    }

    #[test]
    fn test_passive_falls_back_to_job() {
        let mage = get_hero_template("hero_mage").unwrap();
        assert_eq!(passive_for(mage).name, "Arcane Focus");
    }

    #[test]
    fn test_passive_falls_back_to_default() {
        let rogue = get_hero_template("hero_rogue").unwrap();
        assert_eq!(passive_for(rogue), DEFAULT_PASSIVE);
    }

    #[test]
    fn test_unknown_hero_falls_back() {
        assert_eq!(hero_template_or_default("hero_nobody").id, HERO_TEMPLATES[0].id);
    }
}
