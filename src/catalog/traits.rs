//! Heritable card traits.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraitModifier {
    HpMultiplier(f64),
    AtkMultiplier(f64),
    DefMultiplier(f64),
    CritBonus(f64),
    /// Multiplies speed when below `SPEED_TRAIT_MULTIPLIER_LIMIT`, adds otherwise.
    Speed(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitDefinition {
    pub id: &'static str,
    pub text: &'static str,
    pub modifier: TraitModifier,
}

pub static TRAITS: &[TraitDefinition] = &[
    TraitDefinition {
        id: "trait_tough",
        text: "Tough: HP +10%",
        modifier: TraitModifier::HpMultiplier(1.1),
    },
    TraitDefinition {
        id: "trait_giant",
        text: "Giant: HP +25%",
        modifier: TraitModifier::HpMultiplier(1.25),
    },
    TraitDefinition {
        id: "trait_brave",
        text: "Brave: ATK +10%",
        modifier: TraitModifier::AtkMultiplier(1.1),
    },
    TraitDefinition {
        id: "trait_berserk",
        text: "Berserk: ATK +20%",
        modifier: TraitModifier::AtkMultiplier(1.2),
    },
    TraitDefinition {
        id: "trait_sturdy",
        text: "Sturdy: DEF +15%",
        modifier: TraitModifier::DefMultiplier(1.15),
    },
    TraitDefinition {
        id: "trait_keen",
        text: "Keen Eye: CRIT +5%",
        modifier: TraitModifier::CritBonus(0.05),
    },
    TraitDefinition {
        id: "trait_swift",
        text: "Swift: SPD +20%",
        modifier: TraitModifier::Speed(1.2),
    },
    TraitDefinition {
        id: "trait_nimble",
        text: "Nimble: SPD +10",
        modifier: TraitModifier::Speed(10.0),
    },
];

pub fn get_trait(id: &str) -> Option<&'static TraitDefinition> {
    TRAITS.iter().find(|t| t.id == id)
}
