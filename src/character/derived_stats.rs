use super::types::{OwnedCard, OwnedHero};
use crate::catalog::cards::card_template_or_default;
use crate::catalog::equipment::{get_card_equipment, get_hero_equipment, EquipmentTemplate};
use crate::catalog::heroes::{hero_template_or_default, passive_for, PassiveSkill};
use crate::catalog::traits::{get_trait, TraitModifier};
use crate::core::constants::*;
use crate::items::equipment::Equipment;
use crate::items::types::{Element, Rarity, StatBonus};

/// The owned entity a stat record was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub enum EntitySnapshot {
    Card(OwnedCard),
    Hero(OwnedHero),
}

/// Combat stats of a card or hero, flattened for display and battle code.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStats {
    pub name: &'static str,
    pub role: &'static str,
    pub card_type: &'static str,
    pub icon: &'static str,
    /// Heroes have no rarity.
    pub rarity: Option<Rarity>,
    pub element: Element,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
    pub crit: f64,
    pub power: u32,
    pub passive: Option<PassiveSkill>,
    pub entity: EntitySnapshot,
}

impl ResolvedStats {
    pub fn uid(&self) -> &str {
        match &self.entity {
            EntitySnapshot::Card(card) => &card.uid,
            EntitySnapshot::Hero(hero) => &hero.uid,
        }
    }

    pub fn level(&self) -> u32 {
        match &self.entity {
            EntitySnapshot::Card(card) => card.level,
            EntitySnapshot::Hero(hero) => hero.level,
        }
    }
}

/// Single scalar used for matchmaking, rankings and team power.
pub fn power_score(hp: u32, atk: u32, def: u32, spd: u32, crit: f64) -> u32 {
    (hp as f64 / POWER_HP_DIVISOR
        + atk as f64
        + def as f64
        + spd as f64 * POWER_SPD_WEIGHT
        + crit * POWER_CRIT_WEIGHT)
        .floor() as u32
}

/// Running totals during resolution; floored only at the very end.
struct StatAccumulator {
    hp: f64,
    atk: f64,
    def: f64,
    spd: f64,
    crit: f64,
}

impl StatAccumulator {
    fn apply_trait(&mut self, modifier: TraitModifier) {
        match modifier {
            TraitModifier::HpMultiplier(m) => self.hp *= m,
            TraitModifier::AtkMultiplier(m) => self.atk *= m,
            TraitModifier::DefMultiplier(m) => self.def *= m,
            TraitModifier::CritBonus(c) => self.crit += c,
            // Small values are percentages, large values are flat points.
            TraitModifier::Speed(v) if v < SPEED_TRAIT_MULTIPLIER_LIMIT => self.spd *= v,
            TraitModifier::Speed(v) => self.spd += v,
        }
    }

    fn apply_flat(&mut self, bonus: &StatBonus) {
        self.hp += bonus.hp as f64;
        self.atk += bonus.atk as f64;
        self.def += bonus.def as f64;
        self.spd += bonus.spd as f64;
        self.crit += bonus.crit;
    }

    /// Returns (hp, atk, def, spd, crit, power).
    fn finish(&self) -> (u32, u32, u32, u32, f64, u32) {
        let hp = self.hp.floor().max(0.0) as u32;
        let atk = self.atk.floor().max(0.0) as u32;
        let def = self.def.floor().max(0.0) as u32;
        let spd = self.spd.floor().max(0.0) as u32;
        let power = power_score(hp, atk, def, spd, self.crit);
        (hp, atk, def, spd, self.crit, power)
    }
}

fn equipment_bonus(
    equipped: &Equipment,
    lookup: fn(&str) -> Option<&'static EquipmentTemplate>,
) -> StatBonus {
    let mut total = StatBonus::NONE;
    for id in equipped.iter_equipped() {
        match lookup(id) {
            Some(template) => total.add(&template.bonus),
            None => log::warn!("equipped item '{}' is not in the catalog, ignoring it", id),
        }
    }
    total
}

/// Resolves a card's combat stats.
///
/// Order matters for numeric parity: level and star scaling of hp/atk/def,
/// then trait modifiers, then equipment flat bonuses, then the card's own
/// bonus hp/atk. Speed and crit are never scaled by level or star.
pub fn resolve_card_stats(card: &OwnedCard) -> ResolvedStats {
    let template = card_template_or_default(&card.template_id);
    let base = template.base;

    let level_mult = 1.0 + card.level.saturating_sub(1) as f64 * CARD_LEVEL_SCALING;
    let star_mult = 1.0 + card.star.saturating_sub(1) as f64 * STAR_SCALING;
    let final_mult = level_mult * star_mult;

    let mut acc = StatAccumulator {
        hp: base.hp as f64 * final_mult,
        atk: base.atk as f64 * final_mult,
        def: base.def as f64 * final_mult,
        spd: base.spd as f64,
        crit: base.crit,
    };

    for trait_id in &card.traits {
        match get_trait(trait_id) {
            Some(definition) => acc.apply_trait(definition.modifier),
            None => log::warn!("card {} has unknown trait '{}'", card.uid, trait_id),
        }
    }

    acc.apply_flat(&equipment_bonus(&card.equipped, get_card_equipment));

    acc.hp += card.bonus_hp as f64;
    acc.atk += card.bonus_atk as f64;

    let (hp, atk, def, spd, crit, power) = acc.finish();

    ResolvedStats {
        name: template.name,
        role: template.role.name(),
        card_type: template.card_type.name(),
        icon: template.icon,
        rarity: Some(template.rarity),
        element: card.element,
        hp,
        max_hp: hp,
        atk,
        def,
        spd,
        crit,
        power,
        passive: None,
        entity: EntitySnapshot::Card(card.clone()),
    }
}

/// Resolves a hero's combat stats. Heroes scale harder per level but have
/// no star tier, traits or bonus stats; their passive is attached as-is.
pub fn resolve_hero_stats(hero: &OwnedHero) -> ResolvedStats {
    let template = hero_template_or_default(&hero.template_id);
    let base = template.base;

    let level_mult = 1.0 + hero.level.saturating_sub(1) as f64 * HERO_LEVEL_SCALING;

    let mut acc = StatAccumulator {
        hp: base.hp as f64 * level_mult,
        atk: base.atk as f64 * level_mult,
        def: base.def as f64 * level_mult,
        spd: base.spd as f64,
        crit: base.crit,
    };

    acc.apply_flat(&equipment_bonus(&hero.equipped, get_hero_equipment));

    let (hp, atk, def, spd, crit, power) = acc.finish();

    ResolvedStats {
        name: template.name,
        role: template.job.name(),
        card_type: "Hero",
        icon: template.icon,
        rarity: None,
        element: template.element,
        hp,
        max_hp: hp,
        atk,
        def,
        spd,
        crit,
        power,
        passive: Some(passive_for(template)),
        entity: EntitySnapshot::Hero(hero.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::EquipmentSlot;

    fn slime() -> OwnedCard {
        OwnedCard {
            uid: "card_test".to_string(),
            template_id: "card_slime".to_string(),
            element: Element::Water,
            level: 1,
            exp: 0,
            star: 1,
            growth_tier: 1,
            bonus_hp: 0,
            bonus_atk: 0,
            generation: 0,
            traits: vec![],
            equipped: Equipment::new(),
        }
    }

    #[test]
    fn test_base_card_stats() {
        // Slime: 120 hp, 12 atk, 10 def, 8 spd, 0.02 crit
        let stats = resolve_card_stats(&slime());
        assert_eq!(stats.hp, 120);
        assert_eq!(stats.max_hp, 120);
        assert_eq!(stats.atk, 12);
        assert_eq!(stats.def, 10);
        assert_eq!(stats.spd, 8);
        assert!((stats.crit - 0.02).abs() < f64::EPSILON);
        // 120/5 + 12 + 10 + 8*0.5 + 0.02*500 = 24 + 12 + 10 + 4 + 10
        assert_eq!(stats.power, 60);
        assert_eq!(stats.name, "Bouncy Slime");
        assert_eq!(stats.role, "Tank");
        assert_eq!(stats.rarity, Some(Rarity::Common));
        assert!(stats.passive.is_none());
    }

    #[test]
    fn test_level_scales_hp_atk_def_only() {
        let mut card = slime();
        card.level = 11; // 1 + 10*0.1 = 2.0
        let stats = resolve_card_stats(&card);
        assert_eq!(stats.hp, 240);
        assert_eq!(stats.atk, 24);
        assert_eq!(stats.def, 20);
        assert_eq!(stats.spd, 8);
        assert!((stats.crit - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_star_scaling_multiplies_with_level() {
        let mut card = slime();
        card.level = 11; // 2.0
        card.star = 6; // 1 + 5*0.2 = 2.0
        let stats = resolve_card_stats(&card);
        assert_eq!(stats.hp, 480);
        assert_eq!(stats.atk, 48);
        assert_eq!(stats.spd, 8);
    }

    #[test]
    fn test_multiplicative_traits_stack() {
        let mut card = slime();
        card.traits = vec!["trait_tough".into(), "trait_giant".into()];
        let stats = resolve_card_stats(&card);
        // 120 * 1.1 * 1.25 = 165
        assert_eq!(stats.hp, (120.0_f64 * 1.1 * 1.25).floor() as u32);
    }

    #[test]
    fn test_speed_trait_dual_convention() {
        let mut card = slime();
        card.traits = vec!["trait_swift".into()]; // 1.2 < 5 -> multiply
        assert_eq!(resolve_card_stats(&card).spd, (8.0_f64 * 1.2).floor() as u32);

        card.traits = vec!["trait_nimble".into()]; // 10 >= 5 -> add
        assert_eq!(resolve_card_stats(&card).spd, 18);
    }

    #[test]
    fn test_crit_trait_is_additive() {
        let mut card = slime();
        card.traits = vec!["trait_keen".into()];
        let stats = resolve_card_stats(&card);
        assert!((stats.crit - 0.07).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_added_after_traits() {
        let mut card = slime();
        card.traits = vec!["trait_berserk".into()]; // atk * 1.2
        card.equipped.set(EquipmentSlot::Weapon, Some("eq_wood_sword".into())); // +10 atk
        let stats = resolve_card_stats(&card);
        // (12 * 1.2) + 10, not (12 + 10) * 1.2
        assert_eq!(stats.atk, (12.0_f64 * 1.2 + 10.0).floor() as u32);
        assert_ne!(stats.atk, ((12.0_f64 + 10.0) * 1.2).floor() as u32);
    }

    #[test]
    fn test_bonus_stats_added_last() {
        let mut card = slime();
        card.bonus_hp = 100;
        card.bonus_atk = 20;
        let stats = resolve_card_stats(&card);
        assert_eq!(stats.hp, 220);
        assert_eq!(stats.atk, 32);
        assert_eq!(stats.def, 10);
    }

    #[test]
    fn test_unknown_trait_and_equipment_ignored() {
        let mut card = slime();
        card.traits = vec!["trait_bogus".into()];
        card.equipped.set(EquipmentSlot::Weapon, Some("eq_bogus".into()));
        assert_eq!(resolve_card_stats(&card).hp, 120);
        assert_eq!(resolve_card_stats(&card).atk, 12);
    }

    #[test]
    fn test_hero_equipment_ignored_on_cards() {
        let mut card = slime();
        card.equipped.set(EquipmentSlot::Weapon, Some("heq_longsword".into()));
        assert_eq!(resolve_card_stats(&card).atk, 12);
    }

    #[test]
    fn test_unknown_template_resolves_as_fallback() {
        let mut card = slime();
        card.template_id = "card_gone".into();
        let stats = resolve_card_stats(&card);
        assert_eq!(stats.name, "Bouncy Slime");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut card = slime();
        card.level = 7;
        card.traits = vec!["trait_brave".into(), "trait_swift".into()];
        assert_eq!(resolve_card_stats(&card), resolve_card_stats(&card));
    }

    #[test]
    fn test_hero_stats_and_passive() {
        let hero = OwnedHero {
            uid: "hero_test".into(),
            template_id: "hero_knight".into(),
            level: 6, // 1 + 5*0.2 = 2.0
            exp: 0,
            equipped: Equipment::new(),
        };
        let stats = resolve_hero_stats(&hero);
        assert_eq!(stats.hp, 1000);
        assert_eq!(stats.atk, 80);
        assert_eq!(stats.def, 70);
        assert_eq!(stats.spd, 10);
        assert_eq!(stats.role, "Knight");
        assert_eq!(stats.card_type, "Hero");
        assert_eq!(stats.rarity, None);
        assert_eq!(stats.passive.unwrap().name, "Oathkeeper");
    }

    #[test]
    fn test_hero_equipment_bonus() {
        let mut hero = OwnedHero {
            uid: "hero_test".into(),
            template_id: "hero_knight".into(),
            level: 1,
            exp: 0,
            equipped: Equipment::new(),
        };
        hero.equipped.set(EquipmentSlot::Boots, Some("heq_boots".into()));
        let stats = resolve_hero_stats(&hero);
        assert_eq!(stats.def, 38);
        assert_eq!(stats.spd, 14);
    }

    #[test]
    fn test_power_score_weights() {
        assert_eq!(power_score(500, 100, 50, 20, 0.1), 100 + 100 + 50 + 10 + 50);
        assert_eq!(power_score(4, 0, 0, 1, 0.0), 1);
    }
}
