//! Creates owned cards and heroes from catalog templates.

use super::types::{OwnedCard, OwnedHero};
use crate::catalog::cards::{card_template_or_default, CARD_TEMPLATES};
use crate::catalog::heroes::hero_template_or_default;
use crate::items::equipment::Equipment;
use crate::items::types::Element;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Generates an entity id: millisecond timestamp plus a random suffix.
pub fn new_uid(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), &suffix[..8])
}

/// Creates a level 1 card. `None` picks a template uniformly at random; an
/// unknown id falls back to the first catalog entry.
pub fn create_card<R: Rng>(template_id: Option<&str>, rng: &mut R) -> OwnedCard {
    let template = match template_id {
        Some(id) => card_template_or_default(id),
        None => CARD_TEMPLATES
            .choose(rng)
            .unwrap_or(&CARD_TEMPLATES[0]),
    };

    let element = match template.element {
        Some(element) => element,
        None => random_element(rng),
    };

    OwnedCard {
        uid: new_uid("card"),
        template_id: template.id.to_string(),
        element,
        level: 1,
        exp: 0,
        star: template.rarity.base_star(),
        growth_tier: 1,
        bonus_hp: 0,
        bonus_atk: 0,
        generation: 0,
        traits: Vec::new(),
        equipped: Equipment::new(),
    }
}

/// Creates a level 1 hero, falling back to the first hero for unknown ids.
pub fn create_hero(template_id: &str) -> OwnedHero {
    let template = hero_template_or_default(template_id);
    OwnedHero {
        uid: new_uid("hero"),
        template_id: template.id.to_string(),
        level: 1,
        exp: 0,
        equipped: Equipment::new(),
    }
}

pub fn random_element<R: Rng>(rng: &mut R) -> Element {
    Element::ALL[rng.gen_range(0..Element::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cards::get_card_template;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_create_card_from_template() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let card = create_card(Some("card_knight"), &mut rng);
        assert_eq!(card.template_id, "card_knight");
        assert_eq!(card.star, 3);
        assert_eq!(card.element, Element::Light);
        assert_eq!(card.level, 1);
        assert_eq!(card.growth_tier, 1);
        assert_eq!(card.generation, 0);
        assert!(card.traits.is_empty());
    }

    #[test]
    fn test_create_card_star_from_rarity() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for template in CARD_TEMPLATES {
            let card = create_card(Some(template.id), &mut rng);
            assert_eq!(card.star, template.rarity.base_star());
        }
    }

    #[test]
    fn test_unknown_template_falls_back_to_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let card = create_card(Some("card_does_not_exist"), &mut rng);
        assert_eq!(card.template_id, CARD_TEMPLATES[0].id);
    }

    #[test]
    fn test_random_template_is_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            let card = create_card(None, &mut rng);
            assert!(get_card_template(&card.template_id).is_some());
        }
    }

    #[test]
    fn test_elementless_template_rolls_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(create_card(Some("card_sprite"), &mut rng).element);
        }
        assert!(seen.len() > 1, "sprite should roll varied elements");
    }

    #[test]
    fn test_uids_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let a = create_card(Some("card_slime"), &mut rng);
        let b = create_card(Some("card_slime"), &mut rng);
        assert_ne!(a.uid, b.uid);
        assert!(a.uid.starts_with("card_"));
    }

    #[test]
    fn test_create_hero() {
        let hero = create_hero("hero_mage");
        assert_eq!(hero.template_id, "hero_mage");
        assert_eq!(hero.level, 1);
        assert!(hero.uid.starts_with("hero_"));
        assert_eq!(create_hero("hero_unknown").template_id, "hero_knight");
    }
}
