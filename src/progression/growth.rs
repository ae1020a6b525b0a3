//! Growth tiers and consumable items.

use super::leveling::{add_exp, Progressable};
use crate::core::constants::{
    EXP_BOOK_AMOUNT, HERO_EXP_BOOK_AMOUNT, MAX_GROWTH_TIER, STAMINA_POTION_AMOUNT,
};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::items::types::ConsumableItem;

/// Level and exp of an entity after an exp item was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpResult {
    pub leveled_up: bool,
    pub level: u32,
    pub exp: u64,
}

impl LevelUpResult {
    fn of<P: Progressable + ?Sized>(entity: &P, leveled_up: bool) -> Self {
        Self {
            leveled_up,
            level: entity.level(),
            exp: entity.exp(),
        }
    }
}

fn ensure_item(state: &PlayerState, item: ConsumableItem) -> Result<(), GameError> {
    if state.item_count(item) == 0 {
        return Err(GameError::ItemNotOwned(item));
    }
    Ok(())
}

/// Spends a Growth Stone to raise a capped card's growth tier, which adds
/// ten levels to its cap. Returns the new tier.
pub fn raise_growth_tier(state: &mut PlayerState, card_uid: &str) -> Result<u32, GameError> {
    let card = state
        .card(card_uid)
        .ok_or_else(|| GameError::CardNotFound(card_uid.to_string()))?;
    if card.growth_tier >= MAX_GROWTH_TIER {
        return Err(GameError::MaxGrowthReached);
    }
    if !card.is_at_cap() {
        return Err(GameError::LevelCapNotReached);
    }
    ensure_item(state, ConsumableItem::GrowthStone)?;

    state.take_item(ConsumableItem::GrowthStone)?;
    let card = state
        .card_mut(card_uid)
        .ok_or_else(|| GameError::CardNotFound(card_uid.to_string()))?;
    card.growth_tier += 1;
    log::info!("{} reached growth tier {}", card.uid, card.growth_tier);
    Ok(card.growth_tier)
}

/// Feeds an exp book to a card.
pub fn use_exp_book(state: &mut PlayerState, card_uid: &str) -> Result<LevelUpResult, GameError> {
    if state.card(card_uid).is_none() {
        return Err(GameError::CardNotFound(card_uid.to_string()));
    }
    ensure_item(state, ConsumableItem::ExpBook)?;

    state.take_item(ConsumableItem::ExpBook)?;
    let card = state
        .card_mut(card_uid)
        .ok_or_else(|| GameError::CardNotFound(card_uid.to_string()))?;
    let leveled = add_exp(card, EXP_BOOK_AMOUNT);
    Ok(LevelUpResult::of(card, leveled))
}

/// Feeds a hero exp book to a hero.
pub fn use_hero_exp_book(
    state: &mut PlayerState,
    hero_uid: &str,
) -> Result<LevelUpResult, GameError> {
    if state.hero(hero_uid).is_none() {
        return Err(GameError::HeroNotFound(hero_uid.to_string()));
    }
    ensure_item(state, ConsumableItem::HeroExpBook)?;

    state.take_item(ConsumableItem::HeroExpBook)?;
    let hero = state
        .hero_mut(hero_uid)
        .ok_or_else(|| GameError::HeroNotFound(hero_uid.to_string()))?;
    let leveled = add_exp(hero, HERO_EXP_BOOK_AMOUNT);
    Ok(LevelUpResult::of(hero, leveled))
}

/// Drinks a stamina potion. Potions may push stamina past the cap.
pub fn use_stamina_potion(state: &mut PlayerState) -> Result<u32, GameError> {
    state.take_item(ConsumableItem::StaminaPotion)?;
    state.stamina = state.stamina.saturating_add(STAMINA_POTION_AMOUNT);
    Ok(state.stamina)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::factory::create_card;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (PlayerState, String) {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut state = PlayerState::new(&GameConfig::empty(), 0, &mut rng);
        let card = create_card(Some("card_wolf"), &mut rng);
        let uid = card.uid.clone();
        state.cards.push(card);
        (state, uid)
    }

    // =========================================================================
    // Growth stones
    // =========================================================================

    #[test]
    fn test_growth_requires_level_cap() {
        let (mut state, uid) = setup();
        state.add_item(ConsumableItem::GrowthStone, 1);
        assert!(matches!(
            raise_growth_tier(&mut state, &uid),
            Err(GameError::LevelCapNotReached)
        ));
        assert_eq!(state.item_count(ConsumableItem::GrowthStone), 1);
    }

    #[test]
    fn test_growth_consumes_stone() {
        let (mut state, uid) = setup();
        state.add_item(ConsumableItem::GrowthStone, 1);
        state.card_mut(&uid).unwrap().level = 10;

        assert_eq!(raise_growth_tier(&mut state, &uid).unwrap(), 2);
        assert_eq!(state.item_count(ConsumableItem::GrowthStone), 0);
        assert_eq!(state.card(&uid).unwrap().level_cap(), 20);
    }

    #[test]
    fn test_growth_without_stone() {
        let (mut state, uid) = setup();
        state.card_mut(&uid).unwrap().level = 10;
        assert!(matches!(
            raise_growth_tier(&mut state, &uid),
            Err(GameError::ItemNotOwned(ConsumableItem::GrowthStone))
        ));
        assert_eq!(state.card(&uid).unwrap().growth_tier, 1);
    }

    #[test]
    fn test_growth_tier_ceiling() {
        let (mut state, uid) = setup();
        state.add_item(ConsumableItem::GrowthStone, 1);
        {
            let card = state.card_mut(&uid).unwrap();
            card.growth_tier = 3;
            card.level = 30;
        }
        assert!(matches!(
            raise_growth_tier(&mut state, &uid),
            Err(GameError::MaxGrowthReached)
        ));
    }

    // =========================================================================
    // Consumables
    // =========================================================================

    #[test]
    fn test_exp_book_levels_card() {
        let (mut state, uid) = setup();
        state.add_item(ConsumableItem::ExpBook, 1);
        let result = use_exp_book(&mut state, &uid).unwrap();
        // 500 = 100 + 200 + 200 leftover
        assert!(result.leveled_up);
        assert_eq!(result.level, 3);
        assert_eq!(result.exp, 200);
        assert_eq!(state.item_count(ConsumableItem::ExpBook), 0);
    }

    #[test]
    fn test_exp_book_unknown_card_keeps_book() {
        let (mut state, _) = setup();
        state.add_item(ConsumableItem::ExpBook, 1);
        assert!(use_exp_book(&mut state, "card_nope").is_err());
        assert_eq!(state.item_count(ConsumableItem::ExpBook), 1);
    }

    #[test]
    fn test_hero_exp_book() {
        let (mut state, _) = setup();
        let hero = state.heroes[0].uid.clone();
        state.add_item(ConsumableItem::HeroExpBook, 1);
        // 1000 = 100 + 200 + 300 + 400 -> level 5 with 0 left
        let result = use_hero_exp_book(&mut state, &hero).unwrap();
        assert_eq!(result.level, 5);
        assert_eq!(result.exp, 0);
    }

    #[test]
    fn test_stamina_potion_exceeds_cap() {
        let (mut state, _) = setup();
        assert!(use_stamina_potion(&mut state).is_err());
        state.add_item(ConsumableItem::StaminaPotion, 1);
        assert_eq!(use_stamina_potion(&mut state).unwrap(), 90);
    }
}
