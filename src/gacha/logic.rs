use crate::catalog::cards::{cards_of_rarity, CardTemplate, CARD_TEMPLATES};
use crate::catalog::pools::{get_pool, GachaPool, RarityRates};
use crate::character::factory::create_card;
use crate::character::types::OwnedCard;
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::items::types::{Element, Rarity};
use rand::seq::SliceRandom;
use rand::Rng;

/// Order in which cumulative rarity thresholds are walked. Anything past the
/// last threshold is Common.
pub const RARITY_WALK_ORDER: [Rarity; 6] = [
    Rarity::Rare,
    Rarity::SuperRare,
    Rarity::UltraRare,
    Rarity::Legend,
    Rarity::Mythical,
    Rarity::Uncommon,
];

#[derive(Debug, Clone, PartialEq)]
pub struct PullResult {
    pub card: OwnedCard,
    pub rarity: Rarity,
}

/// Maps a roll in `[0, 1)` onto a rarity bucket.
pub fn roll_rarity(rates: &RarityRates, roll: f64) -> Rarity {
    let mut cumulative = 0.0;
    for rarity in RARITY_WALK_ORDER {
        cumulative += rates.get(rarity);
        if roll < cumulative {
            return rarity;
        }
    }
    Rarity::Common
}

/// Whether a template passes an element filter. `Neutral` cards pass every
/// filter; templates without an element pass none.
pub fn matches_element(template: &CardTemplate, filter: Option<Element>) -> bool {
    match filter {
        None => true,
        Some(element) => {
            template.element == Some(element) || template.element == Some(Element::WILDCARD)
        }
    }
}

fn bucket(rarity: Rarity, filter: Option<Element>) -> Vec<&'static CardTemplate> {
    cards_of_rarity(rarity)
        .filter(|t| matches_element(t, filter))
        .collect()
}

/// Picks a template for one draw.
///
/// An empty bucket falls back to Common with the same filter, then to
/// Common unfiltered, so a template is always returned.
pub fn resolve_card<R: Rng>(
    rates: &RarityRates,
    element: Option<Element>,
    rng: &mut R,
) -> &'static CardTemplate {
    let rarity = roll_rarity(rates, rng.gen::<f64>());

    let mut candidates = bucket(rarity, element);
    if candidates.is_empty() {
        log::debug!(
            "no {} cards for element {:?}, falling back to common",
            rarity.code(),
            element
        );
        candidates = bucket(Rarity::Common, element);
    }
    if candidates.is_empty() {
        candidates = bucket(Rarity::Common, None);
    }

    match candidates.choose(rng) {
        Some(&template) => template,
        None => {
            log::warn!("common bucket is empty, using '{}'", CARD_TEMPLATES[0].id);
            &CARD_TEMPLATES[0]
        }
    }
}

fn lookup_pool(pool_id: &str) -> Result<&'static GachaPool, GameError> {
    get_pool(pool_id).ok_or_else(|| GameError::UnknownPool(pool_id.to_string()))
}

fn draw<R: Rng>(
    state: &mut PlayerState,
    pool: &GachaPool,
    element: Option<Element>,
    rng: &mut R,
) -> PullResult {
    let filter = element.or(pool.element);
    let template = resolve_card(&pool.rates, filter, rng);
    let card = create_card(Some(template.id), rng);
    log::debug!("{} drew {} ({})", pool.id, template.id, template.rarity.code());
    state.cards.push(card.clone());
    PullResult {
        card,
        rarity: template.rarity,
    }
}

/// Pays for and performs one draw. `element` overrides the pool's banner
/// element.
pub fn pull<R: Rng>(
    state: &mut PlayerState,
    pool_id: &str,
    element: Option<Element>,
    rng: &mut R,
) -> Result<PullResult, GameError> {
    let pool = lookup_pool(pool_id)?;
    state.spend(pool.currency, pool.cost)?;
    Ok(draw(state, pool, element, rng))
}

/// Pays for `count` draws at once. Fails without drawing if the total cost
/// is not affordable.
pub fn pull_many<R: Rng>(
    state: &mut PlayerState,
    pool_id: &str,
    count: u32,
    element: Option<Element>,
    rng: &mut R,
) -> Result<Vec<PullResult>, GameError> {
    let pool = lookup_pool(pool_id)?;
    let total = pool.cost.saturating_mul(count as u64);
    state.spend(pool.currency, total)?;
    log::info!("{} x{} for {} {}", pool.id, count, total, pool.currency.name());
    Ok((0..count).map(|_| draw(state, pool, element, rng)).collect())
}

/// One draw that costs nothing, as granted by a purchased summon box.
pub fn free_pull<R: Rng>(
    state: &mut PlayerState,
    pool_id: &str,
    rng: &mut R,
) -> Result<PullResult, GameError> {
    let pool = lookup_pool(pool_id)?;
    Ok(draw(state, pool, None, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn standard_rates() -> RarityRates {
        RarityRates {
            common: 0.6,
            uncommon: 0.3,
            rare: 0.09,
            super_rare: 0.01,
            ..RarityRates::NONE
        }
    }

    // =========================================================================
    // Rarity walk
    // =========================================================================

    #[test]
    fn test_roll_walks_rare_first() {
        let rates = standard_rates();
        assert_eq!(roll_rarity(&rates, 0.0), Rarity::Rare);
        assert_eq!(roll_rarity(&rates, 0.089), Rarity::Rare);
        assert_eq!(roll_rarity(&rates, 0.095), Rarity::SuperRare);
        assert_eq!(roll_rarity(&rates, 0.2), Rarity::Uncommon);
        assert_eq!(roll_rarity(&rates, 0.39), Rarity::Uncommon);
    }

    #[test]
    fn test_roll_remainder_is_common() {
        let rates = standard_rates();
        assert_eq!(roll_rarity(&rates, 0.41), Rarity::Common);
        assert_eq!(roll_rarity(&rates, 0.99), Rarity::Common);
    }

    #[test]
    fn test_all_common_rates() {
        let rates = RarityRates {
            common: 1.0,
            ..RarityRates::NONE
        };
        for roll in [0.0, 0.25, 0.5, 0.999] {
            assert_eq!(roll_rarity(&rates, roll), Rarity::Common);
        }
    }

    // =========================================================================
    // Bucket selection
    // =========================================================================

    #[test]
    fn test_element_filter_keeps_wildcard() {
        let militia = crate::catalog::cards::get_card_template("card_militia").unwrap();
        let sprite = crate::catalog::cards::get_card_template("card_sprite").unwrap();
        assert!(matches_element(militia, Some(Element::Fire)));
        assert!(!matches_element(sprite, Some(Element::Fire)));
        assert!(matches_element(sprite, None));
    }

    #[test]
    fn test_filtered_draws_respect_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let rates = standard_rates();
        for _ in 0..300 {
            let t = resolve_card(&rates, Some(Element::Fire), &mut rng);
            assert!(
                t.element == Some(Element::Fire) || t.element == Some(Element::Neutral),
                "{} is not fire",
                t.id
            );
        }
    }

    #[test]
    fn test_empty_bucket_falls_back_to_common() {
        // no Wind mythical exists
        let rates = RarityRates {
            mythical: 1.0,
            ..RarityRates::NONE
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let t = resolve_card(&rates, Some(Element::Wind), &mut rng);
            assert_eq!(t.rarity, Rarity::Common);
        }
    }

    #[test]
    fn test_step_rng_roll_selects_common() {
        let v = ((0.99 * (1u64 << 53) as f64) as u64) << 11;
        let mut rng = StepRng::new(v, 0);
        let t = resolve_card(&standard_rates(), None, &mut rng);
        assert_eq!(t.rarity, Rarity::Common);
    }

    // =========================================================================
    // Pull commands
    // =========================================================================

    fn new_state() -> (PlayerState, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let state = PlayerState::new(&GameConfig::empty(), 0, &mut rng);
        (state, rng)
    }

    #[test]
    fn test_pull_spends_and_adds_card() {
        let (mut state, mut rng) = new_state();
        let result = pull(&mut state, "pool_standard", None, &mut rng).unwrap();
        assert_eq!(state.gold, 500);
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.cards[0].uid, result.card.uid);
    }

    #[test]
    fn test_pull_unknown_pool() {
        let (mut state, mut rng) = new_state();
        assert!(matches!(
            pull(&mut state, "pool_missing", None, &mut rng),
            Err(GameError::UnknownPool(_))
        ));
    }

    #[test]
    fn test_pull_insufficient_currency() {
        let (mut state, mut rng) = new_state();
        state.gems = 299;
        let err = pull(&mut state, "pool_premium", None, &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "not enough gems: 299/300");
        assert!(state.cards.is_empty());
    }

    #[test]
    fn test_banner_pool_uses_its_element() {
        let (mut state, mut rng) = new_state();
        state.gems = 300 * 20;
        for result in pull_many(&mut state, "pool_inferno", 20, None, &mut rng).unwrap() {
            assert!(
                result.card.element == Element::Fire || result.card.element == Element::Neutral,
                "{} drew {:?}",
                result.card.template_id,
                result.card.element
            );
        }
        assert_eq!(state.gems, 0);
    }

    #[test]
    fn test_pull_many_validates_total_up_front() {
        let (mut state, mut rng) = new_state();
        // 1000 gold covers 2 of 10 standard pulls
        assert!(pull_many(&mut state, "pool_standard", 10, None, &mut rng).is_err());
        assert_eq!(state.gold, 1000);
        assert!(state.cards.is_empty());
    }

    #[test]
    fn test_free_pull_costs_nothing() {
        let (mut state, mut rng) = new_state();
        free_pull(&mut state, "pool_premium", &mut rng).unwrap();
        assert_eq!(state.gems, 300);
        assert_eq!(state.cards.len(), 1);
    }
}
