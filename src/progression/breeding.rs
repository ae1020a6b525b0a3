//! Breeding two owned cards into a new one.

use crate::catalog::cards::card_template_or_default;
use crate::character::derived_stats::resolve_card_stats;
use crate::character::factory::new_uid;
use crate::character::types::OwnedCard;
use crate::core::config::GameConfig;
use crate::core::constants::{INHERIT_BONUS, MAX_TRAITS, TRAIT_INHERIT_CHANCE};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::items::equipment::Equipment;
use crate::items::types::Currency;
use rand::Rng;

/// Union of both parents' traits in order (A's first), without duplicates.
pub fn trait_pool(a: &OwnedCard, b: &OwnedCard) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for t in a.traits.iter().chain(b.traits.iter()) {
        if !pool.contains(t) {
            pool.push(t.clone());
        }
    }
    pool
}

/// Builds the child card. Parents are not modified.
///
/// Each pooled trait is kept with probability `TRAIT_INHERIT_CHANCE` and the
/// result is truncated to `MAX_TRAITS`, so a child may inherit no traits.
pub fn breed_child<R: Rng>(a: &OwnedCard, b: &OwnedCard, rng: &mut R) -> OwnedCard {
    let template_id = if rng.gen_bool(0.5) {
        &a.template_id
    } else {
        &b.template_id
    };
    let template = card_template_or_default(template_id);

    let mut traits: Vec<String> = trait_pool(a, b)
        .into_iter()
        .filter(|_| rng.gen_bool(TRAIT_INHERIT_CHANCE))
        .collect();
    traits.truncate(MAX_TRAITS);

    let stats_a = resolve_card_stats(a);
    let stats_b = resolve_card_stats(b);
    let bonus_atk = ((stats_a.atk + stats_b.atk) as f64 * INHERIT_BONUS).floor() as u32;
    let bonus_hp = ((stats_a.max_hp + stats_b.max_hp) as f64 * INHERIT_BONUS).floor() as u32;

    let element = if rng.gen_bool(0.5) { a.element } else { b.element };

    OwnedCard {
        uid: new_uid("card"),
        template_id: template.id.to_string(),
        element,
        level: 1,
        exp: 0,
        star: template.rarity.base_star(),
        growth_tier: 1,
        bonus_hp,
        bonus_atk,
        generation: a.generation.max(b.generation) + 1,
        traits,
        equipped: Equipment::new(),
    }
}

/// Breeds two owned cards for `config.breed_cost` gold and adds the child to
/// the collection. Returns the child's uid.
pub fn breed<R: Rng>(
    state: &mut PlayerState,
    config: &GameConfig,
    parent_a: &str,
    parent_b: &str,
    rng: &mut R,
) -> Result<String, GameError> {
    let a = state
        .card(parent_a)
        .ok_or_else(|| GameError::ParentNotFound(parent_a.to_string()))?;
    let b = state
        .card(parent_b)
        .ok_or_else(|| GameError::ParentNotFound(parent_b.to_string()))?;
    if a.uid == b.uid {
        return Err(GameError::SameParent);
    }
    state.ensure_affordable(Currency::Gold, config.breed_cost)?;

    let child = breed_child(a, b, rng);
    state.spend(Currency::Gold, config.breed_cost)?;

    log::info!(
        "bred {} + {} -> {} ({}, gen {}, traits {:?})",
        parent_a,
        parent_b,
        child.uid,
        child.template_id,
        child.generation,
        child.traits
    );

    let uid = child.uid.clone();
    state.cards.push(child);
    Ok(uid)
}
