//! Star-tier evolution by fusing duplicates.

use crate::catalog::cards::card_template_or_default;
use crate::core::constants::{
    EVOLUTION_BONUS_ATK, EVOLUTION_BONUS_HP, EVOLUTION_MATERIALS_REQUIRED,
};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;

/// Materials selected for an evolution that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionPlan {
    pub target: String,
    pub materials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOutcome {
    pub target: String,
    pub new_star: u32,
    pub consumed: Vec<String>,
}

/// Star ceiling for the card's template rarity.
pub fn max_star_for(template_id: &str) -> u32 {
    card_template_or_default(template_id).rarity.max_star()
}

/// Checks whether a card can evolve and picks its materials.
///
/// Materials are other copies of the same template at the same star tier
/// that are not deployed in any deck.
pub fn can_evolve(state: &PlayerState, card_uid: &str) -> Result<EvolutionPlan, GameError> {
    let card = state
        .card(card_uid)
        .ok_or_else(|| GameError::CardNotFound(card_uid.to_string()))?;

    if card.star >= max_star_for(&card.template_id) {
        return Err(GameError::MaxStarReached);
    }

    let candidates: Vec<String> = state
        .cards
        .iter()
        .filter(|c| c.uid != card.uid)
        .filter(|c| c.template_id == card.template_id && c.star == card.star)
        .filter(|c| !state.is_card_deployed(&c.uid))
        .map(|c| c.uid.clone())
        .collect();

    if candidates.len() < EVOLUTION_MATERIALS_REQUIRED {
        return Err(GameError::NotEnoughMaterials {
            current: candidates.len(),
            required: EVOLUTION_MATERIALS_REQUIRED,
        });
    }

    Ok(EvolutionPlan {
        target: card.uid.clone(),
        materials: candidates
            .into_iter()
            .take(EVOLUTION_MATERIALS_REQUIRED)
            .collect(),
    })
}

/// Consumes two duplicates, raises the target's star tier by one and grants
/// the flat evolution bonus on top of any existing bonus.
pub fn execute_evolution(
    state: &mut PlayerState,
    card_uid: &str,
) -> Result<EvolutionOutcome, GameError> {
    let plan = can_evolve(state, card_uid)?;

    for material in &plan.materials {
        state.remove_card(material);
    }

    let card = state
        .card_mut(&plan.target)
        .ok_or_else(|| GameError::CardNotFound(plan.target.clone()))?;
    card.star += 1;
    card.bonus_hp += EVOLUTION_BONUS_HP;
    card.bonus_atk += EVOLUTION_BONUS_ATK;

    log::info!(
        "evolved {} ({}) to {} stars",
        card.uid,
        card.template_id,
        card.star
    );

    Ok(EvolutionOutcome {
        target: plan.target,
        new_star: card.star,
        consumed: plan.materials,
    })
}
