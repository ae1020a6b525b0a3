//! Rewards granted by the shop, the mailbox and stage clears.

use super::types::{ConsumableItem, Currency};
use crate::catalog::equipment::{get_card_equipment, get_hero_equipment};
use crate::catalog::heroes::get_hero_template;
use crate::character::factory::{create_card, create_hero};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reward {
    Gold(u64),
    Gems(u64),
    /// Stamina may overflow the regeneration cap.
    Stamina(u32),
    ArenaTickets(u32),
    Item {
        item: ConsumableItem,
        quantity: u32,
    },
    Card {
        template_id: String,
    },
    Equipment {
        equipment_id: String,
    },
    HeroEquipment {
        equipment_id: String,
    },
    Hero {
        template_id: String,
    },
}

/// What a granted reward produced, so callers can show it.
#[derive(Debug, Clone, PartialEq)]
pub enum Granted {
    Resources,
    Card(String),
    Hero(String),
}

/// Checks that `reward` can be granted to `state` without side effects.
pub fn validate_reward(state: &PlayerState, reward: &Reward) -> Result<(), GameError> {
    match reward {
        Reward::Equipment { equipment_id } if get_card_equipment(equipment_id).is_none() => {
            Err(GameError::UnknownEquipment(equipment_id.clone()))
        }
        Reward::HeroEquipment { equipment_id } if get_hero_equipment(equipment_id).is_none() => {
            Err(GameError::UnknownEquipment(equipment_id.clone()))
        }
        Reward::Hero { template_id } => {
            if get_hero_template(template_id).is_none() {
                Err(GameError::UnknownHero(template_id.clone()))
            } else if state.owns_hero_template(template_id) {
                Err(GameError::HeroAlreadyOwned(template_id.clone()))
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Validates and then applies a reward.
pub fn grant_reward<R: Rng>(
    state: &mut PlayerState,
    reward: &Reward,
    rng: &mut R,
) -> Result<Granted, GameError> {
    validate_reward(state, reward)?;

    let granted = match reward {
        Reward::Gold(amount) => {
            state.earn(Currency::Gold, *amount);
            Granted::Resources
        }
        Reward::Gems(amount) => {
            state.earn(Currency::Gems, *amount);
            Granted::Resources
        }
        Reward::Stamina(amount) => {
            state.stamina = state.stamina.saturating_add(*amount);
            Granted::Resources
        }
        Reward::ArenaTickets(amount) => {
            state.arena.tickets = state.arena.tickets.saturating_add(*amount);
            Granted::Resources
        }
        Reward::Item { item, quantity } => {
            state.add_item(*item, *quantity);
            Granted::Resources
        }
        Reward::Card { template_id } => {
            let card = create_card(Some(template_id), rng);
            let uid = card.uid.clone();
            state.cards.push(card);
            Granted::Card(uid)
        }
        Reward::Equipment { equipment_id } => {
            state.card_equipment.push(equipment_id.clone());
            Granted::Resources
        }
        Reward::HeroEquipment { equipment_id } => {
            state.hero_equipment.push(equipment_id.clone());
            Granted::Resources
        }
        Reward::Hero { template_id } => {
            let hero = create_hero(template_id);
            let uid = hero.uid.clone();
            state.heroes.push(hero);
            Granted::Hero(uid)
        }
    };

    log::debug!("granted {:?}", reward);
    Ok(granted)
}
