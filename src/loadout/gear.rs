//! Equipping cards and heroes from the player's inventories.

use crate::catalog::equipment::{get_card_equipment, get_hero_equipment, EquipmentTemplate};
use crate::core::constants::ARENA_HERO_SLOT;
use crate::core::error::GameError;
use crate::core::game_state::{ArenaDeckKind, ArenaSlot, PlayerState};
use crate::items::equipment::Equipment;
use crate::items::types::EquipmentSlot;

/// One equipment table and the slots its wearers may use.
struct GearTable {
    lookup: fn(&str) -> Option<&'static EquipmentTemplate>,
    slots: &'static [EquipmentSlot],
}

const CARD_GEAR: GearTable = GearTable {
    lookup: get_card_equipment,
    slots: &EquipmentSlot::CARD_SLOTS,
};

const HERO_GEAR: GearTable = GearTable {
    lookup: get_hero_equipment,
    slots: &EquipmentSlot::HERO_SLOTS,
};

impl GearTable {
    fn check_slot(&self, slot: EquipmentSlot) -> Result<(), GameError> {
        if self.slots.contains(&slot) {
            Ok(())
        } else {
            Err(GameError::SlotNotAllowed(slot))
        }
    }

    /// Moves one copy of `equipment_id` from the inventory onto the loadout.
    /// A replaced item goes back to the inventory and is returned.
    fn equip(
        &self,
        inventory: &mut Vec<String>,
        loadout: &mut Equipment,
        equipment_id: &str,
    ) -> Result<Option<String>, GameError> {
        let template = (self.lookup)(equipment_id)
            .ok_or_else(|| GameError::UnknownEquipment(equipment_id.to_string()))?;
        self.check_slot(template.slot)?;
        let index = inventory
            .iter()
            .position(|id| id == equipment_id)
            .ok_or_else(|| GameError::EquipmentNotOwned(equipment_id.to_string()))?;

        let item = inventory.remove(index);
        let replaced = loadout.set(template.slot, Some(item));
        if let Some(old) = &replaced {
            inventory.push(old.clone());
        }
        Ok(replaced)
    }

    fn unequip(
        &self,
        inventory: &mut Vec<String>,
        loadout: &mut Equipment,
        slot: EquipmentSlot,
    ) -> Result<Option<String>, GameError> {
        self.check_slot(slot)?;
        let removed = loadout.set(slot, None);
        if let Some(id) = &removed {
            inventory.push(id.clone());
        }
        Ok(removed)
    }
}

/// Equips a card from the card gear inventory. Returns the item it replaced.
pub fn equip_card(
    state: &mut PlayerState,
    card_uid: &str,
    equipment_id: &str,
) -> Result<Option<String>, GameError> {
    let PlayerState {
        cards,
        card_equipment,
        ..
    } = state;
    let card = cards
        .iter_mut()
        .find(|c| c.uid == card_uid)
        .ok_or_else(|| GameError::CardNotFound(card_uid.to_string()))?;
    CARD_GEAR.equip(card_equipment, &mut card.equipped, equipment_id)
}

pub fn unequip_card(
    state: &mut PlayerState,
    card_uid: &str,
    slot: EquipmentSlot,
) -> Result<Option<String>, GameError> {
    let PlayerState {
        cards,
        card_equipment,
        ..
    } = state;
    let card = cards
        .iter_mut()
        .find(|c| c.uid == card_uid)
        .ok_or_else(|| GameError::CardNotFound(card_uid.to_string()))?;
    CARD_GEAR.unequip(card_equipment, &mut card.equipped, slot)
}

/// Equips a hero from the hero gear inventory. Returns the item it replaced.
pub fn equip_hero(
    state: &mut PlayerState,
    hero_uid: &str,
    equipment_id: &str,
) -> Result<Option<String>, GameError> {
    let PlayerState {
        heroes,
        hero_equipment,
        ..
    } = state;
    let hero = heroes
        .iter_mut()
        .find(|h| h.uid == hero_uid)
        .ok_or_else(|| GameError::HeroNotFound(hero_uid.to_string()))?;
    HERO_GEAR.equip(hero_equipment, &mut hero.equipped, equipment_id)
}

pub fn unequip_hero(
    state: &mut PlayerState,
    hero_uid: &str,
    slot: EquipmentSlot,
) -> Result<Option<String>, GameError> {
    let PlayerState {
        heroes,
        hero_equipment,
        ..
    } = state;
    let hero = heroes
        .iter_mut()
        .find(|h| h.uid == hero_uid)
        .ok_or_else(|| GameError::HeroNotFound(hero_uid.to_string()))?;
    HERO_GEAR.unequip(hero_equipment, &mut hero.equipped, slot)
}

/// Makes an owned hero the leader and moves it into both arena hero slots.
pub fn set_active_hero(state: &mut PlayerState, hero_uid: &str) -> Result<(), GameError> {
    if state.hero(hero_uid).is_none() {
        return Err(GameError::HeroNotFound(hero_uid.to_string()));
    }
    state.active_hero = Some(hero_uid.to_string());
    for kind in [ArenaDeckKind::Attack, ArenaDeckKind::Defense] {
        state.arena.deck_mut(kind)[ARENA_HERO_SLOT] = Some(ArenaSlot::Hero(hero_uid.to_string()));
    }
    log::info!("active hero is now {}", hero_uid);
    Ok(())
}
