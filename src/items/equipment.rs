use super::types::EquipmentSlot;
use serde::{Deserialize, Serialize};

/// Equipment ids worn by a card or hero, one per slot.
///
/// Cards only ever fill `EquipmentSlot::CARD_SLOTS`; the helm and boots
/// slots stay empty for them. Equality and hashing are structural so the
/// loadout can be part of a stat cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub helm: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub boots: Option<String>,
    #[serde(default)]
    pub accessory: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&str> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_deref(),
            EquipmentSlot::Helm => self.helm.as_deref(),
            EquipmentSlot::Armor => self.armor.as_deref(),
            EquipmentSlot::Boots => self.boots.as_deref(),
            EquipmentSlot::Accessory => self.accessory.as_deref(),
        }
    }

    /// Puts `item` into `slot`, returning whatever was there before.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<String>) -> Option<String> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Helm => &mut self.helm,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Boots => &mut self.boots,
            EquipmentSlot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &str> {
        [
            &self.weapon,
            &self.helm,
            &self.armor,
            &self.boots,
            &self.accessory,
        ]
        .into_iter()
        .filter_map(|item| item.as_deref())
    }

    /// Empties every slot, returning the removed ids.
    pub fn take_all(&mut self) -> Vec<String> {
        [
            self.weapon.take(),
            self.helm.take(),
            self.armor.take(),
            self.boots.take(),
            self.accessory.take(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
