//! Error type shared by every game command.
//!
//! Commands validate before mutating, so an `Err` always means the player
//! state was left untouched. The `Display` text is meant to be shown to the
//! player as-is.

use crate::items::types::{ConsumableItem, Currency, EquipmentSlot};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("not enough {}: {have}/{need}", .currency.name())]
    NotEnoughCurrency {
        currency: Currency,
        have: u64,
        need: u64,
    },

    #[error("not enough stamina: {have}/{need}")]
    NotEnoughStamina { have: u32, need: u32 },

    #[error("no arena tickets left")]
    NoArenaTickets,

    #[error("no {} left", .0.name())]
    ItemNotOwned(ConsumableItem),

    #[error("card not found: {0}")]
    CardNotFound(String),

    #[error("hero not found: {0}")]
    HeroNotFound(String),

    #[error("parent not found: {0}")]
    ParentNotFound(String),

    #[error("a card cannot be bred with itself")]
    SameParent,

    #[error("already at maximum star tier")]
    MaxStarReached,

    #[error("not enough duplicates: {current}/{required}")]
    NotEnoughMaterials { current: usize, required: usize },

    #[error("level cap not reached yet")]
    LevelCapNotReached,

    #[error("already at maximum growth tier")]
    MaxGrowthReached,

    #[error("unknown equipment: {0}")]
    UnknownEquipment(String),

    #[error("equipment not in inventory: {0}")]
    EquipmentNotOwned(String),

    #[error("{} slot is not available here", .0.name())]
    SlotNotAllowed(EquipmentSlot),

    #[error("unknown hero: {0}")]
    UnknownHero(String),

    #[error("hero already owned: {0}")]
    HeroAlreadyOwned(String),

    #[error("unknown gacha pool: {0}")]
    UnknownPool(String),

    #[error("unknown stage: {0}")]
    UnknownStage(String),

    #[error("stage locked, clear {0} first")]
    StageLocked(String),

    #[error("unknown shop item: {0}")]
    UnknownShopItem(String),

    #[error("mail not found: {0}")]
    MailNotFound(String),

    #[error("deck slot {index} out of range (size {size})")]
    InvalidSlot { index: usize, size: usize },

    #[error("slot {0} is reserved for the active hero")]
    ReservedSlot(usize),

    #[error("card {0} is already in this deck")]
    AlreadyInDeck(String),

    #[error("no active hero")]
    NoActiveHero,

    #[error("deck is empty")]
    EmptyDeck,

    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("save data is invalid: {0}")]
    Serialization(#[from] serde_json::Error),
}
