use crate::items::equipment::Equipment;
use crate::items::types::Element;
use serde::{Deserialize, Serialize};

/// A card in the player's collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedCard {
    pub uid: String,
    pub template_id: String,
    pub element: Element,
    pub level: u32,
    pub exp: u64,
    pub star: u32,
    /// Raises the level cap by 10 per tier.
    pub growth_tier: u32,
    /// Flat bonuses earned through breeding and evolution.
    #[serde(default)]
    pub bonus_hp: u32,
    #[serde(default)]
    pub bonus_atk: u32,
    #[serde(default)]
    pub generation: u32,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub equipped: Equipment,
}

/// A hero in the player's roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedHero {
    pub uid: String,
    pub template_id: String,
    pub level: u32,
    pub exp: u64,
    #[serde(default)]
    pub equipped: Equipment,
}
