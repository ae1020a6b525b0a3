//! Tunable game settings.

use super::error::GameError;
use crate::catalog::heroes::STARTER_HERO;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings a deployment may want to rebalance without touching code.
///
/// Fixed formula constants (stat scaling, power weights, rarity ceilings)
/// live in `core::constants` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Resources a new player starts with
    pub starting_gold: u64,
    pub starting_gems: u64,
    pub starting_stamina: u32,

    /// Natural stamina regeneration stops at this value
    pub stamina_cap: u32,

    /// Seconds per regenerated stamina point
    pub stamina_regen_seconds: i64,

    pub arena_ticket_cap: u32,

    /// Gold spent per breeding attempt
    pub breed_cost: u64,

    /// Hero template given to every new player
    pub starter_hero: String,

    /// Card templates given to every new player, placed into the deck in order
    pub starter_cards: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_gold: 1000,
            starting_gems: 300,
            starting_stamina: 60,
            stamina_cap: 60,
            stamina_regen_seconds: 300,
            arena_ticket_cap: 5,
            breed_cost: 1000,
            starter_hero: STARTER_HERO.to_string(),
            starter_cards: vec![
                "card_slime".to_string(),
                "card_goblin".to_string(),
                "card_militia".to_string(),
            ],
        }
    }
}

impl GameConfig {
    /// Rich starting account for balance testing
    pub fn sandbox() -> Self {
        Self {
            starting_gold: 1_000_000,
            starting_gems: 100_000,
            starting_stamina: 999,
            stamina_cap: 999,
            ..Default::default()
        }
    }

    /// Bare account with no starter cards
    pub fn empty() -> Self {
        Self {
            starter_cards: Vec::new(),
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.starting_gold, 1000);
        assert_eq!(config.starter_hero, "hero_knight");
        assert_eq!(config.starter_cards.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{"breed_cost": 250}"#).unwrap();
        assert_eq!(config.breed_cost, 250);
        assert_eq!(config.stamina_cap, 60);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = GameConfig::from_json_str("{not json");
        assert!(matches!(result, Err(GameError::Serialization(_))));
    }

    #[test]
    fn test_sandbox_preset() {
        let config = GameConfig::sandbox();
        assert!(config.starting_gold > GameConfig::default().starting_gold);
        assert_eq!(config.breed_cost, GameConfig::default().breed_cost);
    }
}
