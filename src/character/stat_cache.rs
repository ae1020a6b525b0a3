//! Memoized stat resolution.
//!
//! Entries are keyed by the fields resolution reads (template, element,
//! level, star, growth tier, traits, loadout, bonuses). Exp and generation
//! are not part of the key, so gaining exp without a level-up still hits;
//! the entity snapshot of a hit is refreshed to the caller's copy.

use super::derived_stats::{resolve_card_stats, resolve_hero_stats, EntitySnapshot, ResolvedStats};
use super::types::{OwnedCard, OwnedHero};
use crate::core::constants::STAT_CACHE_CAPACITY;
use crate::items::equipment::Equipment;
use crate::items::types::Element;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StatKey {
    Card {
        uid: String,
        template_id: String,
        element: Element,
        level: u32,
        star: u32,
        growth_tier: u32,
        bonus_hp: u32,
        bonus_atk: u32,
        traits: Vec<String>,
        equipped: Equipment,
    },
    Hero {
        uid: String,
        template_id: String,
        level: u32,
        equipped: Equipment,
    },
}

impl StatKey {
    fn card(card: &OwnedCard) -> Self {
        StatKey::Card {
            uid: card.uid.clone(),
            template_id: card.template_id.clone(),
            element: card.element,
            level: card.level,
            star: card.star,
            growth_tier: card.growth_tier,
            bonus_hp: card.bonus_hp,
            bonus_atk: card.bonus_atk,
            traits: card.traits.clone(),
            equipped: card.equipped.clone(),
        }
    }

    fn hero(hero: &OwnedHero) -> Self {
        StatKey::Hero {
            uid: hero.uid.clone(),
            template_id: hero.template_id.clone(),
            level: hero.level,
            equipped: hero.equipped.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct StatCache {
    entries: HashMap<StatKey, ResolvedStats>,
    hits: u64,
    misses: u64,
}

impl StatCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card(&mut self, card: &OwnedCard) -> &ResolvedStats {
        self.lookup(
            StatKey::card(card),
            EntitySnapshot::Card(card.clone()),
            || resolve_card_stats(card),
        )
    }

    pub fn hero(&mut self, hero: &OwnedHero) -> &ResolvedStats {
        self.lookup(
            StatKey::hero(hero),
            EntitySnapshot::Hero(hero.clone()),
            || resolve_hero_stats(hero),
        )
    }

    fn lookup(
        &mut self,
        key: StatKey,
        entity: EntitySnapshot,
        resolve: impl FnOnce() -> ResolvedStats,
    ) -> &ResolvedStats {
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= STAT_CACHE_CAPACITY {
                log::debug!("stat cache full ({} entries), flushing", self.entries.len());
                self.entries.clear();
            }
        }
        let stats = self.entries.entry(key).or_insert_with(resolve);
        stats.entity = entity;
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
