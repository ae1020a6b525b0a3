//! Synthetic arena opponents scaled to the player's power.

use super::ranking::estimate_rank;
use crate::character::derived_stats::EntitySnapshot;
use crate::character::factory::{create_card, create_hero};
use crate::core::constants::{
    ARENA_DECK_SIZE, ARENA_HERO_SLOT, BOT_BASE_POWER, BOT_MAX_LEVEL, BOT_MAX_STAR,
    BOT_POINT_JITTER_MAX, BOT_POWER_PER_LEVEL, BOT_REFERENCE_HERO, LEVELS_PER_GROWTH_TIER,
    MAX_GROWTH_TIER,
};
use rand::Rng;

pub struct BotArchetype {
    pub name: &'static str,
    /// 1 is the strongest archetype
    pub rank: u32,
    pub power_multiplier: f64,
}

pub static BOT_ARCHETYPES: &[BotArchetype] = &[
    BotArchetype {
        name: "Champion",
        rank: 1,
        power_multiplier: 1.25,
    },
    BotArchetype {
        name: "Veteran",
        rank: 2,
        power_multiplier: 1.15,
    },
    BotArchetype {
        name: "Rival",
        rank: 3,
        power_multiplier: 1.05,
    },
    BotArchetype {
        name: "Challenger",
        rank: 4,
        power_multiplier: 0.95,
    },
    BotArchetype {
        name: "Contender",
        rank: 5,
        power_multiplier: 0.85,
    },
    BotArchetype {
        name: "Rookie",
        rank: 6,
        power_multiplier: 0.70,
    },
];

const BOT_NAMES: &[&str] = &[
    "Ashen", "Briar", "Corvin", "Dagny", "Elric", "Fenna", "Garrow", "Hale", "Isolde", "Jory",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaOpponent {
    pub name: String,
    pub archetype: &'static str,
    pub power: u32,
    pub points: u32,
    pub rank: u32,
    pub level: u32,
    /// Hero at `ARENA_HERO_SLOT`, cards elsewhere
    pub deck: Vec<EntitySnapshot>,
}

/// Level given to a bot's units for a target power.
pub fn bot_level(power: u32) -> u32 {
    ((power as f64 / BOT_POWER_PER_LEVEL).round() as u32).clamp(1, BOT_MAX_LEVEL)
}

fn bot_deck<R: Rng>(level: u32, rng: &mut R) -> Vec<EntitySnapshot> {
    let growth_tier = level
        .div_ceil(LEVELS_PER_GROWTH_TIER)
        .clamp(1, MAX_GROWTH_TIER);

    (0..ARENA_DECK_SIZE)
        .map(|slot| {
            if slot == ARENA_HERO_SLOT {
                let mut hero = create_hero(BOT_REFERENCE_HERO);
                hero.level = level;
                EntitySnapshot::Hero(hero)
            } else {
                let mut card = create_card(None, rng);
                card.level = level;
                card.growth_tier = growth_tier;
                card.star = rng.gen_range(1..=BOT_MAX_STAR);
                EntitySnapshot::Card(card)
            }
        })
        .collect()
}

/// Builds the six-bot roster around the player's power and points, sorted
/// by estimated rank (best first). A player with no power is matched
/// against `BOT_BASE_POWER`.
pub fn generate_bots<R: Rng>(
    player_power: u32,
    player_points: u32,
    rng: &mut R,
) -> Vec<ArenaOpponent> {
    let base = if player_power == 0 {
        BOT_BASE_POWER
    } else {
        player_power
    };

    let mut bots: Vec<ArenaOpponent> = BOT_ARCHETYPES
        .iter()
        .map(|archetype| {
            let power = (base as f64 * archetype.power_multiplier).floor() as u32;
            let jitter = rng.gen_range(0..=BOT_POINT_JITTER_MAX);
            let points = player_points
                .saturating_add(100 - archetype.rank)
                .saturating_add(jitter);
            let level = bot_level(power);
            let name = format!(
                "{} the {}",
                BOT_NAMES[rng.gen_range(0..BOT_NAMES.len())],
                archetype.name
            );
            ArenaOpponent {
                name,
                archetype: archetype.name,
                power,
                points,
                rank: estimate_rank(points),
                level,
                deck: bot_deck(level, rng),
            }
        })
        .collect();

    bots.sort_by_key(|bot| bot.rank);
    bots
}
