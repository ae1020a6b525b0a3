// Stat scaling
pub const CARD_LEVEL_SCALING: f64 = 0.1;
pub const HERO_LEVEL_SCALING: f64 = 0.2;
pub const STAR_SCALING: f64 = 0.2;

// Power score weights: floor(hp/5 + atk + def + spd*0.5 + crit*500)
pub const POWER_HP_DIVISOR: f64 = 5.0;
pub const POWER_SPD_WEIGHT: f64 = 0.5;
pub const POWER_CRIT_WEIGHT: f64 = 500.0;

// Trait speed modifiers below this value multiply, otherwise they add
pub const SPEED_TRAIT_MULTIPLIER_LIMIT: f64 = 5.0;

// Leveling
pub const EXP_PER_LEVEL: u64 = 100;
pub const HERO_LEVEL_CAP: u32 = 50;
pub const LEVELS_PER_GROWTH_TIER: u32 = 10;
pub const MAX_GROWTH_TIER: u32 = 3;

// Evolution
pub const EVOLUTION_MATERIALS_REQUIRED: usize = 2;
pub const EVOLUTION_BONUS_HP: u32 = 100;
pub const EVOLUTION_BONUS_ATK: u32 = 20;
pub const MAX_STAR_TIER: u32 = 7;

// Breeding
pub const INHERIT_BONUS: f64 = 0.1;
pub const MAX_TRAITS: usize = 3;
pub const TRAIT_INHERIT_CHANCE: f64 = 0.5;

// Decks
pub const DECK_SIZE: usize = 8;
pub const ARENA_DECK_SIZE: usize = 6;
pub const ARENA_HERO_SLOT: usize = 0;

// Arena
pub const ARENA_TOP_POINTS: u32 = 5000;
pub const ARENA_POINTS_PER_RANK: u32 = 10;
pub const ARENA_WIN_POINTS: u32 = 30;
pub const ARENA_LOSS_POINTS: u32 = 15;
pub const ARENA_WIN_GOLD: u64 = 200;
pub const ARENA_BATTLE_VARIANCE: f64 = 0.1;
pub const BOT_BASE_POWER: u32 = 1500;
pub const BOT_POINT_JITTER_MAX: u32 = 4;
pub const BOT_POWER_PER_LEVEL: f64 = 400.0;
pub const BOT_MAX_LEVEL: u32 = 30;
pub const BOT_MAX_STAR: u32 = 3;
pub const BOT_REFERENCE_HERO: &str = "hero_knight";

// Campaign star thresholds (team power / enemy power)
pub const STAGE_THREE_STAR_RATIO: f64 = 1.5;
pub const STAGE_TWO_STAR_RATIO: f64 = 1.2;

// Consumables
pub const EXP_BOOK_AMOUNT: u64 = 500;
pub const HERO_EXP_BOOK_AMOUNT: u64 = 1000;
pub const STAMINA_POTION_AMOUNT: u32 = 30;

// Stat cache entries kept before the cache is flushed
pub const STAT_CACHE_CAPACITY: usize = 1024;

// Save files
pub const SAVE_DIR_NAME: &str = ".summoner";
pub const SAVE_FILE_NAME: &str = "player.json";
pub const SAVE_VERSION: u32 = 1;
