//! Experience and level-ups shared by cards and heroes.

use crate::character::types::{OwnedCard, OwnedHero};
use crate::core::constants::{EXP_PER_LEVEL, HERO_LEVEL_CAP, LEVELS_PER_GROWTH_TIER};

/// Level/exp state that `add_exp` can advance.
///
/// Implemented by owned cards (cap from growth tier) and owned heroes
/// (fixed cap).
pub trait Progressable {
    fn level(&self) -> u32;
    fn exp(&self) -> u64;
    fn set_level(&mut self, level: u32);
    fn set_exp(&mut self, exp: u64);

    /// Highest level this entity can currently reach.
    fn level_cap(&self) -> u32;

    fn is_at_cap(&self) -> bool {
        self.level() >= self.level_cap()
    }
}

impl Progressable for OwnedCard {
    fn level(&self) -> u32 {
        self.level
    }

    fn exp(&self) -> u64 {
        self.exp
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn set_exp(&mut self, exp: u64) {
        self.exp = exp;
    }

    fn level_cap(&self) -> u32 {
        card_level_cap(self.growth_tier)
    }
}

impl Progressable for OwnedHero {
    fn level(&self) -> u32 {
        self.level
    }

    fn exp(&self) -> u64 {
        self.exp
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn set_exp(&mut self, exp: u64) {
        self.exp = exp;
    }

    fn level_cap(&self) -> u32 {
        HERO_LEVEL_CAP
    }
}

/// Level cap for a card: 10 per growth tier.
pub fn card_level_cap(growth_tier: u32) -> u32 {
    growth_tier * LEVELS_PER_GROWTH_TIER
}

/// Exp consumed to advance from `level` to `level + 1`.
pub fn exp_to_next_level(level: u32) -> u64 {
    level as u64 * EXP_PER_LEVEL
}

/// Adds exp and applies every level-up it pays for.
///
/// At the cap, exp is discarded and no level-up is reported. Reaching the
/// cap mid-loop zeroes the remaining exp. Returns true if at least one
/// level was gained.
pub fn add_exp<P: Progressable + ?Sized>(entity: &mut P, amount: u64) -> bool {
    if entity.is_at_cap() {
        entity.set_exp(0);
        return false;
    }

    let mut exp = entity.exp().saturating_add(amount);
    let mut level = entity.level();
    let cap = entity.level_cap();
    let mut leveled = false;

    while exp >= exp_to_next_level(level) {
        exp -= exp_to_next_level(level);
        level += 1;
        leveled = true;
        if level >= cap {
            exp = 0;
            break;
        }
    }

    entity.set_level(level);
    entity.set_exp(exp);
    leveled
}
