//! Gacha pool definitions.

use crate::items::types::{Currency, Element, Rarity};

/// Draw probability per rarity bucket. Common is whatever the other
/// buckets leave over, so `common` is informational only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityRates {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub super_rare: f64,
    pub ultra_rare: f64,
    pub legend: f64,
    pub mythical: f64,
}

impl RarityRates {
    pub const NONE: RarityRates = RarityRates {
        common: 0.0,
        uncommon: 0.0,
        rare: 0.0,
        super_rare: 0.0,
        ultra_rare: 0.0,
        legend: 0.0,
        mythical: 0.0,
    };

    pub fn get(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::SuperRare => self.super_rare,
            Rarity::UltraRare => self.ultra_rare,
            Rarity::Legend => self.legend,
            Rarity::Mythical => self.mythical,
        }
    }

    pub fn total(&self) -> f64 {
        Rarity::ALL.iter().map(|r| self.get(*r)).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GachaPool {
    pub id: &'static str,
    pub name: &'static str,
    pub currency: Currency,
    pub cost: u64,
    pub rates: RarityRates,
    /// Element banner: restricts draws to this element plus the wildcard.
    pub element: Option<Element>,
}

const PREMIUM_RATES: RarityRates = RarityRates {
    common: 0.0,
    uncommon: 0.5,
    rare: 0.35,
    super_rare: 0.1,
    ultra_rare: 0.04,
    legend: 0.009,
    mythical: 0.001,
};

pub static GACHA_POOLS: &[GachaPool] = &[
    GachaPool {
        id: "pool_standard",
        name: "Standard Summon",
        currency: Currency::Gold,
        cost: 500,
        rates: RarityRates {
            common: 0.6,
            uncommon: 0.3,
            rare: 0.09,
            super_rare: 0.01,
            ..RarityRates::NONE
        },
        element: None,
    },
    GachaPool {
        id: "pool_premium",
        name: "Premium Summon",
        currency: Currency::Gems,
        cost: 300,
        rates: PREMIUM_RATES,
        element: None,
    },
    GachaPool {
        id: "pool_inferno",
        name: "Inferno Banner",
        currency: Currency::Gems,
        cost: 300,
        rates: PREMIUM_RATES,
        element: Some(Element::Fire),
    },
];

pub fn get_pool(id: &str) -> Option<&'static GachaPool> {
    GACHA_POOLS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_rates_do_not_exceed_one() {
        for pool in GACHA_POOLS {
            assert!(pool.rates.total() <= 1.0 + 1e-9, "{} rates exceed 1.0", pool.id);
        }
    }

    #[test]
    fn test_rates_get() {
        let pool = get_pool("pool_standard").unwrap();
        assert!((pool.rates.get(Rarity::Rare) - 0.09).abs() < f64::EPSILON);
        assert_eq!(pool.rates.get(Rarity::Mythical), 0.0);
    }
}
