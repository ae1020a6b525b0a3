//! Shop listings.

use crate::items::rewards::Reward;
use crate::items::types::{ConsumableItem, Currency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub currency: Currency,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShopReward {
    Grant(Reward),
    /// One free pull from the named gacha pool.
    GachaBox { pool_id: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopListing {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Price,
    pub reward: ShopReward,
}

fn listing(
    id: &'static str,
    name: &'static str,
    currency: Currency,
    amount: u64,
    reward: ShopReward,
) -> ShopListing {
    ShopListing {
        id,
        name,
        price: Price { currency, amount },
        reward,
    }
}

/// Returns every shop listing in display order.
pub fn get_all_listings() -> Vec<ShopListing> {
    use Currency::{Gems, Gold};
    vec![
        listing(
            "shop_stamina_refill",
            "Stamina Refill",
            Gems,
            50,
            ShopReward::Grant(Reward::Stamina(60)),
        ),
        listing(
            "shop_stamina_potion",
            "Stamina Potion",
            Gold,
            800,
            ShopReward::Grant(Reward::Item {
                item: ConsumableItem::StaminaPotion,
                quantity: 1,
            }),
        ),
        listing(
            "shop_exp_books",
            "Tome Bundle (x3)",
            Gold,
            1000,
            ShopReward::Grant(Reward::Item {
                item: ConsumableItem::ExpBook,
                quantity: 3,
            }),
        ),
        listing(
            "shop_hero_books",
            "Chronicle Bundle (x2)",
            Gold,
            1500,
            ShopReward::Grant(Reward::Item {
                item: ConsumableItem::HeroExpBook,
                quantity: 2,
            }),
        ),
        listing(
            "shop_growth_stone",
            "Growth Stone",
            Gems,
            200,
            ShopReward::Grant(Reward::Item {
                item: ConsumableItem::GrowthStone,
                quantity: 1,
            }),
        ),
        listing(
            "shop_arena_tickets",
            "Arena Tickets (x5)",
            Gems,
            100,
            ShopReward::Grant(Reward::ArenaTickets(5)),
        ),
        listing(
            "shop_iron_sword",
            "Iron Sword",
            Gold,
            2000,
            ShopReward::Grant(Reward::Equipment {
                equipment_id: "eq_iron_sword".to_string(),
            }),
        ),
        listing(
            "shop_chain_mail",
            "Chain Mail",
            Gold,
            2000,
            ShopReward::Grant(Reward::Equipment {
                equipment_id: "eq_chain_mail".to_string(),
            }),
        ),
        listing(
            "shop_iron_helm",
            "Iron Helm",
            Gold,
            1200,
            ShopReward::Grant(Reward::HeroEquipment {
                equipment_id: "heq_iron_helm".to_string(),
            }),
        ),
        listing(
            "shop_hero_mage",
            "Recruit: Lyra Emberveil",
            Gems,
            1000,
            ShopReward::Grant(Reward::Hero {
                template_id: "hero_mage".to_string(),
            }),
        ),
        listing(
            "shop_hero_ranger",
            "Recruit: Kestrel",
            Gems,
            1000,
            ShopReward::Grant(Reward::Hero {
                template_id: "hero_ranger".to_string(),
            }),
        ),
        listing(
            "shop_premium_box",
            "Premium Summon Box",
            Gems,
            280,
            ShopReward::GachaBox {
                pool_id: "pool_premium",
            },
        ),
    ]
}

pub fn get_listing(id: &str) -> Option<ShopListing> {
    get_all_listings().into_iter().find(|l| l.id == id)
}
