use crate::catalog::pools::get_pool;
use crate::catalog::shop::{get_listing, ShopReward};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::gacha::logic::{free_pull, PullResult};
use crate::items::rewards::{grant_reward, validate_reward, Granted};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum Purchase {
    Granted(Granted),
    Summoned(PullResult),
}

/// Buys a shop listing. The price and the reward are both checked before
/// anything is spent.
pub fn purchase<R: Rng>(
    state: &mut PlayerState,
    listing_id: &str,
    rng: &mut R,
) -> Result<Purchase, GameError> {
    let listing =
        get_listing(listing_id).ok_or_else(|| GameError::UnknownShopItem(listing_id.to_string()))?;
    state.ensure_affordable(listing.price.currency, listing.price.amount)?;

    match &listing.reward {
        ShopReward::Grant(reward) => validate_reward(state, reward)?,
        ShopReward::GachaBox { pool_id } => {
            if get_pool(pool_id).is_none() {
                return Err(GameError::UnknownPool(pool_id.to_string()));
            }
        }
    }

    state.spend(listing.price.currency, listing.price.amount)?;
    log::info!(
        "bought {} for {} {}",
        listing.id,
        listing.price.amount,
        listing.price.currency.name()
    );

    match listing.reward {
        ShopReward::Grant(reward) => Ok(Purchase::Granted(grant_reward(state, &reward, rng)?)),
        ShopReward::GachaBox { pool_id } => Ok(Purchase::Summoned(free_pull(state, pool_id, rng)?)),
    }
}
