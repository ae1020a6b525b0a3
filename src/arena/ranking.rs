//! Rank estimates and team power for the arena ladder.

use crate::character::stat_cache::StatCache;
use crate::core::constants::{ARENA_POINTS_PER_RANK, ARENA_TOP_POINTS};
use crate::core::game_state::{ArenaSlot, PlayerState};

/// Estimated ladder position for a point total. This is a step function of
/// points, not a live leaderboard position.
pub fn estimate_rank(points: u32) -> u32 {
    if points >= ARENA_TOP_POINTS {
        return 1;
    }
    ((ARENA_TOP_POINTS - points) / ARENA_POINTS_PER_RANK + 1).max(1)
}

/// Sums resolved power over every occupied slot. Slots pointing at entities
/// the player no longer owns are skipped.
pub fn team_power(state: &PlayerState, cache: &mut StatCache, slots: &[Option<ArenaSlot>]) -> u32 {
    let mut total = 0u32;
    for slot in slots.iter().flatten() {
        let power = match slot {
            ArenaSlot::Hero(uid) => state.hero(uid).map(|h| cache.hero(h).power),
            ArenaSlot::Card(uid) => state.card(uid).map(|c| cache.card(c).power),
        };
        match power {
            Some(p) => total = total.saturating_add(p),
            None => log::warn!("arena slot references missing entity '{}'", slot.uid()),
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_top_rank_at_threshold() {
        assert_eq!(estimate_rank(5000), 1);
        assert_eq!(estimate_rank(9000), 1);
    }

    #[test]
    fn test_rank_steps_every_ten_points() {
        assert_eq!(estimate_rank(4000), 101);
        assert_eq!(estimate_rank(4995), 1);
        assert_eq!(estimate_rank(4990), 2);
        assert_eq!(estimate_rank(0), 501);
    }

    #[test]
    fn test_rank_monotonic() {
        let mut previous = estimate_rank(0);
        for points in (0..=6000).step_by(7) {
            let rank = estimate_rank(points);
            assert!(rank <= previous);
            previous = rank;
        }
    }

    #[test]
    fn test_team_power_sums_occupied_slots() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let state = PlayerState::new(&GameConfig::default(), 0, &mut rng);
        let mut cache = StatCache::new();

        let hero = state.heroes[0].uid.clone();
        let card = state.cards[0].uid.clone();
        let slots = vec![
            Some(ArenaSlot::Hero(hero.clone())),
            None,
            Some(ArenaSlot::Card(card.clone())),
            Some(ArenaSlot::Card("card_gone".into())),
        ];

        let expected = cache.hero(state.hero(&hero).unwrap()).power
            + cache.card(state.card(&card).unwrap()).power;
        assert_eq!(team_power(&state, &mut cache, &slots), expected);
        assert_eq!(team_power(&state, &mut cache, &[None, None]), 0);
    }
}
