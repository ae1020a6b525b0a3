//! Time-based stamina regeneration.

use crate::core::config::GameConfig;
use crate::core::game_state::PlayerState;

/// Applies one stamina point per `config.stamina_regen_seconds` elapsed
/// since the last tick, up to the cap. Partial intervals carry over.
/// Stamina already above the cap (from potions or rewards) is left alone.
/// Returns the number of points gained.
pub fn regen_stamina(state: &mut PlayerState, config: &GameConfig, now: i64) -> u32 {
    if config.stamina_regen_seconds <= 0 {
        return 0;
    }
    if state.stamina >= state.stamina_cap {
        state.last_stamina_tick = now;
        return 0;
    }

    let elapsed = now - state.last_stamina_tick;
    if elapsed < config.stamina_regen_seconds {
        return 0;
    }

    let ticks = elapsed / config.stamina_regen_seconds;
    let missing = (state.stamina_cap - state.stamina) as i64;
    let gained = ticks.min(missing) as u32;
    state.stamina += gained;

    if state.stamina >= state.stamina_cap {
        state.last_stamina_tick = now;
    } else {
        state.last_stamina_tick += ticks * config.stamina_regen_seconds;
    }

    log::debug!("regenerated {} stamina ({} elapsed)", gained, elapsed);
    gained
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (PlayerState, GameConfig) {
        let config = GameConfig::empty();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = PlayerState::new(&config, 1_000, &mut rng);
        state.stamina = 10;
        (state, config)
    }

    #[test]
    fn test_one_point_per_interval() {
        let (mut state, config) = setup();
        assert_eq!(regen_stamina(&mut state, &config, 1_000 + 299), 0);
        assert_eq!(regen_stamina(&mut state, &config, 1_000 + 3 * 300 + 120), 3);
        assert_eq!(state.stamina, 13);
        // the 120 leftover seconds still count toward the next point
        assert_eq!(state.last_stamina_tick, 1_900);
        assert_eq!(regen_stamina(&mut state, &config, 2_200), 1);
    }

    #[test]
    fn test_regen_stops_at_cap() {
        let (mut state, config) = setup();
        assert_eq!(regen_stamina(&mut state, &config, 1_000 + 300 * 500), 50);
        assert_eq!(state.stamina, 60);
    }

    #[test]
    fn test_overflowed_stamina_untouched() {
        let (mut state, config) = setup();
        state.stamina = 90;
        assert_eq!(regen_stamina(&mut state, &config, 1_000_000), 0);
        assert_eq!(state.stamina, 90);
    }
}
