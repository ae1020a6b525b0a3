use crate::catalog::stages::{get_stage, StageDefinition};
use crate::character::stat_cache::StatCache;
use crate::core::constants::{STAGE_THREE_STAR_RATIO, STAGE_TWO_STAR_RATIO};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::items::types::Currency;
use crate::progression::leveling::add_exp;

#[derive(Debug, Clone, PartialEq)]
pub struct StageOutcome {
    pub stage_id: &'static str,
    pub victory: bool,
    /// 0 on defeat
    pub stars: u8,
    pub team_power: u32,
    pub enemy_power: u32,
    pub gold: u64,
    pub gems: u64,
    pub exp: u64,
    /// Uids of every card or hero that gained a level
    pub leveled_up: Vec<String>,
}

/// Power of the PvE deck plus the active hero.
pub fn deck_power(state: &PlayerState, cache: &mut StatCache) -> u32 {
    let cards: u32 = state
        .deck
        .iter()
        .flatten()
        .filter_map(|uid| state.card(uid))
        .map(|card| cache.card(card).power)
        .sum();
    let hero = state.active_hero().map_or(0, |h| cache.hero(h).power);
    cards + hero
}

pub fn is_stage_unlocked(state: &PlayerState, stage: &StageDefinition) -> bool {
    match stage.requires {
        Some(required) => state.stage_stars.contains_key(required),
        None => true,
    }
}

/// Stars earned for a power ratio; 0 means defeat.
pub fn stars_for(team_power: u32, enemy_power: u32) -> u8 {
    if enemy_power == 0 {
        return 3;
    }
    let ratio = team_power as f64 / enemy_power as f64;
    if ratio >= STAGE_THREE_STAR_RATIO {
        3
    } else if ratio >= STAGE_TWO_STAR_RATIO {
        2
    } else if ratio >= 1.0 {
        1
    } else {
        0
    }
}

/// Enters a stage with the PvE deck.
///
/// Stamina is spent whether or not the stage is won. A victory pays gold,
/// gives exp to every deck card and the active hero, keeps the best star
/// result and pays gems on the first clear.
pub fn play_stage(
    state: &mut PlayerState,
    cache: &mut StatCache,
    stage_id: &str,
) -> Result<StageOutcome, GameError> {
    let stage = get_stage(stage_id).ok_or_else(|| GameError::UnknownStage(stage_id.to_string()))?;
    if let Some(required) = stage.requires {
        if !is_stage_unlocked(state, stage) {
            return Err(GameError::StageLocked(required.to_string()));
        }
    }
    if state.stamina < stage.stamina_cost {
        return Err(GameError::NotEnoughStamina {
            have: state.stamina,
            need: stage.stamina_cost,
        });
    }
    let team_power = deck_power(state, cache);
    if team_power == 0 {
        return Err(GameError::EmptyDeck);
    }

    state.stamina -= stage.stamina_cost;
    let stars = stars_for(team_power, stage.enemy_power);

    let mut outcome = StageOutcome {
        stage_id: stage.id,
        victory: stars > 0,
        stars,
        team_power,
        enemy_power: stage.enemy_power,
        gold: 0,
        gems: 0,
        exp: 0,
        leveled_up: Vec::new(),
    };

    if !outcome.victory {
        log::info!("{} lost ({} vs {})", stage.id, team_power, stage.enemy_power);
        return Ok(outcome);
    }

    outcome.gold = stage.gold_reward;
    outcome.exp = stage.exp_reward;
    state.earn(Currency::Gold, stage.gold_reward);

    let first_clear = !state.stage_stars.contains_key(stage.id);
    if first_clear {
        outcome.gems = stage.first_clear_gems;
        state.earn(Currency::Gems, stage.first_clear_gems);
    }
    let best = state.stage_stars.entry(stage.id.to_string()).or_insert(0);
    *best = (*best).max(stars);

    let deck: Vec<String> = state.deck.iter().flatten().cloned().collect();
    for uid in deck {
        if let Some(card) = state.card_mut(&uid) {
            if add_exp(card, stage.exp_reward) {
                outcome.leveled_up.push(uid);
            }
        }
    }
    if let Some(uid) = state.active_hero.clone() {
        if let Some(hero) = state.hero_mut(&uid) {
            if add_exp(hero, stage.exp_reward) {
                outcome.leveled_up.push(uid);
            }
        }
    }

    log::info!(
        "{} cleared with {} stars{}",
        stage.id,
        stars,
        if first_clear { " (first clear)" } else { "" }
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (PlayerState, StatCache) {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        (
            PlayerState::new(&GameConfig::default(), 0, &mut rng),
            StatCache::new(),
        )
    }

    #[test]
    fn test_star_thresholds() {
        assert_eq!(stars_for(150, 100), 3);
        assert_eq!(stars_for(149, 100), 2);
        assert_eq!(stars_for(120, 100), 2);
        assert_eq!(stars_for(100, 100), 1);
        assert_eq!(stars_for(99, 100), 0);
    }

    #[test]
    fn test_first_clear_rewards() {
        let (mut state, mut cache) = setup();
        let outcome = play_stage(&mut state, &mut cache, "stage_1_1").unwrap();
        assert!(outcome.victory);
        assert_eq!(outcome.stars, 3);
        assert_eq!(state.stamina, 55);
        assert_eq!(state.gold, 1100);
        assert_eq!(state.gems, 320);
        assert_eq!(state.stage_stars.get("stage_1_1"), Some(&3));
        // 60 exp is below the 100 needed for level 2
        assert!(outcome.leveled_up.is_empty());
        assert!(state.cards.iter().all(|c| c.exp == 60));
        assert_eq!(state.active_hero().unwrap().exp, 60);
    }

    #[test]
    fn test_replay_pays_no_gems() {
        let (mut state, mut cache) = setup();
        play_stage(&mut state, &mut cache, "stage_1_1").unwrap();
        let outcome = play_stage(&mut state, &mut cache, "stage_1_1").unwrap();
        assert_eq!(outcome.gems, 0);
        assert_eq!(state.gems, 320);
        // second clear pushes 120 exp total past the level 2 threshold
        assert_eq!(outcome.leveled_up.len(), 4);
    }

    #[test]
    fn test_locked_stage() {
        let (mut state, mut cache) = setup();
        let err = play_stage(&mut state, &mut cache, "stage_1_2").unwrap_err();
        assert!(matches!(err, GameError::StageLocked(ref s) if s == "stage_1_1"));
        assert_eq!(state.stamina, 60);
    }

    #[test]
    fn test_not_enough_stamina() {
        let (mut state, mut cache) = setup();
        state.stamina = 4;
        assert!(matches!(
            play_stage(&mut state, &mut cache, "stage_1_1"),
            Err(GameError::NotEnoughStamina { have: 4, need: 5 })
        ));
    }

    #[test]
    fn test_defeat_spends_stamina_only() {
        let (mut state, mut cache) = setup();
        state.stage_stars.insert("stage_3_1".into(), 1);
        let outcome = play_stage(&mut state, &mut cache, "stage_3_2").unwrap();
        assert!(!outcome.victory);
        assert_eq!(outcome.stars, 0);
        assert_eq!(state.stamina, 45);
        assert_eq!(state.gold, 1000);
        assert!(!state.stage_stars.contains_key("stage_3_2"));
    }

    #[test]
    fn test_unknown_stage() {
        let (mut state, mut cache) = setup();
        assert!(matches!(
            play_stage(&mut state, &mut cache, "stage_9_9"),
            Err(GameError::UnknownStage(_))
        ));
    }
}
