//! A player's game session: state, settings, stat cache and save store.
//!
//! Every command validates and mutates the state through the free functions
//! of the gameplay modules, then saves the whole state. Failed commands do
//! not save.

use super::config::GameConfig;
use super::error::GameError;
use super::game_state::{ArenaDeckKind, PlayerState};
use crate::arena::{self, ArenaOpponent, ArenaOutcome};
use crate::campaign::{self, StageOutcome};
use crate::character::derived_stats::ResolvedStats;
use crate::character::stat_cache::StatCache;
use crate::gacha::{self, PullResult};
use crate::items::rewards::Granted;
use crate::items::types::{Element, EquipmentSlot};
use crate::loadout;
use crate::mailbox;
use crate::progression::{self, EvolutionOutcome, LevelUpResult};
use crate::shop::{self, Purchase};
use crate::utils::persistence::StateStore;
use chrono::Utc;
use rand::Rng;

pub struct GameSession<S: StateStore, R: Rng> {
    state: PlayerState,
    config: GameConfig,
    cache: StatCache,
    store: S,
    rng: R,
}

impl<S: StateStore, R: Rng> GameSession<S, R> {
    /// Loads the saved player from `store`, or creates and saves a new one.
    /// Stamina regenerated while away is applied on load.
    pub fn open(config: GameConfig, mut store: S, mut rng: R) -> Result<Self, GameError> {
        let now = Utc::now().timestamp();
        let (state, fresh) = match store.load()? {
            Some(state) => (state, false),
            None => (PlayerState::new(&config, now, &mut rng), true),
        };
        let mut session = Self {
            state,
            config,
            cache: StatCache::new(),
            store,
            rng,
        };
        if fresh {
            log::info!("created new player {}", session.state.player_id);
            session.save()?;
        } else {
            session.tick_stamina(now)?;
        }
        Ok(session)
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &StatCache {
        &self.cache
    }

    pub fn save(&mut self) -> Result<(), GameError> {
        self.state.last_save_time = Utc::now().timestamp();
        self.store.save(&self.state)
    }

    /// Runs a command and saves on success. If the save fails the state is
    /// rolled back, so a command is either applied and saved or not at all.
    fn run<T, F>(&mut self, command: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut PlayerState, &mut StatCache, &GameConfig, &mut R) -> Result<T, GameError>,
    {
        let snapshot = self.state.clone();
        let value = command(&mut self.state, &mut self.cache, &self.config, &mut self.rng)?;
        if let Err(e) = self.save() {
            log::error!("save failed, discarding last command: {}", e);
            self.state = snapshot;
            return Err(e);
        }
        Ok(value)
    }

    // Stats

    pub fn card_stats(&mut self, card_uid: &str) -> Option<ResolvedStats> {
        let card = self.state.card(card_uid)?;
        Some(self.cache.card(card).clone())
    }

    pub fn hero_stats(&mut self, hero_uid: &str) -> Option<ResolvedStats> {
        let hero = self.state.hero(hero_uid)?;
        Some(self.cache.hero(hero).clone())
    }

    // Stamina

    pub fn tick_stamina(&mut self, now: i64) -> Result<u32, GameError> {
        self.run(|state, _, config, _| Ok(campaign::regen_stamina(state, config, now)))
    }

    // Gacha

    pub fn pull(
        &mut self,
        pool_id: &str,
        element: Option<Element>,
    ) -> Result<PullResult, GameError> {
        self.run(|state, _, _, rng| gacha::pull(state, pool_id, element, rng))
    }

    pub fn pull_many(
        &mut self,
        pool_id: &str,
        count: u32,
        element: Option<Element>,
    ) -> Result<Vec<PullResult>, GameError> {
        self.run(|state, _, _, rng| gacha::pull_many(state, pool_id, count, element, rng))
    }

    // Progression

    pub fn evolve(&mut self, card_uid: &str) -> Result<EvolutionOutcome, GameError> {
        self.run(|state, _, _, _| progression::execute_evolution(state, card_uid))
    }

    pub fn breed(&mut self, parent_a: &str, parent_b: &str) -> Result<String, GameError> {
        self.run(|state, _, config, rng| progression::breed(state, config, parent_a, parent_b, rng))
    }

    pub fn raise_growth_tier(&mut self, card_uid: &str) -> Result<u32, GameError> {
        self.run(|state, _, _, _| progression::raise_growth_tier(state, card_uid))
    }

    pub fn use_exp_book(&mut self, card_uid: &str) -> Result<LevelUpResult, GameError> {
        self.run(|state, _, _, _| progression::use_exp_book(state, card_uid))
    }

    pub fn use_hero_exp_book(&mut self, hero_uid: &str) -> Result<LevelUpResult, GameError> {
        self.run(|state, _, _, _| progression::use_hero_exp_book(state, hero_uid))
    }

    pub fn use_stamina_potion(&mut self) -> Result<u32, GameError> {
        self.run(|state, _, _, _| progression::use_stamina_potion(state))
    }

    // Campaign

    pub fn play_stage(&mut self, stage_id: &str) -> Result<StageOutcome, GameError> {
        self.run(|state, cache, _, _| campaign::play_stage(state, cache, stage_id))
    }

    // Arena

    /// Fresh bot roster around the attack deck's power. Does not mutate.
    pub fn arena_opponents(&mut self) -> Vec<ArenaOpponent> {
        let power = arena::arena_power(&self.state, &mut self.cache, ArenaDeckKind::Attack);
        arena::generate_bots(power, self.state.arena.points, &mut self.rng)
    }

    pub fn arena_fight(&mut self, opponent: &ArenaOpponent) -> Result<ArenaOutcome, GameError> {
        self.run(|state, cache, _, rng| arena::fight(state, cache, opponent, rng))
    }

    pub fn set_arena_slot(
        &mut self,
        kind: ArenaDeckKind,
        index: usize,
        card_uid: &str,
    ) -> Result<(), GameError> {
        self.run(|state, _, _, _| arena::set_arena_slot(state, kind, index, card_uid))
    }

    pub fn clear_arena_slot(&mut self, kind: ArenaDeckKind, index: usize) -> Result<(), GameError> {
        self.run(|state, _, _, _| arena::clear_arena_slot(state, kind, index))
    }

    // Shop and mail

    pub fn purchase(&mut self, listing_id: &str) -> Result<Purchase, GameError> {
        self.run(|state, _, _, rng| shop::purchase(state, listing_id, rng))
    }

    pub fn claim_mail(&mut self, mail_id: &str) -> Result<Granted, GameError> {
        self.run(|state, _, _, rng| mailbox::claim_mail(state, mail_id, rng))
    }

    pub fn claim_all_mail(&mut self) -> Result<Vec<Granted>, GameError> {
        self.run(|state, _, _, rng| Ok(mailbox::claim_all(state, rng)))
    }

    // Loadout

    pub fn set_deck_slot(&mut self, index: usize, card_uid: &str) -> Result<(), GameError> {
        self.run(|state, _, _, _| loadout::set_deck_slot(state, index, card_uid))
    }

    pub fn clear_deck_slot(&mut self, index: usize) -> Result<Option<String>, GameError> {
        self.run(|state, _, _, _| loadout::clear_deck_slot(state, index))
    }

    pub fn equip_card(
        &mut self,
        card_uid: &str,
        equipment_id: &str,
    ) -> Result<Option<String>, GameError> {
        self.run(|state, _, _, _| loadout::equip_card(state, card_uid, equipment_id))
    }

    pub fn unequip_card(
        &mut self,
        card_uid: &str,
        slot: EquipmentSlot,
    ) -> Result<Option<String>, GameError> {
        self.run(|state, _, _, _| loadout::unequip_card(state, card_uid, slot))
    }

    pub fn equip_hero(
        &mut self,
        hero_uid: &str,
        equipment_id: &str,
    ) -> Result<Option<String>, GameError> {
        self.run(|state, _, _, _| loadout::equip_hero(state, hero_uid, equipment_id))
    }

    pub fn unequip_hero(
        &mut self,
        hero_uid: &str,
        slot: EquipmentSlot,
    ) -> Result<Option<String>, GameError> {
        self.run(|state, _, _, _| loadout::unequip_hero(state, hero_uid, slot))
    }

    pub fn set_active_hero(&mut self, hero_uid: &str) -> Result<(), GameError> {
        self.run(|state, _, _, _| loadout::set_active_hero(state, hero_uid))
    }
}
