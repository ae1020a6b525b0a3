use super::bots::ArenaOpponent;
use super::ranking::{estimate_rank, team_power};
use crate::character::stat_cache::StatCache;
use crate::core::constants::{
    ARENA_BATTLE_VARIANCE, ARENA_DECK_SIZE, ARENA_HERO_SLOT, ARENA_LOSS_POINTS, ARENA_WIN_GOLD,
    ARENA_WIN_POINTS,
};
use crate::core::error::GameError;
use crate::core::game_state::{ArenaDeckKind, ArenaSlot, PlayerState};
use crate::items::types::Currency;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaOutcome {
    pub won: bool,
    pub player_power: u32,
    pub opponent_power: u32,
    pub points_delta: i64,
    pub points: u32,
    pub rank: u32,
    pub gold: u64,
}

/// Reads an arena deck with the hero slot forced to the active hero and
/// cards the player no longer owns dropped.
pub fn arena_deck(
    state: &PlayerState,
    kind: ArenaDeckKind,
) -> [Option<ArenaSlot>; ARENA_DECK_SIZE] {
    let mut deck = state.arena.deck(kind).clone();
    for slot in deck.iter_mut() {
        let missing = matches!(slot, Some(ArenaSlot::Card(uid)) if state.card(uid).is_none());
        if missing {
            *slot = None;
        }
    }
    deck[ARENA_HERO_SLOT] = state
        .active_hero()
        .map(|hero| ArenaSlot::Hero(hero.uid.clone()));
    deck
}

fn check_arena_index(index: usize) -> Result<(), GameError> {
    if index >= ARENA_DECK_SIZE {
        return Err(GameError::InvalidSlot {
            index,
            size: ARENA_DECK_SIZE,
        });
    }
    if index == ARENA_HERO_SLOT {
        return Err(GameError::ReservedSlot(index));
    }
    Ok(())
}

/// Places an owned card into a non-hero arena slot.
pub fn set_arena_slot(
    state: &mut PlayerState,
    kind: ArenaDeckKind,
    index: usize,
    card_uid: &str,
) -> Result<(), GameError> {
    check_arena_index(index)?;
    if state.card(card_uid).is_none() {
        return Err(GameError::CardNotFound(card_uid.to_string()));
    }
    let deck = state.arena.deck_mut(kind);
    let duplicate = deck
        .iter()
        .enumerate()
        .any(|(i, slot)| i != index && matches!(slot, Some(ArenaSlot::Card(id)) if id == card_uid));
    if duplicate {
        return Err(GameError::AlreadyInDeck(card_uid.to_string()));
    }
    deck[index] = Some(ArenaSlot::Card(card_uid.to_string()));
    Ok(())
}

pub fn clear_arena_slot(
    state: &mut PlayerState,
    kind: ArenaDeckKind,
    index: usize,
) -> Result<(), GameError> {
    check_arena_index(index)?;
    state.arena.deck_mut(kind)[index] = None;
    Ok(())
}

/// Power of the deck as it would fight right now.
pub fn arena_power(state: &PlayerState, cache: &mut StatCache, kind: ArenaDeckKind) -> u32 {
    team_power(state, cache, &arena_deck(state, kind))
}

fn roll_power<R: Rng>(power: u32, rng: &mut R) -> f64 {
    power as f64 * (1.0 + rng.gen_range(-ARENA_BATTLE_VARIANCE..=ARENA_BATTLE_VARIANCE))
}

/// Spends a ticket and fights `opponent` with the attack deck.
///
/// Both sides' power is varied by up to `ARENA_BATTLE_VARIANCE`; ties go to
/// the player. A loss never takes points below zero.
pub fn fight<R: Rng>(
    state: &mut PlayerState,
    cache: &mut StatCache,
    opponent: &ArenaOpponent,
    rng: &mut R,
) -> Result<ArenaOutcome, GameError> {
    if state.arena.tickets == 0 {
        return Err(GameError::NoArenaTickets);
    }
    let player_power = arena_power(state, cache, ArenaDeckKind::Attack);
    if player_power == 0 {
        return Err(GameError::EmptyDeck);
    }

    state.arena.tickets -= 1;
    let won = roll_power(player_power, rng) >= roll_power(opponent.power, rng);

    let before = state.arena.points;
    let mut gold = 0;
    if won {
        state.arena.points = state.arena.points.saturating_add(ARENA_WIN_POINTS);
        state.arena.wins += 1;
        gold = ARENA_WIN_GOLD;
        state.earn(Currency::Gold, gold);
    } else {
        state.arena.points = state.arena.points.saturating_sub(ARENA_LOSS_POINTS);
        state.arena.losses += 1;
    }

    let points = state.arena.points;
    log::info!(
        "arena vs {} ({} power): {} with {} power, {} -> {} points",
        opponent.name,
        opponent.power,
        if won { "won" } else { "lost" },
        player_power,
        before,
        points
    );

    Ok(ArenaOutcome {
        won,
        player_power,
        opponent_power: opponent.power,
        points_delta: points as i64 - before as i64,
        points,
        rank: estimate_rank(points),
        gold,
    })
}
