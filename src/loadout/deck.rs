use crate::core::constants::DECK_SIZE;
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;

fn check_index(index: usize) -> Result<(), GameError> {
    if index >= DECK_SIZE {
        return Err(GameError::InvalidSlot {
            index,
            size: DECK_SIZE,
        });
    }
    Ok(())
}

/// Puts an owned card into a PvE deck slot, replacing whatever was there.
/// A card may only appear once in the deck.
pub fn set_deck_slot(
    state: &mut PlayerState,
    index: usize,
    card_uid: &str,
) -> Result<(), GameError> {
    check_index(index)?;
    if state.card(card_uid).is_none() {
        return Err(GameError::CardNotFound(card_uid.to_string()));
    }
    let duplicate = state
        .deck
        .iter()
        .enumerate()
        .any(|(i, slot)| i != index && slot.as_deref() == Some(card_uid));
    if duplicate {
        return Err(GameError::AlreadyInDeck(card_uid.to_string()));
    }
    state.deck[index] = Some(card_uid.to_string());
    Ok(())
}

pub fn clear_deck_slot(state: &mut PlayerState, index: usize) -> Result<Option<String>, GameError> {
    check_index(index)?;
    Ok(state.deck[index].take())
}
