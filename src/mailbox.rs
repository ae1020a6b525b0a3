//! Pending rewards delivered by mail.

use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::items::rewards::{grant_reward, validate_reward, Granted, Reward};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailEntry {
    pub id: String,
    pub title: String,
    pub message: String,
    pub reward: Reward,
    /// Unix seconds
    pub sent_at: i64,
}

/// Queues a reward in the player's mailbox and returns the mail id.
pub fn send_mail(
    state: &mut PlayerState,
    title: &str,
    message: &str,
    reward: Reward,
    now: i64,
) -> String {
    let id = Uuid::new_v4().to_string();
    state.mailbox.push(MailEntry {
        id: id.clone(),
        title: title.to_string(),
        message: message.to_string(),
        reward,
        sent_at: now,
    });
    id
}

/// Grants one mail's reward and removes it. A reward that cannot be granted
/// (such as a hero the player already owns) leaves the mail in place.
pub fn claim_mail<R: Rng>(
    state: &mut PlayerState,
    mail_id: &str,
    rng: &mut R,
) -> Result<Granted, GameError> {
    let index = state
        .mailbox
        .iter()
        .position(|m| m.id == mail_id)
        .ok_or_else(|| GameError::MailNotFound(mail_id.to_string()))?;
    validate_reward(state, &state.mailbox[index].reward)?;

    let mail = state.mailbox.remove(index);
    log::info!("claimed mail '{}'", mail.title);
    grant_reward(state, &mail.reward, rng)
}

/// Claims every mail that can be granted, oldest first. Mail that fails
/// validation stays in the mailbox.
pub fn claim_all<R: Rng>(state: &mut PlayerState, rng: &mut R) -> Vec<Granted> {
    let ids: Vec<String> = state.mailbox.iter().map(|m| m.id.clone()).collect();
    let mut granted = Vec::new();
    for id in ids {
        match claim_mail(state, &id, rng) {
            Ok(g) => granted.push(g),
            Err(e) => log::warn!("mail {} left unclaimed: {}", id, e),
        }
    }
    granted
}
