//! Summoner - card and hero collection game engine
//!
//! Rules for a collectible card game: gacha summoning, leveling, evolution,
//! breeding, a PvE campaign and a PvP arena ladder. All commands run against
//! an explicit `PlayerState`; `GameSession` bundles the state with its
//! settings and save store.

pub mod arena;
pub mod campaign;
pub mod catalog;
pub mod character;
pub mod core;
pub mod gacha;
pub mod items;
pub mod loadout;
pub mod mailbox;
pub mod progression;
pub mod shop;
pub mod utils;

pub use crate::core::error::GameError;
pub use crate::core::game_state::PlayerState;
pub use crate::core::session::GameSession;
