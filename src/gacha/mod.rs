//! Gacha summoning: weighted rarity rolls over the card catalog.

pub mod logic;

pub use logic::*;
