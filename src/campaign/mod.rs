//! PvE campaign: stage entry, power-based resolution and stamina.

pub mod logic;
pub mod stamina;

pub use logic::*;
pub use stamina::*;
