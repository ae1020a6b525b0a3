//! PvP arena: ladder ranking, bot opponents, deck editing and battles.

pub mod bots;
pub mod logic;
pub mod ranking;

pub use bots::*;
pub use logic::*;
pub use ranking::*;
