//! PvE deck editing, equipment and the active hero.

pub mod deck;
pub mod gear;

pub use deck::*;
pub use gear::*;
