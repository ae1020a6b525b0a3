//! Shop purchases.

pub mod logic;

pub use logic::*;
