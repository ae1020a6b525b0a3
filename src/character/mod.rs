//! Owned cards and heroes: creation and stat resolution.

pub mod derived_stats;
pub mod factory;
pub mod stat_cache;
pub mod types;

pub use derived_stats::*;
pub use factory::*;
pub use stat_cache::*;
pub use types::*;
