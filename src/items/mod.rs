//! Item system: shared enums, equipment loadouts and rewards.

pub mod equipment;
pub mod rewards;
pub mod types;

pub use equipment::*;
pub use rewards::*;
pub use types::*;
