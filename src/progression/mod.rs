//! Progression engine: leveling, evolution, breeding and growth.

pub mod breeding;
pub mod evolution;
pub mod growth;
pub mod leveling;

pub use breeding::*;
pub use evolution::*;
pub use growth::*;
pub use leveling::*;
