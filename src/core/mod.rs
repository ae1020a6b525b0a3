//! Core game state, settings, errors and the session that ties them together.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod session;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use game_state::*;
pub use session::*;
