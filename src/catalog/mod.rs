//! Static game content: templates, pools, stages and shop listings.

pub mod cards;
pub mod equipment;
pub mod heroes;
pub mod pools;
pub mod shop;
pub mod stages;
pub mod traits;

pub use cards::*;
pub use equipment::*;
pub use heroes::*;
pub use pools::*;
pub use shop::*;
pub use stages::*;
pub use traits::*;
