//! Players and turn rotation.

pub mod player;
pub mod registry;

pub use player::{Player, PlayerStatus};
pub use registry::{PlayerRegistry, MAX_PLAYERS, MIN_PLAYERS};
