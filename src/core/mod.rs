//! Core engine types: player seats, RNG, dice, configuration, errors.
//!
//! Everything here is independent of the board and card data.

pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use dice::{Dice, DiceRoll, DiceSource, ScriptedDice};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
