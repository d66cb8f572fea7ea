//! Computer players and headless games.
//!
//! - `DecisionPolicy`: answers a `PendingDecision`
//! - `GreedyPolicy`, `RandomPolicy`: two simple bots
//! - `Autoplay`: runs a session to a winner or a turn limit

mod autoplay;
mod bots;

pub use autoplay::{Autoplay, GameResult};
pub use bots::{DecisionPolicy, GreedyPolicy, RandomPolicy};
