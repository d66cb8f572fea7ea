//! Card effect execution.
//!
//! - `CardEffectExecutor`: turns a drawn card into a `CardOutcome`
//! - `CardOutcome`: cash, movement, jail and retention produced by one card
//! - `SpecialRent`: rent override a card move carries to its landing cell

mod executor;
mod outcome;

pub use executor::{CardEffectExecutor, EffectContext};
pub use outcome::{CardOutcome, Transfer};
pub use crate::ledger::SpecialRent;
