//! Turn controller.
//!
//! `GameSession` runs the turn state machine: roll, move, resolve the landed
//! cell, then either pause on a `PendingDecision`, grant another roll after
//! doubles, or pass the turn. Players in jail start their turn with a jail
//! decision instead of a roll.
//!
//! ## Key Types
//!
//! - `GameSession`: the whole game, driven by `start_game`, `submit_roll`,
//!   `resolve_decision` and the management actions
//! - `PendingDecision` / `Decision`: what the engine is waiting on, and the answer
//! - `TurnPhase`: where the state machine is

mod bankruptcy;
mod builder;
mod decision;
mod jail;
mod landing;
mod phase;
mod session;

pub use builder::GameSessionBuilder;
pub use decision::{
    BuildChoice, Decision, DecisionKind, FundsChoice, JailChoice, PendingDecision, PurchaseChoice,
    TaxChoice,
};
pub use phase::{RentClaim, TurnPhase, TurnState};
pub use session::GameSession;
