//! Turn state machine phases and per-turn counters.

use serde::{Deserialize, Serialize};

use crate::board::CellId;
use crate::core::{DiceRoll, PlayerId};

/// Where the session is in the current turn.
///
/// `Moving`, `ResolvingLanding` and `TurnComplete` are passed through inside
/// a single call; between calls the session rests in `NotStarted`,
/// `AwaitingRoll`, `AwaitingDecision` or `GameOver`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    NotStarted,
    AwaitingRoll,
    Moving,
    ResolvingLanding,
    AwaitingDecision,
    TurnComplete,
    GameOver,
}

impl TurnPhase {
    /// Phases in which the session is at rest waiting for input.
    #[must_use]
    pub fn is_waiting(self) -> bool {
        matches!(self, TurnPhase::AwaitingRoll | TurnPhase::AwaitingDecision)
    }
}

/// Counters that live for one player's turn (including doubles re-rolls).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Completed turns since the game started.
    pub turn_number: u32,
    pub consecutive_doubles: u8,
    /// The most recent roll; utilities charge rent against it.
    pub last_roll: Option<DiceRoll>,
    /// Whether the roll being resolved earns another roll.
    pub extra_roll: bool,
    /// Rent behind the active player's most recent debt; `None` when the bank
    /// is owed.
    pub creditor: Option<RentClaim>,
}

/// Rent charged to the active player by another player.
///
/// The owner is credited only what the payer had; the rest stays
/// `outstanding` until the payer raises funds or goes bankrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentClaim {
    pub owner: PlayerId,
    pub cell: CellId,
    pub outstanding: i64,
}

impl TurnState {
    /// Clear everything except the turn counter.
    pub fn next_turn(&mut self) {
        *self = Self {
            turn_number: self.turn_number + 1,
            ..Self::default()
        };
    }
}
