//! Outbound events for presentation layers.
//!
//! The session records one event per observable state change, in order. A
//! renderer replays them to animate what already happened; nothing in the
//! engine waits on a consumer.

use serde::{Deserialize, Serialize};

use crate::board::CellId;
use crate::cards::{Card, DeckKind};
use crate::core::PlayerId;
use crate::effects::CardOutcome;
use crate::ledger::BuildingKind;
use crate::turn::PendingDecision;

/// Why a player went to jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JailReason {
    /// Landed on the Go To Jail cell.
    GoToJailCell,
    /// Drew a go-to-jail card.
    Card,
    /// Rolled too many doubles in a row.
    ConsecutiveDoubles,
}

/// How a player left jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseReason {
    PaidBail,
    UsedCard,
    RolledDoubles,
    /// Bail charged after the last failed doubles roll.
    ForcedBail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        players: usize,
        seed: u64,
    },
    DiceRolled {
        player: PlayerId,
        die1: u8,
        die2: u8,
        is_double: bool,
    },
    PlayerMoved {
        player: PlayerId,
        from: CellId,
        to: CellId,
        passed_go: bool,
    },
    SalaryCollected {
        player: PlayerId,
        amount: i64,
    },
    LandedOn {
        player: PlayerId,
        cell: CellId,
    },
    CardDrawn {
        player: PlayerId,
        deck: DeckKind,
        card: Card,
    },
    CardResolved {
        player: PlayerId,
        outcome: CardOutcome,
    },
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        amount: i64,
        cell: CellId,
    },
    TaxPaid {
        player: PlayerId,
        cell: CellId,
        amount: i64,
    },
    PropertyPurchased {
        player: PlayerId,
        cell: CellId,
        cost: i64,
    },
    BuildingBuilt {
        player: PlayerId,
        cell: CellId,
        kind: BuildingKind,
        cost: i64,
    },
    PropertyMortgaged {
        player: PlayerId,
        cell: CellId,
        payout: i64,
    },
    PropertyUnmortgaged {
        player: PlayerId,
        cell: CellId,
        cost: i64,
    },
    DecisionRequested {
        decision: PendingDecision,
    },
    /// A chosen action that could not be carried out, such as a purchase
    /// the player cannot afford.
    ActionDeclined {
        player: PlayerId,
        reason: String,
    },
    PlayerJailed {
        player: PlayerId,
        reason: JailReason,
    },
    PlayerReleased {
        player: PlayerId,
        reason: ReleaseReason,
        fee: i64,
    },
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },
    PlayerBankrupt {
        player: PlayerId,
        creditor: Option<PlayerId>,
    },
    GameOver {
        winner: Option<PlayerId>,
    },
}

impl GameEvent {
    /// Player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::GameStarted { .. } | GameEvent::GameOver { .. } => None,
            GameEvent::DecisionRequested { decision } => Some(decision.player()),
            GameEvent::RentPaid { payer, .. } => Some(*payer),
            GameEvent::DiceRolled { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::SalaryCollected { player, .. }
            | GameEvent::LandedOn { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::CardResolved { player, .. }
            | GameEvent::TaxPaid { player, .. }
            | GameEvent::PropertyPurchased { player, .. }
            | GameEvent::BuildingBuilt { player, .. }
            | GameEvent::PropertyMortgaged { player, .. }
            | GameEvent::PropertyUnmortgaged { player, .. }
            | GameEvent::ActionDeclined { player, .. }
            | GameEvent::PlayerJailed { player, .. }
            | GameEvent::PlayerReleased { player, .. }
            | GameEvent::TurnEnded { player, .. }
            | GameEvent::PlayerBankrupt { player, .. } => Some(*player),
        }
    }
}
