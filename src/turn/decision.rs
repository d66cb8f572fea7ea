//! Suspension points of a turn and the answers that resume it.

use serde::{Deserialize, Serialize};

use crate::board::CellId;
use crate::core::PlayerId;
use crate::ledger::BuildingKind;

/// Kind of decision, used to match an answer to what is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    Purchase,
    Build,
    Tax,
    Jail,
    RaiseFunds,
}

/// A choice the session is waiting on before the turn can continue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingDecision {
    /// Landed on an unowned cell.
    Purchase {
        player: PlayerId,
        cell: CellId,
        price: i64,
    },
    /// Landed on one's own street with room for another building.
    Build {
        player: PlayerId,
        cell: CellId,
        kind: BuildingKind,
        cost: i64,
    },
    /// Landed on income tax: fixed fee or a percentage of net worth.
    Tax {
        player: PlayerId,
        cell: CellId,
        fixed: i64,
        percentage: i64,
    },
    /// Started a turn in jail.
    Jail {
        player: PlayerId,
        bail: i64,
        has_card: bool,
        attempts: u8,
    },
    /// Ended a resolution in debt with enough unmortgaged cells to cover it.
    /// Management actions stay open until the answer.
    RaiseFunds {
        player: PlayerId,
        debt: i64,
        /// Total mortgage payout still available to the player.
        available: i64,
    },
}

impl PendingDecision {
    #[must_use]
    pub fn kind(&self) -> DecisionKind {
        match self {
            PendingDecision::Purchase { .. } => DecisionKind::Purchase,
            PendingDecision::Build { .. } => DecisionKind::Build,
            PendingDecision::Tax { .. } => DecisionKind::Tax,
            PendingDecision::Jail { .. } => DecisionKind::Jail,
            PendingDecision::RaiseFunds { .. } => DecisionKind::RaiseFunds,
        }
    }

    /// Player who has to answer.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            PendingDecision::Purchase { player, .. }
            | PendingDecision::Build { player, .. }
            | PendingDecision::Tax { player, .. }
            | PendingDecision::Jail { player, .. }
            | PendingDecision::RaiseFunds { player, .. } => player,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseChoice {
    Buy,
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildChoice {
    Build,
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxChoice {
    Fixed,
    Percentage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JailChoice {
    PayBail,
    UseCard,
    RollForDoubles,
}

/// `Settle` once cash is back to zero or more; `Concede` gives up the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundsChoice {
    Settle,
    Concede,
}

/// Answer to a `PendingDecision`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Purchase(PurchaseChoice),
    Build(BuildChoice),
    Tax(TaxChoice),
    Jail(JailChoice),
    RaiseFunds(FundsChoice),
}

impl Decision {
    #[must_use]
    pub fn kind(self) -> DecisionKind {
        match self {
            Decision::Purchase(_) => DecisionKind::Purchase,
            Decision::Build(_) => DecisionKind::Build,
            Decision::Tax(_) => DecisionKind::Tax,
            Decision::Jail(_) => DecisionKind::Jail,
            Decision::RaiseFunds(_) => DecisionKind::RaiseFunds,
        }
    }
}
