//! Engine error taxonomy.
//!
//! Every rule violation is a recoverable, typed result. The session either
//! turns it into a no-op (a declined purchase) or leaves the pending decision
//! in place so the caller can choose again.

use thiserror::Error;

use crate::board::CellId;
use crate::core::PlayerId;
use crate::turn::DecisionKind;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("cell {0} is not owned by this player")]
    NotOwned(CellId),

    #[error("cell {0} already has an owner")]
    AlreadyOwned(CellId),

    #[error("cell {0} cannot be purchased")]
    NotPurchasable(CellId),

    #[error("cell {0} cannot take another building")]
    BuildingLimitReached(CellId),

    #[error("cell {0} needs four houses before a hotel")]
    NotEnoughHouses(CellId),

    #[error("cell {0} has buildings")]
    HasBuildings(CellId),

    #[error("cell {0} is already mortgaged")]
    AlreadyMortgaged(CellId),

    #[error("cell {0} is not mortgaged")]
    NotMortgaged(CellId),

    #[error("no get-out-of-jail-free card available")]
    NoCardAvailable,

    #[error("no pending {submitted:?} decision")]
    InvalidDecision { submitted: DecisionKind },

    #[error("game has not started")]
    GameNotStarted,

    #[error("game is over")]
    GameOver,

    #[error("session is not waiting for a roll")]
    NotAwaitingRoll,

    #[error("{0} is not the active player")]
    NotActivePlayer(PlayerId),

    #[error("player count must be 2-4, got {0}")]
    InvalidPlayerCount(usize),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
