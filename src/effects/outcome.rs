//! What a resolved card did.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::CellId;
use crate::cards::{CardId, DeckKind};
use crate::core::PlayerId;
use crate::ledger::SpecialRent;

/// Money moved between the drawing player and one other player.
///
/// Positive `amount` flows from `counterparty` to the drawing player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub counterparty: PlayerId,
    pub amount: i64,
}

/// Effect of one card on the drawing player and the rest of the table.
///
/// `cash_delta` is the drawing player's net change, including any Go salary
/// and the sum of `transfers`. Applying an outcome means adding `cash_delta`
/// to the drawer and subtracting each transfer from its counterparty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOutcome {
    pub deck: Option<DeckKind>,
    pub card: Option<CardId>,
    pub cash_delta: i64,
    pub new_position: Option<CellId>,
    pub passed_go: bool,
    pub jailed: bool,
    pub retained: bool,
    pub special_rent: Option<SpecialRent>,
    pub transfers: SmallVec<[Transfer; 3]>,
    pub message: String,
}

impl CardOutcome {
    /// Whether the card relocated the player without jailing them.
    ///
    /// A relocation re-enters landing resolution at the new cell.
    #[must_use]
    pub fn relocates(&self) -> bool {
        self.new_position.is_some() && !self.jailed
    }
}
