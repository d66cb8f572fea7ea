//! Per-cell ownership state and rent rules.
//!
//! Railroad and utility rent depends on how many cells of the same kind the
//! owner holds. That count comes from an `OwnershipQuery` passed in by the
//! caller, so a property never needs a pointer back to the ledger.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, CellKind};
use crate::core::PlayerId;

/// Maximum houses on a street before a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Cross-cell ownership counts needed for rent.
pub trait OwnershipQuery {
    /// Number of cells of `kind` owned by `owner`.
    fn owned_count(&self, owner: PlayerId, kind: CellKind) -> usize;
}

/// Kind of building put on a street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
    Hotel,
}

/// Rent override carried by a card move to the cell it lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialRent {
    /// Twice the railroad's normal rent.
    DoubleRailroad,
    /// Ten times the dice total, regardless of utilities owned.
    DiceUtility,
}

/// Mutable state of one ownable cell.
///
/// Invariants: a hotel means zero houses; buildings mean not mortgaged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyState {
    pub owner: Option<PlayerId>,
    pub houses: u8,
    pub hotel: bool,
    pub mortgaged: bool,
}

impl PropertyState {
    #[must_use]
    pub fn has_buildings(&self) -> bool {
        self.houses > 0 || self.hotel
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Rent owed by `occupant` under the normal rules.
    ///
    /// Zero when unowned, mortgaged, or landed on by the owner. Utilities
    /// need the dice total and charge nothing without one.
    pub fn rent(
        &self,
        cell: &Cell,
        occupant: PlayerId,
        query: &impl OwnershipQuery,
        dice_total: Option<u8>,
    ) -> i64 {
        let owner = match self.owner {
            Some(owner) if owner != occupant && !self.mortgaged => owner,
            _ => return 0,
        };

        match cell.kind {
            CellKind::Property => {
                // TODO: double the base rent when the owner holds the whole color group.
                if self.hotel {
                    cell.rent_tier(5)
                } else {
                    cell.rent_tier(self.houses as usize)
                }
            }
            CellKind::Railroad => {
                let owned = query.owned_count(owner, CellKind::Railroad).clamp(1, 4);
                cell.rent_tier(owned - 1)
            }
            CellKind::Utility => {
                let Some(total) = dice_total else { return 0 };
                let multiplier = match query.owned_count(owner, CellKind::Utility) {
                    0 => 0,
                    1 => 4,
                    _ => 10,
                };
                total as i64 * multiplier
            }
            _ => 0,
        }
    }

    /// Rent with a card-move override applied.
    ///
    /// The override only changes the amount for the cell kind it names;
    /// ownership and mortgage rules still decide whether anything is owed.
    pub fn rent_with(
        &self,
        cell: &Cell,
        occupant: PlayerId,
        query: &impl OwnershipQuery,
        dice_total: Option<u8>,
        special: Option<SpecialRent>,
    ) -> i64 {
        let normal = self.rent(cell, occupant, query, dice_total);
        let charged = self.owner.is_some_and(|o| o != occupant) && !self.mortgaged;

        match (special, cell.kind) {
            (Some(SpecialRent::DoubleRailroad), CellKind::Railroad) => normal * 2,
            (Some(SpecialRent::DiceUtility), CellKind::Utility) if charged => {
                dice_total.map_or(0, |t| t as i64 * 10)
            }
            _ => normal,
        }
    }
}
