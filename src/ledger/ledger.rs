//! The property ledger: every ownable cell's state, keyed by position.
//!
//! The ledger never touches player cash. Operations that cost or pay money
//! return the amount and the session applies it, so every cash movement in a
//! game goes through one place.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{BoardCatalog, Cell, CellId, CellKind, ColorGroup};
use crate::core::{EngineError, PlayerId, Result};

use super::property::{BuildingKind, OwnershipQuery, PropertyState, SpecialRent, MAX_HOUSES};

#[derive(Clone, Debug)]
struct LedgerEntry {
    cell: Cell,
    state: PropertyState,
}

/// Read-only view of one ownable cell, for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub cell: CellId,
    pub name: String,
    pub kind: CellKind,
    pub color: Option<ColorGroup>,
    pub price: i64,
    pub state: PropertyState,
}

/// Ownership, buildings and mortgages for all Property, Railroad and Utility cells.
#[derive(Clone, Debug)]
pub struct PropertyLedger {
    entries: FxHashMap<CellId, LedgerEntry>,
}

impl OwnershipQuery for PropertyLedger {
    fn owned_count(&self, owner: PlayerId, kind: CellKind) -> usize {
        self.entries
            .values()
            .filter(|e| e.cell.kind == kind && e.state.is_owned_by(owner))
            .count()
    }
}

impl PropertyLedger {
    /// One unowned entry per ownable cell of `board`.
    #[must_use]
    pub fn new(board: &BoardCatalog) -> Self {
        let entries = board
            .iter()
            .filter(|c| c.kind.is_ownable())
            .map(|c| {
                (
                    c.id,
                    LedgerEntry {
                        cell: c.clone(),
                        state: PropertyState::default(),
                    },
                )
            })
            .collect();

        Self { entries }
    }

    fn entry(&self, pos: CellId) -> Result<&LedgerEntry> {
        self.entries.get(&pos).ok_or(EngineError::NotPurchasable(pos))
    }

    /// Entry owned by `player`, for operations only the owner may perform.
    fn owned_entry_mut(&mut self, pos: CellId, player: PlayerId) -> Result<&mut LedgerEntry> {
        let entry = self
            .entries
            .get_mut(&pos)
            .ok_or(EngineError::NotPurchasable(pos))?;
        if !entry.state.is_owned_by(player) {
            return Err(EngineError::NotOwned(pos));
        }
        Ok(entry)
    }

    /// Number of ledger entries (28 on the standard board).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State of an ownable cell, `None` for other cells.
    #[must_use]
    pub fn state(&self, pos: CellId) -> Option<&PropertyState> {
        self.entries.get(&pos).map(|e| &e.state)
    }

    #[must_use]
    pub fn owner_of(&self, pos: CellId) -> Option<PlayerId> {
        self.state(pos).and_then(|s| s.owner)
    }

    /// Snapshot of an ownable cell.
    #[must_use]
    pub fn property_info(&self, pos: CellId) -> Option<PropertyInfo> {
        self.entries.get(&pos).map(|e| PropertyInfo {
            cell: pos,
            name: e.cell.name.clone(),
            kind: e.cell.kind,
            color: e.cell.color,
            price: e.cell.face_value(),
            state: e.state.clone(),
        })
    }

    /// Unowned, unmortgaged, ownable and priced.
    #[must_use]
    pub fn is_purchasable(&self, pos: CellId) -> bool {
        self.entries.get(&pos).is_some_and(|e| {
            e.cell.kind.is_ownable()
                && e.state.owner.is_none()
                && !e.state.mortgaged
                && e.cell.price.is_some()
        })
    }

    /// Record `player` as owner. Returns the price the caller must charge.
    pub fn purchase(&mut self, pos: CellId, player: PlayerId) -> Result<i64> {
        let entry = self
            .entries
            .get_mut(&pos)
            .ok_or(EngineError::NotPurchasable(pos))?;

        if entry.state.owner.is_some() {
            return Err(EngineError::AlreadyOwned(pos));
        }
        let price = match entry.cell.price {
            Some(price) if !entry.state.mortgaged => price,
            _ => return Err(EngineError::NotPurchasable(pos)),
        };

        entry.state.owner = Some(player);
        debug!(player = %player, cell = pos.0, price, "property purchased");
        Ok(price)
    }

    /// Rent `occupant` owes for standing on `pos`.
    #[must_use]
    pub fn current_rent(&self, pos: CellId, occupant: PlayerId, dice_total: Option<u8>) -> i64 {
        self.current_rent_with(pos, occupant, dice_total, None)
    }

    /// Rent with a card-move override applied.
    #[must_use]
    pub fn current_rent_with(
        &self,
        pos: CellId,
        occupant: PlayerId,
        dice_total: Option<u8>,
        special: Option<SpecialRent>,
    ) -> i64 {
        self.entries.get(&pos).map_or(0, |e| {
            e.state.rent_with(&e.cell, occupant, self, dice_total, special)
        })
    }

    /// The building `player` could add next on `pos`, and its cost.
    ///
    /// Checks every building rule without changing anything.
    pub fn next_building(&self, pos: CellId, player: PlayerId) -> Result<(BuildingKind, i64)> {
        let entry = self.entry(pos)?;
        let state = &entry.state;

        if !state.is_owned_by(player) {
            return Err(EngineError::NotOwned(pos));
        }
        if state.mortgaged {
            return Err(EngineError::AlreadyMortgaged(pos));
        }
        if entry.cell.kind != CellKind::Property || state.hotel {
            return Err(EngineError::BuildingLimitReached(pos));
        }

        if state.houses < MAX_HOUSES {
            Ok((BuildingKind::House, entry.cell.house_cost()))
        } else {
            Ok((BuildingKind::Hotel, entry.cell.hotel_cost()))
        }
    }

    /// Add a house. Returns the cost the caller must charge.
    pub fn build_house(&mut self, pos: CellId, player: PlayerId) -> Result<i64> {
        match self.next_building(pos, player)? {
            (BuildingKind::House, cost) => {
                let state = &mut self.owned_entry_mut(pos, player)?.state;
                state.houses += 1;
                debug!(player = %player, cell = pos.0, houses = state.houses, "house built");
                Ok(cost)
            }
            (BuildingKind::Hotel, _) => Err(EngineError::BuildingLimitReached(pos)),
        }
    }

    /// Replace four houses with a hotel. Returns the cost the caller must charge.
    pub fn build_hotel(&mut self, pos: CellId, player: PlayerId) -> Result<i64> {
        match self.next_building(pos, player)? {
            (BuildingKind::Hotel, cost) => {
                let state = &mut self.owned_entry_mut(pos, player)?.state;
                state.houses = 0;
                state.hotel = true;
                debug!(player = %player, cell = pos.0, "hotel built");
                Ok(cost)
            }
            (BuildingKind::House, _) => Err(EngineError::NotEnoughHouses(pos)),
        }
    }

    /// Build whatever comes next on `pos`: a house, or a hotel after four houses.
    pub fn build(&mut self, pos: CellId, player: PlayerId) -> Result<(BuildingKind, i64)> {
        let cost = match self.next_building(pos, player)?.0 {
            BuildingKind::House => self.build_house(pos, player)?,
            BuildingKind::Hotel => self.build_hotel(pos, player)?,
        };
        Ok((self.built_kind(pos), cost))
    }

    fn built_kind(&self, pos: CellId) -> BuildingKind {
        match self.state(pos) {
            Some(state) if state.hotel => BuildingKind::Hotel,
            _ => BuildingKind::House,
        }
    }

    /// Mortgage an unimproved cell. Returns the payout the caller must credit.
    pub fn mortgage(&mut self, pos: CellId, player: PlayerId) -> Result<i64> {
        let entry = self.owned_entry_mut(pos, player)?;

        if entry.state.has_buildings() {
            return Err(EngineError::HasBuildings(pos));
        }
        if entry.state.mortgaged {
            return Err(EngineError::AlreadyMortgaged(pos));
        }

        entry.state.mortgaged = true;
        debug!(player = %player, cell = pos.0, "property mortgaged");
        Ok(entry.cell.mortgage_value())
    }

    /// Lift a mortgage. Returns the cost the caller must charge.
    pub fn unmortgage(&mut self, pos: CellId, player: PlayerId) -> Result<i64> {
        let entry = self.owned_entry_mut(pos, player)?;

        if !entry.state.mortgaged {
            return Err(EngineError::NotMortgaged(pos));
        }

        entry.state.mortgaged = false;
        debug!(player = %player, cell = pos.0, "mortgage lifted");
        Ok(entry.cell.unmortgage_cost())
    }

    /// Cost to lift the mortgage on `pos`, if it is mortgaged.
    #[must_use]
    pub fn unmortgage_cost(&self, pos: CellId) -> Option<i64> {
        self.entries
            .get(&pos)
            .filter(|e| e.state.mortgaged)
            .map(|e| e.cell.unmortgage_cost())
    }

    /// Hand a cell to a new owner (or the bank with `None`).
    ///
    /// Buildings are removed. A mortgage stays with a player recipient and is
    /// cleared when the cell returns to the bank.
    pub fn transfer(&mut self, pos: CellId, to: Option<PlayerId>) {
        if let Some(entry) = self.entries.get_mut(&pos) {
            entry.state.houses = 0;
            entry.state.hotel = false;
            entry.state.owner = to;
            if to.is_none() {
                entry.state.mortgaged = false;
            }
        }
    }

    /// Return every cell to the bank.
    pub fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            entry.state = PropertyState::default();
        }
    }

    /// Cells owned by `owner`, in board order.
    #[must_use]
    pub fn properties_of(&self, owner: PlayerId) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self
            .entries
            .iter()
            .filter(|(_, e)| e.state.is_owned_by(owner))
            .map(|(&pos, _)| pos)
            .collect();
        cells.sort();
        cells
    }

    /// Houses and hotels standing on `owner`'s cells.
    #[must_use]
    pub fn buildings_of(&self, owner: PlayerId) -> (u32, u32) {
        self.entries
            .values()
            .filter(|e| e.state.is_owned_by(owner))
            .fold((0, 0), |(houses, hotels), e| {
                (houses + e.state.houses as u32, hotels + e.state.hotel as u32)
            })
    }

    /// Unmortgaged cells without buildings that `owner` could mortgage, in
    /// board order.
    #[must_use]
    pub fn mortgageable_cells(&self, owner: PlayerId) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self
            .entries
            .iter()
            .filter(|(_, e)| {
                e.state.is_owned_by(owner) && !e.state.mortgaged && !e.state.has_buildings()
            })
            .map(|(&pos, _)| pos)
            .collect();
        cells.sort();
        cells
    }

    /// Cash `owner` could still raise by mortgaging.
    #[must_use]
    pub fn mortgage_capacity(&self, owner: PlayerId) -> i64 {
        self.mortgageable_cells(owner)
            .into_iter()
            .filter_map(|pos| self.entries.get(&pos))
            .map(|e| e.cell.mortgage_value())
            .sum()
    }

    /// Face value plus building value of everything `owner` holds.
    ///
    /// Mortgaged cells count at face value.
    #[must_use]
    pub fn portfolio_value(&self, owner: PlayerId) -> i64 {
        self.entries
            .values()
            .filter(|e| e.state.is_owned_by(owner))
            .map(|e| {
                let hotel = if e.state.hotel { e.cell.hotel_cost() } else { 0 };
                e.cell.face_value() + e.state.houses as i64 * e.cell.house_cost() + hotel
            })
            .sum()
    }

    /// Whether `owner` holds every street of `group`.
    #[must_use]
    pub fn owns_color_group(&self, owner: PlayerId, group: ColorGroup) -> bool {
        let mut streets = self
            .entries
            .values()
            .filter(|e| e.cell.color == Some(group))
            .peekable();

        streets.peek().is_some() && streets.all(|e| e.state.is_owned_by(owner))
    }
}
