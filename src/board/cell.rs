//! Board cells.
//!
//! A cell is immutable data: what kind of space it is and, for the spaces
//! that can be bought, its price, rent schedule and color group.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_SIZE: u8 = 40;

/// Position of a cell, always in `0..40`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    pub const GO: CellId = CellId(0);
    pub const JAIL: CellId = CellId(10);
    pub const GO_TO_JAIL: CellId = CellId(30);

    /// Create a cell id, wrapping onto the board.
    #[must_use]
    pub const fn new(position: u8) -> Self {
        Self(position % BOARD_SIZE)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Position after moving `steps` forward.
    #[must_use]
    pub fn forward(self, steps: u8) -> CellId {
        CellId(((self.0 as u16 + steps as u16) % BOARD_SIZE as u16) as u8)
    }

    /// Position after a signed move; negative deltas move backward.
    #[must_use]
    pub fn offset(self, delta: i32) -> CellId {
        let size = BOARD_SIZE as i32;
        CellId((self.0 as i32 + delta).rem_euclid(size) as u8)
    }

    /// Forward circular distance from `self` to `target`.
    #[must_use]
    pub fn distance_to(self, target: CellId) -> u8 {
        ((target.0 as i32 - self.0 as i32).rem_euclid(BOARD_SIZE as i32)) as u8
    }

    /// Whether a forward move of `steps` from here crosses or lands on Go.
    #[must_use]
    pub fn passes_go(self, steps: u8) -> bool {
        self.0 as u16 + steps as u16 >= BOARD_SIZE as u16
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a cell does when landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Go,
    Property,
    Railroad,
    Utility,
    Tax,
    Chance,
    CommunityChest,
    Jail,
    GoToJail,
    FreeParking,
}

impl CellKind {
    /// Kinds that can be owned.
    #[must_use]
    pub fn is_ownable(self) -> bool {
        matches!(self, CellKind::Property | CellKind::Railroad | CellKind::Utility)
    }
}

/// Color group of a street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

/// The two tax cells behave differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxKind {
    /// Fixed amount or a percentage of net worth, player's choice.
    Income,
    /// Fixed fee.
    Luxury,
}

/// One board space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub name: String,
    pub kind: CellKind,
    /// Purchase price for ownable cells, fixed fee for tax cells.
    pub price: Option<i64>,
    /// Streets: base, 1-4 houses, hotel. Railroads: 1-4 owned.
    pub rent: Vec<i64>,
    pub color: Option<ColorGroup>,
    pub tax: Option<TaxKind>,
}

impl Cell {
    fn plain(id: u8, name: &str, kind: CellKind) -> Self {
        Self {
            id: CellId(id),
            name: name.to_string(),
            kind,
            price: None,
            rent: Vec::new(),
            color: None,
            tax: None,
        }
    }

    pub(crate) fn street(id: u8, name: &str, price: i64, rent: [i64; 6], color: ColorGroup) -> Self {
        Self {
            price: Some(price),
            rent: rent.to_vec(),
            color: Some(color),
            ..Self::plain(id, name, CellKind::Property)
        }
    }

    pub(crate) fn railroad(id: u8, name: &str) -> Self {
        Self {
            price: Some(200),
            rent: vec![25, 50, 100, 200],
            ..Self::plain(id, name, CellKind::Railroad)
        }
    }

    pub(crate) fn utility(id: u8, name: &str) -> Self {
        Self {
            price: Some(150),
            ..Self::plain(id, name, CellKind::Utility)
        }
    }

    pub(crate) fn tax(id: u8, name: &str, amount: i64, tax: TaxKind) -> Self {
        Self {
            price: Some(amount),
            tax: Some(tax),
            ..Self::plain(id, name, CellKind::Tax)
        }
    }

    pub(crate) fn special(id: u8, name: &str, kind: CellKind) -> Self {
        Self::plain(id, name, kind)
    }

    /// Purchase price, or 0 for cells without one.
    #[must_use]
    pub fn face_value(&self) -> i64 {
        self.price.unwrap_or(0)
    }

    /// Cost of one house: half the price, rounded down.
    #[must_use]
    pub fn house_cost(&self) -> i64 {
        self.face_value() / 2
    }

    /// Cost of a hotel: 80% of the price, rounded down.
    #[must_use]
    pub fn hotel_cost(&self) -> i64 {
        self.face_value() * 8 / 10
    }

    /// Payout for mortgaging: half the price, rounded down.
    #[must_use]
    pub fn mortgage_value(&self) -> i64 {
        self.face_value() / 2
    }

    /// Cost to lift a mortgage: 60% of the price, rounded down.
    #[must_use]
    pub fn unmortgage_cost(&self) -> i64 {
        self.face_value() * 6 / 10
    }

    /// Rent tier `index` of the schedule, 0 when the schedule is shorter.
    #[must_use]
    pub fn rent_tier(&self, index: usize) -> i64 {
        self.rent.get(index).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_wraps() {
        assert_eq!(CellId::new(38).forward(5), CellId::new(3));
        assert_eq!(CellId::new(10).forward(12), CellId::new(22));
        assert!(CellId::new(38).passes_go(5));
        assert!(CellId::new(38).passes_go(2));
        assert!(!CellId::new(38).passes_go(1));
    }

    #[test]
    fn test_offset_backward() {
        assert_eq!(CellId::new(1).offset(-3), CellId::new(38));
        assert_eq!(CellId::new(7).offset(-3), CellId::new(4));
        assert_eq!(CellId::new(39).offset(2), CellId::new(1));
    }

    #[test]
    fn test_distance_is_forward_only() {
        assert_eq!(CellId::new(36).distance_to(CellId::new(5)), 9);
        assert_eq!(CellId::new(5).distance_to(CellId::new(5)), 0);
        assert_eq!(CellId::new(7).distance_to(CellId::new(15)), 8);
    }

    #[test]
    fn test_building_costs_round_down() {
        let cell = Cell::street(1, "Mediterranean Avenue", 60, [2, 10, 30, 90, 160, 250], ColorGroup::Brown);
        assert_eq!(cell.house_cost(), 30);
        assert_eq!(cell.hotel_cost(), 48);
        assert_eq!(cell.mortgage_value(), 30);
        assert_eq!(cell.unmortgage_cost(), 36);

        let odd = Cell::street(9, "Connecticut Avenue", 125, [8, 40, 100, 300, 450, 600], ColorGroup::LightBlue);
        assert_eq!(odd.house_cost(), 62);
        assert_eq!(odd.hotel_cost(), 100);
        assert_eq!(odd.unmortgage_cost(), 75);
    }

    #[test]
    fn test_ownable_kinds() {
        assert!(CellKind::Property.is_ownable());
        assert!(CellKind::Railroad.is_ownable());
        assert!(CellKind::Utility.is_ownable());
        assert!(!CellKind::Tax.is_ownable());
        assert!(!CellKind::Go.is_ownable());
    }
}
