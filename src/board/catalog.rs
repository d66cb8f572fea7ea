//! The standard 40-cell board.

use super::cell::{Cell, CellId, CellKind, ColorGroup, TaxKind, BOARD_SIZE};

/// Read-only table of all board cells, indexed by position.
#[derive(Clone, Debug)]
pub struct BoardCatalog {
    cells: Vec<Cell>,
}

impl Default for BoardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardCatalog {
    /// The classic board, counter-clockwise from Go.
    #[must_use]
    pub fn standard() -> Self {
        use CellKind::*;
        use ColorGroup::*;

        let cells = vec![
            Cell::special(0, "Go", Go),
            Cell::street(1, "Mediterranean Avenue", 60, [2, 10, 30, 90, 160, 250], Brown),
            Cell::special(2, "Community Chest", CommunityChest),
            Cell::street(3, "Baltic Avenue", 60, [4, 20, 60, 180, 320, 450], Brown),
            Cell::tax(4, "Income Tax", 200, TaxKind::Income),
            Cell::railroad(5, "Reading Railroad"),
            Cell::street(6, "Oriental Avenue", 100, [6, 30, 90, 270, 400, 550], LightBlue),
            Cell::special(7, "Chance", Chance),
            Cell::street(8, "Vermont Avenue", 100, [6, 30, 90, 270, 400, 550], LightBlue),
            Cell::street(9, "Connecticut Avenue", 120, [8, 40, 100, 300, 450, 600], LightBlue),
            Cell::special(10, "Jail", Jail),
            Cell::street(11, "St. Charles Place", 140, [10, 50, 150, 450, 625, 750], Pink),
            Cell::utility(12, "Electric Company"),
            Cell::street(13, "States Avenue", 140, [10, 50, 150, 450, 625, 750], Pink),
            Cell::street(14, "Virginia Avenue", 160, [12, 60, 180, 500, 700, 900], Pink),
            Cell::railroad(15, "Pennsylvania Railroad"),
            Cell::street(16, "St. James Place", 180, [14, 70, 200, 550, 750, 950], Orange),
            Cell::special(17, "Community Chest", CommunityChest),
            Cell::street(18, "Tennessee Avenue", 180, [14, 70, 200, 550, 750, 950], Orange),
            Cell::street(19, "New York Avenue", 200, [16, 80, 220, 600, 800, 1000], Orange),
            Cell::special(20, "Free Parking", FreeParking),
            Cell::street(21, "Kentucky Avenue", 220, [18, 90, 250, 700, 875, 1050], Red),
            Cell::special(22, "Chance", Chance),
            Cell::street(23, "Indiana Avenue", 220, [18, 90, 250, 700, 875, 1050], Red),
            Cell::street(24, "Illinois Avenue", 240, [20, 100, 300, 750, 925, 1100], Red),
            Cell::railroad(25, "B. & O. Railroad"),
            Cell::street(26, "Atlantic Avenue", 260, [22, 110, 330, 800, 975, 1150], Yellow),
            Cell::street(27, "Ventnor Avenue", 260, [22, 110, 330, 800, 975, 1150], Yellow),
            Cell::utility(28, "Water Works"),
            Cell::street(29, "Marvin Gardens", 280, [24, 120, 360, 850, 1025, 1200], Yellow),
            Cell::special(30, "Go To Jail", GoToJail),
            Cell::street(31, "Pacific Avenue", 300, [26, 130, 390, 900, 1100, 1275], Green),
            Cell::street(32, "North Carolina Avenue", 300, [26, 130, 390, 900, 1100, 1275], Green),
            Cell::special(33, "Community Chest", CommunityChest),
            Cell::street(34, "Pennsylvania Avenue", 320, [28, 150, 450, 1000, 1200, 1400], Green),
            Cell::railroad(35, "Short Line"),
            Cell::special(36, "Chance", Chance),
            Cell::street(37, "Park Place", 350, [35, 175, 500, 1100, 1300, 1500], DarkBlue),
            Cell::tax(38, "Luxury Tax", 100, TaxKind::Luxury),
            Cell::street(39, "Boardwalk", 400, [50, 200, 600, 1400, 1700, 2000], DarkBlue),
        ];

        debug_assert_eq!(cells.len(), BOARD_SIZE as usize);
        Self { cells }
    }

    /// Cell at a board position.
    #[must_use]
    pub fn cell_at(&self, position: CellId) -> &Cell {
        &self.cells[position.index()]
    }

    /// Always 40.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Positions of every cell of `kind`, in board order.
    #[must_use]
    pub fn positions_of(&self, kind: CellKind) -> Vec<CellId> {
        self.cells
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.id)
            .collect()
    }

    /// Streets belonging to a color group.
    pub fn color_group(&self, group: ColorGroup) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.color == Some(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_cells_in_order() {
        let board = BoardCatalog::standard();
        assert_eq!(board.len(), 40);
        for (i, cell) in board.iter().enumerate() {
            assert_eq!(cell.id.index(), i);
        }
    }

    #[test]
    fn test_corner_cells() {
        let board = BoardCatalog::standard();
        assert_eq!(board.cell_at(CellId::GO).kind, CellKind::Go);
        assert_eq!(board.cell_at(CellId::JAIL).kind, CellKind::Jail);
        assert_eq!(board.cell_at(CellId::new(20)).kind, CellKind::FreeParking);
        assert_eq!(board.cell_at(CellId::GO_TO_JAIL).kind, CellKind::GoToJail);
    }

    #[test]
    fn test_railroads_and_utilities() {
        let board = BoardCatalog::standard();
        let railroads: Vec<u8> = board.positions_of(CellKind::Railroad).iter().map(|c| c.0).collect();
        let utilities: Vec<u8> = board.positions_of(CellKind::Utility).iter().map(|c| c.0).collect();

        assert_eq!(railroads, vec![5, 15, 25, 35]);
        assert_eq!(utilities, vec![12, 28]);
        assert_eq!(board.cell_at(CellId::new(5)).rent, vec![25, 50, 100, 200]);
    }

    #[test]
    fn test_streets_have_six_tier_schedules() {
        let board = BoardCatalog::standard();
        let streets: Vec<_> = board.iter().filter(|c| c.kind == CellKind::Property).collect();

        assert_eq!(streets.len(), 22);
        for street in streets {
            assert_eq!(street.rent.len(), 6, "{}", street.name);
            assert!(street.price.is_some());
            assert!(street.color.is_some());
        }
    }

    #[test]
    fn test_tax_cells() {
        let board = BoardCatalog::standard();
        let income = board.cell_at(CellId::new(4));
        let luxury = board.cell_at(CellId::new(38));

        assert_eq!(income.tax, Some(TaxKind::Income));
        assert_eq!(income.price, Some(200));
        assert_eq!(luxury.tax, Some(TaxKind::Luxury));
        assert_eq!(luxury.price, Some(100));
    }

    #[test]
    fn test_color_group_sizes() {
        let board = BoardCatalog::standard();
        assert_eq!(board.color_group(ColorGroup::Brown).count(), 2);
        assert_eq!(board.color_group(ColorGroup::Orange).count(), 3);
        assert_eq!(board.color_group(ColorGroup::DarkBlue).count(), 2);
    }
}
