//! Board catalog: the 40 fixed cells.

pub mod cell;
pub mod catalog;

pub use cell::{Cell, CellId, CellKind, ColorGroup, TaxKind, BOARD_SIZE};
pub use catalog::BoardCatalog;
