//! Property ledger: ownership, buildings, mortgages and rent.

pub mod property;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use property::{BuildingKind, OwnershipQuery, PropertyState, SpecialRent, MAX_HOUSES};
pub use ledger::{PropertyInfo, PropertyLedger};
