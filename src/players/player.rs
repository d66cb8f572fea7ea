//! A seated player: position, cash, holdings and jail state.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::CellId;
use crate::cards::{Card, DeckKind};
use crate::core::PlayerId;

/// Whether a player is moving freely, sitting in jail, or out of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Active,
    InJail,
    Bankrupt,
}

/// One player's mutable state.
///
/// Invariant: `status == InJail` implies `position == CellId::JAIL`.
/// Cash may be negative while a turn is resolving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: CellId,
    pub cash: i64,
    pub status: PlayerStatus,
    /// Failed doubles rolls during the current jail stay.
    pub jail_turns: u8,
    owned: OrdSet<CellId>,
    retained: SmallVec<[Card; 2]>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, cash: i64) -> Self {
        Self {
            id,
            position: CellId::GO,
            cash,
            status: PlayerStatus::Active,
            jail_turns: 0,
            owned: OrdSet::new(),
            retained: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.status == PlayerStatus::Bankrupt
    }

    #[must_use]
    pub fn is_in_jail(&self) -> bool {
        self.status == PlayerStatus::InJail
    }

    pub fn credit(&mut self, amount: i64) {
        self.cash += amount;
    }

    /// Take money out, allowing the balance to go negative.
    pub fn debit(&mut self, amount: i64) {
        self.cash -= amount;
    }

    /// Move to jail. No salary, no matter where the player stood.
    pub fn send_to_jail(&mut self) {
        self.position = CellId::JAIL;
        self.status = PlayerStatus::InJail;
        self.jail_turns = 0;
    }

    /// Leave jail, staying on the jail cell.
    pub fn release(&mut self) {
        if self.status == PlayerStatus::InJail {
            self.status = PlayerStatus::Active;
        }
        self.jail_turns = 0;
    }

    // === Holdings ===

    /// Cells this player owns, in board order.
    pub fn owned_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.owned.iter().copied()
    }

    #[must_use]
    pub fn owns(&self, cell: CellId) -> bool {
        self.owned.contains(&cell)
    }

    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub(crate) fn add_property(&mut self, cell: CellId) {
        self.owned.insert(cell);
    }

    /// Drop every holding, returning the cells that were owned.
    pub(crate) fn clear_properties(&mut self) -> Vec<CellId> {
        let cells = self.owned.iter().copied().collect();
        self.owned.clear();
        cells
    }

    // === Retained cards ===

    #[must_use]
    pub fn retained_cards(&self) -> &[Card] {
        &self.retained
    }

    #[must_use]
    pub fn has_jail_card(&self) -> bool {
        self.retained.iter().any(Card::is_retainable)
    }

    pub(crate) fn retain_card(&mut self, card: Card) {
        self.retained.push(card);
    }

    /// Remove one get-out-of-jail-free card, oldest first.
    pub(crate) fn take_jail_card(&mut self) -> Option<Card> {
        let index = self.retained.iter().position(Card::is_retainable)?;
        Some(self.retained.remove(index))
    }

    /// Remove every retained card.
    pub(crate) fn drain_cards(&mut self) -> Vec<Card> {
        self.retained.drain(..).collect()
    }

    /// Retained cards that came from `deck`.
    #[must_use]
    pub fn retained_from(&self, deck: DeckKind) -> usize {
        self.retained.iter().filter(|c| c.deck == deck).count()
    }
}
