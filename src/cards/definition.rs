//! Card definitions - static card data.
//!
//! A card is identified by its deck and its number within that deck. What it
//! does is a closed `CardEffect` variant, so the executor matches every kind
//! exhaustively.

use serde::{Deserialize, Serialize};

use crate::board::CellId;

/// Which of the two decks a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => write!(f, "Chance"),
            DeckKind::CommunityChest => write!(f, "Community Chest"),
        }
    }
}

/// Card number within its deck (1-based in the standard sets).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does to the player who drew it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// Advance to a cell. Passing Go pays the salary.
    MoveToPosition { target: CellId },
    /// Move by a signed number of cells. Only forward wraps pay the salary.
    MoveRelative { delta: i8 },
    /// Bank pays the player.
    CollectMoney { amount: i64 },
    /// Player pays the bank.
    PayMoney { amount: i64 },
    /// Every other solvent player pays the drawer, capped at their cash.
    CollectFromEachPlayer { amount: i64 },
    /// Drawer pays every other solvent player, capped at the drawer's cash.
    PayEachPlayer { amount: i64 },
    /// Repairs: a rate per house and per hotel the drawer owns.
    PayPerBuilding { house_rate: i64, hotel_rate: i64 },
    /// Straight to jail, no salary.
    GoToJail,
    /// Kept by the player until used to leave jail.
    GetOutOfJailFree,
    /// Advance to the next railroad; rent there is doubled.
    MoveToNearestRailroad,
    /// Advance to the next utility; rent there is ten times the dice.
    MoveToNearestUtility,
}

/// A Chance or Community Chest card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub deck: DeckKind,
    pub title: String,
    pub effect: CardEffect,
}

impl Card {
    pub fn new(id: u8, deck: DeckKind, title: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            id: CardId(id),
            deck,
            title: title.into(),
            effect,
        }
    }

    /// Retainable cards stay with the player instead of going to the discard pile.
    #[must_use]
    pub fn is_retainable(&self) -> bool {
        matches!(self.effect, CardEffect::GetOutOfJailFree)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}: {}", self.deck, self.id.0, self.title)
    }
}
