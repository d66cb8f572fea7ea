//! Chance and Community Chest cards.
//!
//! ## Key Types
//!
//! - `Card`: a drawn card and its `CardEffect`
//! - `Deck`: draw pile and discard pile with reshuffle-on-empty
//! - `chance_cards` / `community_chest_cards`: the standard 16-card sets

pub mod definition;
pub mod deck;
pub mod sets;

pub use definition::{Card, CardEffect, CardId, DeckKind};
pub use deck::Deck;
pub use sets::{chance_cards, community_chest_cards, standard_cards, STANDARD_DECK_SIZE};
