//! Shuffled draw pile plus discard pile.
//!
//! The top of the draw pile is the end of the vector. When the draw pile runs
//! out, the discard pile is shuffled back in. A card is always in exactly one
//! of the two piles, or held by a player (retainable cards only).

use tracing::debug;

use crate::core::GameRng;

use super::definition::{Card, CardId, DeckKind};
use super::sets::standard_cards;

/// One of the two card decks.
#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    size: usize,
    reshuffles: u32,
    rng: GameRng,
}

impl Deck {
    /// Create a deck and shuffle it.
    ///
    /// Panics if `cards` is empty: a deck that can never be drawn from is a
    /// card-set configuration bug.
    pub fn new(kind: DeckKind, cards: Vec<Card>, mut rng: GameRng) -> Self {
        let mut deck = Self::stacked(kind, cards, rng.clone());
        rng.shuffle(&mut deck.draw_pile);
        deck.rng = rng;
        deck
    }

    /// Create a deck without shuffling; the last card is drawn first.
    pub fn stacked(kind: DeckKind, cards: Vec<Card>, rng: GameRng) -> Self {
        assert!(!cards.is_empty(), "{kind} deck needs at least one card");
        assert!(
            cards.iter().all(|c| c.deck == kind),
            "{kind} deck given a card from another deck"
        );

        Self {
            kind,
            size: cards.len(),
            draw_pile: cards,
            discard_pile: Vec::new(),
            reshuffles: 0,
            rng,
        }
    }

    /// The standard 16-card set, shuffled on the deck's own stream of `seed`.
    pub fn standard(kind: DeckKind, seed: u64) -> Self {
        let context = match kind {
            DeckKind::Chance => "chance",
            DeckKind::CommunityChest => "community_chest",
        };
        Self::new(kind, standard_cards(kind), GameRng::new(seed).for_context(context))
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Total number of cards belonging to this deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }

    /// How many times the discard pile has been shuffled back in.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    /// Draw the top card, reshuffling the discard pile in first if needed.
    ///
    /// Panics if both piles are empty, which means every card is held by
    /// players: a card-set configuration bug.
    pub fn draw(&mut self) -> Card {
        if self.draw_pile.is_empty() {
            self.reshuffle();
        }

        match self.draw_pile.pop() {
            Some(card) => card,
            None => panic!("{} deck has no cards in either pile", self.kind),
        }
    }

    /// Return a card to the discard pile.
    pub fn discard(&mut self, card: Card) {
        debug_assert_eq!(card.deck, self.kind, "card discarded to the wrong deck");
        self.discard_pile.push(card);
    }

    /// Take a card out of either pile.
    ///
    /// Returns `None` if the card is not in this deck's piles (for instance,
    /// held by a player).
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        if let Some(i) = self.draw_pile.iter().position(|c| c.id == id) {
            Some(self.draw_pile.remove(i))
        } else {
            let i = self.discard_pile.iter().position(|c| c.id == id)?;
            Some(self.discard_pile.remove(i))
        }
    }

    /// Move a card from either pile to the top of the draw pile.
    pub fn put_on_top(&mut self, id: CardId) -> bool {
        match self.remove(id) {
            Some(card) => {
                self.draw_pile.push(card);
                true
            }
            None => false,
        }
    }

    /// Id of the first retainable card still in the piles.
    #[must_use]
    pub fn retainable_card(&self) -> Option<CardId> {
        self.draw_pile
            .iter()
            .chain(&self.discard_pile)
            .find(|c| c.is_retainable())
            .map(|c| c.id)
    }

    fn reshuffle(&mut self) {
        self.draw_pile.append(&mut self.discard_pile);
        self.rng.shuffle(&mut self.draw_pile);
        self.reshuffles += 1;
        debug!(deck = %self.kind, cards = self.draw_pile.len(), "reshuffled discard pile");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardEffect;

    fn numbered(kind: DeckKind, n: u8) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(i, kind, format!("card {i}"), CardEffect::CollectMoney { amount: i as i64 }))
            .collect()
    }

    #[test]
    fn test_stacked_draws_from_the_end() {
        let mut deck = Deck::stacked(DeckKind::Chance, numbered(DeckKind::Chance, 3), GameRng::new(1));
        assert_eq!(deck.draw().id, CardId(3));
        assert_eq!(deck.draw().id, CardId(2));
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_standard_deck_is_shuffled_and_complete() {
        let deck = Deck::standard(DeckKind::Chance, 42);
        assert_eq!(deck.size(), 16);
        assert_eq!(deck.remaining(), 16);
        assert_eq!(deck.discarded(), 0);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = Deck::standard(DeckKind::CommunityChest, 5);
        let mut b = Deck::standard(DeckKind::CommunityChest, 5);
        for _ in 0..16 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_reshuffle_when_empty() {
        let mut deck = Deck::stacked(DeckKind::Chance, numbered(DeckKind::Chance, 4), GameRng::new(3));

        for _ in 0..4 {
            let card = deck.draw();
            deck.discard(card);
        }
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.discarded(), 4);
        assert_eq!(deck.reshuffle_count(), 0);

        let _ = deck.draw();
        assert_eq!(deck.reshuffle_count(), 1);
        assert_eq!(deck.remaining(), 3);
        assert_eq!(deck.discarded(), 0);
    }

    #[test]
    fn test_put_on_top_from_discard() {
        let mut deck = Deck::stacked(DeckKind::Chance, numbered(DeckKind::Chance, 3), GameRng::new(3));
        let first = deck.draw();
        deck.discard(first.clone());

        assert!(deck.put_on_top(first.id));
        assert_eq!(deck.discarded(), 0);
        assert_eq!(deck.draw(), first);
        assert!(!deck.put_on_top(CardId(99)));
    }

    #[test]
    fn test_remove_and_find_retainable() {
        let mut deck = Deck::standard(DeckKind::Chance, 8);
        let id = deck.retainable_card().unwrap();

        let card = deck.remove(id).unwrap();
        assert!(card.is_retainable());
        assert_eq!(deck.remaining() + deck.discarded(), 15);
        assert_eq!(deck.retainable_card(), None);
        assert!(deck.remove(id).is_none());
    }

    #[test]
    #[should_panic(expected = "no cards in either pile")]
    fn test_draw_with_both_piles_empty_panics() {
        let mut deck = Deck::stacked(DeckKind::Chance, numbered(DeckKind::Chance, 1), GameRng::new(3));
        let _held = deck.draw();
        let _ = deck.draw();
    }

    #[test]
    #[should_panic(expected = "needs at least one card")]
    fn test_empty_card_set_panics() {
        let _ = Deck::new(DeckKind::CommunityChest, Vec::new(), GameRng::new(1));
    }
}
