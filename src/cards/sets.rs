//! The standard Chance and Community Chest card sets, 16 cards each.

use crate::board::CellId;

use super::definition::{Card, CardEffect, DeckKind};

/// Cards in each standard deck.
pub const STANDARD_DECK_SIZE: usize = 16;

pub fn chance_cards() -> Vec<Card> {
    use CardEffect::*;
    let card = |id, title: &str, effect| Card::new(id, DeckKind::Chance, title, effect);

    vec![
        card(1, "Advance to Go", MoveToPosition { target: CellId::GO }),
        card(2, "Advance to Illinois Avenue", MoveToPosition { target: CellId::new(24) }),
        card(3, "Advance to St. Charles Place", MoveToPosition { target: CellId::new(11) }),
        card(4, "Advance to the nearest Railroad", MoveToNearestRailroad),
        card(5, "Take a trip to Pennsylvania Railroad", MoveToPosition { target: CellId::new(15) }),
        card(6, "Advance to the nearest Utility", MoveToNearestUtility),
        card(7, "Bank error in your favor", CollectMoney { amount: 200 }),
        card(8, "Get Out of Jail Free", GetOutOfJailFree),
        card(9, "Go back 3 spaces", MoveRelative { delta: -3 }),
        card(10, "Go directly to Jail", GoToJail),
        card(11, "General repairs", PayPerBuilding { house_rate: 25, hotel_rate: 100 }),
        card(12, "Pay poor tax", PayMoney { amount: 15 }),
        card(13, "Take a trip to Reading Railroad", MoveToPosition { target: CellId::new(5) }),
        card(14, "Advance to Boardwalk", MoveToPosition { target: CellId::new(39) }),
        card(15, "Elected chairman of the board", PayEachPlayer { amount: 50 }),
        card(16, "Your building loan matures", CollectMoney { amount: 150 }),
    ]
}

pub fn community_chest_cards() -> Vec<Card> {
    use CardEffect::*;
    let card = |id, title: &str, effect| Card::new(id, DeckKind::CommunityChest, title, effect);

    vec![
        card(1, "Advance to Go", MoveToPosition { target: CellId::GO }),
        card(2, "Bank error in your favor", CollectMoney { amount: 200 }),
        card(3, "Doctor's fee", PayMoney { amount: 50 }),
        card(4, "You inherit $100", CollectMoney { amount: 100 }),
        card(5, "Income tax refund", CollectMoney { amount: 20 }),
        card(6, "Life insurance matures", CollectMoney { amount: 100 }),
        card(7, "Hospital fees", PayMoney { amount: 100 }),
        card(8, "School fees", PayMoney { amount: 50 }),
        card(9, "Go directly to Jail", GoToJail),
        card(10, "Get Out of Jail Free", GetOutOfJailFree),
        card(11, "Holiday fund matures", CollectMoney { amount: 100 }),
        card(12, "Charity donation", PayMoney { amount: 50 }),
        card(13, "Second prize in a beauty contest", CollectMoney { amount: 10 }),
        card(14, "Street repairs", PayPerBuilding { house_rate: 40, hotel_rate: 115 }),
        card(15, "It is your birthday", CollectFromEachPlayer { amount: 10 }),
        card(16, "Stock dividend", CollectMoney { amount: 50 }),
    ]
}

/// Standard set for a deck kind.
pub fn standard_cards(kind: DeckKind) -> Vec<Card> {
    match kind {
        DeckKind::Chance => chance_cards(),
        DeckKind::CommunityChest => community_chest_cards(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sizes_and_unique_ids() {
        for kind in [DeckKind::Chance, DeckKind::CommunityChest] {
            let cards = standard_cards(kind);
            assert_eq!(cards.len(), STANDARD_DECK_SIZE);

            let ids: HashSet<_> = cards.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), STANDARD_DECK_SIZE);
            assert!(cards.iter().all(|c| c.deck == kind));
        }
    }

    #[test]
    fn test_one_jail_card_per_deck() {
        for kind in [DeckKind::Chance, DeckKind::CommunityChest] {
            let retained = standard_cards(kind).iter().filter(|c| c.is_retainable()).count();
            assert_eq!(retained, 1);
        }
    }

    #[test]
    fn test_every_player_cards_use_effect_kinds() {
        let chairman = chance_cards().into_iter().find(|c| c.id.0 == 15).unwrap();
        assert_eq!(chairman.effect, CardEffect::PayEachPlayer { amount: 50 });

        let birthday = community_chest_cards().into_iter().find(|c| c.id.0 == 15).unwrap();
        assert_eq!(birthday.effect, CardEffect::CollectFromEachPlayer { amount: 10 });
    }
}
