//! Chance and Community Chest resolution through a live session.

use monopoly_engine::board::CellId;
use monopoly_engine::cards::{Card, CardEffect, Deck, DeckKind};
use monopoly_engine::core::{GameRng, PlayerId, ScriptedDice};
use monopoly_engine::events::{GameEvent, JailReason};
use monopoly_engine::players::PlayerStatus;
use monopoly_engine::turn::{Decision, GameSession, PendingDecision, PurchaseChoice, TurnPhase};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);

fn cell(n: u8) -> CellId {
    CellId::new(n)
}

fn deck_of(kind: DeckKind, effects: &[CardEffect]) -> Deck {
    let cards = effects
        .iter()
        .enumerate()
        .map(|(i, &effect)| Card::new(i as u8 + 1, kind, format!("card {}", i + 1), effect))
        .collect();
    Deck::stacked(kind, cards, GameRng::new(1))
}

/// Session whose Chance deck holds `chance` (last card on top).
fn session(players: usize, chance: &[CardEffect], chest: &[CardEffect], rolls: &[(u8, u8)]) -> GameSession {
    let mut builder = GameSession::builder().with_dice(ScriptedDice::new(rolls.iter().copied()));
    if !chance.is_empty() {
        builder = builder.with_deck(deck_of(DeckKind::Chance, chance));
    }
    if !chest.is_empty() {
        builder = builder.with_deck(deck_of(DeckKind::CommunityChest, chest));
    }
    let mut session = builder.build().unwrap();
    session.start_game(players).unwrap();
    session
}

#[test]
fn test_advance_card_relands_on_new_cell() {
    let mut session = session(2, &[CardEffect::MoveToPosition { target: cell(24) }], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(24));
    assert_eq!(session.player(P0).cash, 1500);
    assert_eq!(
        session.pending_decision(),
        Some(&PendingDecision::Purchase { player: P0, cell: cell(24), price: 240 })
    );

    let events = session.take_events();
    assert!(events.contains(&GameEvent::PlayerMoved { player: P0, from: cell(7), to: cell(24), passed_go: false }));
    assert!(events.contains(&GameEvent::LandedOn { player: P0, cell: cell(24) }));

    session.resolve_decision(Decision::Purchase(PurchaseChoice::Skip)).unwrap();
    assert_eq!(session.deck(DeckKind::Chance).discarded(), 1);
    assert_eq!(session.deck(DeckKind::Chance).remaining(), 0);
}

#[test]
fn test_go_back_three_lands_on_income_tax() {
    let mut session = session(2, &[CardEffect::MoveRelative { delta: -3 }], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(4));
    assert!(matches!(session.pending_decision(), Some(PendingDecision::Tax { .. })));
}

#[test]
fn test_advance_to_go_card_pays_salary() {
    let mut session = session(2, &[CardEffect::MoveToPosition { target: CellId::GO }], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, CellId::GO);
    assert_eq!(session.player(P0).cash, 1700);
    assert_eq!(session.active_player(), Some(P1));
}

#[test]
fn test_jail_card_is_kept_not_discarded() {
    let mut session = session(2, &[CardEffect::GetOutOfJailFree], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    assert!(session.player(P0).has_jail_card());
    assert_eq!(session.player(P0).retained_from(DeckKind::Chance), 1);
    let deck = session.deck(DeckKind::Chance);
    assert_eq!(deck.remaining() + deck.discarded(), 0);
}

#[test]
fn test_go_to_jail_card() {
    let mut session = session(2, &[CardEffect::GoToJail], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    let player = session.player(P0);
    assert_eq!(player.status, PlayerStatus::InJail);
    assert_eq!(player.position, CellId::JAIL);
    assert_eq!(player.cash, 1500);
    assert!(session
        .take_events()
        .contains(&GameEvent::PlayerJailed { player: P0, reason: JailReason::Card }));
}

#[test]
fn test_birthday_collects_from_every_player() {
    let mut session = session(3, &[], &[CardEffect::CollectFromEachPlayer { amount: 10 }], &[(3, 4)]);
    session.place_player(P0, cell(10)).unwrap();
    session.set_cash(P2, 4).unwrap();
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(17));
    assert_eq!(session.player(P0).cash, 1514);
    assert_eq!(session.player(P1).cash, 1490);
    assert_eq!(session.player(P2).cash, 0);
}

#[test]
fn test_chairman_pays_every_player() {
    let mut session = session(3, &[CardEffect::PayEachPlayer { amount: 50 }], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).cash, 1400);
    assert_eq!(session.player(P1).cash, 1550);
    assert_eq!(session.player(P2).cash, 1550);
}

#[test]
fn test_nearest_utility_charges_ten_times_dice() {
    let mut session = session(2, &[CardEffect::MoveToNearestUtility], &[], &[(3, 4)]);
    session.assign_property(P1, cell(12)).unwrap();
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(12));
    assert_eq!(session.player(P0).cash, 1430);
    assert_eq!(session.player(P1).cash, 1570);
}

#[test]
fn test_nearest_railroad_doubles_rent() {
    let mut session = session(2, &[CardEffect::MoveToNearestRailroad], &[], &[(3, 4)]);
    session.assign_property(P1, cell(15)).unwrap();
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(15));
    assert_eq!(session.player(P0).cash, 1450);
    assert!(session.take_events().contains(&GameEvent::RentPaid {
        payer: P0,
        owner: P1,
        amount: 50,
        cell: cell(15),
    }));
}

#[test]
fn test_unowned_nearest_railroad_offers_purchase() {
    let mut session = session(2, &[CardEffect::MoveToNearestRailroad], &[], &[(3, 4)]);
    session.submit_roll().unwrap();

    assert_eq!(session.phase(), TurnPhase::AwaitingDecision);
    assert_eq!(
        session.pending_decision(),
        Some(&PendingDecision::Purchase { player: P0, cell: cell(15), price: 200 })
    );
}

#[test]
fn test_card_chain_from_chance_to_community_chest() {
    let mut session = session(
        2,
        &[CardEffect::MoveRelative { delta: -3 }],
        &[CardEffect::CollectMoney { amount: 100 }],
        &[(6, 5)],
    );
    session.place_player(P0, cell(25)).unwrap();
    session.submit_roll().unwrap();

    // Chance at 36, back three to Community Chest at 33.
    assert_eq!(session.player(P0).position, cell(33));
    assert_eq!(session.player(P0).cash, 1600);
    assert_eq!(session.deck(DeckKind::Chance).discarded(), 1);
    assert_eq!(session.deck(DeckKind::CommunityChest).discarded(), 1);
}
