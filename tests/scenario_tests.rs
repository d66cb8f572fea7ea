//! Full-turn scenarios mixing movement, cards, jail and bankruptcy.

use monopoly_engine::board::CellId;
use monopoly_engine::cards::{Card, CardEffect, Deck, DeckKind};
use monopoly_engine::core::{EngineError, GameRng, PlayerId, ScriptedDice};
use monopoly_engine::events::{GameEvent, ReleaseReason};
use monopoly_engine::players::PlayerStatus;
use monopoly_engine::turn::{
    Decision, FundsChoice, GameSession, JailChoice, PendingDecision, PurchaseChoice, TurnPhase,
};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn cell(n: u8) -> CellId {
    CellId::new(n)
}

fn one_card(kind: DeckKind, effect: CardEffect) -> Deck {
    Deck::stacked(kind, vec![Card::new(1, kind, "stacked", effect)], GameRng::new(1))
}

fn start(builder: monopoly_engine::turn::GameSessionBuilder, rolls: &[(u8, u8)]) -> GameSession {
    let mut session = builder
        .with_dice(ScriptedDice::new(rolls.iter().copied()))
        .build()
        .unwrap();
    session.start_game(2).unwrap();
    session
}

#[test]
fn test_passing_go_pays_once() {
    let mut session = start(GameSession::builder(), &[(2, 3)]);
    session.place_player(P0, cell(38)).unwrap();
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(3));
    assert_eq!(session.player(P0).cash, 1700);
    let salaries = session
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::SalaryCollected { .. }))
        .count();
    assert_eq!(salaries, 1);
}

#[test]
fn test_nearest_railroad_with_three_owned() {
    let builder = GameSession::builder()
        .with_deck(one_card(DeckKind::Chance, CardEffect::MoveToNearestRailroad));
    let mut session = start(builder, &[(1, 2)]);
    for n in [5, 15, 25] {
        session.assign_property(P1, cell(n)).unwrap();
    }
    session.place_player(P0, cell(19)).unwrap();
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(25));
    assert_eq!(session.player(P0).cash, 1300);
    assert_eq!(session.player(P1).cash, 1700);
}

#[test]
fn test_street_repairs_bill() {
    let builder = GameSession::builder().with_deck(one_card(
        DeckKind::CommunityChest,
        CardEffect::PayPerBuilding { house_rate: 50, hotel_rate: 115 },
    ));
    let mut session = start(builder, &[(3, 4)]);
    session.assign_property(P0, cell(1)).unwrap();
    session.assign_property(P0, cell(3)).unwrap();
    for _ in 0..2 {
        session.build(P0, cell(1)).unwrap();
    }
    for _ in 0..5 {
        session.build(P0, cell(3)).unwrap();
    }
    assert_eq!(session.ledger().buildings_of(P0), (2, 1));

    session.set_cash(P0, 1272).unwrap();
    session.place_player(P0, cell(10)).unwrap();
    session.take_events();
    session.submit_roll().unwrap();

    assert_eq!(session.player(P0).position, cell(17));
    assert_eq!(session.player(P0).cash, 1057);
    let delta = session.take_events().into_iter().find_map(|e| match e {
        GameEvent::CardResolved { outcome, .. } => Some(outcome.cash_delta),
        _ => None,
    });
    assert_eq!(delta, Some(-215));
}

#[test]
fn test_three_failed_jail_rolls_force_bail() {
    let mut session = start(
        GameSession::builder(),
        &[(1, 2), (1, 2), (1, 3), (2, 3), (2, 4)],
    );
    session.jail_player(P0).unwrap();

    for _ in 0..2 {
        session.resolve_decision(Decision::Jail(JailChoice::RollForDoubles)).unwrap();
        assert!(session.player(P0).is_in_jail());
        session.submit_roll().unwrap();
        session.resolve_decision(Decision::Purchase(PurchaseChoice::Skip)).unwrap();
    }
    session.take_events();
    session.resolve_decision(Decision::Jail(JailChoice::RollForDoubles)).unwrap();

    let player = session.player(P0);
    assert_eq!(player.status, PlayerStatus::Active);
    assert_eq!(player.position, cell(16));
    assert_eq!(player.cash, 1450);
    assert_eq!(player.jail_turns, 0);
    assert!(session.take_events().contains(&GameEvent::PlayerReleased {
        player: P0,
        reason: ReleaseReason::ForcedBail,
        fee: 50,
    }));
}

#[test]
fn test_bankruptcy_hands_holdings_to_creditor() {
    let mut session = start(GameSession::builder(), &[(1, 1)]);
    session.assign_property(P1, cell(39)).unwrap();
    session.assign_property(P0, cell(1)).unwrap();
    session.assign_property(P0, cell(6)).unwrap();
    session.build(P0, cell(6)).unwrap();
    session.mortgage(P0, cell(1)).unwrap();
    session.set_cash(P0, 30).unwrap();
    session.place_player(P0, cell(37)).unwrap();

    session.submit_roll().unwrap();

    let debtor = session.player(P0);
    assert!(debtor.is_bankrupt());
    assert_eq!(debtor.cash, 0);
    assert_eq!(debtor.owned_count(), 0);

    let ledger = session.ledger();
    assert_eq!(ledger.owner_of(cell(1)), Some(P1));
    assert!(ledger.state(cell(1)).unwrap().mortgaged);
    assert_eq!(ledger.owner_of(cell(6)), Some(P1));
    assert!(!ledger.state(cell(6)).unwrap().has_buildings());
    assert!(session.player(P1).owns(cell(6)));

    assert_eq!(session.phase(), TurnPhase::GameOver);
    assert_eq!(session.winner(), Some(P1));
    let events = session.take_events();
    assert!(events.contains(&GameEvent::PlayerBankrupt { player: P0, creditor: Some(P1) }));
    assert!(events.contains(&GameEvent::GameOver { winner: Some(P1) }));
}

#[test]
fn test_bank_debt_returns_holdings_to_bank() {
    let builder = GameSession::builder()
        .with_deck(one_card(DeckKind::Chance, CardEffect::PayMoney { amount: 100 }));
    let mut session = start(builder, &[(3, 4)]);
    session.assign_property(P0, cell(1)).unwrap();
    session.mortgage(P0, cell(1)).unwrap();
    session.set_cash(P0, 10).unwrap();

    session.submit_roll().unwrap();

    assert!(session.player(P0).is_bankrupt());
    assert_eq!(session.ledger().owner_of(cell(1)), None);
    assert!(!session.ledger().state(cell(1)).unwrap().mortgaged);
    assert!(session
        .take_events()
        .contains(&GameEvent::PlayerBankrupt { player: P0, creditor: None }));
}

#[test]
fn test_commands_rejected_after_game_over() {
    let builder = GameSession::builder()
        .with_deck(one_card(DeckKind::Chance, CardEffect::PayMoney { amount: 100 }));
    let mut session = start(builder, &[(3, 4)]);
    session.set_cash(P0, 10).unwrap();
    session.submit_roll().unwrap();

    assert!(session.is_over());
    assert_eq!(session.submit_roll(), Err(monopoly_engine::core::EngineError::GameOver));
    assert_eq!(
        session.resolve_decision(Decision::Purchase(PurchaseChoice::Skip)),
        Err(monopoly_engine::core::EngineError::GameOver)
    );
}

#[test]
fn test_standard_deck_reshuffles_on_seventeenth_draw() {
    let mut deck = Deck::standard(DeckKind::Chance, 11);
    for _ in 0..16 {
        let card = deck.draw();
        deck.discard(card);
    }
    assert_eq!(deck.reshuffle_count(), 0);
    assert_eq!(deck.discarded(), 16);

    let _ = deck.draw();
    assert_eq!(deck.reshuffle_count(), 1);
    assert_eq!(deck.remaining(), 15);
}

#[test]
fn test_restart_resets_table() {
    let mut session = start(GameSession::builder(), &[(1, 2)]);
    session.submit_roll().unwrap();
    session.resolve_decision(Decision::Purchase(PurchaseChoice::Buy)).unwrap();
    assert_eq!(session.ledger().owner_of(cell(3)), Some(P0));

    session.start_game(3).unwrap();
    assert_eq!(session.players().len(), 3);
    assert_eq!(session.ledger().owner_of(cell(3)), None);
    assert_eq!(session.player(P0).cash, 1500);
    assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
}

fn total_cash(session: &GameSession) -> i64 {
    [P0, P1].iter().map(|&p| session.player(p).cash).sum()
}

fn rent_payments(session: &mut GameSession) -> Vec<i64> {
    session
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::RentPaid { amount, .. } => Some(amount),
            _ => None,
        })
        .collect()
}

fn fined_with_boardwalk() -> GameSession {
    let builder = GameSession::builder()
        .with_deck(one_card(DeckKind::Chance, CardEffect::PayMoney { amount: 100 }));
    let mut session = start(builder, &[(3, 4)]);
    session.assign_property(P0, cell(39)).unwrap();
    session.set_cash(P0, 10).unwrap();
    session.submit_roll().unwrap();
    session
}

#[test]
fn test_recoverable_debt_waits_for_mortgage() {
    let mut session = fined_with_boardwalk();

    assert_eq!(session.phase(), TurnPhase::AwaitingDecision);
    assert_eq!(
        session.pending_decision(),
        Some(&PendingDecision::RaiseFunds { player: P0, debt: 90, available: 200 })
    );
    assert!(!session.player(P0).is_bankrupt());

    let err = session.resolve_decision(Decision::RaiseFunds(FundsChoice::Settle)).unwrap_err();
    assert_eq!(err, EngineError::InsufficientFunds { needed: 0, available: -90 });
    assert!(session.pending_decision().is_some());

    session.mortgage(P0, cell(39)).unwrap();
    assert_eq!(session.player(P0).cash, 110);
    session.resolve_decision(Decision::RaiseFunds(FundsChoice::Settle)).unwrap();

    assert_eq!(session.active_player(), Some(P1));
    assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(session.ledger().owner_of(cell(39)), Some(P0));
    assert!(session.ledger().state(cell(39)).unwrap().mortgaged);
}

#[test]
fn test_conceding_recoverable_debt_goes_bankrupt() {
    let mut session = fined_with_boardwalk();
    session.resolve_decision(Decision::RaiseFunds(FundsChoice::Concede)).unwrap();

    assert!(session.player(P0).is_bankrupt());
    assert_eq!(session.ledger().owner_of(cell(39)), None);
    assert!(session.is_over());
    assert_eq!(session.winner(), Some(P1));
}

#[test]
fn test_rent_bankruptcy_conserves_cash() {
    let mut session = start(GameSession::builder(), &[(1, 1)]);
    session.assign_property(P1, cell(39)).unwrap();
    session.set_cash(P0, 30).unwrap();
    session.place_player(P0, cell(37)).unwrap();
    let before = total_cash(&session);

    session.submit_roll().unwrap();

    assert!(session.player(P0).is_bankrupt());
    assert_eq!(session.player(P0).cash, 0);
    assert_eq!(session.player(P1).cash, 1530);
    assert_eq!(total_cash(&session), before);
}

#[test]
fn test_unpaid_rent_collected_after_mortgage() {
    let mut session = start(GameSession::builder(), &[(1, 1)]);
    session.assign_property(P1, cell(39)).unwrap();
    session.assign_property(P0, cell(1)).unwrap();
    session.set_cash(P0, 30).unwrap();
    session.place_player(P0, cell(37)).unwrap();
    session.take_events();

    session.submit_roll().unwrap();
    assert_eq!(session.player(P1).cash, 1530);
    assert_eq!(
        session.pending_decision(),
        Some(&PendingDecision::RaiseFunds { player: P0, debt: 20, available: 30 })
    );

    session.mortgage(P0, cell(1)).unwrap();
    assert_eq!(session.player(P0).cash, 10);
    session.resolve_decision(Decision::RaiseFunds(FundsChoice::Settle)).unwrap();

    assert_eq!(session.player(P1).cash, 1550);
    assert_eq!(session.player(P0).cash, 10);
    assert_eq!(rent_payments(&mut session), vec![30, 20]);
    // Doubles: still P0's turn.
    assert_eq!(session.active_player(), Some(P0));
    assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
}
