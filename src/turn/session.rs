//! The game session aggregate.
//!
//! `GameSession` owns everything one game needs: board, ledger, players,
//! both decks, the dice and the event log. There is no global state, so any
//! number of sessions can run side by side. Every inbound command runs to
//! the next point where the engine needs outside input and returns.

use tracing::{debug, info};

use crate::board::{BoardCatalog, CellId};
use crate::cards::{Deck, DeckKind};
use crate::core::{DiceRoll, DiceSource, EngineConfig, EngineError, PlayerId, Result};
use crate::effects::CardEffectExecutor;
use crate::events::{EventLog, GameEvent};
use crate::ledger::{BuildingKind, PropertyLedger};
use crate::players::{Player, PlayerRegistry};

use super::builder::GameSessionBuilder;
use super::decision::{Decision, PendingDecision};
use super::phase::{TurnPhase, TurnState};

/// One game of up to four players.
pub struct GameSession {
    pub(super) config: EngineConfig,
    pub(super) board: BoardCatalog,
    pub(super) ledger: PropertyLedger,
    pub(super) players: PlayerRegistry,
    pub(super) chance: Deck,
    pub(super) community_chest: Deck,
    pub(super) dice: Box<dyn DiceSource>,
    pub(super) executor: CardEffectExecutor,
    pub(super) events: EventLog,
    pub(super) phase: TurnPhase,
    pub(super) pending: Option<PendingDecision>,
    pub(super) turn: TurnState,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .field("turn", &self.turn)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Session with standard decks and fair dice seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        GameSessionBuilder::new().with_config(config).build()
    }

    #[must_use]
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    // === Inbound commands ===

    /// Seat `player_count` players and start the first turn.
    ///
    /// A session that is already running is reset first.
    pub fn start_game(&mut self, player_count: usize) -> Result<()> {
        if self.phase != TurnPhase::NotStarted {
            self.reset();
        }

        self.players = PlayerRegistry::initialize(player_count, self.config.starting_cash)?;
        self.turn = TurnState::default();
        info!(players = player_count, seed = self.config.seed, "game started");
        self.events.push(GameEvent::GameStarted {
            players: player_count,
            seed: self.config.seed,
        });

        self.begin_turn();
        Ok(())
    }

    /// Roll for the active player and play the move out.
    ///
    /// Returns once the turn needs a decision, passes to the next player, or
    /// grants the same player another roll after doubles.
    pub fn submit_roll(&mut self) -> Result<DiceRoll> {
        self.ensure_running()?;
        if self.phase != TurnPhase::AwaitingRoll {
            return Err(EngineError::NotAwaitingRoll);
        }
        Ok(self.roll_and_move())
    }

    /// Answer the pending decision and continue the turn.
    ///
    /// On error the decision stays pending and nothing has changed.
    pub fn resolve_decision(&mut self, decision: Decision) -> Result<()> {
        self.ensure_running()?;
        let pending = match &self.pending {
            Some(pending) if pending.kind() == decision.kind() => pending.clone(),
            _ => {
                return Err(EngineError::InvalidDecision {
                    submitted: decision.kind(),
                })
            }
        };

        match (pending, decision) {
            (PendingDecision::Purchase { player, cell, price }, Decision::Purchase(choice)) => {
                self.decide_purchase(player, cell, price, choice)?;
            }
            (PendingDecision::Build { player, cell, .. }, Decision::Build(choice)) => {
                self.decide_build(player, cell, choice)?;
            }
            (PendingDecision::Tax { player, cell, fixed, percentage }, Decision::Tax(choice)) => {
                self.decide_tax(player, cell, fixed, percentage, choice);
            }
            (PendingDecision::Jail { player, .. }, Decision::Jail(choice)) => {
                return self.decide_jail(player, choice);
            }
            (PendingDecision::RaiseFunds { player, .. }, Decision::RaiseFunds(choice)) => {
                return self.decide_funds(player, choice);
            }
            (_, decision) => {
                return Err(EngineError::InvalidDecision {
                    submitted: decision.kind(),
                })
            }
        }

        self.settle();
        Ok(())
    }

    /// Return to the not-started state: no players, bank owns everything,
    /// fresh standard decks, empty event log.
    pub fn reset(&mut self) {
        self.players = PlayerRegistry::empty();
        self.ledger.reset();
        self.chance = Deck::standard(DeckKind::Chance, self.config.seed);
        self.community_chest = Deck::standard(DeckKind::CommunityChest, self.config.seed);
        self.dice.reseed(self.config.seed);
        self.events.clear();
        self.pending = None;
        self.turn = TurnState::default();
        self.phase = TurnPhase::NotStarted;
        info!("session reset");
    }

    // === Management actions ===

    /// Mortgage one of the active player's unimproved cells.
    pub fn mortgage(&mut self, player: PlayerId, cell: CellId) -> Result<i64> {
        self.ensure_acting(player)?;
        let payout = self.ledger.mortgage(cell, player)?;

        self.players.get_mut(player).credit(payout);
        self.events.push(GameEvent::PropertyMortgaged { player, cell, payout });
        Ok(payout)
    }

    /// Lift a mortgage, paying 60% of the price.
    pub fn unmortgage(&mut self, player: PlayerId, cell: CellId) -> Result<i64> {
        self.ensure_acting(player)?;
        if self.ledger.owner_of(cell) != Some(player) {
            return Err(EngineError::NotOwned(cell));
        }
        let cost = self
            .ledger
            .unmortgage_cost(cell)
            .ok_or(EngineError::NotMortgaged(cell))?;
        self.ensure_funds(player, cost)?;

        self.ledger.unmortgage(cell, player)?;
        self.players.get_mut(player).debit(cost);
        self.events.push(GameEvent::PropertyUnmortgaged { player, cell, cost });
        Ok(cost)
    }

    /// Put the next building on one of the active player's streets.
    pub fn build(&mut self, player: PlayerId, cell: CellId) -> Result<BuildingKind> {
        self.ensure_acting(player)?;
        let (_, cost) = self.ledger.next_building(cell, player)?;
        self.ensure_funds(player, cost)?;

        let (kind, cost) = self.ledger.build(cell, player)?;
        self.players.get_mut(player).debit(cost);
        self.events.push(GameEvent::BuildingBuilt { player, cell, kind, cost });
        Ok(kind)
    }

    // === Scenario setup ===
    //
    // Direct edits for tutorials, puzzles and tests. They skip the rules and
    // emit no events, but keep the ledger and player holdings consistent.
    // Each panics if `player` is not seated.

    /// Put a player on a cell without moving through the board.
    pub fn place_player(&mut self, player: PlayerId, cell: CellId) -> Result<()> {
        self.ensure_running()?;
        self.players.get_mut(player).position = cell;
        Ok(())
    }

    pub fn set_cash(&mut self, player: PlayerId, cash: i64) -> Result<()> {
        self.ensure_running()?;
        self.players.get_mut(player).cash = cash;
        Ok(())
    }

    /// Hand an unowned cell to a player free of charge.
    pub fn assign_property(&mut self, player: PlayerId, cell: CellId) -> Result<()> {
        self.ensure_running()?;
        self.ledger.purchase(cell, player)?;
        self.players.get_mut(player).add_property(cell);
        Ok(())
    }

    /// Send a player to jail. If it is their turn and they have not rolled,
    /// the turn becomes a jail decision.
    pub fn jail_player(&mut self, player: PlayerId) -> Result<()> {
        self.ensure_running()?;
        self.players.get_mut(player).send_to_jail();
        if player == self.players.active_id() && self.phase == TurnPhase::AwaitingRoll {
            self.begin_turn();
        }
        Ok(())
    }

    /// Move a deck's get-out-of-jail-free card into a player's hand.
    pub fn grant_jail_card(&mut self, player: PlayerId, deck: DeckKind) -> Result<()> {
        self.ensure_running()?;
        let pile = self.deck_mut(deck);
        let card = pile
            .retainable_card()
            .and_then(|id| pile.remove(id))
            .ok_or(EngineError::NoCardAvailable)?;
        self.players.get_mut(player).retain_card(card);
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &BoardCatalog {
        &self.board
    }

    #[must_use]
    pub fn ledger(&self) -> &PropertyLedger {
        &self.ledger
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Panics if `id` is not seated.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.players.get(id)
    }

    /// Whose turn it is, once the game has started.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        (!self.players.is_empty()).then(|| self.players.active_id())
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn pending_decision(&self) -> Option<&PendingDecision> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community_chest,
        }
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.take_events()
    }

    /// Completed turns.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    #[must_use]
    pub fn consecutive_doubles(&self) -> u8 {
        self.turn.consecutive_doubles
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.turn.last_roll
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// The last player standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_over() {
            return None;
        }
        match self.players.solvent_players().as_slice() {
            [winner] => Some(*winner),
            _ => None,
        }
    }

    /// Cash plus face value and building value of everything owned.
    #[must_use]
    pub fn net_worth(&self, id: PlayerId) -> i64 {
        self.players.get(id).cash + self.ledger.portfolio_value(id)
    }

    // === Internals shared by the turn submodules ===

    pub(super) fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }

    pub(super) fn ensure_running(&self) -> Result<()> {
        match self.phase {
            TurnPhase::NotStarted => Err(EngineError::GameNotStarted),
            TurnPhase::GameOver => Err(EngineError::GameOver),
            _ => Ok(()),
        }
    }

    /// Management actions need a resting session and the active player.
    fn ensure_acting(&self, player: PlayerId) -> Result<()> {
        self.ensure_running()?;
        if !self.phase.is_waiting() {
            return Err(EngineError::NotAwaitingRoll);
        }
        if player != self.players.active_id() {
            return Err(EngineError::NotActivePlayer(player));
        }
        Ok(())
    }

    pub(super) fn ensure_funds(&self, player: PlayerId, amount: i64) -> Result<()> {
        let available = self.players.get(player).cash;
        if available < amount {
            return Err(EngineError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        Ok(())
    }

    /// Start the active player's turn: a jail decision, or a roll.
    pub(super) fn begin_turn(&mut self) {
        let player = self.players.active_player();
        if player.is_in_jail() {
            let decision = PendingDecision::Jail {
                player: player.id,
                bail: self.config.bail,
                has_card: player.has_jail_card(),
                attempts: player.jail_turns,
            };
            self.request(decision);
        } else {
            self.phase = TurnPhase::AwaitingRoll;
        }
    }

    /// Suspend the turn until `decision` is answered.
    pub(super) fn request(&mut self, decision: PendingDecision) {
        debug!(player = %decision.player(), kind = ?decision.kind(), "decision requested");
        self.events.push(GameEvent::DecisionRequested {
            decision: decision.clone(),
        });
        self.pending = Some(decision);
        self.phase = TurnPhase::AwaitingDecision;
    }

    /// Close out a resolution step: wait for a decision, settle debts, then
    /// grant another roll or pass the turn.
    pub(super) fn settle(&mut self) {
        if self.pending.is_some() {
            self.phase = TurnPhase::AwaitingDecision;
            return;
        }

        let player = self.players.active_id();
        let cash = self.players.get(player).cash;
        if cash < 0 {
            let available = self.ledger.mortgage_capacity(player);
            if cash + available >= 0 {
                self.request(PendingDecision::RaiseFunds {
                    player,
                    debt: -cash,
                    available,
                });
                return;
            }
            self.declare_bankrupt(player);
            if self.is_over() {
                return;
            }
        } else {
            self.collect_outstanding_rent(player);
        }
        self.finish_turn();
    }

    pub(super) fn finish_turn(&mut self) {
        self.phase = TurnPhase::TurnComplete;
        let active = self.players.active_player();

        if self.turn.extra_roll && !active.is_in_jail() && !active.is_bankrupt() {
            self.turn.extra_roll = false;
            self.phase = TurnPhase::AwaitingRoll;
            debug!(player = %active.id, "doubles, roll again");
            return;
        }

        let player = active.id;
        let next_player = self.players.advance_turn();
        self.turn.next_turn();
        self.events.push(GameEvent::TurnEnded { player, next_player });
        self.begin_turn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::turn::{DecisionKind, TaxChoice};

    fn session(rolls: &[(u8, u8)]) -> GameSession {
        GameSession::builder()
            .with_dice(ScriptedDice::new(rolls.iter().copied()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_commands_before_start() {
        let mut session = session(&[]);
        assert_eq!(session.phase(), TurnPhase::NotStarted);
        assert_eq!(session.submit_roll(), Err(EngineError::GameNotStarted));
        assert_eq!(session.active_player(), None);
        assert_eq!(
            session.mortgage(PlayerId(0), CellId::new(1)),
            Err(EngineError::GameNotStarted)
        );
    }

    #[test]
    fn test_start_game_validates_count() {
        let mut session = session(&[]);
        assert_eq!(session.start_game(5), Err(EngineError::InvalidPlayerCount(5)));
        assert_eq!(session.phase(), TurnPhase::NotStarted);

        session.start_game(3).unwrap();
        assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(session.active_player(), Some(PlayerId(0)));
        assert_eq!(
            session.take_events(),
            vec![GameEvent::GameStarted { players: 3, seed: 42 }]
        );
    }

    #[test]
    fn test_decision_without_pending() {
        let mut session = session(&[]);
        session.start_game(2).unwrap();
        let err = session
            .resolve_decision(Decision::Tax(TaxChoice::Fixed))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDecision { submitted: DecisionKind::Tax }
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = session(&[(1, 2)]);
        session.start_game(2).unwrap();
        session.submit_roll().unwrap();

        session.reset();
        assert_eq!(session.phase(), TurnPhase::NotStarted);
        assert!(session.events().is_empty());
        assert!(session.players().is_empty());
        assert_eq!(session.deck(DeckKind::Chance).remaining(), 16);
    }

    #[test]
    fn test_management_requires_active_player() {
        let mut session = session(&[]);
        session.start_game(2).unwrap();
        assert_eq!(
            session.build(PlayerId(1), CellId::new(1)),
            Err(EngineError::NotActivePlayer(PlayerId(1)))
        );
        assert_eq!(
            session.build(PlayerId(0), CellId::new(1)),
            Err(EngineError::NotOwned(CellId::new(1)))
        );
    }

    #[test]
    fn test_restart_replays_seeded_dice() {
        let mut session = GameSession::new(EngineConfig::default().with_seed(7)).unwrap();
        session.start_game(2).unwrap();
        let first = session.submit_roll().unwrap();

        session.start_game(2).unwrap();
        assert_eq!(session.submit_roll().unwrap(), first);
    }
}
