//! Builder for `GameSession`.

use crate::board::BoardCatalog;
use crate::cards::{Deck, DeckKind};
use crate::core::{Dice, DiceSource, EngineConfig, Result};
use crate::effects::CardEffectExecutor;
use crate::events::EventLog;
use crate::ledger::PropertyLedger;
use crate::players::PlayerRegistry;

use super::phase::{TurnPhase, TurnState};
use super::session::GameSession;

/// Assembles a session, letting tests swap in scripted dice or stacked decks.
///
/// ```
/// use monopoly_engine::core::ScriptedDice;
/// use monopoly_engine::turn::GameSession;
///
/// let mut session = GameSession::builder()
///     .with_seed(7)
///     .with_dice(ScriptedDice::new([(1, 2)]))
///     .build()
///     .unwrap();
/// session.start_game(2).unwrap();
/// assert_eq!(session.submit_roll().unwrap().total(), 3);
/// ```
#[derive(Default)]
pub struct GameSessionBuilder {
    config: EngineConfig,
    dice: Option<Box<dyn DiceSource>>,
    chance: Option<Deck>,
    community_chest: Option<Deck>,
}

impl GameSessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace the fair dice.
    pub fn with_dice(mut self, dice: impl DiceSource + 'static) -> Self {
        self.dice = Some(Box::new(dice));
        self
    }

    /// Replace the standard deck of the same kind.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        match deck.kind() {
            DeckKind::Chance => self.chance = Some(deck),
            DeckKind::CommunityChest => self.community_chest = Some(deck),
        }
        self
    }

    /// Validate the configuration and assemble the session.
    pub fn build(self) -> Result<GameSession> {
        self.config.validate()?;
        let seed = self.config.seed;
        let board = BoardCatalog::standard();

        Ok(GameSession {
            ledger: PropertyLedger::new(&board),
            board,
            players: PlayerRegistry::empty(),
            chance: self
                .chance
                .unwrap_or_else(|| Deck::standard(DeckKind::Chance, seed)),
            community_chest: self
                .community_chest
                .unwrap_or_else(|| Deck::standard(DeckKind::CommunityChest, seed)),
            dice: self.dice.unwrap_or_else(|| Box::new(Dice::from_seed(seed))),
            executor: CardEffectExecutor::new(&self.config),
            events: EventLog::new(),
            phase: TurnPhase::NotStarted,
            pending: None,
            turn: TurnState::default(),
            config: self.config,
        })
    }
}
