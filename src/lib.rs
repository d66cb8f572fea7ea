//! # monopoly-engine
//!
//! Rules engine for a Monopoly-style board game: turn sequencing, dice,
//! board traversal, property economics, Chance and Community Chest cards,
//! and jail.
//!
//! ## Design Principles
//!
//! 1. **Explicit session**: all game state lives in a `GameSession`; there
//!    are no globals, so many games can run in one process.
//!
//! 2. **Decisions, not callbacks**: the engine runs synchronously to the next
//!    point where a player must choose, then waits for `resolve_decision`.
//!
//! 3. **Events out**: every state change is recorded as a `GameEvent` for a
//!    presentation layer to render after the fact.
//!
//! 4. **Deterministic**: one seed drives the dice and both decks.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, dice, configuration, errors
//! - `board`: the 40 cells
//! - `cards`: card definitions, decks, standard card sets
//! - `ledger`: ownership, buildings, mortgages, rent
//! - `players`: players and turn rotation
//! - `effects`: card effect execution
//! - `events`: outbound events
//! - `turn`: the turn state machine (`GameSession`)
//! - `policy`: bots and headless autoplay
//!
//! ```
//! use monopoly_engine::{EngineConfig, GameSession, TurnPhase};
//!
//! let mut session = GameSession::new(EngineConfig::default().with_seed(1)).unwrap();
//! session.start_game(2).unwrap();
//! assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
//! ```

pub mod core;
pub mod board;
pub mod cards;
pub mod ledger;
pub mod players;
pub mod effects;
pub mod events;
pub mod turn;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    Dice, DiceRoll, DiceSource, ScriptedDice,
    EngineConfig, EngineError, Result,
};

pub use crate::board::{BoardCatalog, Cell, CellId, CellKind, ColorGroup, TaxKind, BOARD_SIZE};

pub use crate::cards::{Card, CardEffect, CardId, Deck, DeckKind};

pub use crate::ledger::{BuildingKind, OwnershipQuery, PropertyLedger, PropertyState, SpecialRent};

pub use crate::players::{Player, PlayerRegistry, PlayerStatus};

pub use crate::effects::{CardEffectExecutor, CardOutcome, EffectContext, Transfer};

pub use crate::events::{EventLog, GameEvent, JailReason, ReleaseReason};

pub use crate::turn::{
    BuildChoice, Decision, DecisionKind, FundsChoice, GameSession, GameSessionBuilder,
    JailChoice, PendingDecision, PurchaseChoice, TaxChoice, TurnPhase,
};

pub use crate::policy::{Autoplay, DecisionPolicy, GameResult, GreedyPolicy, RandomPolicy};
