//! Driving a session to the end with bots.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{EngineError, PlayerId, Result};
use crate::turn::{
    BuildChoice, Decision, FundsChoice, GameSession, JailChoice, PendingDecision, PurchaseChoice,
    TaxChoice, TurnPhase,
};

use super::bots::DecisionPolicy;

/// How a headless game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Last player standing, `None` if the turn limit came first.
    pub winner: Option<PlayerId>,
    pub turns: u32,
    /// Every player with final net worth, richest first. Bankrupt players are worth 0.
    pub standings: Vec<(PlayerId, i64)>,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }

    /// Winner, or the richest player when the turn limit ended the game.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        self.winner.or_else(|| self.standings.first().map(|&(p, _)| p))
    }
}

/// Plays a started session with one policy for every seat.
#[derive(Clone, Debug)]
pub struct Autoplay {
    max_turns: u32,
}

impl Autoplay {
    #[must_use]
    pub fn new(max_turns: u32) -> Self {
        Self { max_turns }
    }

    /// Roll and decide until someone wins or `max_turns` turns have passed.
    pub fn run(&self, session: &mut GameSession, policy: &mut impl DecisionPolicy) -> Result<GameResult> {
        while !session.is_over() && session.turn_number() < self.max_turns {
            match session.phase() {
                TurnPhase::AwaitingRoll => {
                    session.submit_roll()?;
                }
                TurnPhase::AwaitingDecision => {
                    let Some(pending) = session.pending_decision().cloned() else {
                        return Err(EngineError::NotAwaitingRoll);
                    };
                    if let PendingDecision::RaiseFunds { player, .. } = &pending {
                        Self::raise_funds(session, *player)?;
                    }
                    let decision = policy.decide(session, &pending);
                    match session.resolve_decision(decision) {
                        Ok(()) => {}
                        Err(EngineError::InsufficientFunds { .. } | EngineError::NoCardAvailable) => {
                            debug!(player = %pending.player(), ?decision, "choice refused, falling back");
                            session.resolve_decision(fallback(&pending))?;
                        }
                        Err(err) => return Err(err),
                    }
                }
                TurnPhase::NotStarted => return Err(EngineError::GameNotStarted),
                _ => return Err(EngineError::NotAwaitingRoll),
            }
        }

        let result = Self::result(session);
        info!(winner = ?result.winner, turns = result.turns, "autoplay finished");
        Ok(result)
    }

    /// Mortgage cells in board order until `player` is out of debt.
    fn raise_funds(session: &mut GameSession, player: PlayerId) -> Result<()> {
        for cell in session.ledger().mortgageable_cells(player) {
            if session.player(player).cash >= 0 {
                break;
            }
            session.mortgage(player, cell)?;
        }
        Ok(())
    }

    fn result(session: &GameSession) -> GameResult {
        let mut standings: Vec<(PlayerId, i64)> = session
            .players()
            .iter()
            .map(|p| (p.id, if p.is_bankrupt() { 0 } else { session.net_worth(p.id) }))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        GameResult {
            winner: session.winner(),
            turns: session.turn_number(),
            standings,
        }
    }
}

/// A choice that always succeeds for `pending`.
fn fallback(pending: &PendingDecision) -> Decision {
    match pending {
        PendingDecision::Purchase { .. } => Decision::Purchase(PurchaseChoice::Skip),
        PendingDecision::Build { .. } => Decision::Build(BuildChoice::Skip),
        PendingDecision::Tax { .. } => Decision::Tax(TaxChoice::Fixed),
        PendingDecision::Jail { .. } => Decision::Jail(JailChoice::RollForDoubles),
        PendingDecision::RaiseFunds { .. } => Decision::RaiseFunds(FundsChoice::Concede),
    }
}
