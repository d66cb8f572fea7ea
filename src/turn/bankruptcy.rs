//! Debt at the end of a resolution: raising funds, or bankruptcy.

use tracing::{info, warn};

use crate::core::{EngineError, PlayerId, Result};
use crate::events::GameEvent;
use crate::players::PlayerStatus;

use super::decision::FundsChoice;
use super::phase::TurnPhase;
use super::session::GameSession;

impl GameSession {
    /// Answer a raise-funds decision.
    ///
    /// `Settle` needs cash back at zero or more; the decision stays pending
    /// otherwise. `Concede` declares bankruptcy with whatever was raised.
    pub(super) fn decide_funds(&mut self, player: PlayerId, choice: FundsChoice) -> Result<()> {
        match choice {
            FundsChoice::Settle => {
                let cash = self.players.get(player).cash;
                if cash < 0 {
                    return Err(EngineError::InsufficientFunds {
                        needed: 0,
                        available: cash,
                    });
                }
                self.pending = None;
                self.settle();
            }
            FundsChoice::Concede => {
                self.pending = None;
                self.declare_bankrupt(player);
                if !self.is_over() {
                    self.finish_turn();
                }
            }
        }
        Ok(())
    }

    /// Pay the owner the part of the last rent the payer could not cover at
    /// the time.
    pub(super) fn collect_outstanding_rent(&mut self, payer: PlayerId) {
        let Some(claim) = self.turn.creditor.as_mut() else { return };
        let amount = std::mem::take(&mut claim.outstanding);
        let (owner, cell) = (claim.owner, claim.cell);
        self.pay_rent(payer, owner, cell, amount);
    }

    /// Mark `player` bankrupt and hand over what they held.
    ///
    /// Properties go to the player owed the last rent, buildings removed and
    /// mortgages kept, or back to the bank when the bank was owed. The rent
    /// owner also gets whatever cash the debtor has left toward the unpaid
    /// rent. Retained cards return to their decks. Ends the game when one
    /// player is left.
    pub(super) fn declare_bankrupt(&mut self, player: PlayerId) {
        let claim = self
            .turn
            .creditor
            .take()
            .filter(|c| c.owner != player && !self.players.get(c.owner).is_bankrupt());
        let creditor = claim.map(|c| c.owner);

        let debtor = self.players.get_mut(player);
        let debt = -debtor.cash;
        debtor.status = PlayerStatus::Bankrupt;
        debtor.jail_turns = 0;
        let remaining = std::mem::take(&mut debtor.cash);
        let cells = debtor.clear_properties();
        let cards = debtor.drain_cards();

        if let Some(claim) = claim {
            // Cash on hand counts after the unpaid rent it was charged for.
            let recovered = (claim.outstanding + remaining).max(0);
            self.pay_rent(player, claim.owner, claim.cell, recovered);
        }
        for &cell in &cells {
            self.ledger.transfer(cell, creditor);
            if let Some(creditor) = creditor {
                self.players.get_mut(creditor).add_property(cell);
            }
        }
        for card in cards {
            self.deck_mut(card.deck).discard(card);
        }
        self.turn.extra_roll = false;

        warn!(player = %player, debt, ?creditor, properties = cells.len(), "player bankrupt");
        self.events.push(GameEvent::PlayerBankrupt { player, creditor });

        let solvent = self.players.solvent_players();
        if solvent.len() <= 1 {
            let winner = solvent.first().copied();
            self.pending = None;
            self.phase = TurnPhase::GameOver;
            info!(?winner, turns = self.turn.turn_number, "game over");
            self.events.push(GameEvent::GameOver { winner });
        }
    }
}
