//! Jail sub-protocol: bail, card, or roll for doubles.

use tracing::{debug, info};

use crate::core::{EngineError, PlayerId, Result};
use crate::events::{GameEvent, ReleaseReason};

use super::decision::JailChoice;
use super::session::GameSession;

impl GameSession {
    /// Answer a jail decision. Bail and card releases roll and move at once.
    pub(super) fn decide_jail(&mut self, player: PlayerId, choice: JailChoice) -> Result<()> {
        match choice {
            JailChoice::PayBail => {
                let bail = self.config.bail;
                self.ensure_funds(player, bail)?;
                self.charge_bank(player, bail);
                self.release(player, ReleaseReason::PaidBail, bail);
                self.roll_and_move();
            }

            JailChoice::UseCard => {
                let card = self
                    .players
                    .get_mut(player)
                    .take_jail_card()
                    .ok_or(EngineError::NoCardAvailable)?;
                self.deck_mut(card.deck).discard(card);
                self.release(player, ReleaseReason::UsedCard, 0);
                self.roll_and_move();
            }

            JailChoice::RollForDoubles => {
                self.pending = None;
                self.roll_for_doubles(player);
            }
        }
        Ok(())
    }

    fn roll_for_doubles(&mut self, player: PlayerId) {
        let roll = self.roll_dice();

        if roll.is_double() {
            self.release(player, ReleaseReason::RolledDoubles, 0);
            self.turn.consecutive_doubles = 1;
            self.turn.extra_roll = true;
            self.advance(roll.total());
            self.resolve_landing(None);
            self.settle();
            return;
        }

        let attempts = {
            let prisoner = self.players.get_mut(player);
            prisoner.jail_turns += 1;
            prisoner.jail_turns
        };

        if attempts >= self.config.max_jail_turns {
            // Charged even if it leaves the player in debt.
            let bail = self.config.bail;
            self.charge_bank(player, bail);
            self.release(player, ReleaseReason::ForcedBail, bail);
            self.advance(roll.total());
            self.resolve_landing(None);
            self.settle();
        } else {
            debug!(player = %player, attempts, "no doubles, stays in jail");
            self.finish_turn();
        }
    }

    fn release(&mut self, player: PlayerId, reason: ReleaseReason, fee: i64) {
        self.pending = None;
        self.players.get_mut(player).release();

        info!(player = %player, ?reason, fee, "released from jail");
        self.events.push(GameEvent::PlayerReleased { player, reason, fee });
    }
}
