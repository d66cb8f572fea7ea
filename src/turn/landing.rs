//! Movement and landing resolution.

use tracing::{debug, info};

use crate::board::{CellId, CellKind, TaxKind};
use crate::cards::DeckKind;
use crate::core::{DiceRoll, PlayerId};
use crate::effects::{CardOutcome, EffectContext, SpecialRent};
use crate::events::{GameEvent, JailReason};
use crate::ledger::BuildingKind;

use super::decision::{BuildChoice, PendingDecision, PurchaseChoice, TaxChoice};
use super::phase::{RentClaim, TurnPhase};
use super::session::GameSession;

/// What happened after a card was applied.
enum CardStep {
    Done,
    Relocated(Option<SpecialRent>),
}

impl GameSession {
    pub(super) fn roll_dice(&mut self) -> DiceRoll {
        let roll = self.dice.roll();
        let player = self.players.active_id();
        self.turn.last_roll = Some(roll);

        debug!(player = %player, die1 = roll.die1, die2 = roll.die2, "dice rolled");
        self.events.push(GameEvent::DiceRolled {
            player,
            die1: roll.die1,
            die2: roll.die2,
            is_double: roll.is_double(),
        });
        roll
    }

    /// A normal roll: doubles bookkeeping, move, land, settle.
    pub(super) fn roll_and_move(&mut self) -> DiceRoll {
        let roll = self.roll_dice();
        let player = self.players.active_id();

        if roll.is_double() {
            self.turn.consecutive_doubles += 1;
            if self.turn.consecutive_doubles >= self.config.max_consecutive_doubles {
                self.send_to_jail(player, JailReason::ConsecutiveDoubles);
                self.finish_turn();
                return roll;
            }
        } else {
            self.turn.consecutive_doubles = 0;
        }

        self.turn.extra_roll = roll.is_double();
        self.advance(roll.total());
        self.resolve_landing(None);
        self.settle();
        roll
    }

    /// Move the active player forward, paying salary once if Go is reached.
    pub(super) fn advance(&mut self, steps: u8) {
        self.phase = TurnPhase::Moving;
        let player = self.players.active_player_mut();
        let from = player.position;
        let to = from.forward(steps);
        let passed_go = from.passes_go(steps);
        player.position = to;
        let id = player.id;

        debug!(player = %id, from = from.0, to = to.0, passed_go, "moved");
        self.events.push(GameEvent::PlayerMoved { player: id, from, to, passed_go });

        if passed_go {
            self.pay_salary(id);
            if to == CellId::GO && self.config.bonus_for_landing_on_go {
                self.pay_salary(id);
            }
        }
    }

    fn pay_salary(&mut self, player: PlayerId) {
        let amount = self.config.go_bonus;
        self.players.get_mut(player).credit(amount);
        self.events.push(GameEvent::SalaryCollected { player, amount });
    }

    pub(super) fn send_to_jail(&mut self, player: PlayerId, reason: JailReason) {
        self.players.get_mut(player).send_to_jail();
        self.turn.extra_roll = false;
        self.turn.consecutive_doubles = 0;

        info!(player = %player, ?reason, "sent to jail");
        self.events.push(GameEvent::PlayerJailed { player, reason });
    }

    /// Debit a payment to the bank. Cash may go negative.
    pub(super) fn charge_bank(&mut self, player: PlayerId, amount: i64) {
        self.players.get_mut(player).debit(amount);
        self.turn.creditor = None;
    }

    fn decline(&mut self, player: PlayerId, reason: &str) {
        debug!(player = %player, reason, "action declined");
        self.events.push(GameEvent::ActionDeclined {
            player,
            reason: reason.to_string(),
        });
    }

    /// Apply the effect of the cell the active player stands on.
    ///
    /// Card relocations loop back here for the new cell without a new roll.
    pub(super) fn resolve_landing(&mut self, mut special: Option<SpecialRent>) {
        loop {
            self.phase = TurnPhase::ResolvingLanding;
            let player = self.players.active_id();
            let cell = self.players.get(player).position;
            self.events.push(GameEvent::LandedOn { player, cell });

            let kind = self.board.cell_at(cell).kind;
            let step = match kind {
                CellKind::Property | CellKind::Railroad | CellKind::Utility => {
                    self.land_on_ownable(player, cell, special);
                    CardStep::Done
                }
                CellKind::Chance => self.draw_card(player, DeckKind::Chance),
                CellKind::CommunityChest => self.draw_card(player, DeckKind::CommunityChest),
                CellKind::Tax => {
                    self.land_on_tax(player, cell);
                    CardStep::Done
                }
                CellKind::GoToJail => {
                    self.send_to_jail(player, JailReason::GoToJailCell);
                    CardStep::Done
                }
                CellKind::Go | CellKind::Jail | CellKind::FreeParking => CardStep::Done,
            };

            match step {
                CardStep::Done => return,
                CardStep::Relocated(next) => special = next,
            }
        }
    }

    fn land_on_ownable(&mut self, player: PlayerId, cell: CellId, special: Option<SpecialRent>) {
        match self.ledger.owner_of(cell) {
            None => {
                if self.ledger.is_purchasable(cell) {
                    let price = self.board.cell_at(cell).face_value();
                    self.request(PendingDecision::Purchase { player, cell, price });
                }
            }
            Some(owner) if owner == player => {
                if let Ok((kind, cost)) = self.ledger.next_building(cell, player) {
                    self.request(PendingDecision::Build { player, cell, kind, cost });
                }
            }
            Some(owner) => {
                let dice_total = self.turn.last_roll.map(DiceRoll::total);
                let amount = self.ledger.current_rent_with(cell, player, dice_total, special);
                if amount == 0 {
                    debug!(player = %player, cell = cell.0, "no rent due");
                    return;
                }

                // The payer is charged in full; the owner only gets what the
                // payer had, and the shortfall is owed until settled.
                let paid = amount.min(self.players.get(player).cash.max(0));
                self.players.get_mut(player).debit(amount);
                self.turn.creditor = Some(RentClaim {
                    owner,
                    cell,
                    outstanding: amount - paid,
                });
                self.pay_rent(player, owner, cell, paid);
            }
        }
    }

    /// Credit `owner` with rent already debited from `payer`.
    pub(super) fn pay_rent(&mut self, payer: PlayerId, owner: PlayerId, cell: CellId, amount: i64) {
        if amount <= 0 {
            return;
        }
        self.players.get_mut(owner).credit(amount);

        info!(payer = %payer, owner = %owner, cell = cell.0, amount, "rent paid");
        self.events.push(GameEvent::RentPaid {
            payer,
            owner,
            amount,
            cell,
        });
    }

    fn land_on_tax(&mut self, player: PlayerId, cell: CellId) {
        let (fixed, kind) = {
            let tax = self.board.cell_at(cell);
            (tax.face_value(), tax.tax)
        };

        match kind {
            Some(TaxKind::Income) => {
                let worth = self.net_worth(player).max(0);
                let percentage = (worth * self.config.income_tax_percent).div_euclid(100);
                self.request(PendingDecision::Tax {
                    player,
                    cell,
                    fixed,
                    percentage,
                });
            }
            _ => self.pay_tax(player, cell, fixed),
        }
    }

    fn pay_tax(&mut self, player: PlayerId, cell: CellId, amount: i64) {
        self.charge_bank(player, amount);
        debug!(player = %player, cell = cell.0, amount, "tax paid");
        self.events.push(GameEvent::TaxPaid { player, cell, amount });
    }

    fn draw_card(&mut self, player: PlayerId, kind: DeckKind) -> CardStep {
        let card = self.deck_mut(kind).draw();
        debug!(player = %player, card = %card, "card drawn");
        self.events.push(GameEvent::CardDrawn {
            player,
            deck: kind,
            card: card.clone(),
        });

        let outcome = {
            let ctx = EffectContext {
                board: &self.board,
                ledger: &self.ledger,
                players: &self.players,
            };
            self.executor.execute(&card, player, &ctx)
        };

        self.apply_cash(player, &outcome);
        if outcome.retained {
            self.players.get_mut(player).retain_card(card);
        } else {
            self.deck_mut(kind).discard(card);
        }
        self.events.push(GameEvent::CardResolved {
            player,
            outcome: outcome.clone(),
        });

        if outcome.jailed {
            self.send_to_jail(player, JailReason::Card);
            return CardStep::Done;
        }

        match outcome.new_position {
            Some(to) => {
                let mover = self.players.get_mut(player);
                let from = mover.position;
                mover.position = to;
                self.events.push(GameEvent::PlayerMoved {
                    player,
                    from,
                    to,
                    passed_go: outcome.passed_go,
                });
                if outcome.passed_go {
                    self.events.push(GameEvent::SalaryCollected {
                        player,
                        amount: self.config.go_bonus,
                    });
                }
                CardStep::Relocated(outcome.special_rent)
            }
            None => CardStep::Done,
        }
    }

    /// Move the money a card outcome describes.
    fn apply_cash(&mut self, player: PlayerId, outcome: &CardOutcome) {
        self.players.get_mut(player).credit(outcome.cash_delta);
        for transfer in &outcome.transfers {
            self.players.get_mut(transfer.counterparty).debit(transfer.amount);
        }
        if outcome.cash_delta < 0 {
            self.turn.creditor = None;
        }
    }

    // === Decisions raised by landing ===

    pub(super) fn decide_purchase(
        &mut self,
        player: PlayerId,
        cell: CellId,
        price: i64,
        choice: PurchaseChoice,
    ) -> crate::core::Result<()> {
        match choice {
            PurchaseChoice::Buy if self.players.get(player).cash < price => {
                self.decline(player, "insufficient funds, purchase skipped");
            }
            PurchaseChoice::Buy => {
                let cost = self.ledger.purchase(cell, player)?;
                let buyer = self.players.get_mut(player);
                buyer.debit(cost);
                buyer.add_property(cell);

                info!(player = %player, cell = cell.0, cost, "property purchased");
                self.events.push(GameEvent::PropertyPurchased { player, cell, cost });
            }
            PurchaseChoice::Skip => {
                debug!(player = %player, cell = cell.0, "purchase skipped");
            }
        }
        self.pending = None;
        Ok(())
    }

    pub(super) fn decide_build(
        &mut self,
        player: PlayerId,
        cell: CellId,
        choice: BuildChoice,
    ) -> crate::core::Result<()> {
        if choice == BuildChoice::Build {
            let (_, cost) = self.ledger.next_building(cell, player)?;
            if self.players.get(player).cash < cost {
                self.decline(player, "insufficient funds, building skipped");
            } else {
                let (kind, cost) = self.ledger.build(cell, player)?;
                self.players.get_mut(player).debit(cost);
                if kind == BuildingKind::Hotel {
                    info!(player = %player, cell = cell.0, "hotel built");
                }
                self.events.push(GameEvent::BuildingBuilt { player, cell, kind, cost });
            }
        }
        self.pending = None;
        Ok(())
    }

    pub(super) fn decide_tax(
        &mut self,
        player: PlayerId,
        cell: CellId,
        fixed: i64,
        percentage: i64,
        choice: TaxChoice,
    ) {
        let amount = match choice {
            TaxChoice::Fixed => fixed,
            TaxChoice::Percentage => percentage,
        };
        self.pay_tax(player, cell, amount);
        self.pending = None;
    }
}
