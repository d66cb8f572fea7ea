//! Card effect execution.
//!
//! `CardEffectExecutor::execute` reads the table and returns a `CardOutcome`;
//! it mutates nothing. The session applies the outcome, so every cash
//! movement in a game still passes through the session.

use crate::board::{BoardCatalog, CellId, CellKind};
use crate::cards::{Card, CardEffect};
use crate::core::{EngineConfig, PlayerId};
use crate::ledger::{PropertyLedger, SpecialRent};
use crate::players::PlayerRegistry;

use super::outcome::{CardOutcome, Transfer};

/// Read-only view of the table a card is resolved against.
pub struct EffectContext<'a> {
    pub board: &'a BoardCatalog,
    pub ledger: &'a PropertyLedger,
    pub players: &'a PlayerRegistry,
}

/// Interprets cards against a drawing player.
#[derive(Clone, Debug)]
pub struct CardEffectExecutor {
    go_bonus: i64,
}

impl CardEffectExecutor {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            go_bonus: config.go_bonus,
        }
    }

    /// Resolve `card` for `actor`.
    pub fn execute(&self, card: &Card, actor: PlayerId, ctx: &EffectContext<'_>) -> CardOutcome {
        let player = ctx.players.get(actor);
        let from = player.position;

        let mut outcome = CardOutcome {
            deck: Some(card.deck),
            card: Some(card.id),
            ..CardOutcome::default()
        };

        match card.effect {
            CardEffect::MoveToPosition { target } => {
                self.relocate(&mut outcome, from, target, None);
                outcome.message = format!("advance to {}", ctx.board.cell_at(target).name);
            }

            CardEffect::MoveRelative { delta } => {
                let target = from.offset(delta as i32);
                outcome.new_position = Some(target);
                // Backward moves never pay the salary, even across Go.
                if delta > 0 && target < from {
                    self.pay_salary(&mut outcome);
                }
                outcome.message = if delta < 0 {
                    format!("go back {} spaces", -(delta as i32))
                } else {
                    format!("go forward {delta} spaces")
                };
            }

            CardEffect::CollectMoney { amount } => {
                outcome.cash_delta = amount;
                outcome.message = format!("collect ${amount}");
            }

            CardEffect::PayMoney { amount } => {
                outcome.cash_delta = -amount;
                outcome.message = format!("pay ${amount}");
            }

            CardEffect::CollectFromEachPlayer { amount } => {
                for other in ctx.players.players_except(actor) {
                    let paid = amount.min(ctx.players.get(other).cash.max(0));
                    outcome.transfers.push(Transfer { counterparty: other, amount: paid });
                    outcome.cash_delta += paid;
                }
                outcome.message = format!("collect ${amount} from every player");
            }

            CardEffect::PayEachPlayer { amount } => {
                let mut available = player.cash.max(0);
                for other in ctx.players.players_except(actor) {
                    let paid = amount.min(available);
                    available -= paid;
                    outcome.transfers.push(Transfer { counterparty: other, amount: -paid });
                    outcome.cash_delta -= paid;
                }
                outcome.message = format!("pay every player ${amount}");
            }

            CardEffect::PayPerBuilding { house_rate, hotel_rate } => {
                let (houses, hotels) = ctx.ledger.buildings_of(actor);
                let bill = houses as i64 * house_rate + hotels as i64 * hotel_rate;
                outcome.cash_delta = -bill;
                outcome.message = format!("repairs: {houses} houses, {hotels} hotels, pay ${bill}");
            }

            CardEffect::GoToJail => {
                outcome.new_position = Some(CellId::JAIL);
                outcome.jailed = true;
                outcome.message = "go directly to jail".to_string();
            }

            CardEffect::GetOutOfJailFree => {
                outcome.retained = true;
                outcome.message = "keep this card until needed".to_string();
            }

            CardEffect::MoveToNearestRailroad => {
                let target = nearest(ctx.board, from, CellKind::Railroad);
                self.relocate(&mut outcome, from, target, Some(SpecialRent::DoubleRailroad));
                outcome.message = format!("advance to {}", ctx.board.cell_at(target).name);
            }

            CardEffect::MoveToNearestUtility => {
                let target = nearest(ctx.board, from, CellKind::Utility);
                self.relocate(&mut outcome, from, target, Some(SpecialRent::DiceUtility));
                outcome.message = format!("advance to {}", ctx.board.cell_at(target).name);
            }
        }

        outcome
    }

    /// Forward move to `target`; salary if it wraps or the target is Go.
    fn relocate(&self, outcome: &mut CardOutcome, from: CellId, target: CellId, special: Option<SpecialRent>) {
        outcome.new_position = Some(target);
        outcome.special_rent = special;
        if target < from || target == CellId::GO {
            self.pay_salary(outcome);
        }
    }

    fn pay_salary(&self, outcome: &mut CardOutcome) {
        outcome.passed_go = true;
        outcome.cash_delta += self.go_bonus;
    }
}

/// Closest cell of `kind` strictly ahead of `from`.
fn nearest(board: &BoardCatalog, from: CellId, kind: CellKind) -> CellId {
    board
        .positions_of(kind)
        .into_iter()
        .min_by_key(|&cell| match from.distance_to(cell) {
            0 => u8::MAX,
            d => d,
        })
        .unwrap_or(from)
}
