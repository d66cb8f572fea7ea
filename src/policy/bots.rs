//! Decision policies for computer-controlled players.

use crate::core::GameRng;
use crate::turn::{
    BuildChoice, Decision, FundsChoice, GameSession, JailChoice, PendingDecision, PurchaseChoice,
    TaxChoice,
};

/// Answers pending decisions on behalf of a player.
pub trait DecisionPolicy: Send {
    fn decide(&mut self, session: &GameSession, decision: &PendingDecision) -> Decision;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn decide(&mut self, session: &GameSession, decision: &PendingDecision) -> Decision {
        (**self).decide(session, decision)
    }
}

/// Buys and builds whenever a cash reserve survives the spend.
///
/// Pays the cheaper tax, and leaves jail by bail if affordable, else by
/// card, else by rolling.
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    reserve: i64,
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self { reserve: 200 }
    }
}

impl GreedyPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cash to keep back after a purchase or build.
    pub fn with_reserve(mut self, reserve: i64) -> Self {
        self.reserve = reserve;
        self
    }
}

impl DecisionPolicy for GreedyPolicy {
    fn decide(&mut self, session: &GameSession, decision: &PendingDecision) -> Decision {
        let cash = session.player(decision.player()).cash;

        match *decision {
            PendingDecision::Purchase { price, .. } => Decision::Purchase(if cash - price >= self.reserve {
                PurchaseChoice::Buy
            } else {
                PurchaseChoice::Skip
            }),
            PendingDecision::Build { cost, .. } => Decision::Build(if cash - cost >= self.reserve {
                BuildChoice::Build
            } else {
                BuildChoice::Skip
            }),
            PendingDecision::Tax { fixed, percentage, .. } => Decision::Tax(if percentage < fixed {
                TaxChoice::Percentage
            } else {
                TaxChoice::Fixed
            }),
            PendingDecision::Jail { bail, has_card, .. } => Decision::Jail(if cash >= bail {
                JailChoice::PayBail
            } else if has_card {
                JailChoice::UseCard
            } else {
                JailChoice::RollForDoubles
            }),
            PendingDecision::RaiseFunds { .. } => settle_or_concede(cash),
        }
    }
}

/// Bots cannot mortgage from `decide`; the driver raises funds before asking.
fn settle_or_concede(cash: i64) -> Decision {
    Decision::RaiseFunds(if cash >= 0 {
        FundsChoice::Settle
    } else {
        FundsChoice::Concede
    })
}

/// Picks uniformly among the choices that can succeed.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("policy"),
        }
    }
}

impl DecisionPolicy for RandomPolicy {
    fn decide(&mut self, session: &GameSession, decision: &PendingDecision) -> Decision {
        let cash = session.player(decision.player()).cash;

        match *decision {
            PendingDecision::Purchase { .. } => Decision::Purchase(if self.rng.gen_bool(0.5) {
                PurchaseChoice::Buy
            } else {
                PurchaseChoice::Skip
            }),
            PendingDecision::Build { .. } => Decision::Build(if self.rng.gen_bool(0.5) {
                BuildChoice::Build
            } else {
                BuildChoice::Skip
            }),
            PendingDecision::Tax { .. } => Decision::Tax(if self.rng.gen_bool(0.5) {
                TaxChoice::Fixed
            } else {
                TaxChoice::Percentage
            }),
            PendingDecision::Jail { bail, has_card, .. } => {
                let mut choices = vec![JailChoice::RollForDoubles];
                if cash >= bail {
                    choices.push(JailChoice::PayBail);
                }
                if has_card {
                    choices.push(JailChoice::UseCard);
                }
                let choice = self
                    .rng
                    .choose(&choices)
                    .copied()
                    .unwrap_or(JailChoice::RollForDoubles);
                Decision::Jail(choice)
            }
            PendingDecision::RaiseFunds { .. } => settle_or_concede(cash),
        }
    }
}
