//! Engine configuration.
//!
//! The board and card sets are fixed data; what varies between tables is
//! money and pacing: starting cash, the Go salary, bail, how long a player
//! sits in jail, and the Go-landing house rule.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Tunable rules of a game session.
///
/// Missing keys in a TOML document fall back to the defaults below.
///
/// ```
/// use monopoly_engine::core::EngineConfig;
///
/// let config = EngineConfig::from_toml_str("starting_cash = 2000\nseed = 7").unwrap();
/// assert_eq!(config.starting_cash, 2000);
/// assert_eq!(config.go_bonus, 200);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cash each player starts with.
    pub starting_cash: i64,

    /// Salary paid when a forward move passes or lands on Go.
    pub go_bonus: i64,

    /// Fee to leave jail, voluntarily or after the last failed roll.
    pub bail: i64,

    /// Failed doubles rolls before release is forced.
    pub max_jail_turns: u8,

    /// Doubles in a row that send the roller to jail.
    pub max_consecutive_doubles: u8,

    /// Percentage of net worth charged by the income-tax percentage option.
    pub income_tax_percent: i64,

    /// Pay a second Go salary when a dice move ends exactly on Go.
    pub bonus_for_landing_on_go: bool,

    /// Session seed; dice and both decks derive their streams from it.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_cash: 1500,
            go_bonus: 200,
            bail: 50,
            max_jail_turns: 3,
            max_consecutive_doubles: 3,
            income_tax_percent: 10,
            bonus_for_landing_on_go: false,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is playable.
    pub fn validate(&self) -> Result<()> {
        if self.starting_cash <= 0 {
            return Err(EngineError::Config("starting_cash must be positive".into()));
        }
        if self.go_bonus < 0 || self.bail < 0 {
            return Err(EngineError::Config("go_bonus and bail must not be negative".into()));
        }
        if self.max_jail_turns == 0 || self.max_consecutive_doubles == 0 {
            return Err(EngineError::Config(
                "max_jail_turns and max_consecutive_doubles must be at least 1".into(),
            ));
        }
        if !(0..=100).contains(&self.income_tax_percent) {
            return Err(EngineError::Config("income_tax_percent must be within 0..=100".into()));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Enable or disable the extra salary for ending a move on Go.
    pub fn with_landing_bonus(mut self, enabled: bool) -> Self {
        self.bonus_for_landing_on_go = enabled;
        self
    }
}
