//! Advisor Configuration
//!
//! Rule thresholds, read from the environment with sensible defaults.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

pub const ENV_DTI_LIMIT: &str = "ADVISOR_DTI_LIMIT";
pub const ENV_MATCH_INCOME: &str = "ADVISOR_MATCH_INCOME";

/// Thresholds used by the recommendation rules
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Debt-to-income ratio above which debt is flagged
    pub debt_to_income_limit: Decimal,

    /// Income (USD) above which maximizing employer-matched contributions is advised
    pub employer_match_income: Decimal,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            debt_to_income_limit: dec!(0.4),
            employer_match_income: dec!(60000),
        }
    }
}

impl AdvisorConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DTI_LIMIT) {
            config.debt_to_income_limit = parse_threshold(ENV_DTI_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MATCH_INCOME) {
            config.employer_match_income = parse_threshold(ENV_MATCH_INCOME, &raw)?;
        }

        Ok(config)
    }
}

fn parse_threshold(key: &str, raw: &str) -> Result<Decimal> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|e| AdvisorError::Config(format!("{key}={raw}: {e}")))?;
    if value < Decimal::ZERO {
        return Err(AdvisorError::Config(format!("{key} must not be negative, got {raw}")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AdvisorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.debt_to_income_limit, dec!(0.4));
        assert_eq!(config.employer_match_income, dec!(60000));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [(ENV_DTI_LIMIT, "0.35"), (ENV_MATCH_INCOME, " 75000 ")].into();
        let config = AdvisorConfig::from_lookup(|k| vars.get(k).map(ToString::to_string)).unwrap();
        assert_eq!(config.debt_to_income_limit, dec!(0.35));
        assert_eq!(config.employer_match_income, dec!(75000));
    }

    #[test]
    fn test_invalid_values() {
        let err = AdvisorConfig::from_lookup(|k| (k == ENV_DTI_LIMIT).then(|| "lots".to_string()));
        assert!(matches!(err, Err(AdvisorError::Config(_))));

        let err = AdvisorConfig::from_lookup(|k| (k == ENV_MATCH_INCOME).then(|| "-1".to_string()));
        assert!(matches!(err, Err(AdvisorError::Config(_))));
    }
}
