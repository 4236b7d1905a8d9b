//! Financial Health Checker
//!
//! Flags weaknesses in a profile's foundation before any investing advice.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::model::{Goal, Profile, Recommendation, RedFlag, Section};

pub const BUILD_EMERGENCY_FUND: &str = "Build an emergency fund (3-6 months of expenses) before investing";
pub const PAY_DOWN_DEBT: &str = "Consider paying down high-interest debt before aggressive investing";
pub const OPEN_RETIREMENT_ACCOUNT: &str = "Open a retirement account (401k or IRA) for tax advantages";

/// Outcome of the health checks
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub recommendations: Vec<Recommendation>,
    pub red_flags: Vec<RedFlag>,
}

impl HealthCheck {
    pub fn allows_investing(&self) -> bool {
        investing_allowed(&self.red_flags)
    }
}

/// Investing advice is shown when nothing is flagged, or the only
/// flag is the missing emergency fund
pub fn investing_allowed(red_flags: &[RedFlag]) -> bool {
    matches!(red_flags, [] | [RedFlag::NoEmergencyFund])
}

/// Runs the health rules in order; each rule is independent
pub struct HealthChecker<'a> {
    config: &'a AdvisorConfig,
}

impl<'a> HealthChecker<'a> {
    pub fn new(config: &'a AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, profile: &Profile) -> HealthCheck {
        let mut result = HealthCheck::default();

        if !profile.has_emergency_fund {
            result.recommendations.push(Recommendation::new(Section::Health, BUILD_EMERGENCY_FUND));
            result.red_flags.push(RedFlag::NoEmergencyFund);
        }

        let debt_to_income = profile.debt_to_income();
        if debt_to_income > self.config.debt_to_income_limit {
            let percent = whole_percent(debt_to_income);
            debug!(%debt_to_income, %percent, "debt-to-income above limit");
            result.recommendations.push(Recommendation::new(Section::Health, PAY_DOWN_DEBT));
            result.red_flags.push(RedFlag::HighDebtToIncome { percent });
        }

        if !profile.has_retirement_account && profile.has_goal(Goal::Retirement) {
            result.recommendations.push(Recommendation::new(Section::Health, OPEN_RETIREMENT_ACCOUNT));
        }

        result
    }
}

/// Ratio as an integer percentage, ties to even; saturates at `Decimal::MAX`
fn whole_percent(ratio: Decimal) -> Decimal {
    ratio.checked_mul(dec!(100)).unwrap_or(Decimal::MAX).round_dp(0)
}
