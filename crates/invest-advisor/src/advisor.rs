//! Recommendation Evaluator
//!
//! Runs the health check and, when it passes the gate, the allocation,
//! account, strategy and goal rules, collecting everything into a [`Report`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AdvisorConfig;
use crate::model::{Profile, Recommendation, RedFlag, Section};
use crate::strategy::{investing_strategies, AllocationRule};
use crate::svckit::{
    account_recommendations, goal_recommendations, investing_allowed, HealthCheck, HealthChecker,
};

/// Ordered advice and the health flags behind it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub recommendations: Vec<Recommendation>,
    pub red_flags: Vec<RedFlag>,
}

impl Report {
    /// Display strings in order
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.recommendations.iter().map(|r| r.text.as_str())
    }

    pub fn section(&self, section: Section) -> impl Iterator<Item = &Recommendation> + '_ {
        self.recommendations.iter().filter(move |r| r.section == section)
    }

    /// True when health flags suppressed all investing advice
    pub fn is_gated(&self) -> bool {
        !investing_allowed(&self.red_flags)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Stateless evaluator; the same profile always yields the same report
#[derive(Clone, Debug, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn analyze_health(&self, profile: &Profile) -> HealthCheck {
        HealthChecker::new(&self.config).check(profile)
    }

    pub fn evaluate(&self, profile: &Profile) -> Report {
        let health = self.analyze_health(profile);
        let allows_investing = health.allows_investing();

        let HealthCheck { mut recommendations, red_flags } = health;

        if allows_investing {
            let allocation = AllocationRule::new(profile.risk_tolerance, profile.time_horizon, profile.age).allocate();
            debug!(%allocation, "asset allocation");
            recommendations.push(Recommendation::heading(
                Section::Allocation,
                format!("Suggested Asset Allocation: {allocation}"),
            ));

            let accounts = account_recommendations(
                &profile.goals,
                profile.annual_income,
                profile.time_horizon,
                self.config.employer_match_income,
            );
            recommendations.extend(accounts.into_iter().map(|text| Recommendation::new(Section::Account, text)));

            let strategies = investing_strategies(profile.risk_tolerance, profile.time_horizon);
            recommendations.extend(strategies.into_iter().map(|text| Recommendation::new(Section::Strategy, text)));

            recommendations.extend(goal_recommendations(&profile.goals));
        } else {
            info!(flags = red_flags.len(), "red flags suppress investment advice");
        }

        debug!(count = recommendations.len(), "evaluation complete");
        Report { recommendations, red_flags }
    }
}
