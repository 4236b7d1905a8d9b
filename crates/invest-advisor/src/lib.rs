//! # invest-advisor
//!
//! Rule-based investment guidance from a short financial questionnaire.
//!
//! ## Flow
//!
//! ```text
//! Profile ──▶ Health check ──┬──────────────────────────────▶ Report
//!             (red flags)    │ gate open                      ▲
//!                            ▼                                │
//!              Allocation → Accounts → Strategy → Goal tips ──┘
//! ```
//!
//! The gate opens when there are no red flags, or when the only flag is a
//! missing emergency fund. Any other flag (high debt-to-income) limits the
//! report to the health check.
//!
//! ## Example: Moderate, long-term, age 45
//!
//! ```text
//! Suggested Asset Allocation: 60% stocks, 30% bonds, 10% alternatives (REITs, commodities)
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod model;
pub mod questionnaire;
pub mod strategy;
pub mod svckit;

pub use advisor::{Advisor, Report};
pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use model::{
    AssetAllocation, Goal, Goals, Profile, Recommendation, RedFlag, RiskTolerance, Section, TimeHorizon,
};
pub use strategy::AllocationRule;
pub use svckit::HealthCheck;

/// Closing note printed after every report
pub const DISCLAIMER: &str = "Remember: These are general recommendations. \
Consider consulting with a financial advisor for personalized advice.";
