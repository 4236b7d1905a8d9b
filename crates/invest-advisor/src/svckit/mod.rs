//! Service Kit - Advisor Rules
//!
//! Profile checks and goal-driven advice used by [`crate::Advisor`].

mod health_check;
mod accounts;
mod goal_planner;

pub use health_check::{investing_allowed, HealthCheck, HealthChecker};
pub use accounts::account_recommendations;
pub use goal_planner::goal_recommendations;
