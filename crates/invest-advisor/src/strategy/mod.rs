//! Investment Strategies
//!
//! Portfolio mix and investing-approach rules driven by risk and horizon.

mod allocation;
mod investing;

pub use allocation::{AllocationRule, ALTERNATIVES_PERCENT};
pub use investing::investing_strategies;
