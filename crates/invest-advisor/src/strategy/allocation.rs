//! Asset Allocation Rule
//!
//! Splits a portfolio between stocks, bonds and alternatives.

use crate::model::{AssetAllocation, RiskTolerance, TimeHorizon};

/// Fixed share kept in alternatives (REITs, commodities)
pub const ALTERNATIVES_PERCENT: i32 = 10;

/// Allocation rule for a risk tolerance, horizon and age
pub struct AllocationRule {
    risk: RiskTolerance,
    horizon: TimeHorizon,
    age: u32,
}

impl AllocationRule {
    pub fn new(risk: RiskTolerance, horizon: TimeHorizon, age: u32) -> Self {
        Self { risk, horizon, age }
    }

    pub fn allocate(&self) -> AssetAllocation {
        let stocks = self.base_stocks() - self.age_adjustment();

        AssetAllocation {
            stocks,
            bonds: 100 - stocks - ALTERNATIVES_PERCENT,
            alternatives: ALTERNATIVES_PERCENT,
        }
    }

    /// Stock percentage before the age adjustment
    fn base_stocks(&self) -> i32 {
        let long = self.horizon.is_long_term();
        match self.risk {
            RiskTolerance::Conservative => if long { 40 } else { 30 },
            RiskTolerance::Moderate => if long { 60 } else { 50 },
            RiskTolerance::Aggressive => if long { 80 } else { 70 },
        }
    }

    /// Points moved out of stocks as retirement nears; brackets do not stack
    fn age_adjustment(&self) -> i32 {
        match self.age {
            61.. => 20,
            51..=60 => 10,
            _ => 0,
        }
    }
}
