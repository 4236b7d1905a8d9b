//! Investing Approach
//!
//! General strategy advice by risk tolerance and horizon.

use crate::model::{RiskTolerance, TimeHorizon};

/// Strategy lines, diversification always first
pub fn investing_strategies(risk: RiskTolerance, horizon: TimeHorizon) -> Vec<&'static str> {
    let mut recs = vec!["Diversify across different asset classes to manage risk"];

    match risk {
        RiskTolerance::Conservative => {
            recs.push("Focus on index funds and ETFs for broad market exposure with low fees");
            recs.push("Consider dollar-cost averaging to reduce market timing risk");
        }
        RiskTolerance::Moderate => {
            recs.push("Mix of index funds and actively managed funds with strong track records");
            recs.push("Consider a core-satellite approach (core in index funds, satellite in select active funds)");
        }
        RiskTolerance::Aggressive => {
            recs.push("Can allocate small portion (10-20%) to higher-risk opportunities");
            recs.push("Still maintain diversified core portfolio");
        }
    }

    if horizon.is_long_term() {
        recs.push("With long time horizon, you can weather volatility - stay invested through downturns");
    }

    recs
}
