//! Account Recommendations
//!
//! Which account types suit the selected goals.

use rust_decimal::Decimal;

use crate::model::{Goal, Goals, TimeHorizon};

pub fn account_recommendations(
    goals: &Goals,
    annual_income: Decimal,
    horizon: TimeHorizon,
    match_income: Decimal,
) -> Vec<&'static str> {
    let mut recs = Vec::new();

    if goals.contains(Goal::Retirement) {
        if annual_income > match_income {
            recs.push("Maximize 401(k) contributions, especially if employer offers matching");
        }
        recs.push("Consider opening a Roth IRA for tax-free growth (if income qualifies)");
    }

    if goals.contains(Goal::BuyHome) && horizon == TimeHorizon::MediumTerm {
        recs.push("For medium-term home purchase, consider a high-yield savings account or short-term bonds");
    }

    if goals.contains(Goal::Education) {
        recs.push("For education savings, consider a 529 plan for tax advantages");
    }

    recs
}
