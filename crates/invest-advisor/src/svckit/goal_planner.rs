//! Goal Planner
//!
//! Extra tips grouped per goal, each group introduced by a header line.

use crate::model::{Goal, Goals, Recommendation, Section};

const RETIREMENT_TIPS: &[&str] = &[
    "Aim to save 15% of income annually",
    "Increase contributions by 1% each year until maxing out",
    "Consider target-date funds for hands-off approach",
];

const WEALTH_TIPS: &[&str] = &[
    "Reinvest dividends for compound growth",
    "Consider tax-efficient investments in taxable accounts",
];

const PASSIVE_INCOME_TIPS: &[&str] = &[
    "Look into dividend-paying stocks or funds",
    "Consider real estate investment trusts (REITs)",
];

fn goal_tips(goal: Goal) -> Option<(&'static str, &'static [&'static str])> {
    match goal {
        Goal::Retirement => Some(("For retirement:", RETIREMENT_TIPS)),
        Goal::WealthBuilding => Some(("For wealth building:", WEALTH_TIPS)),
        Goal::PassiveIncome => Some(("For passive income:", PASSIVE_INCOME_TIPS)),
        Goal::BuyHome | Goal::Education => None,
    }
}

/// Header plus bullet lines for every selected goal that has tips
pub fn goal_recommendations(goals: &Goals) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    for (header, tips) in goals.iter().filter_map(goal_tips) {
        recs.push(Recommendation::heading(Section::Goal, header));
        recs.extend(tips.iter().map(|tip| Recommendation::new(Section::Goal, format!("- {tip}"))));
    }

    recs
}
