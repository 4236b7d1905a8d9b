//! Domain Models
//!
//! Core data types for the investment questionnaire and its recommendations.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Willingness to accept investment volatility
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    /// Map a menu choice (1-3) to a tolerance
    pub fn from_choice(choice: u8) -> Result<Self> {
        match choice {
            1 => Ok(Self::Conservative),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Aggressive),
            other => Err(AdvisorError::InvalidChoice {
                field: "risk tolerance",
                value: other.to_string(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Menu text shown by the questionnaire
    pub fn describe(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative (low risk)",
            Self::Moderate => "Moderate (balanced risk/reward)",
            Self::Aggressive => "Aggressive (high risk for potential higher returns)",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expected duration until the invested funds are needed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    /// 1-3 years
    ShortTerm,
    /// 3-7 years
    MediumTerm,
    /// 7+ years
    LongTerm,
}

impl TimeHorizon {
    pub const ALL: [Self; 3] = [Self::ShortTerm, Self::MediumTerm, Self::LongTerm];

    /// Map a menu choice (1-3) to a horizon
    pub fn from_choice(choice: u8) -> Result<Self> {
        match choice {
            1 => Ok(Self::ShortTerm),
            2 => Ok(Self::MediumTerm),
            3 => Ok(Self::LongTerm),
            other => Err(AdvisorError::InvalidChoice {
                field: "time horizon",
                value: other.to_string(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-term",
            Self::MediumTerm => "Medium-term",
            Self::LongTerm => "Long-term",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-term (1-3 years)",
            Self::MediumTerm => "Medium-term (3-7 years)",
            Self::LongTerm => "Long-term (7+ years)",
        }
    }

    pub fn is_long_term(self) -> bool {
        self == Self::LongTerm
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A primary investment goal, numbered as on the questionnaire menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Goal {
    Retirement = 1,
    BuyHome = 2,
    Education = 3,
    WealthBuilding = 4,
    PassiveIncome = 5,
}

impl Goal {
    pub const ALL: [Self; 5] = [
        Self::Retirement,
        Self::BuyHome,
        Self::Education,
        Self::WealthBuilding,
        Self::PassiveIncome,
    ];

    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::Retirement),
            2 => Ok(Self::BuyHome),
            3 => Ok(Self::Education),
            4 => Ok(Self::WealthBuilding),
            5 => Ok(Self::PassiveIncome),
            other => Err(AdvisorError::InvalidGoal(other.to_string())),
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Retirement => "Retirement",
            Self::BuyHome => "Buy a home",
            Self::Education => "Education",
            Self::WealthBuilding => "Wealth building",
            Self::PassiveIncome => "Passive income",
        }
    }
}

impl TryFrom<u8> for Goal {
    type Error = AdvisorError;

    fn try_from(number: u8) -> Result<Self> {
        Self::from_number(number)
    }
}

impl From<Goal> for u8 {
    fn from(goal: Goal) -> Self {
        goal.number()
    }
}

/// Non-empty, de-duplicated set of goals, iterated in goal-number order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Goal>", into = "Vec<Goal>")]
pub struct Goals(BTreeSet<Goal>);

impl Goals {
    pub fn new(goals: impl IntoIterator<Item = Goal>) -> Result<Self> {
        let set: BTreeSet<Goal> = goals.into_iter().collect();
        if set.is_empty() {
            return Err(AdvisorError::NoGoals);
        }
        Ok(Self(set))
    }

    /// Parse a comma-separated list of goal numbers, e.g. "1,3,5"
    pub fn parse(input: &str) -> Result<Self> {
        let goals = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u8>()
                    .map_err(|_| AdvisorError::InvalidGoal(s.to_string()))
                    .and_then(Goal::from_number)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(goals)
    }

    pub fn contains(&self, goal: Goal) -> bool {
        self.0.contains(&goal)
    }

    pub fn iter(&self) -> impl Iterator<Item = Goal> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Goal>> for Goals {
    type Error = AdvisorError;

    fn try_from(goals: Vec<Goal>) -> Result<Self> {
        Self::new(goals)
    }
}

impl From<Goals> for Vec<Goal> {
    fn from(goals: Goals) -> Self {
        goals.0.into_iter().collect()
    }
}

/// A user's self-reported financial profile
///
/// Built once per session and never mutated; every rule borrows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,

    /// Annual income in USD
    pub annual_income: Decimal,

    /// Current savings and investments in USD
    pub savings: Decimal,

    /// Total outstanding debt in USD
    pub debt: Decimal,

    pub risk_tolerance: RiskTolerance,

    pub time_horizon: TimeHorizon,

    pub goals: Goals,

    /// 3-6 months of expenses set aside
    pub has_emergency_fund: bool,

    /// Holds a 401k/IRA
    pub has_retirement_account: bool,
}

impl Profile {
    pub fn new(age: u32, risk_tolerance: RiskTolerance, time_horizon: TimeHorizon, goals: Goals) -> Self {
        Self {
            age,
            annual_income: Decimal::ZERO,
            savings: Decimal::ZERO,
            debt: Decimal::ZERO,
            risk_tolerance,
            time_horizon,
            goals,
            has_emergency_fund: false,
            has_retirement_account: false,
        }
    }

    pub fn with_income(mut self, annual_income: Decimal) -> Self {
        self.annual_income = annual_income;
        self
    }

    pub fn with_savings(mut self, savings: Decimal) -> Self {
        self.savings = savings;
        self
    }

    pub fn with_debt(mut self, debt: Decimal) -> Self {
        self.debt = debt;
        self
    }

    pub fn with_emergency_fund(mut self, has_fund: bool) -> Self {
        self.has_emergency_fund = has_fund;
        self
    }

    pub fn with_retirement_account(mut self, has_account: bool) -> Self {
        self.has_retirement_account = has_account;
        self
    }

    /// Debt divided by income; zero when there is no income and
    /// `Decimal::MAX` when the quotient does not fit
    pub fn debt_to_income(&self) -> Decimal {
        if self.annual_income > Decimal::ZERO {
            self.debt.checked_div(self.annual_income).unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        }
    }

    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(goal)
    }

    /// Income and debt must not be negative
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("annual_income", self.annual_income), ("debt", self.debt)] {
            if value < Decimal::ZERO {
                return Err(AdvisorError::NegativeAmount(format!("{field} = {value}")));
            }
        }
        Ok(())
    }

    /// Load and validate a profile from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }
}

/// Target portfolio split in whole percentages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub stocks: i32,
    pub bonds: i32,
    pub alternatives: i32,
}

impl AssetAllocation {
    pub fn total(&self) -> i32 {
        self.stocks + self.bonds + self.alternatives
    }
}

impl fmt::Display for AssetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% stocks, {}% bonds, {}% alternatives (REITs, commodities)",
            self.stocks, self.bonds, self.alternatives
        )
    }
}

/// A failed financial-health check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RedFlag {
    NoEmergencyFund,
    HighDebtToIncome {
        /// Whole percent, rounded half-to-even
        percent: Decimal,
    },
}

impl fmt::Display for RedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedFlag::NoEmergencyFund => f.write_str("No emergency fund"),
            RedFlag::HighDebtToIncome { percent } => {
                write!(f, "High debt-to-income ratio ({percent}%)")
            }
        }
    }
}

/// Which rule produced a recommendation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Health,
    Allocation,
    Account,
    Strategy,
    Goal,
}

/// A single display line of advice
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub section: Section,

    pub text: String,

    /// Starts a visually separate block when rendered
    #[serde(default)]
    pub heading: bool,
}

impl Recommendation {
    pub fn new(section: Section, text: impl Into<String>) -> Self {
        Self {
            section,
            text: text.into(),
            heading: false,
        }
    }

    pub fn heading(section: Section, text: impl Into<String>) -> Self {
        Self {
            heading: true,
            ..Self::new(section, text)
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn retirement_only() -> Goals {
        Goals::new([Goal::Retirement]).unwrap()
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(RiskTolerance::from_choice(2).unwrap(), RiskTolerance::Moderate);
        assert_eq!(TimeHorizon::from_choice(3).unwrap(), TimeHorizon::LongTerm);
        assert!(RiskTolerance::from_choice(0).is_err());
        assert!(TimeHorizon::from_choice(4).is_err());
    }

    #[test]
    fn test_goals_parse_dedupes_and_orders() {
        let goals = Goals::parse(" 5, 1,3 ,1").unwrap();
        let numbers: Vec<u8> = goals.iter().map(Goal::number).collect();
        assert_eq!(numbers, vec![1, 3, 5]);
    }

    #[test]
    fn test_goals_rejects_bad_input() {
        assert!(matches!(Goals::parse(""), Err(AdvisorError::NoGoals)));
        assert!(matches!(Goals::parse("1,6"), Err(AdvisorError::InvalidGoal(_))));
        assert!(matches!(Goals::parse("one"), Err(AdvisorError::InvalidGoal(_))));
    }

    #[test]
    fn test_debt_to_income_guards_zero_income() {
        let profile = Profile::new(30, RiskTolerance::Moderate, TimeHorizon::LongTerm, retirement_only())
            .with_debt(dec!(10000));
        assert_eq!(profile.debt_to_income(), Decimal::ZERO);

        let profile = profile.with_income(dec!(40000));
        assert_eq!(profile.debt_to_income(), dec!(0.25));
    }

    #[test]
    fn test_red_flag_display() {
        assert_eq!(RedFlag::NoEmergencyFund.to_string(), "No emergency fund");
        let flag = RedFlag::HighDebtToIncome { percent: dec!(50) };
        assert_eq!(flag.to_string(), "High debt-to-income ratio (50%)");
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{
            "age": 45,
            "annual_income": "70000",
            "savings": 12500.50,
            "debt": 0,
            "risk_tolerance": "moderate",
            "time_horizon": "long_term",
            "goals": [4, 1],
            "has_emergency_fund": true,
            "has_retirement_account": false
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.annual_income, dec!(70000));
        assert_eq!(profile.risk_tolerance, RiskTolerance::Moderate);
        assert!(profile.has_goal(Goal::WealthBuilding));
        assert!(!profile.has_goal(Goal::Education));
    }

    #[test]
    fn test_profile_json_rejects_empty_goals() {
        let json = r#"{
            "age": 45, "annual_income": "1", "savings": "0", "debt": "0",
            "risk_tolerance": "moderate", "time_horizon": "long_term",
            "goals": [], "has_emergency_fund": true, "has_retirement_account": true
        }"#;
        assert!(Profile::from_json(json).is_err());
    }

    #[test]
    fn test_profile_json_rejects_negative_amounts() {
        let template = r#"{
            "age": 45, "annual_income": "INCOME", "savings": "-200", "debt": "DEBT",
            "risk_tolerance": "moderate", "time_horizon": "long_term",
            "goals": [1], "has_emergency_fund": true, "has_retirement_account": true
        }"#;
        let json = |income: &str, debt: &str| template.replace("INCOME", income).replace("DEBT", debt);

        assert!(matches!(
            Profile::from_json(&json("50000", "-5000")),
            Err(AdvisorError::NegativeAmount(_))
        ));
        assert!(matches!(
            Profile::from_json(&json("-1", "0")),
            Err(AdvisorError::NegativeAmount(_))
        ));

        // negative savings are allowed
        let profile = Profile::from_json(&json("50000", "5000")).unwrap();
        assert_eq!(profile.savings, dec!(-200));
    }

    #[test]
    fn test_debt_to_income_saturates() {
        let profile = Profile::new(30, RiskTolerance::Moderate, TimeHorizon::LongTerm, retirement_only())
            .with_income(dec!(0.0000000000000000000000000001))
            .with_debt(dec!(10));
        assert_eq!(profile.debt_to_income(), Decimal::MAX);
    }

    #[test]
    fn test_demo_profile_parses() {
        let profile = Profile::from_json(include_str!("../../../demos/profile.json")).unwrap();
        assert_eq!(profile.age, 45);
        assert_eq!(profile.goals.len(), 2);
        assert!(!profile.has_retirement_account);
    }
}
