//! Questionnaire Input Coercion
//!
//! Turns raw answers typed at the console into profile field values.
//! Range checks beyond what the types imply are left to the caller.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{AdvisorError, Result};
use crate::model::{Goals, RiskTolerance, TimeHorizon};

pub fn parse_age(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| AdvisorError::InvalidNumber(trimmed.to_string()))
}

/// Parse a dollar amount that may be negative (e.g. savings)
///
/// Accepts an optional leading `$` and thousands separators: `$72,500.50`.
pub fn parse_signed_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let cleaned: String = rest
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    let value = Decimal::from_str(&cleaned)
        .map_err(|_| AdvisorError::InvalidNumber(trimmed.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// Parse a non-negative dollar amount (income, debt)
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let value = parse_signed_amount(input)?;
    if value < Decimal::ZERO {
        return Err(AdvisorError::NegativeAmount(input.trim().to_string()));
    }
    Ok(value)
}

fn parse_menu_choice(field: &'static str, input: &str) -> Result<u8> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| AdvisorError::InvalidChoice {
        field,
        value: trimmed.to_string(),
    })
}

pub fn parse_risk_tolerance(input: &str) -> Result<RiskTolerance> {
    RiskTolerance::from_choice(parse_menu_choice("risk tolerance", input)?)
}

pub fn parse_time_horizon(input: &str) -> Result<TimeHorizon> {
    TimeHorizon::from_choice(parse_menu_choice("time horizon", input)?)
}

pub fn parse_goals(input: &str) -> Result<Goals> {
    Goals::parse(input)
}

/// Only a lone "y" (any case) is yes; the line ending is ignored
pub fn parse_yes_no(input: &str) -> bool {
    input.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}
