//! Console Questionnaire
//!
//! Asks the profile questions one by one. A malformed answer is reported and
//! the same question is asked again.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use invest_advisor::questionnaire::{
    parse_age, parse_amount, parse_goals, parse_risk_tolerance, parse_signed_amount, parse_time_horizon,
    parse_yes_no,
};
use invest_advisor::{Goal, Profile, RiskTolerance, TimeHorizon};

pub struct Questionnaire<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Questionnaire<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn collect(&mut self) -> anyhow::Result<Profile> {
        writeln!(self.output, "\n=== Investment Profile Questionnaire ===")?;

        let age = self.ask("Your age: ", parse_age)?;
        let annual_income = self.ask("Annual income ($): ", parse_amount)?;
        let savings = self.ask("Current savings/investments ($): ", parse_signed_amount)?;
        let debt = self.ask("Total debt ($): ", parse_amount)?;

        writeln!(self.output, "\nRisk Tolerance:")?;
        for (i, risk) in RiskTolerance::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, risk.describe())?;
        }
        let risk_tolerance = self.ask("Select your risk tolerance (1-3): ", parse_risk_tolerance)?;

        writeln!(self.output, "\nInvestment Time Horizon:")?;
        for (i, horizon) in TimeHorizon::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, horizon.describe())?;
        }
        let time_horizon = self.ask("Select your time horizon (1-3): ", parse_time_horizon)?;

        writeln!(self.output, "\nPrimary Investment Goals (select all that apply, comma separated):")?;
        for goal in Goal::ALL {
            writeln!(self.output, "{}. {}", goal.number(), goal.label())?;
        }
        let goals = self.ask("Enter goal numbers (e.g., 1,3,5): ", parse_goals)?;

        let has_emergency_fund = parse_yes_no(&self.prompt(
            "\nDo you have an emergency fund (3-6 months expenses)? (y/n): ",
        )?);
        let has_retirement_account =
            parse_yes_no(&self.prompt("Do you have a retirement account (401k/IRA)? (y/n): ")?);

        let profile = Profile::new(age, risk_tolerance, time_horizon, goals)
            .with_income(annual_income)
            .with_savings(savings)
            .with_debt(debt)
            .with_emergency_fund(has_emergency_fund)
            .with_retirement_account(has_retirement_account);

        tracing::debug!(?profile, "questionnaire complete");
        Ok(profile)
    }

    /// Ask until `parse` accepts the answer
    fn ask<T, F>(&mut self, question: &str, parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> invest_advisor::Result<T>,
    {
        loop {
            let answer = self.prompt(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_input_error() => {
                    tracing::debug!(%err, answer = answer.trim(), "rejected answer");
                    writeln!(self.output, "  {err}. Please try again.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn prompt(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer from stdin")?;
        if read == 0 {
            bail!("input closed before the questionnaire was complete");
        }
        Ok(line)
    }
}
