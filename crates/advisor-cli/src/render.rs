//! Report Rendering

use std::io::{self, Write};

use invest_advisor::{Report, DISCLAIMER};

/// Plain-text report: red flags first, then numbered recommendations
pub fn render_report<W: Write>(out: &mut W, report: &Report, disclaimer: bool) -> io::Result<()> {
    writeln!(out, "\n=== Analysis Results ===")?;

    if !report.red_flags.is_empty() {
        writeln!(out, "\nFinancial Health Check:")?;
        for flag in &report.red_flags {
            writeln!(out, "⚠️ {flag}")?;
        }
    }

    writeln!(out, "\nRecommendations:")?;
    for (i, rec) in report.recommendations.iter().enumerate() {
        if rec.heading {
            writeln!(out)?;
        }
        writeln!(out, "{}. {}", i + 1, rec.text)?;
    }

    if disclaimer {
        writeln!(out, "\n{DISCLAIMER}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invest_advisor::{Advisor, Goals, Profile, RiskTolerance, TimeHorizon};
    use rust_decimal_macros::dec;

    fn render(profile: &Profile, disclaimer: bool) -> String {
        let report = Advisor::default().evaluate(profile);
        let mut out = Vec::new();
        render_report(&mut out, &report, disclaimer).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn profile() -> Profile {
        Profile::new(
            45,
            RiskTolerance::Moderate,
            TimeHorizon::LongTerm,
            Goals::parse("1").unwrap(),
        )
        .with_income(dec!(70000))
        .with_emergency_fund(true)
        .with_retirement_account(true)
    }

    #[test]
    fn test_clean_profile_layout() {
        let text = render(&profile(), true);

        assert!(!text.contains("Financial Health Check:"));
        assert!(text.contains(
            "Recommendations:\n\n1. Suggested Asset Allocation: 60% stocks, 30% bonds, 10% alternatives (REITs, commodities)\n"
        ));
        assert!(text.contains("\n\n8. For retirement:\n9. - Aim to save 15% of income annually\n"));
        assert!(text.trim_end().ends_with(DISCLAIMER));
    }

    #[test]
    fn test_red_flags_are_listed() {
        let text = render(&profile().with_emergency_fund(false).with_debt(dec!(35000)), false);

        assert!(text.contains("Financial Health Check:\n⚠️ No emergency fund\n⚠️ High debt-to-income ratio (50%)\n"));
        assert!(text.contains("1. Build an emergency fund"));
        assert!(text.contains("2. Consider paying down high-interest debt"));
        assert!(!text.contains("3. "));
        assert!(!text.contains(DISCLAIMER));
    }
}
