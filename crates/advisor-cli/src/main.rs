//! invest-advisor CLI
//!
//! Runs the investment questionnaire on the console (or loads a saved JSON
//! profile) and prints the resulting recommendations.

mod prompt;
mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use invest_advisor::{Advisor, AdvisorConfig, Profile};

use crate::prompt::Questionnaire;
use crate::render::render_report;

#[derive(Debug, Parser)]
#[command(name = "invest-advisor", version, about = "General investment guidance from a short financial profile")]
struct Args {
    /// Evaluate a JSON profile instead of asking the questions
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Omit the closing disclaimer
    #[arg(long)]
    no_disclaimer: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the questions
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config = AdvisorConfig::from_env().context("invalid advisor configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let session_id = Uuid::new_v4();
    let span = tracing::info_span!("session", %session_id);
    let _guard = span.enter();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => {
            writeln!(out, "Investment Recommendation Engine")?;
            writeln!(out, "This tool will provide general investment guidance based on your profile.")?;
            let stdin = io::stdin();
            Questionnaire::new(stdin.lock(), &mut out).collect()?
        }
    };

    let report = Advisor::new(config).evaluate(&profile);
    tracing::info!(
        recommendations = report.recommendations.len(),
        red_flags = report.red_flags.len(),
        gated = report.is_gated(),
        "report ready"
    );

    if args.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        render_report(&mut out, &report, !args.no_disclaimer)?;
    }

    Ok(())
}

fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile = Profile::from_json(&raw)
        .with_context(|| format!("invalid profile {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded profile");
    Ok(profile)
}
