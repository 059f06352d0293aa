//! Command-line interface for the payment schedule calculator
//!
//! Reads a schedule request as JSON, computes the schedule and renders it
//! as JSON or a plain-text table.

pub mod config;
pub mod dto;
pub mod input;
pub mod output;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;

use domain_schedule::{compute_schedule, PaymentSchedule};

use crate::config::{CliConfig, OutputFormat};
use crate::dto::RequestDocument;

/// Compute a payment schedule from commercial terms
#[derive(Debug, Parser)]
#[command(
    name = "payment-schedule",
    version,
    about = "Compute a payment schedule from commercial terms",
    long_about = "Reads a JSON schedule request (terms, amountInCents, feePercentage, \
                  durationDays, startDate, currency) from a file or stdin and prints \
                  the dated charges it produces."
)]
pub struct Args {
    /// Path to a JSON request; stdin is read when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output format, overriding SCHEDULE_OUTPUT
    #[arg(long, short, value_enum)]
    pub output: Option<OutputFormat>,

    /// Use the current time as the start date
    #[arg(long)]
    pub start_now: bool,
}

/// Parses a request document and computes its schedule
///
/// `start_override` replaces the document's start date when given.
pub fn schedule_from_json(
    raw: &str,
    start_override: Option<DateTime<Utc>>,
) -> anyhow::Result<PaymentSchedule> {
    let document: RequestDocument =
        serde_json::from_str(raw).context("Failed to parse schedule request")?;
    let request = document.into_request(start_override)?;

    info!(
        terms = ?request.terms,
        amount_in_cents = request.amount_in_cents,
        duration_days = request.duration_days,
        "Computing payment schedule"
    );

    Ok(compute_schedule(&request)?)
}

/// Runs the command and returns the rendered schedule
pub fn run(args: &Args, config: &CliConfig) -> anyhow::Result<String> {
    let raw = match &args.input {
        Some(path) => input::read_file(path)?,
        None => input::read_stdin()?,
    };

    let start_override = args.start_now.then(Utc::now);
    let schedule = schedule_from_json(&raw, start_override)?;

    output::render(args.output.unwrap_or(config.output), &schedule)
}
