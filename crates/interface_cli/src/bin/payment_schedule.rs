//! Payment Schedule - Command Line Binary
//!
//! Computes a payment schedule from a JSON request and prints it.
//!
//! # Usage
//!
//! ```bash
//! # Read the request from a file
//! payment-schedule --input request.json
//!
//! # Pipe a request and print a table, starting today
//! echo '{"terms":"installments","amountInCents":3000,"feePercentage":5,"durationDays":60,"currency":"USD"}' \
//!     | payment-schedule --start-now --output table
//! ```
//!
//! # Environment Variables
//!
//! * `SCHEDULE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `SCHEDULE_OUTPUT` - Default output format: json, table (default: json)
//! * `RUST_LOG` - Overrides `SCHEDULE_LOG_LEVEL` when set
//!
//! # Exit Status
//!
//! * `0` - Schedule printed
//! * `1` - Request could not be read or parsed
//! * `2` - Request rejected by validation

use std::process::ExitCode;

use clap::Parser;
use domain_schedule::ScheduleError;
use interface_cli::{config::CliConfig, run, Args};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config();

    init_tracing(&config.log_level);

    match run(&args, &config) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(err) => match err.downcast_ref::<ScheduleError>() {
            Some(rejection) if rejection.is_validation() => {
                eprintln!("{}", rejection);
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

/// Loads configuration from `SCHEDULE_*` variables, falling back to defaults
fn load_config() -> CliConfig {
    CliConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid configuration: {}", e);
        CliConfig::default()
    })
}

/// Initializes the tracing subscriber, writing to stderr so stdout stays parseable.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
