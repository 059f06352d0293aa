//! CLI configuration

use clap::ValueEnum;
use serde::Deserialize;

/// Prefix of the environment variables read into `CliConfig`
pub const ENV_PREFIX: &str = "SCHEDULE";

/// How a computed schedule is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One aligned line per charge
    Table,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
    /// Default output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Json,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `SCHEDULE_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source, falling back to defaults
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("output", "json")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
