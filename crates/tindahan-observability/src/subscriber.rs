//! Global `tracing` subscriber setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::logging::{LogFormat, LogLevel};

/// Logging settings, usually read from the `[logging]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info" or "tindahan_commerce=debug").
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Minimum level for structured session logs.
    ///
    /// Uses the last global directive in `level` (one without `=`);
    /// per-target directives only affect `tracing`. Falls back to info.
    pub fn min_level(&self) -> LogLevel {
        self.level
            .split(',')
            .filter(|directive| !directive.contains('='))
            .filter_map(LogLevel::from_name)
            .last()
            .unwrap_or(LogLevel::Info)
    }
}

/// Errors from subscriber installation.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// The filter directive did not parse.
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Build the env filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ObservabilityError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| ObservabilityError::InvalidFilter {
        directive: config.level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global `tracing` subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = env_filter(config)?;
    let directive = filter.to_string();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| ObservabilityError::SubscriberInit(e.to_string()))?;

    debug!(filter = %directive, format = ?config.format, "tracing subscriber installed");
    Ok(())
}
