//! Tracing subscriber setup
//!
//! Installs a global subscriber made of:
//! - **EnvFilter**: `RUST_LOG` when set, otherwise the configured level
//! - **Fmt layer**: text or JSON, written to stderr so stdout stays free for
//!   the authorizer response
//!
//! ```text
//! Registry
//!   ├── EnvFilter (RUST_LOG | logging.level)
//!   └── Fmt Layer (stderr, text|json)
//! ```

use crate::config::{LogFormat, LoggingConfig};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("Failed to set global subscriber (may already be initialized): {0}")]
    AlreadyInitialized(String),
}

/// Build the filter: `RUST_LOG` wins over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.level.to_lowercase())
            .map_err(|e| LoggingError::InvalidFilter(config.level.clone(), e.to_string())),
    }
}

/// Initialize the global tracing subscriber
///
/// # Example
///
/// ```no_run
/// use token_authorizer::config::LoggingConfig;
/// use token_authorizer::logging::init_subscriber;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// init_subscriber(&LoggingConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = build_filter(config)?;

    match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr);

            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer);

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);

            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer);

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
        }
    }

    Ok(())
}
