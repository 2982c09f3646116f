//! Logging and observability
//!
//! Structured JSON logging via `tracing`, configured once in `main` from the
//! invocation's verbosity level. Falls back to `info` filtering when the
//! environment doesn't override it.
//!
//! # Example
//!
//! ```no_run
//! use logferry::logging::init_logging;
//!
//! init_logging("info").expect("Failed to initialize logging");
//!
//! tracing::info!(log_stream = "web-1", "Exporting");
//! ```

use crate::domain::errors::FerryError;
use crate::domain::Result;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Installs a JSON-formatted subscriber writing to stdout, filtered at the
/// given level (or by `RUST_LOG` when set).
///
/// # Errors
///
/// Returns a configuration error for an unrecognized level string.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("logferry={log_level}")));

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .init();

    tracing::debug!(level = %log_level, "Logging initialized");

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(FerryError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
