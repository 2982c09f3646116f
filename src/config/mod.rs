//! Invocation configuration
//!
//! The conceptual invocation event: destination bucket, source log group
//! prefixes, store backend selection, and the execution budget. Built from
//! CLI flags / environment variables and validated before any AWS call.

use crate::adapters::store::StoreKind;
use crate::domain::errors::FerryError;
use crate::domain::Result;
use std::time::Duration;

/// Watermark store selection
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend kind (selected independently of the DSN, which must agree)
    pub kind: StoreKind,
    /// Connection string, e.g. `s3://bucket/state.json` or `dynamodb://table`
    pub dsn: String,
}

/// Configuration for one export invocation
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// S3 bucket receiving exported log data
    pub destination_bucket: String,

    /// Log group name prefixes to enumerate
    pub source_prefixes: Vec<String>,

    /// Watermark store backend
    pub store: StoreConfig,

    /// Total wall-clock budget for this invocation
    pub execution_budget: Duration,

    /// Time reserved before the deadline for committing and flushing state
    pub finalize_margin: Duration,
}

impl ExportConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a missing destination bucket, an
    /// empty prefix list, or a budget that leaves no time before the
    /// finalize margin.
    pub fn validate(&self) -> Result<()> {
        if self.destination_bucket.trim().is_empty() {
            return Err(FerryError::Configuration(
                "destination bucket must not be empty".to_string(),
            ));
        }

        if self.source_prefixes.is_empty() {
            return Err(FerryError::Configuration(
                "at least one source log group prefix is required".to_string(),
            ));
        }

        if self.execution_budget <= self.finalize_margin {
            return Err(FerryError::Configuration(format!(
                "execution budget ({:?}) must exceed the finalize margin ({:?})",
                self.execution_budget, self.finalize_margin
            )));
        }

        Ok(())
    }
}

/// Split a comma-separated prefix list, dropping blank entries
pub fn parse_prefixes(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string)
        .collect()
}
