//! Export command implementation
//!
//! Runs one export invocation: load state, enumerate targets, drive the
//! coordinator, flush state. The command always prints the invocation
//! response (resolved targets plus error messages) as JSON on stdout, so a
//! failed run still reports what it had resolved before the failure.

use crate::adapters::cwlogs::{CloudWatchLogsClient, LogsClient};
use crate::adapters::store::{create_store, StoreKind};
use crate::config::{parse_prefixes, ExportConfig, StoreConfig};
use crate::core::export::{build_targets, DeadlineGovernor, ExportCoordinator, ExportTarget};
use crate::domain::errors::FerryError;
use crate::domain::Result;
use clap::Args;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Invocation response: resolved targets plus error messages
#[derive(Debug, Default, Serialize)]
pub struct ExportResponse {
    pub targets: Vec<ExportTarget>,
    pub messages: Vec<String>,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// S3 bucket receiving the exported log data
    #[arg(long, env = "LOGFERRY_DESTINATION_BUCKET")]
    pub destination_bucket: String,

    /// Comma-separated log group name prefixes to export
    #[arg(long, env = "LOGFERRY_SOURCE_PREFIXES")]
    pub source_prefixes: String,

    /// Watermark store backend (s3, dynamodb)
    #[arg(long, default_value = "s3", env = "LOGFERRY_STORE_TYPE")]
    pub store_type: String,

    /// Watermark store DSN, e.g. s3://bucket/state.json or dynamodb://table
    #[arg(long, env = "LOGFERRY_STORE_DSN")]
    pub store_dsn: String,

    /// Execution budget in seconds for this invocation
    #[arg(long, default_value_t = 900, env = "LOGFERRY_DEADLINE_SECS")]
    pub deadline_secs: u64,

    /// Seconds reserved before the deadline for flushing state
    #[arg(long, default_value_t = 30, env = "LOGFERRY_FINALIZE_MARGIN_SECS")]
    pub finalize_margin_secs: u64,
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// Returns the process exit code: 0 on success (including a
    /// deadline-shortened run), 1 on any fatal error.
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let mut response = ExportResponse::default();

        let exit_code = match self.run(&mut response).await {
            Ok(()) => 0,
            Err(err) => {
                tracing::error!(error = %err, "Export invocation failed");
                response.messages.push(err.to_string());
                1
            }
        };

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(exit_code)
    }

    async fn run(&self, response: &mut ExportResponse) -> Result<()> {
        let config = self.to_config()?;
        config.validate()?;

        // The budget clock starts before any AWS call so slow enumeration
        // counts against the same deadline as polling.
        let governor =
            DeadlineGovernor::from_budget(config.execution_budget, config.finalize_margin);

        let aws_config = aws_config::load_from_env().await;
        let client: Arc<dyn LogsClient> = Arc::new(CloudWatchLogsClient::new(&aws_config));

        let mut store = create_store(config.store.kind, &config.store.dsn, &aws_config)?;
        store.initialize().await?;

        let targets = build_targets(client.as_ref(), &config.source_prefixes).await?;
        tracing::info!(target_count = targets.len(), "Resolved export targets");
        response.targets = targets.clone();

        let coordinator = ExportCoordinator::new(client, &config.destination_bucket);
        let outcome = coordinator
            .export(&targets, store.as_mut(), &governor)
            .await?;

        store.finalize().await?;
        outcome.log_summary();

        Ok(())
    }

    fn to_config(&self) -> Result<ExportConfig> {
        let kind = StoreKind::from_str(&self.store_type).map_err(FerryError::Store)?;

        Ok(ExportConfig {
            destination_bucket: self.destination_bucket.clone(),
            source_prefixes: parse_prefixes(&self.source_prefixes),
            store: StoreConfig {
                kind,
                dsn: self.store_dsn.clone(),
            },
            execution_budget: Duration::from_secs(self.deadline_secs),
            finalize_margin: Duration::from_secs(self.finalize_margin_secs),
        })
    }
}
