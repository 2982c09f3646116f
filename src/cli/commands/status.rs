//! Status command implementation
//!
//! Loads the watermark store and prints the recorded watermarks, for
//! inspecting export progress without running an export.

use crate::adapters::store::{create_store, StoreKind};
use crate::domain::errors::FerryError;
use clap::Args;
use std::str::FromStr;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Watermark store backend (s3, dynamodb)
    #[arg(long, default_value = "s3", env = "LOGFERRY_STORE_TYPE")]
    pub store_type: String,

    /// Watermark store DSN, e.g. s3://bucket/state.json or dynamodb://table
    #[arg(long, env = "LOGFERRY_STORE_DSN")]
    pub store_dsn: String,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let kind = StoreKind::from_str(&self.store_type).map_err(FerryError::Store)?;

        let aws_config = aws_config::load_from_env().await;
        let mut store = create_store(kind, &self.store_dsn, &aws_config)?;
        store.initialize().await?;

        let mut watermarks = store.watermarks().await?;
        watermarks.sort_by(|a, b| a.log_stream_arn.as_str().cmp(b.log_stream_arn.as_str()));

        tracing::info!(watermark_count = watermarks.len(), "Loaded watermarks");
        println!("{}", serde_json::to_string_pretty(&watermarks)?);

        Ok(0)
    }
}
