// logferry - Incremental CloudWatch Logs to S3 Exporter
// Copyright (c) 2025 Logferry Contributors
// Licensed under the MIT License

//! # logferry - Incremental CloudWatch Logs to S3 Exporter
//!
//! logferry exports append-only CloudWatch log streams into S3 incrementally,
//! tracking per-stream progress with watermarks so repeated invocations only
//! export newly ingested data. It runs under a bounded execution budget and
//! makes forward progress even when an invocation is cut short.
//!
//! ## Architecture
//!
//! logferry follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export coordination, deadline policy, state)
//! - [`adapters`] - External integrations (CloudWatch Logs, state stores)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Invocation configuration
//! - [`logging`] - Structured logging
//!
//! ## How a run works
//!
//! Each invocation enumerates log groups by name prefix, pairs them with
//! their streams, and walks the resulting target set sequentially. Per
//! stream, the coordinator consults the watermark store to compute the
//! export window (`creation time` for a never-exported stream, the stored
//! watermark for a resume, nothing when the watermark already covers all
//! ingested data), submits a CloudWatch export task, and polls it to
//! completion. A deadline governor stops polling shortly before the
//! execution budget runs out so committed progress can still be flushed;
//! the remaining streams are picked up by the next invocation.
//!
//! ```rust,no_run
//! use logferry::adapters::cwlogs::{CloudWatchLogsClient, LogsClient};
//! use logferry::adapters::store::{create_store, StoreKind};
//! use logferry::core::export::{build_targets, DeadlineGovernor, ExportCoordinator};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let aws_config = aws_config::load_from_env().await;
//! let client: Arc<dyn LogsClient> = Arc::new(CloudWatchLogsClient::new(&aws_config));
//!
//! let mut store = create_store(StoreKind::S3, "s3://state/exporter.json", &aws_config)?;
//! store.initialize().await?;
//!
//! let targets = build_targets(client.as_ref(), &["/app/".to_string()]).await?;
//! let governor =
//!     DeadlineGovernor::from_budget(Duration::from_secs(900), Duration::from_secs(30));
//!
//! let coordinator = ExportCoordinator::new(client, "log-exports");
//! let outcome = coordinator.export(&targets, store.as_mut(), &governor).await?;
//!
//! store.finalize().await?;
//! println!("exported {} streams", outcome.streams_exported);
//! # Ok(())
//! # }
//! ```
//!
//! ## Delivery semantics
//!
//! Exports are at-least-once with idempotent overlap on resume, never
//! exactly-once: a watermark committed at the run's start time may slightly
//! overlap the next run's window, and a deadline-abandoned task may still be
//! writing after its watermark is recorded.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
