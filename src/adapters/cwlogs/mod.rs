//! CloudWatch Logs integration
//!
//! Wraps enumeration, export submission, and task status polling behind the
//! [`LogsClient`] trait.

pub mod client;

pub use client::{CloudWatchLogsClient, ExportTaskRequest, LogsClient, TaskStatus};
