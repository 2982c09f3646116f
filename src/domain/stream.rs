//! Log group and log stream metadata models
//!
//! Read-only views of CloudWatch metadata as the engine consumes it. The
//! adapter layer converts SDK types into these models so the core never sees
//! SDK optionals for fields the engine requires.

use crate::domain::ids::{LogGroupArn, LogStreamArn};
use serde::{Deserialize, Serialize};

/// A CloudWatch log group, as relevant to export coordination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    /// Log group name (used for export submission and destination keys)
    pub name: String,

    /// Log group ARN
    pub arn: LogGroupArn,

    /// Retention in days; `None` or zero means logs are kept forever
    pub retention_in_days: Option<i32>,
}

impl LogGroup {
    /// Returns the retention period in milliseconds, if one applies
    ///
    /// `None` (infinite retention) and non-positive values yield `None`.
    pub fn retention_ms(&self) -> Option<i64> {
        match self.retention_in_days {
            Some(days) if days > 0 => Some(i64::from(days) * 24 * 60 * 60 * 1000),
            _ => None,
        }
    }
}

/// A CloudWatch log stream, as relevant to export coordination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStream {
    /// Log stream name (used as the stream-name prefix on export submission)
    pub name: String,

    /// Log stream ARN (the watermark key)
    pub arn: LogStreamArn,

    /// Creation time, epoch milliseconds
    pub creation_time: i64,

    /// Ingestion time of the most recent event, epoch milliseconds.
    /// `None` for a stream that has never received an event.
    pub last_ingestion_time: Option<i64>,
}
