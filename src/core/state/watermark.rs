//! Watermark model for tracking export progress
//!
//! A watermark records, per log stream, the ingestion timestamp up to which
//! data has been exported and the export task that produced it. The durable
//! field names (`LogGroupArn`, `LogStreamArn`, `ExportedAt`, `TaskId`) are
//! fixed by the state object format and must not change.

use crate::domain::ids::{LogGroupArn, LogStreamArn, TaskId};
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Export progress marker for one log stream
///
/// At most one watermark exists per stream ARN. Absence of a watermark means
/// the stream has never been exported.
///
/// # Examples
///
/// ```
/// use logferry::core::state::watermark::Watermark;
/// use logferry::domain::{LogGroupArn, LogStreamArn, TaskId};
///
/// let watermark = Watermark {
///     log_group_arn: LogGroupArn::new("arn:aws:logs:::log-group:/app/web").unwrap(),
///     log_stream_arn: LogStreamArn::new("arn:aws:logs:::log-stream:web-1").unwrap(),
///     exported_at: 1_700_000_000_000,
///     task_id: TaskId::new("0123abcd").unwrap(),
/// };
/// assert_eq!(watermark.exported_at, 1_700_000_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Watermark {
    /// ARN of the owning log group
    pub log_group_arn: LogGroupArn,

    /// ARN of the log stream this watermark tracks
    pub log_stream_arn: LogStreamArn,

    /// Ingestion time up to which this stream has been exported, epoch ms
    pub exported_at: i64,

    /// Identifier of the export task that produced this watermark
    pub task_id: TaskId,
}

/// In-memory watermark collection, keyed by log stream ARN
///
/// Lookup and upsert are by exact stream ARN match. The map enforces the
/// monotonicity invariant: an upsert never moves `exported_at` backwards for
/// a stream that already has a watermark.
#[derive(Debug, Default, Clone)]
pub struct WatermarkSet {
    entries: HashMap<LogStreamArn, Watermark>,
}

impl WatermarkSet {
    /// Create an empty watermark set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of watermarks in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the watermark for a stream
    pub fn get(&self, stream_arn: &LogStreamArn) -> Option<&Watermark> {
        self.entries.get(stream_arn)
    }

    /// Insert or overwrite the watermark for its stream
    ///
    /// If the stream already has a watermark with a later `exported_at`, the
    /// later timestamp is kept; progress never regresses.
    pub fn upsert(&mut self, mut watermark: Watermark) {
        if let Some(existing) = self.entries.get(&watermark.log_stream_arn) {
            if existing.exported_at > watermark.exported_at {
                watermark.exported_at = existing.exported_at;
            }
        }
        self.entries
            .insert(watermark.log_stream_arn.clone(), watermark);
    }

    /// Iterate over all watermarks, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Watermark> {
        self.entries.values()
    }

    /// Snapshot the set as a record list
    pub fn to_records(&self) -> Vec<Watermark> {
        self.entries.values().cloned().collect()
    }

    /// Build a set from a record list, last record winning on duplicate ARNs
    pub fn from_records(records: Vec<Watermark>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.upsert(record);
        }
        set
    }

    /// Deserialize a set from the durable JSON record array
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the bytes are not a valid record array.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let records: Vec<Watermark> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(records))
    }

    /// Serialize the set as the durable JSON record array
    ///
    /// Record order is unspecified; lookup is order-independent.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_records())?)
    }
}
