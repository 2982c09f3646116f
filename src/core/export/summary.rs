//! Export run outcome
//!
//! Counters and flags describing what one invocation accomplished, logged at
//! the end of the run and serialized into the invocation response.

use serde::Serialize;
use std::time::Duration;

/// Outcome of one export invocation
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    /// Streams for which an export task was submitted and committed
    pub streams_exported: usize,

    /// Streams skipped (already exported, no events, or beyond retention)
    pub streams_skipped: usize,

    /// Whether the run stopped early because the deadline cutoff passed.
    /// A deadline-reached run is still a successful run; the remaining
    /// streams are picked up by the next invocation.
    pub deadline_reached: bool,

    /// Wall-clock duration of the run
    #[serde(serialize_with = "serialize_duration_ms", rename = "durationMs")]
    pub duration: Duration,
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u128(duration.as_millis())
}

impl ExportOutcome {
    /// Attach the run duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the outcome at the end of a run
    pub fn log_summary(&self) {
        tracing::info!(
            streams_exported = self.streams_exported,
            streams_skipped = self.streams_skipped,
            deadline_reached = self.deadline_reached,
            duration_ms = self.duration.as_millis() as u64,
            "Export run finished"
        );
    }
}
