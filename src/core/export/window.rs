//! Export range decision and destination addressing
//!
//! Pure functions the coordinator consults per stream: whether an export is
//! needed and over which `(from, to)` window, whether the stream is entirely
//! beyond its group's retention period, and where in the destination bucket
//! the exported objects should land.

use crate::core::state::Watermark;
use crate::domain::stream::{LogGroup, LogStream};
use chrono::{DateTime, Datelike, Utc};

/// Timestamp range submitted to a single export task, epoch milliseconds
///
/// `to` is always the stream's current last ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportWindow {
    pub from: i64,
    pub to: i64,
}

/// Why a stream was skipped without submitting an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The watermark already covers all ingested data
    AlreadyExported,
    /// The stream has never received an event
    NoIngestedEvents,
}

/// Per-stream export decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDecision {
    /// Submit an export over this window
    Export(ExportWindow),
    /// Nothing to do for this stream
    Skip(SkipReason),
}

/// Decide whether and over which window a stream needs exporting
///
/// Total over the three meaningful cases:
/// - no prior watermark: export from the stream's creation time;
/// - watermark already at or past the last ingestion time: skip;
/// - watermark behind the last ingestion time: resume from the watermark.
///
/// A stream with no ingested events is skipped. The final arm is a defensive
/// default back to the creation time and is not relied upon.
pub fn decide_export(watermark: Option<&Watermark>, stream: &LogStream) -> ExportDecision {
    let Some(last_ingestion) = stream.last_ingestion_time else {
        return ExportDecision::Skip(SkipReason::NoIngestedEvents);
    };

    let from = match watermark {
        None => stream.creation_time,
        Some(wm) if wm.exported_at >= last_ingestion => {
            return ExportDecision::Skip(SkipReason::AlreadyExported);
        }
        Some(wm) if wm.exported_at < last_ingestion => wm.exported_at,
        Some(_) => stream.creation_time,
    };

    ExportDecision::Export(ExportWindow {
        from,
        to: last_ingestion,
    })
}

/// Whether all of a stream's data is already beyond its group's retention
///
/// True when the group has a positive retention period and the stream's last
/// ingestion is older than that period relative to `now_ms`. Such a stream is
/// skipped before any range decision: its contents are not exportable anymore.
pub fn beyond_retention(now_ms: i64, group: &LogGroup, stream: &LogStream) -> bool {
    let (Some(retention_ms), Some(last_ingestion)) =
        (group.retention_ms(), stream.last_ingestion_time)
    else {
        return false;
    };

    now_ms - last_ingestion > retention_ms
}

/// Destination key prefix for one stream's export
///
/// Exports are namespaced by the calendar date of the invocation
/// (`YYYY/MM/DD`, zero-padded) followed by group and stream name, grouping a
/// run's exports together and avoiding collisions across reused names.
pub fn destination_prefix(run_started_at: DateTime<Utc>, group: &str, stream: &str) -> String {
    // Group names start with '/', which would produce an empty key segment.
    format!(
        "{:04}/{:02}/{:02}/{}/{}",
        run_started_at.year(),
        run_started_at.month(),
        run_started_at.day(),
        group.trim_start_matches('/'),
        stream.trim_start_matches('/'),
    )
}
