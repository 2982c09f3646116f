//! Export coordinator - drives per-stream export to completion
//!
//! For each stream in the target set the coordinator applies the retention
//! filter, computes the export window against the stored watermark, submits
//! an export task, polls it to completion under the deadline governor, and
//! commits the updated watermark. Streams and targets are processed strictly
//! sequentially: CloudWatch allows one running export task per account, so
//! parallel submission would need admission control this design doesn't have.

use crate::adapters::cwlogs::{ExportTaskRequest, LogsClient, TaskStatus};
use crate::adapters::store::WatermarkStore;
use crate::core::export::deadline::DeadlineGovernor;
use crate::core::export::summary::ExportOutcome;
use crate::core::export::target::ExportTarget;
use crate::core::export::window::{
    beyond_retention, decide_export, destination_prefix, ExportDecision, ExportWindow, SkipReason,
};
use crate::core::state::Watermark;
use crate::domain::errors::CwLogsError;
use crate::domain::stream::LogStream;
use crate::domain::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Interval between export task status polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Export coordinator
pub struct ExportCoordinator {
    client: Arc<dyn LogsClient>,
    destination_bucket: String,
    poll_interval: Duration,
}

impl ExportCoordinator {
    /// Create a coordinator exporting into the given destination bucket
    pub fn new(client: Arc<dyn LogsClient>, destination_bucket: impl Into<String>) -> Self {
        Self {
            client,
            destination_bucket: destination_bucket.into(),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Override the poll interval. Intended for tests.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Run the export over the target set
    ///
    /// Watermarks are committed to the store per stream; the durable flush is
    /// the caller's responsibility via [`WatermarkStore::finalize`] after this
    /// returns `Ok`. When the deadline cutoff passes mid-poll, the current
    /// stream's watermark is still committed (with the in-flight task id) and
    /// the remaining streams are skipped; the run is reported as successful so
    /// that committed progress gets flushed. Any other failure aborts the run
    /// without committing the in-progress stream.
    pub async fn export(
        &self,
        targets: &[ExportTarget],
        store: &mut dyn WatermarkStore,
        governor: &DeadlineGovernor,
    ) -> Result<ExportOutcome> {
        let run_started = Instant::now();
        let started_at = Utc::now();
        let now_ms = started_at.timestamp_millis();
        let mut outcome = ExportOutcome::default();

        'targets: for target in targets {
            for stream in &target.log_streams {
                if beyond_retention(now_ms, &target.log_group, stream) {
                    tracing::info!(
                        log_stream_arn = %stream.arn,
                        log_stream = %stream.name,
                        retention_in_days = target.log_group.retention_in_days,
                        "Skipping export: all stream contents are beyond their retention period"
                    );
                    outcome.streams_skipped += 1;
                    continue;
                }

                let watermark = store.get(&stream.arn).await?;
                let window = match decide_export(watermark.as_ref(), stream) {
                    ExportDecision::Skip(reason) => {
                        self.log_skip(stream, reason);
                        outcome.streams_skipped += 1;
                        continue;
                    }
                    ExportDecision::Export(window) => window,
                };

                let task_id = self.submit(target, stream, window, started_at).await?;
                let deadline_reached = self.poll_until_complete(&task_id, governor).await?;

                // Committed on both the completed and the abandoned path, with
                // the run start time rather than the task completion time.
                // Forward progress is favored over strict accuracy here: an
                // abandoned task may still be writing when this timestamp is
                // recorded.
                store
                    .put(Watermark {
                        log_group_arn: target.log_group.arn.clone(),
                        log_stream_arn: stream.arn.clone(),
                        exported_at: now_ms,
                        task_id,
                    })
                    .await?;
                outcome.streams_exported += 1;

                if deadline_reached {
                    outcome.deadline_reached = true;
                    break 'targets;
                }
            }
        }

        Ok(outcome.with_duration(run_started.elapsed()))
    }

    async fn submit(
        &self,
        target: &ExportTarget,
        stream: &LogStream,
        window: ExportWindow,
        started_at: chrono::DateTime<Utc>,
    ) -> Result<crate::domain::TaskId> {
        tracing::info!(
            log_stream_arn = %stream.arn,
            log_stream = %stream.name,
            from = window.from,
            to = window.to,
            "Exporting"
        );

        let prefix = destination_prefix(started_at, &target.log_group.name, &stream.name);
        self.client
            .create_export_task(ExportTaskRequest {
                log_group_name: &target.log_group.name,
                log_stream_name_prefix: &stream.name,
                from: window.from,
                to: window.to,
                destination_bucket: &self.destination_bucket,
                destination_prefix: &prefix,
            })
            .await
    }

    /// Poll a submitted task until completion or the deadline cutoff
    ///
    /// Returns `Ok(true)` when the cutoff passed while the task was still in
    /// flight; the task itself is abandoned, never cancelled. A task the
    /// service no longer knows about is a fatal error, not "still running".
    async fn poll_until_complete(
        &self,
        task_id: &crate::domain::TaskId,
        governor: &DeadlineGovernor,
    ) -> Result<bool> {
        loop {
            if governor.expired() {
                tracing::warn!(
                    task_id = %task_id,
                    "Export task not completed before the deadline cutoff; finalizing with the task still in flight"
                );
                return Ok(true);
            }

            match self.client.export_task_status(task_id).await? {
                TaskStatus::Completed => return Ok(false),
                TaskStatus::NotFound => {
                    return Err(CwLogsError::TaskNotFound(task_id.to_string()).into());
                }
                TaskStatus::InProgress => {
                    let wait = self.poll_interval.min(governor.remaining());
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }

    fn log_skip(&self, stream: &LogStream, reason: SkipReason) {
        match reason {
            SkipReason::AlreadyExported => tracing::info!(
                log_stream_arn = %stream.arn,
                log_stream = %stream.name,
                "Skipping export: data has already been exported"
            ),
            SkipReason::NoIngestedEvents => tracing::info!(
                log_stream_arn = %stream.arn,
                log_stream = %stream.name,
                "Skipping export: stream has no ingested events"
            ),
        }
    }
}
