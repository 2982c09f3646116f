//! CloudWatch Logs client
//!
//! Defines the [`LogsClient`] capability the engine depends on and the
//! production implementation backed by the AWS SDK. The trait keeps the
//! coordinator testable with in-memory fakes and keeps SDK types out of the
//! core.

use crate::domain::errors::CwLogsError;
use crate::domain::ids::{LogGroupArn, LogStreamArn, TaskId};
use crate::domain::stream::{LogGroup, LogStream};
use crate::domain::Result;
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::types::{ExportTaskStatusCode, OrderBy};

/// Status of a submitted export task
///
/// Three-valued on purpose: "not found" must be distinguished from "in
/// progress" — a vanished task is fatal, not pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The service has no task with this identifier
    NotFound,
    /// The task exists and has not completed
    InProgress,
    /// The task completed
    Completed,
}

/// Parameters for one export task submission
#[derive(Debug, Clone, Copy)]
pub struct ExportTaskRequest<'a> {
    pub log_group_name: &'a str,
    pub log_stream_name_prefix: &'a str,
    /// Window start, epoch milliseconds
    pub from: i64,
    /// Window end, epoch milliseconds (the stream's last ingestion time)
    pub to: i64,
    pub destination_bucket: &'a str,
    pub destination_prefix: &'a str,
}

/// Log source collaborator consumed by the engine
#[async_trait]
pub trait LogsClient: Send + Sync {
    /// Enumerate log groups matching any of the name prefixes
    ///
    /// Results are concatenated across prefixes, fully paginated.
    async fn describe_log_groups(&self, prefixes: &[String]) -> Result<Vec<LogGroup>>;

    /// Enumerate a group's streams ordered by most recent ingestion
    async fn describe_log_streams(&self, group: &LogGroup) -> Result<Vec<LogStream>>;

    /// Submit an export task and return its identifier
    async fn create_export_task(&self, request: ExportTaskRequest<'_>) -> Result<TaskId>;

    /// Query the status of a previously submitted export task
    async fn export_task_status(&self, task_id: &TaskId) -> Result<TaskStatus>;
}

/// Production [`LogsClient`] backed by the AWS SDK
pub struct CloudWatchLogsClient {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogsClient {
    /// Create a client from a shared AWS configuration
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudwatchlogs::Client::new(config),
        }
    }
}

#[async_trait]
impl LogsClient for CloudWatchLogsClient {
    async fn describe_log_groups(&self, prefixes: &[String]) -> Result<Vec<LogGroup>> {
        let mut groups = Vec::new();

        for prefix in prefixes {
            let mut pages = self
                .client
                .describe_log_groups()
                .log_group_name_prefix(prefix)
                .into_paginator()
                .send();

            while let Some(page) = pages.next().await {
                let page = page.map_err(|e| CwLogsError::DescribeFailed(e.to_string()))?;
                for group in page.log_groups() {
                    let (Some(name), Some(arn)) = (group.log_group_name(), group.arn()) else {
                        tracing::warn!(
                            log_group = ?group.log_group_name(),
                            "Dropping log group with missing name or ARN"
                        );
                        continue;
                    };
                    groups.push(LogGroup {
                        name: name.to_string(),
                        arn: LogGroupArn::new(arn)
                            .map_err(CwLogsError::IncompleteRecord)?,
                        retention_in_days: group.retention_in_days(),
                    });
                }
            }
        }

        Ok(groups)
    }

    async fn describe_log_streams(&self, group: &LogGroup) -> Result<Vec<LogStream>> {
        let mut streams = Vec::new();

        let mut pages = self
            .client
            .describe_log_streams()
            .log_group_name(&group.name)
            .order_by(OrderBy::LastEventTime)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| CwLogsError::DescribeFailed(e.to_string()))?;
            for stream in page.log_streams() {
                let (Some(name), Some(arn), Some(creation_time)) = (
                    stream.log_stream_name(),
                    stream.arn(),
                    stream.creation_time(),
                ) else {
                    tracing::warn!(
                        log_group = %group.name,
                        log_stream = ?stream.log_stream_name(),
                        "Dropping log stream with missing name, ARN, or creation time"
                    );
                    continue;
                };
                streams.push(LogStream {
                    name: name.to_string(),
                    arn: LogStreamArn::new(arn)
                        .map_err(CwLogsError::IncompleteRecord)?,
                    creation_time,
                    last_ingestion_time: stream.last_ingestion_time(),
                });
            }
        }

        Ok(streams)
    }

    async fn create_export_task(&self, request: ExportTaskRequest<'_>) -> Result<TaskId> {
        let output = self
            .client
            .create_export_task()
            .log_group_name(request.log_group_name)
            .log_stream_name_prefix(request.log_stream_name_prefix)
            .from(request.from)
            .to(request.to)
            .destination(request.destination_bucket)
            .destination_prefix(request.destination_prefix)
            .send()
            .await
            .map_err(|e| CwLogsError::CreateTaskFailed(e.to_string()))?;

        let task_id = output.task_id().ok_or_else(|| {
            CwLogsError::IncompleteRecord("CreateExportTask returned no task ID".to_string())
        })?;

        Ok(TaskId::new(task_id).map_err(CwLogsError::IncompleteRecord)?)
    }

    async fn export_task_status(&self, task_id: &TaskId) -> Result<TaskStatus> {
        let output = self
            .client
            .describe_export_tasks()
            .task_id(task_id.as_str())
            .send()
            .await
            .map_err(|e| CwLogsError::DescribeTaskFailed(e.to_string()))?;

        let Some(task) = output.export_tasks().first() else {
            return Ok(TaskStatus::NotFound);
        };

        let completed = task
            .status()
            .and_then(|status| status.code())
            .map(|code| *code == ExportTaskStatusCode::Completed)
            .unwrap_or(false);

        if completed {
            Ok(TaskStatus::Completed)
        } else {
            Ok(TaskStatus::InProgress)
        }
    }
}
