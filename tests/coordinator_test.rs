//! Scenario tests for the export coordinator
//!
//! Drives the engine against an in-memory logs client and watermark store,
//! covering first export, resume, skip, retention, deadline abandonment, and
//! fatal polling errors.

use async_trait::async_trait;
use chrono::Utc;
use logferry::adapters::cwlogs::{ExportTaskRequest, LogsClient, TaskStatus};
use logferry::adapters::store::WatermarkStore;
use logferry::core::export::{DeadlineGovernor, ExportCoordinator, ExportTarget};
use logferry::core::state::{Watermark, WatermarkSet};
use logferry::domain::{FerryError, LogGroup, LogGroupArn, LogStream, LogStreamArn, TaskId};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Owned copy of one export task submission
#[derive(Debug, Clone)]
struct Submission {
    log_group_name: String,
    log_stream_name_prefix: String,
    from: i64,
    to: i64,
    destination_bucket: String,
    destination_prefix: String,
}

/// In-memory logs client with scripted task statuses
struct MockLogsClient {
    submissions: Mutex<Vec<Submission>>,
    /// Per-task status scripts; tasks without a script report the default
    status_scripts: Mutex<HashMap<String, VecDeque<TaskStatus>>>,
    default_status: Mutex<TaskStatus>,
    next_task: AtomicUsize,
}

impl MockLogsClient {
    fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            status_scripts: Mutex::new(HashMap::new()),
            default_status: Mutex::new(TaskStatus::Completed),
            next_task: AtomicUsize::new(0),
        }
    }

    fn with_default_status(self, status: TaskStatus) -> Self {
        *self.default_status.lock().unwrap() = status;
        self
    }

    fn script_status(&self, task_id: &str, statuses: &[TaskStatus]) {
        self.status_scripts
            .lock()
            .unwrap()
            .insert(task_id.to_string(), statuses.iter().copied().collect());
    }

    fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogsClient for MockLogsClient {
    async fn describe_log_groups(&self, _prefixes: &[String]) -> logferry::domain::Result<Vec<LogGroup>> {
        Ok(Vec::new())
    }

    async fn describe_log_streams(&self, _group: &LogGroup) -> logferry::domain::Result<Vec<LogStream>> {
        Ok(Vec::new())
    }

    async fn create_export_task(
        &self,
        request: ExportTaskRequest<'_>,
    ) -> logferry::domain::Result<TaskId> {
        self.submissions.lock().unwrap().push(Submission {
            log_group_name: request.log_group_name.to_string(),
            log_stream_name_prefix: request.log_stream_name_prefix.to_string(),
            from: request.from,
            to: request.to,
            destination_bucket: request.destination_bucket.to_string(),
            destination_prefix: request.destination_prefix.to_string(),
        });

        let n = self.next_task.fetch_add(1, Ordering::SeqCst);
        Ok(TaskId::new(format!("task-{n}")).unwrap())
    }

    async fn export_task_status(&self, task_id: &TaskId) -> logferry::domain::Result<TaskStatus> {
        let mut scripts = self.status_scripts.lock().unwrap();
        if let Some(script) = scripts.get_mut(task_id.as_str()) {
            if let Some(status) = script.pop_front() {
                return Ok(status);
            }
        }
        Ok(*self.default_status.lock().unwrap())
    }
}

/// In-memory watermark store recording whether finalize ran
#[derive(Default)]
struct MemoryStore {
    watermarks: WatermarkSet,
    finalized: bool,
}

impl MemoryStore {
    fn with_watermark(mut self, watermark: Watermark) -> Self {
        self.watermarks.upsert(watermark);
        self
    }
}

#[async_trait]
impl WatermarkStore for MemoryStore {
    async fn initialize(&mut self) -> logferry::domain::Result<()> {
        Ok(())
    }

    async fn get(&self, stream_arn: &LogStreamArn) -> logferry::domain::Result<Option<Watermark>> {
        Ok(self.watermarks.get(stream_arn).cloned())
    }

    async fn put(&mut self, watermark: Watermark) -> logferry::domain::Result<()> {
        self.watermarks.upsert(watermark);
        Ok(())
    }

    async fn watermarks(&self) -> logferry::domain::Result<Vec<Watermark>> {
        Ok(self.watermarks.to_records())
    }

    async fn finalize(&mut self) -> logferry::domain::Result<()> {
        self.finalized = true;
        Ok(())
    }
}

fn group(name: &str, retention: Option<i32>) -> LogGroup {
    LogGroup {
        name: name.to_string(),
        arn: LogGroupArn::new(format!("arn:aws:logs:::log-group:{name}")).unwrap(),
        retention_in_days: retention,
    }
}

fn stream(name: &str, creation: i64, last_ingestion: Option<i64>) -> LogStream {
    LogStream {
        name: name.to_string(),
        arn: LogStreamArn::new(format!("arn:aws:logs:::log-stream:{name}")).unwrap(),
        creation_time: creation,
        last_ingestion_time: last_ingestion,
    }
}

fn target(group_name: &str, retention: Option<i32>, streams: Vec<LogStream>) -> ExportTarget {
    ExportTarget {
        log_group: group(group_name, retention),
        log_streams: streams,
    }
}

fn watermark(stream_name: &str, exported_at: i64) -> Watermark {
    Watermark {
        log_group_arn: LogGroupArn::new("arn:aws:logs:::log-group:/app/web").unwrap(),
        log_stream_arn: LogStreamArn::new(format!("arn:aws:logs:::log-stream:{stream_name}"))
            .unwrap(),
        exported_at,
        task_id: TaskId::new("task-prior").unwrap(),
    }
}

fn generous_governor() -> DeadlineGovernor {
    DeadlineGovernor::from_budget(Duration::from_secs(600), Duration::ZERO)
}

#[tokio::test]
async fn first_export_covers_creation_to_last_ingestion() {
    let client = Arc::new(MockLogsClient::new());
    let mut store = MemoryStore::default();
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(5000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    let before_ms = Utc::now().timestamp_millis();
    let outcome = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();
    let after_ms = Utc::now().timestamp_millis();

    let submissions = client.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].from, 1000);
    assert_eq!(submissions[0].to, 5000);
    assert_eq!(submissions[0].log_group_name, "/app/web");
    assert_eq!(submissions[0].log_stream_name_prefix, "web-1");
    assert_eq!(submissions[0].destination_bucket, "log-exports");
    assert!(submissions[0].destination_prefix.ends_with("/app/web/web-1"));

    let arn = LogStreamArn::new("arn:aws:logs:::log-stream:web-1").unwrap();
    let committed = store.get(&arn).await.unwrap().expect("watermark committed");
    assert!(committed.exported_at >= before_ms && committed.exported_at <= after_ms);
    assert_eq!(committed.task_id.as_str(), "task-0");

    assert_eq!(outcome.streams_exported, 1);
    assert!(!outcome.deadline_reached);
}

#[tokio::test]
async fn covered_stream_submits_nothing_and_keeps_watermark() {
    let client = Arc::new(MockLogsClient::new());
    let prior = watermark("web-1", 5000);
    let mut store = MemoryStore::default().with_watermark(prior.clone());
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(5000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    let outcome = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();

    assert!(client.submissions().is_empty());
    assert_eq!(outcome.streams_exported, 0);
    assert_eq!(outcome.streams_skipped, 1);

    let arn = LogStreamArn::new("arn:aws:logs:::log-stream:web-1").unwrap();
    assert_eq!(store.get(&arn).await.unwrap(), Some(prior));
}

#[tokio::test]
async fn resume_starts_exactly_at_watermark() {
    let client = Arc::new(MockLogsClient::new());
    let mut store = MemoryStore::default().with_watermark(watermark("web-1", 3000));
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(5000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();

    let submissions = client.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].from, 3000);
    assert_eq!(submissions[0].to, 5000);
}

#[tokio::test]
async fn second_run_without_new_ingestion_submits_nothing() {
    let client = Arc::new(MockLogsClient::new());
    let mut store = MemoryStore::default();
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(5000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();
    assert_eq!(client.submissions().len(), 1);

    // Same metadata, no new ingestion: the committed watermark covers it.
    let outcome = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();

    assert_eq!(client.submissions().len(), 1);
    assert_eq!(outcome.streams_exported, 0);
    assert_eq!(outcome.streams_skipped, 1);
}

#[tokio::test]
async fn stream_beyond_retention_is_skipped_regardless_of_watermark() {
    let client = Arc::new(MockLogsClient::new());
    let mut store = MemoryStore::default();
    let now_ms = Utc::now().timestamp_millis();
    let targets = vec![target(
        "/app/web",
        Some(7),
        vec![stream("web-1", 0, Some(now_ms - 8 * DAY_MS))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    let outcome = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();

    assert!(client.submissions().is_empty());
    assert_eq!(outcome.streams_skipped, 1);
}

#[tokio::test]
async fn stream_without_events_is_skipped() {
    let client = Arc::new(MockLogsClient::new());
    let mut store = MemoryStore::default();
    let targets = vec![target("/app/web", None, vec![stream("web-1", 1000, None)])];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    let outcome = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();

    assert!(client.submissions().is_empty());
    assert_eq!(outcome.streams_skipped, 1);
}

#[tokio::test]
async fn deadline_mid_poll_commits_current_stream_and_stops() {
    let now_ms = Utc::now().timestamp_millis();
    let client = Arc::new(MockLogsClient::new().with_default_status(TaskStatus::InProgress));
    // Stream #1's task completes immediately; #2's never does.
    client.script_status("task-0", &[TaskStatus::Completed]);

    let mut store = MemoryStore::default();
    let targets = vec![target(
        "/app/web",
        None,
        vec![
            stream("web-1", 1000, Some(now_ms - 1000)),
            stream("web-2", 1000, Some(now_ms - 1000)),
            stream("web-3", 1000, Some(now_ms - 1000)),
        ],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports")
        .with_poll_interval(Duration::from_millis(10));
    let governor = DeadlineGovernor::from_budget(Duration::from_millis(100), Duration::ZERO);

    let outcome = coordinator
        .export(&targets, &mut store, &governor)
        .await
        .unwrap();

    // Stream #3 was never attempted.
    assert_eq!(client.submissions().len(), 2);
    assert!(outcome.deadline_reached);
    assert_eq!(outcome.streams_exported, 2);

    // Stream #2's watermark carries the in-flight task id.
    let arn = LogStreamArn::new("arn:aws:logs:::log-stream:web-2").unwrap();
    let committed = store.get(&arn).await.unwrap().expect("watermark committed");
    assert_eq!(committed.task_id.as_str(), "task-1");

    // The deadline path is a successful run, so the store still flushes.
    store.finalize().await.unwrap();
    assert!(store.finalized);
}

#[tokio::test]
async fn commits_run_start_watermark_when_deadline_abandons_inflight_task() {
    // Deliberate trade-off preserved from the original design: the watermark
    // records the run start time even though the abandoned task may not have
    // finished writing by then.
    let now_ms = Utc::now().timestamp_millis();
    let client = Arc::new(MockLogsClient::new().with_default_status(TaskStatus::InProgress));
    let mut store = MemoryStore::default();
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(now_ms - 1000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    // Cutoff already passed: the task is abandoned before the first poll.
    let governor = DeadlineGovernor::from_budget(Duration::ZERO, Duration::from_secs(30));

    let before_ms = Utc::now().timestamp_millis();
    let outcome = coordinator
        .export(&targets, &mut store, &governor)
        .await
        .unwrap();
    let after_ms = Utc::now().timestamp_millis();

    assert_eq!(client.submissions().len(), 1);
    assert!(outcome.deadline_reached);

    let arn = LogStreamArn::new("arn:aws:logs:::log-stream:web-1").unwrap();
    let committed = store.get(&arn).await.unwrap().expect("watermark committed");
    assert!(committed.exported_at >= before_ms && committed.exported_at <= after_ms);
    assert_eq!(committed.task_id.as_str(), "task-0");
}

#[tokio::test]
async fn vanished_task_is_fatal_and_commits_nothing() {
    let now_ms = Utc::now().timestamp_millis();
    let client = Arc::new(MockLogsClient::new());
    client.script_status("task-0", &[TaskStatus::NotFound]);

    let mut store = MemoryStore::default();
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(now_ms - 1000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports");
    let err = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap_err();

    assert!(matches!(err, FerryError::CloudWatch(_)));
    assert!(err.to_string().contains("task-0"));

    let arn = LogStreamArn::new("arn:aws:logs:::log-stream:web-1").unwrap();
    assert!(store.get(&arn).await.unwrap().is_none());
    assert!(!store.finalized);
}

#[tokio::test]
async fn in_progress_task_is_polled_until_completed() {
    let now_ms = Utc::now().timestamp_millis();
    let client = Arc::new(MockLogsClient::new());
    client.script_status(
        "task-0",
        &[
            TaskStatus::InProgress,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ],
    );

    let mut store = MemoryStore::default();
    let targets = vec![target(
        "/app/web",
        None,
        vec![stream("web-1", 1000, Some(now_ms - 1000))],
    )];

    let coordinator = ExportCoordinator::new(client.clone(), "log-exports")
        .with_poll_interval(Duration::from_millis(5));
    let outcome = coordinator
        .export(&targets, &mut store, &generous_governor())
        .await
        .unwrap();

    assert_eq!(outcome.streams_exported, 1);
    assert!(!outcome.deadline_reached);
}
