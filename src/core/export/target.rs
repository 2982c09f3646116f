//! Target set assembly
//!
//! A target pairs a log group with its enumerated streams. The coordinator
//! treats the target list as read-only input; enumeration itself lives behind
//! the [`LogsClient`] collaborator.

use crate::adapters::cwlogs::LogsClient;
use crate::domain::stream::{LogGroup, LogStream};
use crate::domain::Result;
use serde::{Deserialize, Serialize};

/// One log group and the streams considered for export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTarget {
    pub log_group: LogGroup,
    pub log_streams: Vec<LogStream>,
}

/// Enumerate export targets for a list of log group name prefixes
///
/// Groups matching any prefix are collected (results concatenated across
/// prefixes), then each group's streams are enumerated ordered by most
/// recent ingestion.
///
/// # Errors
///
/// Any enumeration failure aborts target assembly; partial target lists are
/// never returned.
pub async fn build_targets(
    client: &dyn LogsClient,
    group_prefixes: &[String],
) -> Result<Vec<ExportTarget>> {
    let groups = client.describe_log_groups(group_prefixes).await?;

    let mut targets = Vec::with_capacity(groups.len());
    for group in groups {
        let streams = client.describe_log_streams(&group).await?;
        tracing::debug!(
            log_group = %group.name,
            stream_count = streams.len(),
            "Enumerated log streams"
        );
        targets.push(ExportTarget {
            log_group: group,
            log_streams: streams,
        });
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{LogGroupArn, LogStreamArn};

    #[test]
    fn test_target_serializes_like_invocation_response() {
        let target = ExportTarget {
            log_group: LogGroup {
                name: "/app/web".to_string(),
                arn: LogGroupArn::new("arn:aws:logs:::log-group:/app/web").unwrap(),
                retention_in_days: Some(30),
            },
            log_streams: vec![LogStream {
                name: "web-1".to_string(),
                arn: LogStreamArn::new("arn:aws:logs:::log-stream:web-1").unwrap(),
                creation_time: 1000,
                last_ingestion_time: Some(5000),
            }],
        };

        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["logGroup"]["name"], "/app/web");
        assert_eq!(json["logStreams"][0]["name"], "web-1");
    }
}
