//! Domain error types
//!
//! This module defines the error hierarchy for logferry. All errors are
//! domain-specific and don't expose AWS SDK types; SDK failures are captured
//! as messages at the adapter boundary.

use thiserror::Error;

/// Main logferry error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum FerryError {
    /// Configuration-related errors (bad DSN, unsupported backend,
    /// missing required input). Fatal, never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CloudWatch Logs collaborator errors
    #[error("CloudWatch Logs error: {0}")]
    CloudWatch(#[from] CwLogsError),

    /// Watermark store errors
    #[error("State store error: {0}")]
    Store(#[from] StoreError),

    /// Export coordination errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// CloudWatch Logs-specific errors
///
/// Errors that occur when talking to the log service. These never retry
/// inside the engine; the invocation aborts and relies on external
/// re-triggering for eventual progress.
#[derive(Debug, Error)]
pub enum CwLogsError {
    /// Failed to enumerate log groups or streams
    #[error("Failed to describe log groups/streams: {0}")]
    DescribeFailed(String),

    /// Failed to submit an export task
    #[error("Failed to create export task: {0}")]
    CreateTaskFailed(String),

    /// Failed to query the status of an export task
    #[error("Failed to describe export task: {0}")]
    DescribeTaskFailed(String),

    /// The polled export task does not exist. Fatal: this is never
    /// treated as "still running".
    #[error("Export task not found: {0}")]
    TaskNotFound(String),

    /// The service returned a record missing a required field
    #[error("Incomplete response from CloudWatch Logs: {0}")]
    IncompleteRecord(String),
}

/// Watermark store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store DSN could not be parsed or is missing a required part
    #[error("Invalid store DSN: {0}")]
    InvalidDsn(String),

    /// The configured store backend is not recognized
    #[error("Unsupported store backend: {0}")]
    UnsupportedBackend(String),

    /// Failed to read durable state
    #[error("Failed to read state: {0}")]
    ReadFailed(String),

    /// Failed to persist durable state
    #[error("Failed to write state: {0}")]
    WriteFailed(String),

    /// The backend exists but does not implement this operation
    #[error("Operation not implemented for this store backend: {0}")]
    Unsupported(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for FerryError {
    fn from(err: std::io::Error) -> Self {
        FerryError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FerryError {
    fn from(err: serde_json::Error) -> Self {
        FerryError::Serialization(err.to_string())
    }
}
