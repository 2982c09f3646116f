//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the AWS identifiers the exporter
//! passes around. Each type prevents accidental mixing of identifier kinds and
//! rejects empty values at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log group ARN newtype wrapper
///
/// Opaque identifier of a CloudWatch log group.
///
/// # Examples
///
/// ```
/// use logferry::domain::ids::LogGroupArn;
/// use std::str::FromStr;
///
/// let arn = LogGroupArn::from_str(
///     "arn:aws:logs:ap-northeast-1:123456789012:log-group:/app/web"
/// ).unwrap();
/// assert!(arn.as_str().ends_with("/app/web"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogGroupArn(String);

impl LogGroupArn {
    /// Creates a new LogGroupArn from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the ARN is empty or blank.
    pub fn new(arn: impl Into<String>) -> Result<Self, String> {
        let arn = arn.into();
        if arn.trim().is_empty() {
            return Err("log group ARN cannot be empty".to_string());
        }
        Ok(Self(arn))
    }

    /// Returns the ARN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LogGroupArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogGroupArn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LogGroupArn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Log stream ARN newtype wrapper
///
/// Opaque identifier of a CloudWatch log stream, globally unique within the
/// account and region. Watermarks are keyed by this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogStreamArn(String);

impl LogStreamArn {
    /// Creates a new LogStreamArn from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the ARN is empty or blank.
    pub fn new(arn: impl Into<String>) -> Result<Self, String> {
        let arn = arn.into();
        if arn.trim().is_empty() {
            return Err("log stream ARN cannot be empty".to_string());
        }
        Ok(Self(arn))
    }

    /// Returns the ARN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LogStreamArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogStreamArn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LogStreamArn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Export task identifier newtype wrapper
///
/// Identifier returned by CreateExportTask and used to poll task status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new TaskId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("task ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the task ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
