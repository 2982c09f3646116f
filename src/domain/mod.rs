//! Domain models and types for logferry.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`LogGroupArn`], [`LogStreamArn`], [`TaskId`])
//! - **Log metadata models** ([`LogGroup`], [`LogStream`])
//! - **Error types** ([`FerryError`], [`CwLogsError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern to prevent mixing different ID kinds:
//!
//! ```rust
//! use logferry::domain::{LogStreamArn, TaskId};
//!
//! # fn example() -> Result<(), String> {
//! let stream = LogStreamArn::new("arn:aws:logs:::log-stream:web-1")?;
//! let task = TaskId::new("0123abcd")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: LogStreamArn = task;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod stream;

// Re-export commonly used types for convenience
pub use errors::{CwLogsError, FerryError, StoreError};
pub use ids::{LogGroupArn, LogStreamArn, TaskId};
pub use result::Result;
pub use stream::{LogGroup, LogStream};
