//! External service adapters
//!
//! This module contains integrations with external collaborators:
//!
//! - [`cwlogs`] - CloudWatch Logs enumeration and export tasks
//! - [`store`] - Durable watermark store backends (S3, DynamoDB)

pub mod cwlogs;
pub mod store;
