//! Watermark store factory
//!
//! Selects and constructs a store backend from the configured store kind and
//! DSN. Backend selection is a closed set of tagged variants, not open-ended
//! dynamic registration.

use crate::adapters::store::dynamodb::DynamoDbStore;
use crate::adapters::store::s3::S3Store;
use crate::adapters::store::traits::WatermarkStore;
use crate::domain::errors::StoreError;
use crate::domain::Result;
use std::fmt;
use std::str::FromStr;

/// Watermark store backend kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Bulk backend: whole state as one S3 object
    S3,
    /// Record-oriented backend: one DynamoDB item per stream
    DynamoDb,
}

impl FromStr for StoreKind {
    type Err = StoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(Self::S3),
            "dynamodb" => Ok(Self::DynamoDb),
            other => Err(StoreError::UnsupportedBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S3 => write!(f, "s3"),
            Self::DynamoDb => write!(f, "dynamodb"),
        }
    }
}

/// Construct a watermark store for the configured backend
///
/// # Errors
///
/// Returns a configuration error if the DSN does not match the backend kind.
pub fn create_store(
    kind: StoreKind,
    dsn: &str,
    config: &aws_config::SdkConfig,
) -> Result<Box<dyn WatermarkStore>> {
    match kind {
        StoreKind::S3 => {
            tracing::info!(dsn, "Creating S3 watermark store");
            Ok(Box::new(S3Store::new(config, dsn)?))
        }
        StoreKind::DynamoDb => {
            tracing::info!(dsn, "Creating DynamoDB watermark store");
            Ok(Box::new(DynamoDbStore::new(config, dsn)?))
        }
    }
}
