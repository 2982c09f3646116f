//! DynamoDB record-oriented watermark store
//!
//! Addresses individual watermark records by stream ARN against a table.
//! The read/write operations are not implemented: they fail loudly with an
//! unsupported-operation error rather than silently succeeding, so selecting
//! this backend surfaces immediately at the first lookup.

use crate::adapters::store::traits::WatermarkStore;
use crate::core::state::Watermark;
use crate::domain::errors::StoreError;
use crate::domain::ids::LogStreamArn;
use crate::domain::Result;
use async_trait::async_trait;
use url::Url;

/// Record-oriented watermark store backed by a DynamoDB table
pub struct DynamoDbStore {
    #[allow(dead_code)] // Held for when per-record operations land
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoDbStore {
    /// Create a store from a shared AWS configuration and a store DSN
    ///
    /// The DSN has the form `dynamodb://<table>`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the DSN is malformed or names no table.
    pub fn new(config: &aws_config::SdkConfig, dsn: &str) -> Result<Self> {
        Ok(Self {
            client: aws_sdk_dynamodb::Client::new(config),
            table: table_from_dsn(dsn)?,
        })
    }

    /// The table this store addresses
    pub fn table(&self) -> &str {
        &self.table
    }

    fn unsupported(operation: &str) -> StoreError {
        StoreError::Unsupported(format!("DynamoDB store does not implement {operation}"))
    }
}

/// Parse the table name out of a `dynamodb://<table>` DSN
pub fn table_from_dsn(dsn: &str) -> Result<String> {
    let url = Url::parse(dsn).map_err(|e| StoreError::InvalidDsn(e.to_string()))?;

    if url.scheme() != "dynamodb" {
        return Err(StoreError::InvalidDsn(format!(
            "expected dynamodb:// scheme, got {}://",
            url.scheme()
        ))
        .into());
    }

    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .ok_or_else(|| StoreError::InvalidDsn("missing dynamodb table name".to_string()).into())
}

#[async_trait]
impl WatermarkStore for DynamoDbStore {
    async fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    async fn get(&self, _stream_arn: &LogStreamArn) -> Result<Option<Watermark>> {
        Err(Self::unsupported("get").into())
    }

    async fn put(&mut self, _watermark: Watermark) -> Result<()> {
        Err(Self::unsupported("put").into())
    }

    async fn watermarks(&self) -> Result<Vec<Watermark>> {
        Err(Self::unsupported("watermarks").into())
    }

    async fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}
