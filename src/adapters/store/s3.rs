//! S3 bulk watermark store
//!
//! Keeps the whole watermark collection in memory and reads/writes it as a
//! single JSON object: one GetObject at `initialize`, one PutObject at
//! `finalize`. `put` only mutates memory, so a run makes exactly one durable
//! write no matter how many streams it exports.

use crate::adapters::store::traits::WatermarkStore;
use crate::core::state::{Watermark, WatermarkSet};
use crate::domain::errors::StoreError;
use crate::domain::ids::LogStreamArn;
use crate::domain::Result;
use async_trait::async_trait;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use url::Url;

/// Parsed `s3://<bucket>/<key>` store location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub key: String,
}

impl S3Location {
    /// Parse a store DSN of the form `s3://<bucket>/<key>`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the scheme is not `s3` or the bucket
    /// or key part is missing.
    pub fn parse(dsn: &str) -> Result<Self> {
        let url = Url::parse(dsn).map_err(|e| StoreError::InvalidDsn(e.to_string()))?;

        if url.scheme() != "s3" {
            return Err(StoreError::InvalidDsn(format!(
                "expected s3:// scheme, got {}://",
                url.scheme()
            ))
            .into());
        }

        let bucket = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| StoreError::InvalidDsn("missing s3 bucket name".to_string()))?
            .to_string();

        let key = url.path().trim_start_matches('/').to_string();
        if key.is_empty() {
            return Err(StoreError::InvalidDsn("missing s3 object key".to_string()).into());
        }

        Ok(Self { bucket, key })
    }
}

/// Bulk watermark store backed by a single S3 object
pub struct S3Store {
    client: aws_sdk_s3::Client,
    location: S3Location,
    watermarks: WatermarkSet,
}

impl S3Store {
    /// Create a store from a shared AWS configuration and a store DSN
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the DSN is malformed.
    pub fn new(config: &aws_config::SdkConfig, dsn: &str) -> Result<Self> {
        Ok(Self {
            client: aws_sdk_s3::Client::new(config),
            location: S3Location::parse(dsn)?,
            watermarks: WatermarkSet::new(),
        })
    }
}

#[async_trait]
impl WatermarkStore for S3Store {
    async fn initialize(&mut self) -> Result<()> {
        let output = self
            .client
            .get_object()
            .bucket(&self.location.bucket)
            .key(&self.location.key)
            .send()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(err) if err.as_service_error().is_some_and(GetObjectError::is_no_such_key) => {
                tracing::info!(
                    bucket = %self.location.bucket,
                    key = %self.location.key,
                    "State object not found; starting with empty state"
                );
                self.watermarks = WatermarkSet::new();
                return Ok(());
            }
            Err(err) => return Err(StoreError::ReadFailed(err.to_string()).into()),
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .into_bytes();

        self.watermarks = WatermarkSet::from_json(&body)?;

        tracing::debug!(
            bucket = %self.location.bucket,
            key = %self.location.key,
            watermark_count = self.watermarks.len(),
            "State loaded"
        );

        Ok(())
    }

    async fn get(&self, stream_arn: &LogStreamArn) -> Result<Option<Watermark>> {
        Ok(self.watermarks.get(stream_arn).cloned())
    }

    async fn put(&mut self, watermark: Watermark) -> Result<()> {
        // Memory only; the durable write happens once in finalize.
        self.watermarks.upsert(watermark);
        Ok(())
    }

    async fn watermarks(&self) -> Result<Vec<Watermark>> {
        Ok(self.watermarks.to_records())
    }

    async fn finalize(&mut self) -> Result<()> {
        let body = self.watermarks.to_json()?;
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.location.bucket)
            .key(&self.location.key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        tracing::info!(
            bucket = %self.location.bucket,
            key = %self.location.key,
            size_bytes = size,
            "State stored"
        );

        Ok(())
    }
}
