//! Watermark store abstraction
//!
//! Backends are polymorphic over a small capability: load state, look up and
//! upsert individual watermarks, and persist durably. The bulk (S3) backend
//! holds the whole collection in memory between `initialize` and `finalize`;
//! a record-oriented backend would hit its medium per operation.

use crate::core::state::Watermark;
use crate::domain::ids::LogStreamArn;
use crate::domain::Result;
use async_trait::async_trait;

/// Watermark persistence capability
///
/// One instance owns all watermarks for the duration of one invocation.
/// The engine is the single writer; no concurrent access occurs under the
/// sequential processing model.
#[async_trait]
pub trait WatermarkStore: Send + Sync {
    /// Load existing state, or establish empty state if none exists
    ///
    /// Absence of durable state is not an error.
    async fn initialize(&mut self) -> Result<()>;

    /// Look up the watermark for a stream, `None` if never exported
    async fn get(&self, stream_arn: &LogStreamArn) -> Result<Option<Watermark>>;

    /// Insert or overwrite the watermark for its stream
    async fn put(&mut self, watermark: Watermark) -> Result<()>;

    /// List all watermarks currently known to the store
    async fn watermarks(&self) -> Result<Vec<Watermark>>;

    /// Persist the current state durably
    ///
    /// Called once at the end of a successful run; a run aborted by a fatal
    /// error never reaches this, deliberately discarding that run's commits.
    async fn finalize(&mut self) -> Result<()>;
}
