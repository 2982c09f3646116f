//! Watermark store backends
//!
//! Two backends behind the [`WatermarkStore`] capability:
//!
//! - [`s3::S3Store`] - bulk backend, whole state as one JSON object
//! - [`dynamodb::DynamoDbStore`] - record-oriented backend (read/write
//!   operations currently unsupported)

pub mod dynamodb;
pub mod factory;
pub mod s3;
pub mod traits;

pub use factory::{create_store, StoreKind};
pub use traits::WatermarkStore;
