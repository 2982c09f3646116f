//! Export state tracking
//!
//! Watermarks record per-stream export progress so repeated invocations only
//! export newly ingested data. Durable persistence lives behind the
//! [`crate::adapters::store`] backends; this module owns the record model and
//! the in-memory collection.

pub mod watermark;

pub use watermark::{Watermark, WatermarkSet};
