//! Export coordination
//!
//! The coordinator walks the target set sequentially, decides per stream what
//! still needs exporting, drives CloudWatch export tasks to completion under
//! the deadline governor, and commits watermarks as it goes.

pub mod coordinator;
pub mod deadline;
pub mod summary;
pub mod target;
pub mod window;

pub use coordinator::{ExportCoordinator, POLL_INTERVAL};
pub use deadline::{DeadlineGovernor, DEFAULT_FINALIZE_MARGIN};
pub use summary::ExportOutcome;
pub use target::{build_targets, ExportTarget};
pub use window::{ExportDecision, ExportWindow, SkipReason};
