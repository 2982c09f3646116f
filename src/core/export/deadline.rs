//! Deadline governor
//!
//! The invocation runs under a bounded execution budget. The governor marks a
//! cutoff at `deadline - finalize margin`; once the cutoff passes, the
//! coordinator stops polling and leaves remaining streams for the next
//! invocation. The margin reserves time to commit state and flush the store.

use std::time::{Duration, Instant};

/// Safety margin reserved for finalization before the hard deadline
pub const DEFAULT_FINALIZE_MARGIN: Duration = Duration::from_secs(30);

/// Early-termination policy for a single invocation
#[derive(Debug, Clone, Copy)]
pub struct DeadlineGovernor {
    cutoff: Instant,
}

impl DeadlineGovernor {
    /// Create a governor for a hard deadline with a finalize margin
    ///
    /// If the margin exceeds the time until the deadline, the cutoff is
    /// already in the past and the governor reports expiry immediately.
    pub fn new(deadline: Instant, finalize_margin: Duration) -> Self {
        let cutoff = deadline
            .checked_sub(finalize_margin)
            .unwrap_or_else(Instant::now);
        Self { cutoff }
    }

    /// Create a governor from an execution budget starting now
    pub fn from_budget(budget: Duration, finalize_margin: Duration) -> Self {
        Self::new(Instant::now() + budget, finalize_margin)
    }

    /// Whether the cutoff has passed and the invocation should wind down
    pub fn expired(&self) -> bool {
        Instant::now() >= self.cutoff
    }

    /// Time remaining until the cutoff, zero once expired
    ///
    /// Poll sleeps are capped at this value so the deadline is re-evaluated
    /// on every wake rather than after a fixed full sleep.
    pub fn remaining(&self) -> Duration {
        self.cutoff.saturating_duration_since(Instant::now())
    }
}
