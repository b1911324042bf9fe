//! Execution placement hint.

use serde::{Deserialize, Serialize};

/// Where bulk column operations run.
///
/// Placement never changes results, only how the work is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputePlacement {
    /// Run on the calling thread.
    #[default]
    Sequential,
    /// Split element-wise work across the rayon thread pool.
    Parallel,
}

impl ComputePlacement {
    /// Check if work should be spread across threads.
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        matches!(self, Self::Parallel)
    }
}
