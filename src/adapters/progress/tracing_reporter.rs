//! Progress reporter that forwards events to `tracing`.

use tracing::{info, warn};

use crate::domain::foundation::SolveId;
use crate::ports::{ProcessingCallbackData, ProgressReporter};

/// Logs every progress event; failures at warn level.
#[derive(Debug, Clone, Default)]
pub struct TracingProgressReporter {
    solve_id: Option<SolveId>,
}

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every event with a solve id.
    pub fn for_solve(solve_id: SolveId) -> Self {
        Self {
            solve_id: Some(solve_id),
        }
    }
}

impl ProgressReporter for TracingProgressReporter {
    fn report(&self, data: ProcessingCallbackData) {
        let solve_id = self.solve_id.map(|id| id.to_string()).unwrap_or_default();
        if data.is_failure() {
            warn!(solve_id = %solve_id, cause = %data.status, "Solve failed");
        } else {
            info!(
                solve_id = %solve_id,
                progress = data.progress,
                status = %data.status,
                "Solve progress"
            );
        }
    }
}
