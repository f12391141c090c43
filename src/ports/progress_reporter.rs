//! Progress Reporter Port - Callback channel from a running solve to its
//! observer.
//!
//! A solve reports once when the model is built, once after every alpha
//! value and once at completion. Failures are reported with the
//! [`FAILURE_PROGRESS`] sentinel and the cause as status.

use serde::{Deserialize, Serialize};

/// Progress value that marks a failed solve.
pub const FAILURE_PROGRESS: f64 = -1.0;

/// One progress event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingCallbackData {
    /// Fraction complete in [0, 1], or [`FAILURE_PROGRESS`].
    pub progress: f64,
    pub status: String,
}

impl ProcessingCallbackData {
    pub fn new(progress: f64, status: impl Into<String>) -> Self {
        Self {
            progress,
            status: status.into(),
        }
    }

    /// Failure event carrying the cause.
    pub fn failure(cause: impl Into<String>) -> Self {
        Self::new(FAILURE_PROGRESS, cause)
    }

    pub fn is_failure(&self) -> bool {
        self.progress == FAILURE_PROGRESS
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Port for observing solve progress.
///
/// Implementations must not block for long: they are called from inside the
/// solve loop.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, data: ProcessingCallbackData);
}

impl<F> ProgressReporter for F
where
    F: Fn(ProcessingCallbackData) + Send + Sync,
{
    fn report(&self, data: ProcessingCallbackData) {
        self(data)
    }
}
