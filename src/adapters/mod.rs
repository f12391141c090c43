//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `lp` - LP backend (good_lp)
//! - `progress` - Progress observers (tracing, tokio channel)
//! - `storage` - Problem files (JSON, YAML)

pub mod lp;
pub mod progress;
pub mod storage;

pub use lp::GoodLpSolver;
pub use progress::{ChannelProgressReporter, TracingProgressReporter};
pub use storage::{FileDatasetStore, ProblemFormat};
