//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LinearProgramSolver` - LP backend used by the alpha-level optimizer
//! - `ProgressReporter` - Observer of a running solve
//! - `DatasetStore` - Loading and saving of problems

mod dataset_store;
mod lp_solver;
mod progress_reporter;

pub use dataset_store::{DatasetStore, DatasetStoreError, ProblemDocument};
pub use lp_solver::{LinearProgram, LinearProgramSolver, LpError, LpSolution, ObjectiveSense};
pub use progress_reporter::{ProcessingCallbackData, ProgressReporter, FAILURE_PROGRESS};
