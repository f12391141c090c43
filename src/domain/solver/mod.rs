//! Solver Module - The alpha-level robustness sweep and the solve entry point.
//!
//! `RorSolver::solve` validates the parameters, builds the constraint model,
//! runs the [`AlphaLevelOptimizer`] once per alpha value and hands the
//! intermediate ranks to the configured aggregator.

mod errors;
mod optimizer;
mod result;
#[allow(clippy::module_inception)]
mod solver;

pub use errors::{CalculationsError, SolveError};
pub use optimizer::AlphaLevelOptimizer;
pub use result::{ResultRow, ResultTable, RorResult};
pub use solver::{CancellationFlag, RorSolver};
