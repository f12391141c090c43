//! SolveProblemHandler - Command handler that loads a problem and ranks it.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task;
use tracing::info;

use crate::domain::aggregation::AggregatorKind;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::solver::{CancellationFlag, RorResult, RorSolver, SolveError};
use crate::ports::{DatasetStore, DatasetStoreError, LinearProgramSolver, ProblemDocument, ProgressReporter};

/// Command to solve a stored problem.
#[derive(Debug, Clone)]
pub struct SolveProblemCommand {
    pub problem_path: PathBuf,
    /// Overrides the aggregator stored with the problem.
    pub aggregator: Option<AggregatorKind>,
}

/// Result of a successful solve.
#[derive(Debug, Clone)]
pub struct SolveProblemResult {
    pub problem: ProblemDocument,
    pub result: RorResult,
}

#[derive(Debug, thiserror::Error)]
pub enum SolveProblemError {
    #[error("Failed to load problem: {0}")]
    Load(#[from] DatasetStoreError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("Solve worker failed: {0}")]
    Worker(String),
}

impl SolveProblemError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SolveProblemError::Load(err) => err.code(),
            SolveProblemError::Solve(err) => err.code(),
            SolveProblemError::Worker(_) => ErrorCode::InternalError,
        }
    }
}

impl From<SolveProblemError> for DomainError {
    fn from(err: SolveProblemError) -> Self {
        match err {
            SolveProblemError::Solve(err) => err.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

/// Handler for solving problems.
///
/// The solve itself is synchronous and CPU-bound; it runs on tokio's
/// blocking pool so the caller's runtime stays responsive.
pub struct SolveProblemHandler {
    solver: RorSolver,
    store: Arc<dyn DatasetStore>,
}

impl SolveProblemHandler {
    pub fn new(lp: Arc<dyn LinearProgramSolver>, store: Arc<dyn DatasetStore>) -> Self {
        Self {
            solver: RorSolver::new(lp),
            store,
        }
    }

    /// Caps NUMBER_OF_ALPHA_VALUES for every problem this handler solves.
    pub fn with_max_alpha_values(mut self, max: usize) -> Self {
        self.solver = self.solver.with_max_alpha_values(max);
        self
    }

    pub async fn handle(
        &self,
        cmd: SolveProblemCommand,
        progress: Arc<dyn ProgressReporter>,
        cancel: Option<CancellationFlag>,
    ) -> Result<SolveProblemResult, SolveProblemError> {
        // 1. Load the problem
        let problem = self.store.load(&cmd.problem_path).await?;
        let aggregator = cmd
            .aggregator
            .unwrap_or(problem.parameters.results_aggregator);
        info!(
            path = %cmd.problem_path.display(),
            alternatives = problem.dataset.alternative_count(),
            aggregator = %aggregator,
            "Problem loaded"
        );

        // 2. Solve on a blocking worker with owned copies
        let solver = self.solver.clone();
        let dataset = problem.dataset.clone();
        let parameters = problem.parameters.clone();
        let result = task::spawn_blocking(move || {
            solver.solve(
                &dataset,
                &parameters,
                aggregator,
                progress.as_ref(),
                cancel.as_ref(),
            )
        })
        .await
        .map_err(|e| SolveProblemError::Worker(e.to_string()))??;

        Ok(SolveProblemResult { problem, result })
    }
}
