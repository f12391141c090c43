//! Linear Program Solver Port - Interface for the LP backend.
//!
//! The alpha-level optimizer only states programs over the model's
//! variables and reads back optimal points. Which solver does the work is an
//! adapter concern.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::model::{LinearConstraint, LinearExpression, ModelVariable};

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

/// A linear program borrowed from a model.
#[derive(Debug, Clone, Copy)]
pub struct LinearProgram<'a> {
    pub variables: &'a [ModelVariable],
    pub constraints: &'a [LinearConstraint],
    pub objective: &'a LinearExpression,
    pub sense: ObjectiveSense,
}

/// An optimal point.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    pub objective_value: f64,
    /// Variable values, indexed like `LinearProgram::variables`.
    pub values: Vec<f64>,
}

/// Failures reported by an LP backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LpError {
    #[error("the constraint system is infeasible")]
    Infeasible,

    #[error("the objective is unbounded")]
    Unbounded,

    #[error("solver failure: {0}")]
    Failure(String),
}

impl LpError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LpError::Infeasible => ErrorCode::Infeasible,
            LpError::Unbounded | LpError::Failure(_) => ErrorCode::SolverFailure,
        }
    }
}

/// Port for solving linear programs.
///
/// Solving is CPU-bound and synchronous; callers that live on an async
/// runtime move the whole solve onto a blocking thread.
pub trait LinearProgramSolver: Send + Sync {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Solves the program to optimality.
    ///
    /// # Errors
    ///
    /// - `Infeasible` if no point satisfies the constraints
    /// - `Unbounded` if the objective has no finite optimum
    /// - `Failure` for any numerical or backend error
    fn solve(&self, program: &LinearProgram<'_>) -> Result<LpSolution, LpError>;
}
