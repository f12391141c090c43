//! good_lp Solver Adapter
//!
//! Solves linear programs with the pure-Rust `microlp` backend bundled by
//! good_lp, so no native solver library is needed.

use good_lp::{
    default_solver, variable, Constraint, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use tracing::trace;

use crate::domain::model::{Comparison, LinearExpression};
use crate::ports::{LinearProgram, LinearProgramSolver, LpError, LpSolution, ObjectiveSense};

/// LP backend built on good_lp.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn to_expression(expression: &LinearExpression, variables: &[Variable]) -> Expression {
    let mut result = Expression::with_capacity(expression.terms().len());
    for (variable, coefficient) in expression.terms() {
        result.add_mul(*coefficient, variables[variable.index()]);
    }
    result
}

fn to_constraint(expression: Expression, comparison: Comparison, rhs: f64) -> Constraint {
    match comparison {
        Comparison::GreaterOrEqual => expression.geq(rhs),
        Comparison::LessOrEqual => expression.leq(rhs),
        Comparison::Equal => expression.eq(rhs),
    }
}

fn to_lp_error(err: ResolutionError) -> LpError {
    match err {
        ResolutionError::Infeasible => LpError::Infeasible,
        ResolutionError::Unbounded => LpError::Unbounded,
        other => LpError::Failure(other.to_string()),
    }
}

impl LinearProgramSolver for GoodLpSolver {
    fn name(&self) -> &'static str {
        "good_lp/microlp"
    }

    fn solve(&self, program: &LinearProgram<'_>) -> Result<LpSolution, LpError> {
        let mut vars = ProblemVariables::new();
        let variables: Vec<Variable> = program
            .variables
            .iter()
            .map(|v| vars.add(variable().min(v.lower).max(v.upper)))
            .collect();

        let objective = to_expression(program.objective, &variables);
        let mut problem = match program.sense {
            ObjectiveSense::Minimize => vars.minimise(objective),
            ObjectiveSense::Maximize => vars.maximise(objective),
        }
        .using(default_solver);

        for constraint in program.constraints {
            // Constant rows cannot be handed to the backend.
            if constraint.expression.is_empty() {
                if constraint.comparison.holds(0.0, constraint.rhs, 0.0) {
                    continue;
                }
                return Err(LpError::Infeasible);
            }
            let expression = to_expression(&constraint.expression, &variables);
            problem = problem.with(to_constraint(expression, constraint.comparison, constraint.rhs));
        }

        let solution = problem.solve().map_err(to_lp_error)?;
        let values: Vec<f64> = variables.iter().map(|v| solution.value(*v)).collect();
        let objective_value = program.objective.evaluate(&values);

        trace!(
            variables = values.len(),
            constraints = program.constraints.len(),
            objective = objective_value,
            "LP solved"
        );
        Ok(LpSolution {
            objective_value,
            values,
        })
    }
}
