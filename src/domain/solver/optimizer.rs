//! Alpha-level optimizer: one intermediate rank per robustness level.

use tracing::debug;

use super::CalculationsError;
use crate::domain::foundation::AlphaValue;
use crate::domain::model::RorModel;
use crate::domain::ranking::{AlternativeScore, IntermediateRank, Rank, ScoreTolerance};
use crate::ports::{LinearProgram, LinearProgramSolver, LpError, ObjectiveSense};

/// Solves the score extremes of every alternative and blends them by alpha.
///
/// For each alternative `x` two programs over the model's feasible region
/// give `min_score(x)` and `max_score(x)`; the alpha-level score is
/// `(1 - alpha) * min + alpha * max`. Each call is a pure function of the
/// model and the alpha value.
pub struct AlphaLevelOptimizer<'a> {
    solver: &'a dyn LinearProgramSolver,
}

impl<'a> AlphaLevelOptimizer<'a> {
    pub fn new(solver: &'a dyn LinearProgramSolver) -> Self {
        Self { solver }
    }

    pub fn optimize(
        &self,
        model: &RorModel,
        alpha: &AlphaValue,
    ) -> Result<IntermediateRank, CalculationsError> {
        let alternatives = model.dataset().alternatives();
        let mut scores = Vec::with_capacity(alternatives.len());

        for (index, alternative) in alternatives.iter().enumerate() {
            let failed = |cause| CalculationsError {
                alpha: alpha.clone(),
                alternative: Some(alternative.clone()),
                cause,
            };
            let min_score = self
                .extreme(model, index, ObjectiveSense::Minimize)
                .map_err(failed)?;
            let max_score = self
                .extreme(model, index, ObjectiveSense::Maximize)
                .map_err(failed)?;
            scores.push(AlternativeScore::blended(
                alternative.clone(),
                min_score,
                max_score,
                alpha.value(),
            ));
        }

        let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
        let rank = Rank::from_values(alternatives, &values, ScoreTolerance::from_eps(model.eps()));

        debug!(
            alpha = %alpha,
            alternatives = alternatives.len(),
            rank = %rank,
            "Alpha level solved"
        );
        Ok(IntermediateRank {
            alpha_value: alpha.clone(),
            rank,
            scores,
        })
    }

    fn extreme(
        &self,
        model: &RorModel,
        alternative_index: usize,
        sense: ObjectiveSense,
    ) -> Result<f64, LpError> {
        let program = LinearProgram {
            variables: model.variables(),
            constraints: model.constraints(),
            objective: model.score_expression(alternative_index),
            sense,
        };
        self.solver
            .solve(&program)
            .map(|solution| solution.objective_value)
    }
}
