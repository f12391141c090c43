//! The realized constraint system of one solve.

use serde::Serialize;

use super::{LinearConstraint, LinearExpression, ModelVariable};
use crate::domain::dataset::RorDataset;
use crate::domain::parameters::ValueFunctionKind;

/// Dataset plus the linear system every admissible utility model satisfies.
///
/// Built once per solve and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RorModel {
    pub(super) dataset: RorDataset,
    pub(super) value_function: ValueFunctionKind,
    pub(super) eps: f64,
    pub(super) variables: Vec<ModelVariable>,
    pub(super) constraints: Vec<LinearConstraint>,
    pub(super) scores: Vec<LinearExpression>,
}

impl RorModel {
    pub fn dataset(&self) -> &RorDataset {
        &self.dataset
    }

    pub fn value_function(&self) -> ValueFunctionKind {
        self.value_function
    }

    /// Strict-preference margin the model was built with.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn variables(&self) -> &[ModelVariable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Utility of an alternative as a linear expression of the variables.
    pub fn score_expression(&self, alternative_index: usize) -> &LinearExpression {
        &self.scores[alternative_index]
    }

    /// Utilities of every alternative at a point.
    pub fn evaluate_scores(&self, values: &[f64]) -> Vec<f64> {
        self.scores
            .iter()
            .map(|score| score.evaluate(values))
            .collect()
    }

    /// Whether a point satisfies every bound and constraint.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.variables.len()
            && self
                .variables
                .iter()
                .zip(values)
                .all(|(variable, value)| {
                    *value >= variable.lower - tolerance && *value <= variable.upper + tolerance
                })
            && self
                .constraints
                .iter()
                .all(|constraint| constraint.is_satisfied_by(values, tolerance))
    }
}
