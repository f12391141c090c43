//! Linear expressions and constraints over model variables.

use serde::Serialize;
use std::fmt;

use crate::domain::dataset::{PreferenceIntensityRelation, PreferenceRelation};

/// Index of a variable inside a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VariableId(usize);

impl VariableId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A bounded continuous decision variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelVariable {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

impl ModelVariable {
    /// A variable bounded to the unit interval.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: 0.0,
            upper: 1.0,
        }
    }
}

/// Sum of `coefficient * variable` terms. Terms on the same variable are
/// merged; zero coefficients are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinearExpression {
    terms: Vec<(VariableId, f64)>,
}

impl LinearExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Adds `coefficient * variable`.
    pub fn add_term(&mut self, variable: VariableId, coefficient: f64) {
        if coefficient == 0.0 {
            return;
        }
        match self.terms.iter().position(|(v, _)| *v == variable) {
            Some(position) => {
                self.terms[position].1 += coefficient;
                if self.terms[position].1 == 0.0 {
                    self.terms.remove(position);
                }
            }
            None => self.terms.push((variable, coefficient)),
        }
    }

    /// Adds `factor * other`.
    pub fn add_scaled(&mut self, other: &LinearExpression, factor: f64) {
        for (variable, coefficient) in &other.terms {
            self.add_term(*variable, coefficient * factor);
        }
    }

    /// `self - other`.
    pub fn minus(&self, other: &LinearExpression) -> LinearExpression {
        let mut result = self.clone();
        result.add_scaled(other, -1.0);
        result
    }

    pub fn terms(&self) -> &[(VariableId, f64)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the expression at a point indexed by variable.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|(variable, coefficient)| coefficient * values.get(variable.index()).copied().unwrap_or(0.0))
            .sum()
    }
}

/// Direction of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    GreaterOrEqual,
    LessOrEqual,
    Equal,
}

impl Comparison {
    /// Whether `lhs` compared to `rhs` holds within `tolerance`.
    pub fn holds(&self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Comparison::GreaterOrEqual => lhs >= rhs - tolerance,
            Comparison::LessOrEqual => lhs <= rhs + tolerance,
            Comparison::Equal => (lhs - rhs).abs() <= tolerance,
        }
    }
}

/// Why a constraint is part of the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintOrigin {
    /// Weights, or best marginal values, sum to one.
    Normalization,
    /// Marginal value of a criterion never decreases with the criterion value.
    Monotonicity { criterion: String },
    /// Marginal value of a criterion's worst level is zero.
    WorstValue { criterion: String },
    Preference { relation: PreferenceRelation },
    Intensity { relation: PreferenceIntensityRelation },
}

impl fmt::Display for ConstraintOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintOrigin::Normalization => write!(f, "normalization"),
            ConstraintOrigin::Monotonicity { criterion } => {
                write!(f, "monotonicity of {}", criterion)
            }
            ConstraintOrigin::WorstValue { criterion } => {
                write!(f, "worst value of {}", criterion)
            }
            ConstraintOrigin::Preference { relation } => write!(f, "{}", relation),
            ConstraintOrigin::Intensity { relation } => write!(f, "{}", relation),
        }
    }
}

/// `expression comparison rhs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearConstraint {
    pub expression: LinearExpression,
    pub comparison: Comparison,
    pub rhs: f64,
    pub origin: ConstraintOrigin,
}

impl LinearConstraint {
    /// Whether the point satisfies the constraint within `tolerance`.
    pub fn is_satisfied_by(&self, values: &[f64], tolerance: f64) -> bool {
        self.comparison
            .holds(self.expression.evaluate(values), self.rhs, tolerance)
    }
}
