//! Model Module - The constraint system over unknown utility parameters.
//!
//! Every admissible utility model is a point of the polytope described by
//! [`RorModel::constraints`] and the variable bounds. Scores of alternatives
//! are linear in that point.

mod builder;
mod expression;
#[allow(clippy::module_inception)]
mod model;

pub use builder::ConstraintBuilder;
pub use expression::{
    Comparison, ConstraintOrigin, LinearConstraint, LinearExpression, ModelVariable, VariableId,
};
pub use model::RorModel;
