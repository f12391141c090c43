//! Translates a dataset and its stated relations into a linear system.

use tracing::debug;

use super::{
    Comparison, ConstraintOrigin, LinearConstraint, LinearExpression, ModelVariable, RorModel,
    VariableId,
};
use crate::domain::dataset::{DataError, Relation, RorDataset};
use crate::domain::parameters::ValueFunctionKind;

/// Builds the [`RorModel`] of a solve.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintBuilder {
    eps: f64,
    value_function: ValueFunctionKind,
}

impl ConstraintBuilder {
    pub fn new(eps: f64, value_function: ValueFunctionKind) -> Self {
        Self {
            eps,
            value_function,
        }
    }

    /// Validates the dataset and produces the model.
    ///
    /// Relations are checked again here so a malformed dataset never reaches
    /// the optimizer.
    pub fn build(&self, dataset: RorDataset) -> Result<RorModel, DataError> {
        if dataset.alternative_count() == 0 || dataset.criterion_count() == 0 {
            return Err(DataError::EmptyDataset);
        }
        for relation in dataset.preference_relations() {
            dataset.validate_preference_relation(relation)?;
        }
        for relation in dataset.intensity_relations() {
            dataset.validate_intensity_relation(relation)?;
        }

        let mut model = RorModel {
            dataset,
            value_function: self.value_function,
            eps: self.eps,
            variables: Vec::new(),
            constraints: Vec::new(),
            scores: Vec::new(),
        };

        match self.value_function {
            ValueFunctionKind::WeightedSum => add_weighted_sum(&mut model),
            ValueFunctionKind::Additive => add_additive(&mut model),
        }
        self.add_relations(&mut model);

        debug!(
            alternatives = model.dataset.alternative_count(),
            variables = model.variables.len(),
            constraints = model.constraints.len(),
            value_function = %self.value_function,
            "Constraint model built"
        );
        Ok(model)
    }

    fn add_relations(&self, model: &mut RorModel) {
        let mut relation_constraints = Vec::new();

        for relation in model.dataset.preference_relations() {
            let expression = score_difference(model, &relation.alternative_1, &relation.alternative_2);
            let (comparison, rhs) = self.comparison_for(relation.relation);
            relation_constraints.push(LinearConstraint {
                expression,
                comparison,
                rhs,
                origin: ConstraintOrigin::Preference {
                    relation: relation.clone(),
                },
            });
        }

        for relation in model.dataset.intensity_relations() {
            let left = score_difference(model, &relation.alternative_1, &relation.alternative_2);
            let right = score_difference(model, &relation.alternative_3, &relation.alternative_4);
            let (comparison, rhs) = self.comparison_for(relation.relation);
            relation_constraints.push(LinearConstraint {
                expression: left.minus(&right),
                comparison,
                rhs,
                origin: ConstraintOrigin::Intensity {
                    relation: relation.clone(),
                },
            });
        }

        model.constraints.extend(relation_constraints);
    }

    fn comparison_for(&self, relation: Relation) -> (Comparison, f64) {
        match relation {
            Relation::Preference => (Comparison::GreaterOrEqual, self.eps),
            Relation::WeakPreference => (Comparison::GreaterOrEqual, 0.0),
            Relation::Indifference => (Comparison::Equal, 0.0),
        }
    }
}

/// `score(a) - score(b)`. Both alternatives were validated beforehand.
fn score_difference(model: &RorModel, a: &str, b: &str) -> LinearExpression {
    let score_of = |name: &str| {
        model
            .dataset
            .alternative_index(name)
            .map(|index| model.scores[index].clone())
            .unwrap_or_default()
    };
    score_of(a).minus(&score_of(b))
}

/// One weight per criterion in [0, 1], summing to one.
fn add_weighted_sum(model: &mut RorModel) {
    let criteria = model.dataset.criteria().to_vec();

    let weights: Vec<VariableId> = criteria
        .iter()
        .map(|criterion| push_variable(model, ModelVariable::unit(format!("w[{}]", criterion.name))))
        .collect();

    let mut normalization = LinearExpression::with_capacity(weights.len());
    for weight in &weights {
        normalization.add_term(*weight, 1.0);
    }
    model.constraints.push(LinearConstraint {
        expression: normalization,
        comparison: Comparison::Equal,
        rhs: 1.0,
        origin: ConstraintOrigin::Normalization,
    });

    model.scores = model
        .dataset
        .oriented_matrix()
        .iter()
        .map(|row| {
            let mut score = LinearExpression::with_capacity(weights.len());
            for (value, weight) in row.iter().zip(&weights) {
                score.add_term(*weight, *value);
            }
            score
        })
        .collect();
}

/// Piecewise-linear marginal value functions: one variable per distinct
/// oriented value of each criterion.
fn add_additive(model: &mut RorModel) {
    let criteria = model.dataset.criteria().to_vec();
    let matrix = model.dataset.oriented_matrix().to_vec();
    let mut normalization = LinearExpression::with_capacity(criteria.len());
    let mut level_variables: Vec<(Vec<f64>, Vec<VariableId>)> = Vec::with_capacity(criteria.len());

    for (column, criterion) in criteria.iter().enumerate() {
        let mut levels: Vec<f64> = matrix.iter().map(|row| row[column]).collect();
        levels.sort_by(f64::total_cmp);
        levels.dedup();

        let variables: Vec<VariableId> = levels
            .iter()
            .enumerate()
            .map(|(level, _)| {
                push_variable(
                    model,
                    ModelVariable::unit(format!("u[{}][{}]", criterion.name, level)),
                )
            })
            .collect();

        for pair in variables.windows(2) {
            let mut expression = LinearExpression::with_capacity(2);
            expression.add_term(pair[1], 1.0);
            expression.add_term(pair[0], -1.0);
            model.constraints.push(LinearConstraint {
                expression,
                comparison: Comparison::GreaterOrEqual,
                rhs: 0.0,
                origin: ConstraintOrigin::Monotonicity {
                    criterion: criterion.name.clone(),
                },
            });
        }

        // A single-level criterion has no worst value distinct from its best.
        if let [worst, _, ..] = variables.as_slice() {
            let mut expression = LinearExpression::with_capacity(1);
            expression.add_term(*worst, 1.0);
            model.constraints.push(LinearConstraint {
                expression,
                comparison: Comparison::Equal,
                rhs: 0.0,
                origin: ConstraintOrigin::WorstValue {
                    criterion: criterion.name.clone(),
                },
            });
        }

        if let Some(best) = variables.last() {
            normalization.add_term(*best, 1.0);
        }
        level_variables.push((levels, variables));
    }

    model.constraints.push(LinearConstraint {
        expression: normalization,
        comparison: Comparison::Equal,
        rhs: 1.0,
        origin: ConstraintOrigin::Normalization,
    });

    model.scores = matrix
        .iter()
        .map(|row| {
            let mut score = LinearExpression::with_capacity(row.len());
            for (value, (levels, variables)) in row.iter().zip(&level_variables) {
                if let Some(level) = levels.iter().position(|l| l == value) {
                    score.add_term(variables[level], 1.0);
                }
            }
            score
        })
        .collect();
}

fn push_variable(model: &mut RorModel, variable: ModelVariable) -> VariableId {
    model.variables.push(variable);
    VariableId::new(model.variables.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Criterion, PreferenceIntensityRelation, PreferenceRelation};

    fn dataset() -> RorDataset {
        RorDataset::builder()
            .criterion(Criterion::gain("quality"))
            .criterion(Criterion::cost("price"))
            .alternative("A", vec![3.0, 10.0])
            .alternative("B", vec![2.0, 5.0])
            .alternative("C", vec![1.0, 5.0])
            .alternative("D", vec![2.0, 1.0])
            .preference("A", "B", Relation::Preference)
            .preference("B", "C", Relation::WeakPreference)
            .preference("C", "D", Relation::Indifference)
            .build()
            .unwrap()
    }

    fn origins(model: &RorModel) -> Vec<&ConstraintOrigin> {
        model.constraints().iter().map(|c| &c.origin).collect()
    }

    #[test]
    fn weighted_sum_has_one_weight_per_criterion() {
        let model = ConstraintBuilder::new(0.01, ValueFunctionKind::WeightedSum)
            .build(dataset())
            .unwrap();
        assert_eq!(model.variables().len(), 2);
        assert_eq!(model.variables()[0].name, "w[quality]");
        assert!(origins(&model).contains(&&ConstraintOrigin::Normalization));
    }

    #[test]
    fn scores_use_oriented_values() {
        let model = ConstraintBuilder::new(0.01, ValueFunctionKind::WeightedSum)
            .build(dataset())
            .unwrap();
        // all weight on price: cheaper is better
        let scores = model.evaluate_scores(&[0.0, 1.0]);
        assert_eq!(scores, vec![-10.0, -5.0, -5.0, -1.0]);
    }

    #[test]
    fn relations_become_constraints_with_eps_only_when_strict() {
        let model = ConstraintBuilder::new(0.01, ValueFunctionKind::WeightedSum)
            .build(dataset())
            .unwrap();
        let relation_constraints: Vec<&LinearConstraint> = model
            .constraints()
            .iter()
            .filter(|c| matches!(c.origin, ConstraintOrigin::Preference { .. }))
            .collect();
        assert_eq!(relation_constraints.len(), 3);
        assert_eq!(relation_constraints[0].comparison, Comparison::GreaterOrEqual);
        assert_eq!(relation_constraints[0].rhs, 0.01);
        assert_eq!(relation_constraints[1].rhs, 0.0);
        assert_eq!(relation_constraints[2].comparison, Comparison::Equal);
    }

    #[test]
    fn strict_preference_cuts_off_weights() {
        let model = ConstraintBuilder::new(0.01, ValueFunctionKind::WeightedSum)
            .build(dataset())
            .unwrap();
        // A > B needs quality weight: 3q - 10p >= 2q - 5p + eps
        assert!(!model.is_feasible(&[0.0, 1.0], 1e-9));
        // C ~ D: 1q - 5p == 2q - 1p  => q = -4p, only q = p = 0 which breaks normalization
        assert!(!model.is_feasible(&[1.0, 0.0], 1e-9));
    }

    #[test]
    fn intensity_compares_score_differences() {
        let mut data = dataset();
        data.add_intensity_relation(PreferenceIntensityRelation::new(
            "A",
            "B",
            "C",
            "D",
            Relation::Preference,
        ))
        .unwrap();
        let model = ConstraintBuilder::new(0.5, ValueFunctionKind::WeightedSum)
            .build(data)
            .unwrap();
        let intensity = model
            .constraints()
            .iter()
            .find(|c| matches!(c.origin, ConstraintOrigin::Intensity { .. }))
            .unwrap();
        // (A - B) - (C - D) = (1q - 5p) - (-1q - 4p) = 2q - p
        assert_eq!(intensity.expression.evaluate(&[1.0, 0.0]), 2.0);
        assert_eq!(intensity.expression.evaluate(&[0.0, 1.0]), -1.0);
        assert_eq!(intensity.rhs, 0.5);
    }

    #[test]
    fn additive_model_pins_worst_levels_and_normalizes_best() {
        let model = ConstraintBuilder::new(0.01, ValueFunctionKind::Additive)
            .build(dataset())
            .unwrap();
        // quality has levels {1, 2, 3}, price has {-10, -5, -1}
        assert_eq!(model.variables().len(), 6);
        let worst = origins(&model)
            .into_iter()
            .filter(|o| matches!(o, ConstraintOrigin::WorstValue { .. }))
            .count();
        let monotone = origins(&model)
            .into_iter()
            .filter(|o| matches!(o, ConstraintOrigin::Monotonicity { .. }))
            .count();
        assert_eq!(worst, 2);
        assert_eq!(monotone, 4);

        // u_quality = [0, 0.2, 0.5], u_price = [0, 0.3, 0.5]
        let point = [0.0, 0.2, 0.5, 0.0, 0.3, 0.5];
        let scores = model.evaluate_scores(&point);
        assert!((scores[0] - 0.5).abs() < 1e-12);
        assert!((scores[3] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn single_level_criterion_is_not_pinned() {
        let data = RorDataset::builder()
            .criterion(Criterion::gain("flat"))
            .alternative("A", vec![1.0])
            .alternative("B", vec![1.0])
            .build()
            .unwrap();
        let model = ConstraintBuilder::new(0.0, ValueFunctionKind::Additive)
            .build(data)
            .unwrap();
        assert!(model.is_feasible(&[1.0], 1e-9));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let data = RorDataset::builder().criterion(Criterion::gain("g")).build().unwrap();
        assert_eq!(
            ConstraintBuilder::new(0.0, ValueFunctionKind::WeightedSum).build(data),
            Err(DataError::EmptyDataset)
        );
    }

    #[test]
    fn origin_describes_the_relation() {
        let model = ConstraintBuilder::new(0.01, ValueFunctionKind::WeightedSum)
            .build(dataset())
            .unwrap();
        let described: Vec<String> = model
            .constraints()
            .iter()
            .map(|c| c.origin.to_string())
            .collect();
        assert!(described.contains(&PreferenceRelation::new("A", "B", Relation::Preference).to_string()));
    }
}
