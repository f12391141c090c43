//! The decision dataset: alternatives scored against oriented criteria,
//! plus the stated preference information.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    Criterion, DataError, PreferenceIntensityRelation, PreferenceRelation, Relation,
};

/// Negates every cost column so that all criteria read "higher is better".
///
/// Applying it twice returns the original matrix.
pub fn orient_matrix(matrix: &[Vec<f64>], criteria: &[Criterion]) -> Vec<Vec<f64>> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(criteria)
                .map(|(value, criterion)| {
                    if criterion.is_cost() {
                        -value
                    } else {
                        *value
                    }
                })
                .collect()
        })
        .collect()
}

/// Persisted shape of a dataset: raw (un-negated) values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub alternatives: Vec<String>,
    pub criteria: Vec<Criterion>,
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub preference_relations: Vec<PreferenceRelation>,
    #[serde(default)]
    pub intensity_relations: Vec<PreferenceIntensityRelation>,
}

/// Validated dataset with cost criteria stored negated.
///
/// Cloning yields a fully independent copy, which is how a solve insulates
/// itself from later edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetDocument", into = "DatasetDocument")]
pub struct RorDataset {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    oriented: Vec<Vec<f64>>,
    preference_relations: Vec<PreferenceRelation>,
    intensity_relations: Vec<PreferenceIntensityRelation>,
}

impl RorDataset {
    /// Creates a builder for constructing a dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Ordered alternative identifiers.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Ordered criteria.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Position of an alternative in the dataset order.
    pub fn alternative_index(&self, alternative: &str) -> Option<usize> {
        self.alternatives.iter().position(|a| a == alternative)
    }

    /// Returns true if the alternative exists.
    pub fn contains_alternative(&self, alternative: &str) -> bool {
        self.alternative_index(alternative).is_some()
    }

    /// Oriented ("higher is better") values of one alternative.
    pub fn oriented_row(&self, alternative_index: usize) -> &[f64] {
        &self.oriented[alternative_index]
    }

    /// Oriented matrix, alternatives x criteria.
    pub fn oriented_matrix(&self) -> &[Vec<f64>] {
        &self.oriented
    }

    /// Matrix as the user entered it (cost criteria un-negated).
    pub fn raw_matrix(&self) -> Vec<Vec<f64>> {
        orient_matrix(&self.oriented, &self.criteria)
    }

    /// Stated preference relations, in insertion order.
    pub fn preference_relations(&self) -> &[PreferenceRelation] {
        &self.preference_relations
    }

    /// Stated intensity relations, in insertion order.
    pub fn intensity_relations(&self) -> &[PreferenceIntensityRelation] {
        &self.intensity_relations
    }

    /// Checks that a preference relation references two distinct, known
    /// alternatives.
    pub fn validate_preference_relation(
        &self,
        relation: &PreferenceRelation,
    ) -> Result<(), DataError> {
        for alternative in relation.alternatives() {
            self.require_alternative(alternative)?;
        }
        if relation.alternative_1 == relation.alternative_2 {
            return Err(DataError::SelfRelation(relation.alternative_1.clone()));
        }
        Ok(())
    }

    /// Checks that an intensity relation references known alternatives and
    /// that the dataset is large enough to state one.
    ///
    /// The four references are not required to be pairwise distinct.
    pub fn validate_intensity_relation(
        &self,
        relation: &PreferenceIntensityRelation,
    ) -> Result<(), DataError> {
        let required = PreferenceIntensityRelation::REQUIRED_ALTERNATIVES;
        if self.alternatives.len() < required {
            return Err(DataError::InsufficientAlternatives {
                required,
                actual: self.alternatives.len(),
            });
        }
        for alternative in relation.alternatives() {
            self.require_alternative(alternative)?;
        }
        Ok(())
    }

    /// Adds a preference relation. Returns `false` if it was already present.
    pub fn add_preference_relation(
        &mut self,
        relation: PreferenceRelation,
    ) -> Result<bool, DataError> {
        self.validate_preference_relation(&relation)?;
        if self.preference_relations.contains(&relation) {
            return Ok(false);
        }
        self.preference_relations.push(relation);
        Ok(true)
    }

    /// Adds an intensity relation. Returns `false` if it was already present.
    pub fn add_intensity_relation(
        &mut self,
        relation: PreferenceIntensityRelation,
    ) -> Result<bool, DataError> {
        self.validate_intensity_relation(&relation)?;
        if self.intensity_relations.contains(&relation) {
            return Ok(false);
        }
        self.intensity_relations.push(relation);
        Ok(true)
    }

    fn require_alternative(&self, alternative: &str) -> Result<(), DataError> {
        if self.contains_alternative(alternative) {
            Ok(())
        } else {
            Err(DataError::UnknownAlternative(alternative.to_string()))
        }
    }
}

impl TryFrom<DatasetDocument> for RorDataset {
    type Error = DataError;

    fn try_from(document: DatasetDocument) -> Result<Self, Self::Error> {
        if document.matrix.len() != document.alternatives.len() {
            return Err(DataError::RowCountMismatch {
                expected: document.alternatives.len(),
                actual: document.matrix.len(),
            });
        }

        let mut builder = DatasetBuilder::new().criteria(document.criteria);
        for (alternative, row) in document.alternatives.into_iter().zip(document.matrix) {
            builder = builder.alternative(alternative, row);
        }
        for relation in document.preference_relations {
            builder = builder.preference_relation(relation);
        }
        for relation in document.intensity_relations {
            builder = builder.intensity_relation(relation);
        }
        builder.build()
    }
}

impl From<RorDataset> for DatasetDocument {
    fn from(dataset: RorDataset) -> Self {
        let matrix = dataset.raw_matrix();
        DatasetDocument {
            alternatives: dataset.alternatives,
            criteria: dataset.criteria,
            matrix,
            preference_relations: dataset.preference_relations,
            intensity_relations: dataset.intensity_relations,
        }
    }
}

/// Builder for constructing validated datasets from raw values.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    criteria: Vec<Criterion>,
    rows: Vec<(String, Vec<f64>)>,
    preference_relations: Vec<PreferenceRelation>,
    intensity_relations: Vec<PreferenceIntensityRelation>,
}

impl DatasetBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Replaces all criteria.
    pub fn criteria(mut self, criteria: Vec<Criterion>) -> Self {
        self.criteria = criteria;
        self
    }

    /// Appends an alternative with its raw values, one per criterion.
    pub fn alternative(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push((name.into(), values));
        self
    }

    /// Appends a preference relation.
    pub fn preference_relation(mut self, relation: PreferenceRelation) -> Self {
        self.preference_relations.push(relation);
        self
    }

    /// Shorthand for appending a preference relation.
    pub fn preference(
        self,
        alternative_1: impl Into<String>,
        alternative_2: impl Into<String>,
        relation: Relation,
    ) -> Self {
        self.preference_relation(PreferenceRelation::new(alternative_1, alternative_2, relation))
    }

    /// Appends an intensity relation.
    pub fn intensity_relation(mut self, relation: PreferenceIntensityRelation) -> Self {
        self.intensity_relations.push(relation);
        self
    }

    /// Validates everything and orients cost criteria.
    ///
    /// Duplicate relations collapse into one.
    pub fn build(self) -> Result<RorDataset, DataError> {
        let mut criterion_names = HashSet::new();
        for criterion in &self.criteria {
            if criterion.name.trim().is_empty() {
                return Err(DataError::EmptyCriterionName);
            }
            if !criterion_names.insert(criterion.name.as_str()) {
                return Err(DataError::DuplicateCriterion(criterion.name.clone()));
            }
        }

        let mut alternative_names = HashSet::new();
        for (name, values) in &self.rows {
            if name.trim().is_empty() {
                return Err(DataError::EmptyAlternativeName);
            }
            if !alternative_names.insert(name.as_str()) {
                return Err(DataError::DuplicateAlternative(name.clone()));
            }
            if values.len() != self.criteria.len() {
                return Err(DataError::RowLengthMismatch {
                    alternative: name.clone(),
                    expected: self.criteria.len(),
                    actual: values.len(),
                });
            }
            if let Some(position) = values.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFiniteValue {
                    alternative: name.clone(),
                    criterion: self.criteria[position].name.clone(),
                });
            }
        }

        let (alternatives, raw): (Vec<String>, Vec<Vec<f64>>) = self.rows.into_iter().unzip();
        let oriented = orient_matrix(&raw, &self.criteria);

        let mut dataset = RorDataset {
            alternatives,
            criteria: self.criteria,
            oriented,
            preference_relations: Vec::new(),
            intensity_relations: Vec::new(),
        };
        for relation in self.preference_relations {
            dataset.add_preference_relation(relation)?;
        }
        for relation in self.intensity_relations {
            dataset.add_intensity_relation(relation)?;
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::CriterionType;

    fn buses() -> RorDataset {
        RorDataset::builder()
            .criterion(Criterion::cost("price"))
            .criterion(Criterion::gain("comfort"))
            .alternative("A", vec![100.0, 5.0])
            .alternative("B", vec![80.0, 3.0])
            .alternative("C", vec![60.0, 1.0])
            .alternative("D", vec![90.0, 4.0])
            .build()
            .unwrap()
    }

    #[test]
    fn cost_criteria_are_negated_internally() {
        let dataset = buses();
        assert_eq!(dataset.oriented_row(0), &[-100.0, 5.0]);
        assert_eq!(dataset.raw_matrix()[0], vec![100.0, 5.0]);
    }

    #[test]
    fn gain_only_dataset_is_unchanged() {
        let dataset = RorDataset::builder()
            .criterion(Criterion::gain("g1"))
            .criterion(Criterion::new("g2", CriterionType::Gain))
            .alternative("A", vec![1.0, 2.0])
            .build()
            .unwrap();
        assert_eq!(dataset.oriented_matrix(), dataset.raw_matrix().as_slice());
    }

    #[test]
    fn rejects_duplicate_alternatives_and_criteria() {
        let duplicate_alternative = RorDataset::builder()
            .criterion(Criterion::gain("g"))
            .alternative("A", vec![1.0])
            .alternative("A", vec![2.0])
            .build();
        assert_eq!(
            duplicate_alternative,
            Err(DataError::DuplicateAlternative("A".to_string()))
        );

        let duplicate_criterion = RorDataset::builder()
            .criterion(Criterion::gain("g"))
            .criterion(Criterion::cost("g"))
            .build();
        assert_eq!(
            duplicate_criterion,
            Err(DataError::DuplicateCriterion("g".to_string()))
        );
    }

    #[test]
    fn rejects_row_of_wrong_length() {
        let result = RorDataset::builder()
            .criterion(Criterion::gain("g1"))
            .criterion(Criterion::gain("g2"))
            .alternative("A", vec![1.0])
            .build();
        assert!(matches!(result, Err(DataError::RowLengthMismatch { .. })));
    }

    #[test]
    fn rejects_non_finite_values() {
        let result = RorDataset::builder()
            .criterion(Criterion::gain("g1"))
            .alternative("A", vec![f64::INFINITY])
            .build();
        assert!(matches!(result, Err(DataError::NonFiniteValue { .. })));
    }

    #[test]
    fn preference_relation_must_reference_known_distinct_alternatives() {
        let mut dataset = buses();
        assert_eq!(
            dataset.add_preference_relation(PreferenceRelation::new("A", "Z", Relation::Preference)),
            Err(DataError::UnknownAlternative("Z".to_string()))
        );
        assert_eq!(
            dataset.add_preference_relation(PreferenceRelation::new("A", "A", Relation::Preference)),
            Err(DataError::SelfRelation("A".to_string()))
        );
    }

    #[test]
    fn duplicate_relations_are_stored_once() {
        let mut dataset = buses();
        let relation = PreferenceRelation::new("A", "B", Relation::Preference);
        assert_eq!(dataset.add_preference_relation(relation.clone()), Ok(true));
        assert_eq!(dataset.add_preference_relation(relation), Ok(false));
        assert_eq!(dataset.preference_relations().len(), 1);
    }

    #[test]
    fn intensity_relation_needs_four_alternatives() {
        let mut small = RorDataset::builder()
            .criterion(Criterion::gain("g"))
            .alternative("A", vec![1.0])
            .alternative("B", vec![2.0])
            .alternative("C", vec![3.0])
            .build()
            .unwrap();
        let relation = PreferenceIntensityRelation::new("A", "B", "B", "C", Relation::Preference);
        assert_eq!(
            small.add_intensity_relation(relation),
            Err(DataError::InsufficientAlternatives {
                required: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn intensity_relation_tolerates_repeated_references() {
        let mut dataset = buses();
        let relation = PreferenceIntensityRelation::new("A", "B", "B", "C", Relation::WeakPreference);
        assert_eq!(dataset.add_intensity_relation(relation), Ok(true));
    }

    #[test]
    fn clone_is_independent() {
        let original = buses();
        let mut copy = original.clone();
        copy.add_preference_relation(PreferenceRelation::new("A", "B", Relation::Preference))
            .unwrap();
        assert!(original.preference_relations().is_empty());
        assert_eq!(copy.preference_relations().len(), 1);
    }

    #[test]
    fn json_round_trip_keeps_raw_values() {
        let mut dataset = buses();
        dataset
            .add_preference_relation(PreferenceRelation::new("A", "C", Relation::Indifference))
            .unwrap();

        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["matrix"][0][0], 100.0);
        assert_eq!(json["criteria"][0]["type"], "cost");

        let restored: RorDataset = serde_json::from_value(json).unwrap();
        assert_eq!(restored, dataset);
    }

    #[test]
    fn deserialization_rejects_unknown_relation_target() {
        let json = r#"{
            "alternatives": ["A", "B"],
            "criteria": [{"name": "g", "type": "gain"}],
            "matrix": [[1.0], [2.0]],
            "preference_relations": [
                {"alternative_1": "A", "alternative_2": "X", "relation": "preference"}
            ]
        }"#;
        assert!(serde_json::from_str::<RorDataset>(json).is_err());
    }
}
