//! Dataset-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Malformed dataset content, rejected before any optimization work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Alternative name cannot be empty")]
    EmptyAlternativeName,

    #[error("Criterion name cannot be empty")]
    EmptyCriterionName,

    #[error("Alternative '{0}' is defined more than once")]
    DuplicateAlternative(String),

    #[error("Criterion '{0}' is defined more than once")]
    DuplicateCriterion(String),

    #[error("Alternative '{0}' does not exist in the dataset")]
    UnknownAlternative(String),

    #[error("Preference relation must reference two different alternatives, got '{0}' twice")]
    SelfRelation(String),

    #[error("Intensity relations require at least {required} alternatives, dataset has {actual}")]
    InsufficientAlternatives { required: usize, actual: usize },

    #[error("Alternative '{alternative}' has {actual} values but there are {expected} criteria")]
    RowLengthMismatch {
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("Matrix has {actual} rows but there are {expected} alternatives")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("Value of alternative '{alternative}' on criterion '{criterion}' is not a finite number")]
    NonFiniteValue {
        alternative: String,
        criterion: String,
    },

    #[error("Dataset must contain at least one alternative and one criterion")]
    EmptyDataset,
}

impl DataError {
    /// Maps the error onto the shared error taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            DataError::EmptyAlternativeName | DataError::EmptyCriterionName => ErrorCode::EmptyField,
            DataError::DuplicateAlternative(_) => ErrorCode::DuplicateAlternative,
            DataError::DuplicateCriterion(_) => ErrorCode::DuplicateCriterion,
            DataError::UnknownAlternative(_) => ErrorCode::UnknownAlternative,
            DataError::SelfRelation(_) => ErrorCode::InvalidRelation,
            DataError::InsufficientAlternatives { .. } => ErrorCode::InsufficientAlternatives,
            DataError::RowLengthMismatch { .. } | DataError::RowCountMismatch { .. } => {
                ErrorCode::MatrixShapeMismatch
            }
            DataError::NonFiniteValue { .. } => ErrorCode::InvalidFormat,
            DataError::EmptyDataset => ErrorCode::ValidationFailed,
        }
    }
}

impl From<DataError> for DomainError {
    fn from(err: DataError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_alternative_maps_to_code() {
        let err = DataError::UnknownAlternative("X".to_string());
        assert_eq!(err.code(), ErrorCode::UnknownAlternative);
        assert_eq!(err.to_string(), "Alternative 'X' does not exist in the dataset");
    }

    #[test]
    fn insufficient_alternatives_displays_counts() {
        let err = DataError::InsufficientAlternatives {
            required: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Intensity relations require at least 4 alternatives, dataset has 3"
        );
    }

    #[test]
    fn converts_into_domain_error() {
        let err: DomainError = DataError::DuplicateCriterion("price".to_string()).into();
        assert_eq!(err.code, ErrorCode::DuplicateCriterion);
    }
}
