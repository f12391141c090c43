//! Aggregation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregationError {
    #[error("There are no intermediate ranks to aggregate")]
    NoIntermediateRanks,

    #[error("{weights} alpha weights were given for {ranks} intermediate ranks")]
    AlphaWeightsMismatch { weights: usize, ranks: usize },

    #[error("Intermediate rank for alpha '{alpha}' does not rank alternative '{alternative}'")]
    MissingAlternative { alternative: String, alpha: String },

    #[error("Alternative '{0}' is not part of the result")]
    UnknownAlternative(String),

    #[error("Cannot compare alternative '{0}' with itself")]
    SameAlternative(String),
}

impl AggregationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AggregationError::NoIntermediateRanks => ErrorCode::InvalidParameter,
            AggregationError::AlphaWeightsMismatch { .. } => ErrorCode::AlphaWeightsMismatch,
            AggregationError::MissingAlternative { .. } => ErrorCode::InternalError,
            AggregationError::UnknownAlternative(_) => ErrorCode::UnknownAlternative,
            AggregationError::SameAlternative(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<AggregationError> for DomainError {
    fn from(err: AggregationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
