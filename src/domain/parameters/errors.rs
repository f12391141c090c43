//! Parameter configuration errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Invalid parameter combination, detected before any optimization starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("No alpha values to solve")]
    NoAlphaValues,

    #[error("Alpha value name '{0}' is used more than once")]
    DuplicateAlphaName(String),

    #[error("Invalid alpha value: {0}")]
    InvalidAlphaValue(#[from] ValidationError),

    #[error("ALPHA_WEIGHTS has {weights} entries but ALPHA_VALUES has {alpha_values}")]
    AlphaWeightsMismatch { weights: usize, alpha_values: usize },

    #[error("The weighted aggregator requires ALPHA_WEIGHTS")]
    MissingAlphaWeights,

    #[error("Alpha weight #{index} must be a finite non-negative number, got {weight}")]
    InvalidAlphaWeight { index: usize, weight: f64 },

    #[error("Alpha weights sum to zero and cannot be normalized")]
    ZeroAlphaWeights,

    #[error("An alpha weight generator cannot be combined with ALPHA_VALUES or ALPHA_WEIGHTS")]
    ConflictingAlphaWeights,

    #[error("EPS must be a finite non-negative number, got {0}")]
    InvalidEps(f64),

    #[error("NUMBER_OF_ALPHA_VALUES must be between {min} and {max}, got {actual}")]
    InvalidNumberOfAlphaValues {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Unknown results aggregator '{0}'")]
    UnknownAggregator(String),

    #[error("Unknown tie resolver '{0}'")]
    UnknownTieResolver(String),

    #[error("Unknown value function model '{0}'")]
    UnknownValueFunction(String),

    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("Parameter {parameter} does not accept {value}")]
    InvalidParameterValue { parameter: String, value: String },
}

impl ConfigurationError {
    /// Maps the error onto the shared error taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigurationError::AlphaWeightsMismatch { .. } => ErrorCode::AlphaWeightsMismatch,
            ConfigurationError::UnknownAggregator(_) => ErrorCode::UnknownAggregator,
            ConfigurationError::UnknownTieResolver(_) => ErrorCode::UnknownTieResolver,
            ConfigurationError::InvalidAlphaValue(err) => match err {
                ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
                ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
                ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            },
            _ => ErrorCode::InvalidParameter,
        }
    }
}

impl From<ConfigurationError> for DomainError {
    fn from(err: ConfigurationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
