//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Dataset errors
    UnknownAlternative,
    DuplicateAlternative,
    DuplicateCriterion,
    InvalidRelation,
    InsufficientAlternatives,
    MatrixShapeMismatch,

    // Configuration errors
    InvalidParameter,
    AlphaWeightsMismatch,
    UnknownAggregator,
    UnknownTieResolver,

    // Calculation errors
    Infeasible,
    SolverFailure,
    Cancelled,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownAlternative => "UNKNOWN_ALTERNATIVE",
            ErrorCode::DuplicateAlternative => "DUPLICATE_ALTERNATIVE",
            ErrorCode::DuplicateCriterion => "DUPLICATE_CRITERION",
            ErrorCode::InvalidRelation => "INVALID_RELATION",
            ErrorCode::InsufficientAlternatives => "INSUFFICIENT_ALTERNATIVES",
            ErrorCode::MatrixShapeMismatch => "MATRIX_SHAPE_MISMATCH",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::AlphaWeightsMismatch => "ALPHA_WEIGHTS_MISMATCH",
            ErrorCode::UnknownAggregator => "UNKNOWN_AGGREGATOR",
            ErrorCode::UnknownTieResolver => "UNKNOWN_TIE_RESOLVER",
            ErrorCode::Infeasible => "INFEASIBLE",
            ErrorCode::SolverFailure => "SOLVER_FAILURE",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("alternative");
        assert_eq!(format!("{}", err), "Field 'alternative' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("alpha", 0.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'alpha' must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("eps", "must be finite");
        assert_eq!(
            format!("{}", err),
            "Field 'eps' has invalid format: must be finite"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::Infeasible, "No feasible weights");
        assert_eq!(format!("{}", err), "[INFEASIBLE] No feasible weights");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "alpha")
            .with_detail("reason", "out of range");

        assert_eq!(err.details.get("field"), Some(&"alpha".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"out of range".to_string()));
    }

    #[test]
    fn validation_error_converts_with_matching_code() {
        let err: DomainError = ValidationError::out_of_range("alpha", 0.0, 1.0, 2.0).into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::UnknownAlternative), "UNKNOWN_ALTERNATIVE");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
