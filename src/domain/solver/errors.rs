//! Solve errors.

use thiserror::Error;

use crate::domain::aggregation::AggregationError;
use crate::domain::dataset::DataError;
use crate::domain::foundation::{AlphaValue, DomainError, ErrorCode};
use crate::domain::parameters::ConfigurationError;
use crate::ports::LpError;

/// An LP failure while solving one alpha level.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Calculations failed for alpha {alpha}{}: {cause}", alternative_suffix(.alternative))]
pub struct CalculationsError {
    pub alpha: AlphaValue,
    /// Alternative whose score was being optimized.
    pub alternative: Option<String>,
    pub cause: LpError,
}

fn alternative_suffix(alternative: &Option<String>) -> String {
    match alternative {
        Some(name) => format!(" (alternative '{}')", name),
        None => String::new(),
    }
}

impl CalculationsError {
    pub fn code(&self) -> ErrorCode {
        self.cause.code()
    }
}

/// Why a solve did not produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid dataset: {0}")]
    Data(#[from] DataError),

    #[error(transparent)]
    Calculations(#[from] CalculationsError),

    #[error("Aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Solve was cancelled")]
    Cancelled,
}

impl SolveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SolveError::Configuration(err) => err.code(),
            SolveError::Data(err) => err.code(),
            SolveError::Calculations(err) => err.code(),
            SolveError::Aggregation(err) => err.code(),
            SolveError::Cancelled => ErrorCode::Cancelled,
        }
    }
}

impl From<SolveError> for DomainError {
    fn from(err: SolveError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            SolveError::Calculations(calc) => domain.with_detail("alpha", calc.alpha.name()),
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculations_error_names_alpha_and_alternative() {
        let err = CalculationsError {
            alpha: AlphaValue::new(0.5, "R").unwrap(),
            alternative: Some("A".to_string()),
            cause: LpError::Infeasible,
        };
        let text = err.to_string();
        assert!(text.contains("R (0.5)"));
        assert!(text.contains("alternative 'A'"));
        assert!(text.contains("infeasible"));
        assert_eq!(err.code(), ErrorCode::Infeasible);
    }

    #[test]
    fn solve_error_keeps_inner_code() {
        let err = SolveError::from(ConfigurationError::NoAlphaValues);
        assert_eq!(err.code(), ConfigurationError::NoAlphaValues.code());
        assert_eq!(SolveError::Cancelled.code(), ErrorCode::Cancelled);
    }

    #[test]
    fn domain_error_carries_alpha_detail() {
        let err = SolveError::Calculations(CalculationsError {
            alpha: AlphaValue::new(0.0, "Q").unwrap(),
            alternative: None,
            cause: LpError::Failure("numerical trouble".to_string()),
        });
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::SolverFailure);
        assert_eq!(domain.details.get("alpha").map(String::as_str), Some("Q"));
    }
}
