//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Default eps must be a finite number >= 0, got {0}")]
    InvalidEps(f64),

    #[error("Default number of alpha values {default} must be between 1 and {max}")]
    InvalidNumberOfAlphaValues { default: usize, max: usize },

    #[error("Maximum number of alpha values must be between 1 and 15")]
    InvalidMaxNumberOfAlphaValues,

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
