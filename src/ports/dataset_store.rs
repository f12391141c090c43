//! Dataset Store Port - Interface for loading and saving problems.
//!
//! A problem is a dataset together with the parameters it is solved with.
//! Round-trip fidelity (raw criterion values, cost/gain tags, relations and
//! parameters) is the adapter's responsibility.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::dataset::RorDataset;
use crate::domain::foundation::ErrorCode;
use crate::domain::parameters::{ConfigurationError, RorParameters};

/// Persisted problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDocument {
    pub dataset: RorDataset,
    #[serde(default)]
    pub parameters: RorParameters,
}

impl ProblemDocument {
    pub fn new(dataset: RorDataset, parameters: RorParameters) -> Self {
        Self {
            dataset,
            parameters,
        }
    }
}

/// Errors that can occur while loading or saving a problem.
#[derive(Debug, thiserror::Error)]
pub enum DatasetStoreError {
    #[error("Problem file not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported problem file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to serialize problem: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize problem: {0}")]
    DeserializationFailed(String),

    #[error("Invalid problem parameters: {0}")]
    InvalidParameters(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    IoError(String),
}

impl DatasetStoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DatasetStoreError::InvalidParameters(err) => err.code(),
            DatasetStoreError::DeserializationFailed(_)
            | DatasetStoreError::UnsupportedFormat(_) => ErrorCode::InvalidFormat,
            _ => ErrorCode::StorageError,
        }
    }
}

/// Port for persisting problems.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Load a problem
    ///
    /// # Errors
    /// Returns `DatasetStoreError::NotFound` if nothing exists at `path`
    async fn load(&self, path: &Path) -> Result<ProblemDocument, DatasetStoreError>;

    /// Save a problem, replacing any existing file
    async fn save(&self, path: &Path, problem: &ProblemDocument) -> Result<(), DatasetStoreError>;
}
