//! File-based Dataset Store Adapter
//!
//! Stores problems as JSON (`.json`) or YAML (`.yaml`, `.yml`) files,
//! chosen by extension. Criterion values are written as entered, with cost
//! criteria un-negated. Parameters a file leaves out are taken from the
//! store's defaults.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::dataset::RorDataset;
use crate::domain::parameters::{ParameterOverrides, RorParameters};
use crate::ports::{DatasetStore, DatasetStoreError, ProblemDocument};

/// On-disk shape of a problem; `parameters` may be partial or missing.
#[derive(Debug, Deserialize)]
struct ProblemFile {
    dataset: RorDataset,
    #[serde(default)]
    parameters: ParameterOverrides,
}

/// Serialization format of a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Json,
    Yaml,
}

impl ProblemFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, DatasetStoreError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(ProblemFormat::Json),
            Some("yaml") | Some("yml") => Ok(ProblemFormat::Yaml),
            other => Err(DatasetStoreError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    fn serialize(&self, problem: &ProblemDocument) -> Result<String, DatasetStoreError> {
        match self {
            ProblemFormat::Json => serde_json::to_string_pretty(problem)
                .map_err(|e| DatasetStoreError::SerializationFailed(e.to_string())),
            ProblemFormat::Yaml => serde_yaml::to_string(problem)
                .map_err(|e| DatasetStoreError::SerializationFailed(e.to_string())),
        }
    }

    fn deserialize(&self, content: &str) -> Result<ProblemFile, DatasetStoreError> {
        match self {
            ProblemFormat::Json => serde_json::from_str(content)
                .map_err(|e| DatasetStoreError::DeserializationFailed(e.to_string())),
            ProblemFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| DatasetStoreError::DeserializationFailed(e.to_string())),
        }
    }
}

/// File-based storage for problems
#[derive(Debug, Clone, Default)]
pub struct FileDatasetStore {
    base_path: Option<PathBuf>,
    defaults: RorParameters,
}

impl FileDatasetStore {
    /// Create a store resolving paths as given
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store resolving relative paths against a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileDatasetStore::with_base_path("./data/problems");
    /// ```
    pub fn with_base_path<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: Some(base_path.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// Use `defaults` for every parameter a problem file does not set
    pub fn with_defaults(mut self, defaults: RorParameters) -> Self {
        self.defaults = defaults;
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl DatasetStore for FileDatasetStore {
    async fn load(&self, path: &Path) -> Result<ProblemDocument, DatasetStoreError> {
        let file_path = self.resolve(path);
        let format = ProblemFormat::from_path(&file_path)?;

        if !file_path.exists() {
            return Err(DatasetStoreError::NotFound(file_path));
        }

        let content = fs::read_to_string(&file_path)
            .await
            .map_err(|e| DatasetStoreError::IoError(e.to_string()))?;

        let file = format.deserialize(&content)?;
        let parameters = file.parameters.apply_to(&self.defaults)?;
        Ok(ProblemDocument::new(file.dataset, parameters))
    }

    async fn save(&self, path: &Path, problem: &ProblemDocument) -> Result<(), DatasetStoreError> {
        let file_path = self.resolve(path);
        let format = ProblemFormat::from_path(&file_path)?;

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DatasetStoreError::IoError(e.to_string()))?;
        }

        let content = format.serialize(problem)?;
        fs::write(&file_path, content)
            .await
            .map_err(|e| DatasetStoreError::IoError(e.to_string()))?;

        Ok(())
    }
}
