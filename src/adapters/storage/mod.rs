//! Storage Adapters
//!
//! Implementations of the DatasetStore port.
//!
//! ## Available Adapters
//!
//! - **FileDatasetStore** - Stores problems as JSON or YAML files on disk
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::FileDatasetStore;
//!
//! let store = FileDatasetStore::with_base_path("./data/problems");
//! let problem = store.load(Path::new("cars.yaml")).await?;
//! ```

mod file_dataset_store;

pub use file_dataset_store::{FileDatasetStore, ProblemFormat};
