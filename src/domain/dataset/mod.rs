//! Dataset Module - Alternatives, oriented criteria, decision matrix and
//! the stated preference information.
//!
//! Cost criteria are negated on entry so that every downstream computation
//! can assume "higher is better". Raw values are recovered only when the
//! dataset is written back out.

mod criterion;
#[allow(clippy::module_inception)]
mod dataset;
mod errors;
mod relation;

pub use criterion::{Criterion, CriterionType};
pub use dataset::{orient_matrix, DatasetBuilder, DatasetDocument, RorDataset};
pub use errors::DataError;
pub use relation::{PreferenceIntensityRelation, PreferenceRelation, Relation};
