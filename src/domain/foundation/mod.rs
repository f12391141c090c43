//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the ranking domain.

mod alpha;
mod errors;
mod ids;
mod timestamp;

pub use alpha::AlphaValue;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SolveId;
pub use timestamp::Timestamp;
