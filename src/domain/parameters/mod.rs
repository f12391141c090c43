//! Parameters Module - The validated parameter set handed to a solve.
//!
//! Parameters are built explicitly, validated once and cloned into each
//! solve; a running solve never observes later edits.

mod alpha_weights;
mod errors;
mod keys;
mod overrides;
#[allow(clippy::module_inception)]
mod parameters;

pub use alpha_weights::{validate_weights, AlphaWeightGenerator, WeightedAlpha};
pub use errors::ConfigurationError;
pub use keys::{ParameterValue, RorParameter};
pub use overrides::ParameterOverrides;
pub use parameters::{
    RorParameters, RorParametersBuilder, ValueFunctionKind, DEFAULT_EPS,
    DEFAULT_NUMBER_OF_ALPHA_VALUES, DEFAULT_PRECISION, MAX_NUMBER_OF_ALPHA_VALUES,
};
