//! Partially specified parameters, as written in a problem file.

use serde::{Deserialize, Serialize};

use super::{
    AlphaWeightGenerator, ConfigurationError, RorParameters, ValueFunctionKind,
    DEFAULT_NUMBER_OF_ALPHA_VALUES,
};
use crate::domain::aggregation::AggregatorKind;
use crate::domain::foundation::AlphaValue;
use crate::domain::tie_resolution::TieResolverKind;

/// Parameters a problem sets for itself; everything left out comes from a
/// base parameter set.
///
/// `alpha_weight_generator` replaces ALPHA_VALUES and ALPHA_WEIGHTS with
/// generated pairs and cannot be combined with either of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_aggregator: Option<AggregatorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_values: Option<Vec<AlphaValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_weights: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_weight_generator: Option<AlphaWeightGenerator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_alpha_values: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_resolver: Option<TieResolverKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_function: Option<ValueFunctionKind>,
}

impl ParameterOverrides {
    /// Layers these values over `base`.
    ///
    /// The result is not validated; that happens when a solve starts.
    ///
    /// # Errors
    ///
    /// - `ConflictingAlphaWeights` if a generator is combined with explicit
    ///   alpha values or weights
    /// - any error of [`AlphaWeightGenerator::generate`]
    pub fn apply_to(self, base: &RorParameters) -> Result<RorParameters, ConfigurationError> {
        let mut parameters = base.clone();

        if let Some(precision) = self.precision {
            parameters.precision = precision;
        }
        if let Some(eps) = self.eps {
            parameters.eps = eps;
        }
        if let Some(aggregator) = self.results_aggregator {
            parameters.results_aggregator = aggregator;
        }
        if let Some(count) = self.number_of_alpha_values {
            parameters.number_of_alpha_values = Some(count);
        }
        if let Some(tie_resolver) = self.tie_resolver {
            parameters.tie_resolver = tie_resolver;
        }
        if let Some(value_function) = self.value_function {
            parameters.value_function = value_function;
        }

        match self.alpha_weight_generator {
            Some(_) if self.alpha_values.is_some() || self.alpha_weights.is_some() => {
                return Err(ConfigurationError::ConflictingAlphaWeights);
            }
            Some(generator) => {
                let count = parameters
                    .number_of_alpha_values
                    .unwrap_or(DEFAULT_NUMBER_OF_ALPHA_VALUES);
                let (alphas, weights) = generator
                    .generate(count)?
                    .into_iter()
                    .map(|entry| (entry.alpha, entry.weight))
                    .unzip();
                parameters.alpha_values = alphas;
                parameters.alpha_weights = Some(weights);
            }
            None => {
                if let Some(alpha_values) = self.alpha_values {
                    parameters.alpha_values = alpha_values;
                    // weights of the base belong to the base's alpha values
                    parameters.alpha_weights = None;
                }
                if let Some(weights) = self.alpha_weights {
                    parameters.alpha_weights = Some(weights);
                }
            }
        }

        Ok(parameters)
    }
}

impl From<RorParameters> for ParameterOverrides {
    fn from(parameters: RorParameters) -> Self {
        Self {
            precision: Some(parameters.precision),
            eps: Some(parameters.eps),
            results_aggregator: Some(parameters.results_aggregator),
            alpha_values: Some(parameters.alpha_values),
            alpha_weights: parameters.alpha_weights,
            alpha_weight_generator: None,
            number_of_alpha_values: parameters.number_of_alpha_values,
            tie_resolver: Some(parameters.tie_resolver),
            value_function: Some(parameters.value_function),
        }
    }
}
