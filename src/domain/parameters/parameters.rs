//! The parameter set of a solve.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::{validate_weights, ConfigurationError, ParameterValue, RorParameter, WeightedAlpha};
use crate::domain::aggregation::AggregatorKind;
use crate::domain::foundation::AlphaValue;
use crate::domain::tie_resolution::TieResolverKind;

/// Display rounding used when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 3;

/// Strict-preference margin used when nothing else is configured.
pub const DEFAULT_EPS: f64 = 1e-4;

/// Number of generated alpha values offered by default.
pub const DEFAULT_NUMBER_OF_ALPHA_VALUES: usize = 3;

/// Upper bound on NUMBER_OF_ALPHA_VALUES.
pub const MAX_NUMBER_OF_ALPHA_VALUES: usize = 15;

/// Shape of the unknown utility model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFunctionKind {
    /// One non-negative weight per criterion, summing to one.
    #[default]
    WeightedSum,
    /// Piecewise-linear monotone marginal value function per criterion.
    Additive,
}

impl ValueFunctionKind {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ValueFunctionKind::WeightedSum => "weighted_sum",
            ValueFunctionKind::Additive => "additive",
        }
    }
}

impl fmt::Display for ValueFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ValueFunctionKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "weighted_sum" | "weighted" => Ok(ValueFunctionKind::WeightedSum),
            "additive" | "uta" => Ok(ValueFunctionKind::Additive),
            _ => Err(ConfigurationError::UnknownValueFunction(s.to_string())),
        }
    }
}

/// Typed parameter set. Cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RorParameters {
    pub precision: usize,
    pub eps: f64,
    pub results_aggregator: AggregatorKind,
    pub alpha_values: Vec<AlphaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_weights: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_alpha_values: Option<usize>,
    pub tie_resolver: TieResolverKind,
    pub value_function: ValueFunctionKind,
}

impl Default for RorParameters {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            eps: DEFAULT_EPS,
            results_aggregator: AggregatorKind::default(),
            alpha_values: AlphaValue::default_set(),
            alpha_weights: None,
            number_of_alpha_values: None,
            tie_resolver: TieResolverKind::default(),
            value_function: ValueFunctionKind::default(),
        }
    }
}

impl RorParameters {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> RorParametersBuilder {
        RorParametersBuilder::default()
    }

    /// Alpha values the solve will actually iterate over.
    ///
    /// Voting aggregators replace the explicit list with evenly spaced
    /// values when NUMBER_OF_ALPHA_VALUES is set.
    pub fn effective_alpha_values(&self) -> Vec<AlphaValue> {
        match self.number_of_alpha_values {
            Some(count) if self.results_aggregator.generates_alpha_values() => {
                AlphaValue::evenly_spaced(count)
            }
            _ => self.alpha_values.clone(),
        }
    }

    /// Checks every cross-parameter invariant.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(ConfigurationError::InvalidEps(self.eps));
        }

        if let Some(count) = self.number_of_alpha_values {
            if !(1..=MAX_NUMBER_OF_ALPHA_VALUES).contains(&count) {
                return Err(ConfigurationError::InvalidNumberOfAlphaValues {
                    min: 1,
                    max: MAX_NUMBER_OF_ALPHA_VALUES,
                    actual: count,
                });
            }
        }

        let alphas = self.effective_alpha_values();
        if alphas.is_empty() {
            return Err(ConfigurationError::NoAlphaValues);
        }
        let mut names = HashSet::new();
        for alpha in &alphas {
            if !names.insert(alpha.name()) {
                return Err(ConfigurationError::DuplicateAlphaName(alpha.name().to_string()));
            }
        }

        if let Some(weights) = &self.alpha_weights {
            if weights.len() != self.alpha_values.len() {
                return Err(ConfigurationError::AlphaWeightsMismatch {
                    weights: weights.len(),
                    alpha_values: self.alpha_values.len(),
                });
            }
        }

        if self.results_aggregator == AggregatorKind::Weighted {
            let weights = self
                .alpha_weights
                .as_ref()
                .ok_or(ConfigurationError::MissingAlphaWeights)?;
            validate_weights(weights)?;
        }

        Ok(())
    }

    /// Reads one parameter. ALPHA_WEIGHTS and NUMBER_OF_ALPHA_VALUES are
    /// `None` when unset.
    pub fn get(&self, parameter: RorParameter) -> Option<ParameterValue> {
        match parameter {
            RorParameter::Precision => Some(ParameterValue::Integer(self.precision)),
            RorParameter::Eps => Some(ParameterValue::Float(self.eps)),
            RorParameter::ResultsAggregator => Some(ParameterValue::Text(
                self.results_aggregator.name().to_string(),
            )),
            RorParameter::AlphaValues => {
                Some(ParameterValue::AlphaValues(self.alpha_values.clone()))
            }
            RorParameter::AlphaWeights => self.alpha_weights.clone().map(ParameterValue::Floats),
            RorParameter::NumberOfAlphaValues => {
                self.number_of_alpha_values.map(ParameterValue::Integer)
            }
            RorParameter::TieResolver => {
                Some(ParameterValue::Text(self.tie_resolver.name().to_string()))
            }
            RorParameter::ValueFunction => {
                Some(ParameterValue::Text(self.value_function.name().to_string()))
            }
        }
    }

    /// Writes one parameter, checking that the value has the right shape.
    pub fn set(
        &mut self,
        parameter: RorParameter,
        value: ParameterValue,
    ) -> Result<(), ConfigurationError> {
        let mismatch = |value: &ParameterValue| ConfigurationError::InvalidParameterValue {
            parameter: parameter.as_str().to_string(),
            value: value.kind().to_string(),
        };

        match (parameter, value) {
            (RorParameter::Precision, ParameterValue::Integer(precision)) => {
                self.precision = precision;
            }
            (RorParameter::Eps, ParameterValue::Float(eps)) => self.eps = eps,
            (RorParameter::Eps, ParameterValue::Integer(eps)) => self.eps = eps as f64,
            (RorParameter::ResultsAggregator, ParameterValue::Text(name)) => {
                self.results_aggregator = name.parse()?;
            }
            (RorParameter::AlphaValues, ParameterValue::AlphaValues(alphas)) => {
                self.alpha_values = alphas;
            }
            (RorParameter::AlphaWeights, ParameterValue::Floats(weights)) => {
                self.alpha_weights = Some(weights);
            }
            (RorParameter::NumberOfAlphaValues, ParameterValue::Integer(count)) => {
                self.number_of_alpha_values = Some(count);
            }
            (RorParameter::TieResolver, ParameterValue::Text(name)) => {
                self.tie_resolver = name.parse()?;
            }
            (RorParameter::ValueFunction, ParameterValue::Text(name)) => {
                self.value_function = name.parse()?;
            }
            (_, value) => return Err(mismatch(&value)),
        }
        Ok(())
    }

    /// Parameters relevant to the selected aggregator, in display order.
    ///
    /// ALPHA_WEIGHTS is listed only for the weighted aggregator.
    pub fn entries(&self) -> Vec<(RorParameter, ParameterValue)> {
        RorParameter::ALL
            .into_iter()
            .filter(|parameter| {
                *parameter != RorParameter::AlphaWeights
                    || self.results_aggregator == AggregatorKind::Weighted
            })
            .filter_map(|parameter| self.get(parameter).map(|value| (parameter, value)))
            .collect()
    }
}

/// Builder for [`RorParameters`].
#[derive(Debug, Default)]
pub struct RorParametersBuilder {
    parameters: RorParameters,
}

impl RorParametersBuilder {
    pub fn precision(mut self, precision: usize) -> Self {
        self.parameters.precision = precision;
        self
    }

    pub fn eps(mut self, eps: f64) -> Self {
        self.parameters.eps = eps;
        self
    }

    pub fn aggregator(mut self, aggregator: AggregatorKind) -> Self {
        self.parameters.results_aggregator = aggregator;
        self
    }

    pub fn alpha_values(mut self, alpha_values: Vec<AlphaValue>) -> Self {
        self.parameters.alpha_values = alpha_values;
        self
    }

    pub fn alpha_weights(mut self, weights: Vec<f64>) -> Self {
        self.parameters.alpha_weights = Some(weights);
        self
    }

    /// Sets alpha values and their weights together.
    pub fn weighted_alphas(mut self, entries: Vec<WeightedAlpha>) -> Self {
        let (alphas, weights) = entries
            .into_iter()
            .map(|entry| (entry.alpha, entry.weight))
            .unzip();
        self.parameters.alpha_values = alphas;
        self.parameters.alpha_weights = Some(weights);
        self
    }

    pub fn number_of_alpha_values(mut self, count: usize) -> Self {
        self.parameters.number_of_alpha_values = Some(count);
        self
    }

    pub fn tie_resolver(mut self, tie_resolver: TieResolverKind) -> Self {
        self.parameters.tie_resolver = tie_resolver;
        self
    }

    pub fn value_function(mut self, value_function: ValueFunctionKind) -> Self {
        self.parameters.value_function = value_function;
        self
    }

    /// Returns the parameters after validation.
    pub fn build(self) -> Result<RorParameters, ConfigurationError> {
        self.parameters.validate()?;
        Ok(self.parameters)
    }

    /// Returns the parameters without validating them.
    pub fn build_unchecked(self) -> RorParameters {
        self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::AlphaWeightGenerator;

    fn alphas(values: &[f64]) -> Vec<AlphaValue> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| AlphaValue::new(*v, format!("a{}", i)).unwrap())
            .collect()
    }

    #[test]
    fn defaults_are_valid() {
        let parameters = RorParameters::default();
        assert!(parameters.validate().is_ok());
        assert_eq!(parameters.effective_alpha_values().len(), 3);
    }

    #[test]
    fn weight_count_must_match_alpha_count() {
        let result = RorParameters::builder()
            .aggregator(AggregatorKind::Weighted)
            .alpha_values(alphas(&[0.0, 0.5, 1.0]))
            .alpha_weights(vec![1.0, 2.0])
            .build();
        assert_eq!(
            result,
            Err(ConfigurationError::AlphaWeightsMismatch {
                weights: 2,
                alpha_values: 3
            })
        );
    }

    #[test]
    fn mismatch_is_checked_even_when_weights_are_unused() {
        let result = RorParameters::builder()
            .aggregator(AggregatorKind::Borda)
            .alpha_weights(vec![1.0])
            .build();
        assert!(matches!(result, Err(ConfigurationError::AlphaWeightsMismatch { .. })));
    }

    #[test]
    fn weighted_requires_weights() {
        let result = RorParameters::builder()
            .aggregator(AggregatorKind::Weighted)
            .build();
        assert_eq!(result, Err(ConfigurationError::MissingAlphaWeights));
    }

    #[test]
    fn rejects_negative_eps() {
        let result = RorParameters::builder().eps(-0.1).build();
        assert_eq!(result, Err(ConfigurationError::InvalidEps(-0.1)));
    }

    #[test]
    fn rejects_empty_alpha_list() {
        let result = RorParameters::builder().alpha_values(vec![]).build();
        assert_eq!(result, Err(ConfigurationError::NoAlphaValues));
    }

    #[test]
    fn rejects_duplicate_alpha_names() {
        let same_name = vec![
            AlphaValue::new(0.0, "x").unwrap(),
            AlphaValue::new(1.0, "x").unwrap(),
        ];
        let result = RorParameters::builder().alpha_values(same_name).build();
        assert_eq!(result, Err(ConfigurationError::DuplicateAlphaName("x".to_string())));
    }

    #[test]
    fn voting_aggregators_generate_alpha_values() {
        let parameters = RorParameters::builder()
            .aggregator(AggregatorKind::Copeland)
            .number_of_alpha_values(5)
            .build()
            .unwrap();
        let values: Vec<f64> = parameters
            .effective_alpha_values()
            .iter()
            .map(AlphaValue::value)
            .collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn default_aggregator_ignores_number_of_alpha_values() {
        let parameters = RorParameters::builder()
            .number_of_alpha_values(7)
            .build()
            .unwrap();
        assert_eq!(parameters.effective_alpha_values(), AlphaValue::default_set());
    }

    #[test]
    fn number_of_alpha_values_is_bounded() {
        for count in [0, MAX_NUMBER_OF_ALPHA_VALUES + 1] {
            let result = RorParameters::builder()
                .aggregator(AggregatorKind::Borda)
                .number_of_alpha_values(count)
                .build();
            assert!(matches!(
                result,
                Err(ConfigurationError::InvalidNumberOfAlphaValues { .. })
            ));
        }
    }

    #[test]
    fn generated_weights_feed_the_builder() {
        let entries = AlphaWeightGenerator::Triangle.generate(3).unwrap();
        let parameters = RorParameters::builder()
            .aggregator(AggregatorKind::Weighted)
            .weighted_alphas(entries)
            .build()
            .unwrap();
        assert_eq!(parameters.alpha_weights, Some(vec![1.0, 2.0, 1.0]));
    }

    #[test]
    fn clone_is_independent() {
        let original = RorParameters::default();
        let mut copy = original.clone();
        copy.alpha_values.clear();
        copy.eps = 1.0;
        assert_eq!(original.alpha_values.len(), 3);
        assert_eq!(original.eps, DEFAULT_EPS);
    }

    #[test]
    fn entries_hide_weights_unless_weighted() {
        let mut parameters = RorParameters::builder()
            .alpha_weights(vec![1.0, 1.0, 1.0])
            .build()
            .unwrap();
        let keys: Vec<RorParameter> = parameters.entries().into_iter().map(|(k, _)| k).collect();
        assert!(!keys.contains(&RorParameter::AlphaWeights));

        parameters.results_aggregator = AggregatorKind::Weighted;
        let keys: Vec<RorParameter> = parameters.entries().into_iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&RorParameter::AlphaWeights));
    }

    #[test]
    fn set_checks_value_shape() {
        let mut parameters = RorParameters::default();
        parameters
            .set(RorParameter::Eps, ParameterValue::Float(0.01))
            .unwrap();
        parameters
            .set(RorParameter::TieResolver, ParameterValue::Text("copeland".into()))
            .unwrap();
        assert_eq!(parameters.eps, 0.01);
        assert_eq!(parameters.tie_resolver, TieResolverKind::Copeland);

        let err = parameters
            .set(RorParameter::Precision, ParameterValue::Text("three".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidParameterValue { .. }));

        let err = parameters
            .set(RorParameter::ResultsAggregator, ParameterValue::Text("nope".into()))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownAggregator("nope".to_string()));
    }

    #[test]
    fn deserializes_with_defaults() {
        let parameters: RorParameters =
            serde_json::from_str(r#"{"eps": 0.5, "results_aggregator": "borda"}"#).unwrap();
        assert_eq!(parameters.eps, 0.5);
        assert_eq!(parameters.results_aggregator, AggregatorKind::Borda);
        assert_eq!(parameters.precision, DEFAULT_PRECISION);
        assert_eq!(parameters.alpha_values, AlphaValue::default_set());
    }
}
