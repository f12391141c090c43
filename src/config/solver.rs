//! Solver defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::aggregation::AggregatorKind;
use crate::domain::foundation::AlphaValue;
use crate::domain::parameters::{
    RorParameters, DEFAULT_EPS, DEFAULT_NUMBER_OF_ALPHA_VALUES, DEFAULT_PRECISION,
    MAX_NUMBER_OF_ALPHA_VALUES,
};
use crate::domain::tie_resolution::TieResolverKind;

/// Defaults applied to problems that do not set their own parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Margin for strict preferences
    #[serde(default = "default_eps")]
    pub default_eps: f64,

    /// Display rounding digits
    #[serde(default = "default_precision")]
    pub default_precision: usize,

    /// Alpha values generated for the voting aggregators
    #[serde(default = "default_number_of_alpha_values")]
    pub default_number_of_alpha_values: usize,

    /// Upper bound on NUMBER_OF_ALPHA_VALUES, at most the built-in limit
    #[serde(default = "max_number_of_alpha_values")]
    pub max_number_of_alpha_values: usize,

    #[serde(default)]
    pub default_aggregator: AggregatorKind,

    #[serde(default)]
    pub default_tie_resolver: TieResolverKind,
}

impl SolverConfig {
    /// Parameters built from these defaults, with alpha values Q, R and S.
    ///
    /// NUMBER_OF_ALPHA_VALUES is always set; only the voting aggregators
    /// use it, whether chosen here or by a problem file.
    pub fn default_parameters(&self) -> RorParameters {
        RorParameters {
            precision: self.default_precision,
            eps: self.default_eps,
            results_aggregator: self.default_aggregator,
            alpha_values: AlphaValue::default_set(),
            alpha_weights: None,
            number_of_alpha_values: Some(self.default_number_of_alpha_values),
            tie_resolver: self.default_tie_resolver,
            ..RorParameters::default()
        }
    }

    /// Validate solver defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.default_eps.is_finite() || self.default_eps < 0.0 {
            return Err(ValidationError::InvalidEps(self.default_eps));
        }
        if !(1..=MAX_NUMBER_OF_ALPHA_VALUES).contains(&self.max_number_of_alpha_values) {
            return Err(ValidationError::InvalidMaxNumberOfAlphaValues);
        }
        if self.default_number_of_alpha_values == 0
            || self.default_number_of_alpha_values > self.max_number_of_alpha_values
        {
            return Err(ValidationError::InvalidNumberOfAlphaValues {
                default: self.default_number_of_alpha_values,
                max: self.max_number_of_alpha_values,
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            default_eps: default_eps(),
            default_precision: default_precision(),
            default_number_of_alpha_values: default_number_of_alpha_values(),
            max_number_of_alpha_values: max_number_of_alpha_values(),
            default_aggregator: AggregatorKind::default(),
            default_tie_resolver: TieResolverKind::default(),
        }
    }
}

fn default_eps() -> f64 {
    DEFAULT_EPS
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_number_of_alpha_values() -> usize {
    DEFAULT_NUMBER_OF_ALPHA_VALUES
}

fn max_number_of_alpha_values() -> usize {
    MAX_NUMBER_OF_ALPHA_VALUES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.default_eps, 1e-4);
        assert_eq!(config.default_precision, 3);
        assert_eq!(config.default_number_of_alpha_values, 3);
        assert_eq!(config.max_number_of_alpha_values, 15);
        assert_eq!(config.default_aggregator, AggregatorKind::Default);
        assert_eq!(config.default_tie_resolver, TieResolverKind::NoResolver);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_parameters_use_named_alphas() {
        let parameters = SolverConfig::default().default_parameters();
        let names: Vec<&str> = parameters.alpha_values.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Q", "R", "S"]);
        assert_eq!(parameters.number_of_alpha_values, Some(3));
        assert_eq!(parameters.effective_alpha_values(), AlphaValue::default_set());
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn test_voting_default_generates_alpha_count() {
        let config = SolverConfig {
            default_aggregator: AggregatorKind::Copeland,
            default_number_of_alpha_values: 4,
            ..SolverConfig::default()
        };
        let parameters = config.default_parameters();
        assert_eq!(parameters.effective_alpha_values().len(), 4);
    }

    #[test]
    fn test_rejects_negative_eps() {
        let config = SolverConfig {
            default_eps: -1.0,
            ..SolverConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidEps(-1.0)));
    }

    #[test]
    fn test_rejects_max_above_built_in_limit() {
        for max in [0, MAX_NUMBER_OF_ALPHA_VALUES + 1] {
            let config = SolverConfig {
                max_number_of_alpha_values: max,
                default_number_of_alpha_values: 1,
                ..SolverConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidMaxNumberOfAlphaValues)
            );
        }
    }

    #[test]
    fn test_rejects_count_above_max() {
        let config = SolverConfig {
            default_number_of_alpha_values: 20,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidNumberOfAlphaValues { default: 20, max: 15 })
        ));
    }
}
