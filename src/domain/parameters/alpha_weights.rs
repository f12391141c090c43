//! Generators of alpha values paired with weights for the weighted
//! aggregator.

use serde::{Deserialize, Serialize};

use super::ConfigurationError;
use crate::domain::foundation::AlphaValue;

const TRIANGLE_EDGE_WEIGHT: f64 = 1.0;
const TRIANGLE_PEAK_WEIGHT: f64 = 2.0;
const NORMAL_MEAN: f64 = 0.5;
const NORMAL_STD_DEV: f64 = 0.25;

/// An alpha value together with its aggregation weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAlpha {
    pub alpha: AlphaValue,
    pub weight: f64,
}

/// How weights are assigned to alpha values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AlphaWeightGenerator {
    /// Weights given explicitly.
    Custom { entries: Vec<WeightedAlpha> },
    /// Weight 1 at both ends rising linearly to 2 at alpha 0.5.
    Triangle,
    /// Gaussian density centred on alpha 0.5.
    NormalDistribution,
}

impl AlphaWeightGenerator {
    /// Produces the alpha values and their weights.
    ///
    /// `count` evenly spaced alpha values are generated for the shaped
    /// generators and ignored for [`AlphaWeightGenerator::Custom`].
    pub fn generate(&self, count: usize) -> Result<Vec<WeightedAlpha>, ConfigurationError> {
        let entries: Vec<WeightedAlpha> = match self {
            AlphaWeightGenerator::Custom { entries } => entries.clone(),
            AlphaWeightGenerator::Triangle => Self::shaped(count, triangle_weight),
            AlphaWeightGenerator::NormalDistribution => Self::shaped(count, normal_weight),
        };

        if entries.is_empty() {
            return Err(ConfigurationError::NoAlphaValues);
        }
        let weights: Vec<f64> = entries.iter().map(|entry| entry.weight).collect();
        validate_weights(&weights)?;
        Ok(entries)
    }

    fn shaped(count: usize, weight_of: fn(f64) -> f64) -> Vec<WeightedAlpha> {
        AlphaValue::evenly_spaced(count)
            .into_iter()
            .map(|alpha| WeightedAlpha {
                weight: weight_of(alpha.value()),
                alpha,
            })
            .collect()
    }
}

/// Checks that weights are finite, non-negative and not all zero.
pub fn validate_weights(weights: &[f64]) -> Result<(), ConfigurationError> {
    for (index, weight) in weights.iter().enumerate() {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(ConfigurationError::InvalidAlphaWeight {
                index,
                weight: *weight,
            });
        }
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(ConfigurationError::ZeroAlphaWeights);
    }
    Ok(())
}

fn triangle_weight(alpha: f64) -> f64 {
    let distance = (alpha - 0.5).abs() / 0.5;
    TRIANGLE_PEAK_WEIGHT - distance * (TRIANGLE_PEAK_WEIGHT - TRIANGLE_EDGE_WEIGHT)
}

fn normal_weight(alpha: f64) -> f64 {
    let z = (alpha - NORMAL_MEAN) / NORMAL_STD_DEV;
    (-0.5 * z * z).exp() / (NORMAL_STD_DEV * (2.0 * std::f64::consts::PI).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(entries: &[WeightedAlpha]) -> Vec<f64> {
        entries.iter().map(|entry| entry.weight).collect()
    }

    #[test]
    fn triangle_peaks_in_the_middle() {
        let entries = AlphaWeightGenerator::Triangle.generate(5).unwrap();
        assert_eq!(weights(&entries), vec![1.0, 1.5, 2.0, 1.5, 1.0]);
        assert_eq!(entries[4].alpha.name(), "alpha_5");
    }

    #[test]
    fn normal_distribution_is_symmetric_around_half() {
        let entries = AlphaWeightGenerator::NormalDistribution.generate(3).unwrap();
        let w = weights(&entries);
        assert!((w[0] - w[2]).abs() < 1e-12);
        assert!(w[1] > w[0]);
        // pdf peak: 1 / (0.25 * sqrt(2 pi))
        assert!((w[1] - 1.595_769_121_605_731).abs() < 1e-9);
    }

    #[test]
    fn custom_entries_are_kept() {
        let generator = AlphaWeightGenerator::Custom {
            entries: vec![WeightedAlpha {
                alpha: AlphaValue::new(0.3, "x").unwrap(),
                weight: 4.0,
            }],
        };
        let entries = generator.generate(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weight, 4.0);
    }

    #[test]
    fn rejects_negative_or_all_zero_weights() {
        assert!(matches!(
            validate_weights(&[1.0, -0.5]),
            Err(ConfigurationError::InvalidAlphaWeight { index: 1, .. })
        ));
        assert_eq!(
            validate_weights(&[0.0, 0.0]),
            Err(ConfigurationError::ZeroAlphaWeights)
        );
        assert!(validate_weights(&[0.0, 3.0]).is_ok());
    }

    #[test]
    fn zero_points_is_rejected() {
        assert_eq!(
            AlphaWeightGenerator::Triangle.generate(0),
            Err(ConfigurationError::NoAlphaValues)
        );
    }
}
