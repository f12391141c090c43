//! Parameter keys and their values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigurationError;
use crate::domain::foundation::AlphaValue;

/// Closed set of parameters a solve understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RorParameter {
    Precision,
    Eps,
    ResultsAggregator,
    AlphaValues,
    AlphaWeights,
    NumberOfAlphaValues,
    TieResolver,
    ValueFunction,
}

impl RorParameter {
    /// Every key, in display order.
    pub const ALL: [RorParameter; 8] = [
        RorParameter::Precision,
        RorParameter::Eps,
        RorParameter::ResultsAggregator,
        RorParameter::AlphaValues,
        RorParameter::AlphaWeights,
        RorParameter::NumberOfAlphaValues,
        RorParameter::TieResolver,
        RorParameter::ValueFunction,
    ];

    /// Canonical key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RorParameter::Precision => "PRECISION",
            RorParameter::Eps => "EPS",
            RorParameter::ResultsAggregator => "RESULTS_AGGREGATOR",
            RorParameter::AlphaValues => "ALPHA_VALUES",
            RorParameter::AlphaWeights => "ALPHA_WEIGHTS",
            RorParameter::NumberOfAlphaValues => "NUMBER_OF_ALPHA_VALUES",
            RorParameter::TieResolver => "TIE_RESOLVER",
            RorParameter::ValueFunction => "VALUE_FUNCTION",
        }
    }
}

impl fmt::Display for RorParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RorParameter {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        RorParameter::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ConfigurationError::UnknownParameter(s.to_string()))
    }
}

/// Value stored under a parameter key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Integer(usize),
    Float(f64),
    Text(String),
    AlphaValues(Vec<AlphaValue>),
    Floats(Vec<f64>),
}

impl ParameterValue {
    /// Short description of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterValue::Integer(_) => "an integer",
            ParameterValue::Float(_) => "a number",
            ParameterValue::Text(_) => "a name",
            ParameterValue::AlphaValues(_) => "a list of alpha values",
            ParameterValue::Floats(_) => "a list of numbers",
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Integer(value) => write!(f, "{}", value),
            ParameterValue::Float(value) => write!(f, "{}", value),
            ParameterValue::Text(value) => write!(f, "{}", value),
            ParameterValue::AlphaValues(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            ParameterValue::Floats(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
