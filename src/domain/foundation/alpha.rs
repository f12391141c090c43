//! Alpha value object: a named robustness level in [0, 1].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A robustness level with a display name.
///
/// `0.0` is the most pessimistic reading of the feasible weight region,
/// `1.0` the most optimistic one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAlphaValue")]
pub struct AlphaValue {
    value: f64,
    name: String,
}

#[derive(Deserialize)]
struct RawAlphaValue {
    value: f64,
    name: String,
}

impl TryFrom<RawAlphaValue> for AlphaValue {
    type Error = ValidationError;

    fn try_from(raw: RawAlphaValue) -> Result<Self, Self::Error> {
        AlphaValue::new(raw.value, raw.name)
    }
}

impl AlphaValue {
    /// Smallest accepted alpha.
    pub const MIN: f64 = 0.0;

    /// Largest accepted alpha.
    pub const MAX: f64 = 1.0;

    /// Creates a named alpha value, rejecting values outside [0, 1].
    pub fn new(value: f64, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("alpha_value.name"));
        }
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "alpha_value.value",
                "must be a finite number",
            ));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "alpha_value.value",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self { value, name })
    }

    /// Generates `count` evenly spaced alpha values from 0 to 1 inclusive.
    ///
    /// Names are `alpha_1..alpha_n`. A single point yields `[0.0]`.
    pub fn evenly_spaced(count: usize) -> Vec<AlphaValue> {
        match count {
            0 => Vec::new(),
            1 => vec![Self::unchecked(0.0, "alpha_1")],
            n => (0..n)
                .map(|i| {
                    let value = i as f64 / (n - 1) as f64;
                    Self::unchecked(value, format!("alpha_{}", i + 1))
                })
                .collect(),
        }
    }

    /// The three alpha values offered by default: Q=0.0, R=0.5, S=1.0.
    pub fn default_set() -> Vec<AlphaValue> {
        vec![
            Self::unchecked(0.0, "Q"),
            Self::unchecked(0.5, "R"),
            Self::unchecked(1.0, "S"),
        ]
    }

    fn unchecked(value: f64, name: impl Into<String>) -> Self {
        Self {
            value: value.clamp(Self::MIN, Self::MAX),
            name: name.into(),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AlphaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}
