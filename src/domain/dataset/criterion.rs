//! Criteria and their orientation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Direction in which a criterion is preferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Lower values are better.
    Cost,
    /// Higher values are better.
    #[default]
    Gain,
}

impl CriterionType {
    /// Multiplier that turns a raw value into a "higher is better" value.
    pub fn orientation(&self) -> f64 {
        match self {
            CriterionType::Cost => -1.0,
            CriterionType::Gain => 1.0,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Cost => "cost",
            CriterionType::Gain => "gain",
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cost" | "c" => Ok(CriterionType::Cost),
            "gain" | "g" => Ok(CriterionType::Gain),
            other => Err(ValidationError::invalid_format(
                "criterion.type",
                format!("expected 'cost' or 'gain', got '{}'", other),
            )),
        }
    }
}

/// A named criterion with its orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, criterion_type: CriterionType) -> Self {
        Self {
            name: name.into(),
            criterion_type,
        }
    }

    /// Creates a gain criterion.
    pub fn gain(name: impl Into<String>) -> Self {
        Self::new(name, CriterionType::Gain)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>) -> Self {
        Self::new(name, CriterionType::Cost)
    }

    /// Returns true when lower values are better.
    pub fn is_cost(&self) -> bool {
        self.criterion_type == CriterionType::Cost
    }
}
