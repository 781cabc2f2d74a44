//! Menu engineering configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the menu's centre is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralTendency {
    /// Arithmetic mean.
    Mean,
    /// Median; robust against a single runaway best-seller.
    #[default]
    Median,
}

impl FromStr for CentralTendency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" | "average" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            _ => Err(format!("unknown central tendency: {s}")),
        }
    }
}

impl fmt::Display for CentralTendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Median => write!(f, "median"),
        }
    }
}

/// Settings for [`crate::analyze_menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuEngineeringConfig {
    /// Centre used for scores and thresholds
    pub central_tendency: CentralTendency,
    /// Multiplier applied to the popularity threshold (0.7 gives the
    /// classic 70% menu-mix rule)
    pub popularity_factor: Decimal,
}

impl Default for MenuEngineeringConfig {
    fn default() -> Self {
        Self {
            central_tendency: CentralTendency::Median,
            popularity_factor: Decimal::ONE,
        }
    }
}

impl MenuEngineeringConfig {
    /// Use the given central tendency.
    #[must_use]
    pub const fn with_central_tendency(mut self, tendency: CentralTendency) -> Self {
        self.central_tendency = tendency;
        self
    }

    /// Set the popularity threshold multiplier.
    #[must_use]
    pub const fn with_popularity_factor(mut self, factor: Decimal) -> Self {
        self.popularity_factor = factor;
        self
    }
}
