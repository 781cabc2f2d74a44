//! Cost engine errors.

use recipecost_core::{ArithmeticError, InvalidPercentageError};
use rust_decimal::Decimal;
use thiserror::Error;

/// An unexpected failure inside the full cost pipeline.
///
/// Carries the recipe being costed so the caller can tell which one broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to calculate cost for recipe {recipe_id}")]
pub struct RecipeCostCalculationError {
    /// The recipe being costed.
    pub recipe_id: String,
    /// The underlying failure.
    #[source]
    pub source: ArithmeticError,
}

impl RecipeCostCalculationError {
    /// Wrap an arithmetic failure for the given recipe.
    #[must_use]
    pub fn new(recipe_id: impl Into<String>, source: ArithmeticError) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            source,
        }
    }
}

/// Errors returned by the cost engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    /// A yield or waste percentage was outside `[0, 100]`.
    #[error(transparent)]
    InvalidPercentage(#[from] InvalidPercentageError),

    /// Arithmetic failed outside a recipe pipeline (quick estimate, scaling).
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// The full pipeline failed for a recipe.
    #[error(transparent)]
    Calculation(#[from] RecipeCostCalculationError),

    /// A scale factor was zero or negative.
    #[error("scale factor must be positive, got {0}")]
    InvalidScaleFactor(Decimal),
}

impl CostError {
    /// The recipe a pipeline failure belongs to, if known.
    #[must_use]
    pub fn recipe_id(&self) -> Option<&str> {
        match self {
            Self::Calculation(e) => Some(&e.recipe_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipecost_core::PercentageKind;
    use rust_decimal_macros::dec;
    use std::error::Error as _;

    #[test]
    fn test_calculation_error_keeps_cause() {
        let err: CostError =
            RecipeCostCalculationError::new("bread", ArithmeticError::DivisionByZero).into();
        assert_eq!(err.recipe_id(), Some("bread"));
        assert_eq!(err.to_string(), "failed to calculate cost for recipe bread");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "division by zero");
    }

    #[test]
    fn test_invalid_percentage_is_transparent() {
        let err: CostError = InvalidPercentageError::new(PercentageKind::Waste, dec!(120)).into();
        assert_eq!(
            err.to_string(),
            "invalid waste percentage 120: must be between 0 and 100"
        );
        assert_eq!(err.recipe_id(), None);
    }
}
