//! Error types shared by every recipecost crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which kind of percentage failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentageKind {
    /// A yield percentage (usable fraction).
    Yield,
    /// A waste percentage (lost fraction).
    Waste,
}

impl fmt::Display for PercentageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yield => write!(f, "yield"),
            Self::Waste => write!(f, "waste"),
        }
    }
}

/// A yield or waste percentage fell outside `[0, 100]`.
///
/// This is explicit user configuration, so it is never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} percentage {value}: must be between 0 and 100")]
pub struct InvalidPercentageError {
    /// Whether the offending value was a yield or a waste percentage.
    pub kind: PercentageKind,
    /// The rejected value.
    pub value: Decimal,
}

impl InvalidPercentageError {
    /// Create a new error for the given kind and value.
    #[must_use]
    pub const fn new(kind: PercentageKind, value: Decimal) -> Self {
        Self { kind, value }
    }
}

/// Failure inside the decimal arithmetic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The result does not fit in a 96-bit decimal.
    #[error("decimal overflow in {operation}")]
    Overflow {
        /// The operation that overflowed (`add`, `multiply`, ...).
        operation: &'static str,
    },

    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl ArithmeticError {
    pub(crate) const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_percentage_display() {
        let err = InvalidPercentageError::new(PercentageKind::Yield, dec!(150));
        assert_eq!(
            err.to_string(),
            "invalid yield percentage 150: must be between 0 and 100"
        );
    }

    #[test]
    fn test_arithmetic_error_display() {
        assert_eq!(
            ArithmeticError::overflow("multiply").to_string(),
            "decimal overflow in multiply"
        );
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "division by zero");
    }
}
