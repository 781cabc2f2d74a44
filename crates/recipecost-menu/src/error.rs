//! Menu engineering errors.

use recipecost_core::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by [`crate::analyze_menu`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The popularity factor must be positive.
    #[error("popularity factor must be positive, got {0}")]
    InvalidPopularityFactor(Decimal),

    /// Decimal arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
