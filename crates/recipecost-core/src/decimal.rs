//! Fixed-precision decimal arithmetic.
//!
//! Every monetary and quantity calculation in recipecost routes through a
//! [`DecimalContext`]. Addition, subtraction and multiplication of
//! [`Decimal`] values are exact; quotients are rounded to the context's
//! `scale` using midpoint-away-from-zero rounding.
//!
//! Division by zero is reported, never decided here: callers that want the
//! safe-degrade behaviour use [`DecimalContext::divide_or_zero`].
//!
//! # Examples
//!
//! ```
//! use recipecost_core::decimal;
//! use rust_decimal_macros::dec;
//!
//! let a = decimal::multiply(dec!(0.1), dec!(0.1)).unwrap();
//! let b = decimal::multiply(dec!(0.2), dec!(0.1)).unwrap();
//! assert_eq!(decimal::add(a, b).unwrap(), dec!(0.03));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::ArithmeticError;

/// Number of decimal places kept after a division.
pub const DEFAULT_SCALE: u32 = 10;

/// Largest scale a 96-bit `Decimal` can represent.
pub const MAX_SCALE: u32 = 28;

/// Arithmetic settings applied to a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalContext {
    /// Decimal places kept after division.
    pub scale: u32,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl DecimalContext {
    /// Create a context with the given division scale.
    ///
    /// Scales above 28 are clamped to the maximum `Decimal` supports.
    #[must_use]
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.min(MAX_SCALE),
        }
    }

    /// Exact addition.
    pub fn add(&self, a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
        a.checked_add(b).ok_or(ArithmeticError::overflow("add"))
    }

    /// Exact subtraction.
    pub fn subtract(&self, a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
        a.checked_sub(b).ok_or(ArithmeticError::overflow("subtract"))
    }

    /// Exact multiplication.
    pub fn multiply(&self, a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
        a.checked_mul(b).ok_or(ArithmeticError::overflow("multiply"))
    }

    /// Division rounded to the context scale.
    pub fn divide(&self, a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
        if b.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        a.checked_div(b)
            .map(|q| self.round(q))
            .ok_or(ArithmeticError::overflow("divide"))
    }

    /// Division that yields zero instead of failing on a zero divisor.
    pub fn divide_or_zero(&self, a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
        match self.divide(a, b) {
            Err(ArithmeticError::DivisionByZero) => Ok(Decimal::ZERO),
            other => other,
        }
    }

    /// Sum a sequence of values.
    pub fn sum<I>(&self, values: I) -> Result<Decimal, ArithmeticError>
    where
        I: IntoIterator<Item = Decimal>,
    {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, v| self.add(acc, v))
    }

    /// `value × pct / 100`.
    pub fn percent(&self, value: Decimal, pct: Decimal) -> Result<Decimal, ArithmeticError> {
        let scaled = self.multiply(value, pct)?;
        self.divide(scaled, Decimal::ONE_HUNDRED)
    }

    /// `part / whole × 100`, or zero when `whole` is zero.
    pub fn ratio_percent(
        &self,
        part: Decimal,
        whole: Decimal,
    ) -> Result<Decimal, ArithmeticError> {
        if whole.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let scaled = self.multiply(part, Decimal::ONE_HUNDRED)?;
        self.divide(scaled, whole)
    }

    /// Round a value to the context scale and strip trailing zeros.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        value
            .round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }
}

/// [`DecimalContext::add`] with the default context.
pub fn add(a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
    DecimalContext::default().add(a, b)
}

/// [`DecimalContext::subtract`] with the default context.
pub fn subtract(a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
    DecimalContext::default().subtract(a, b)
}

/// [`DecimalContext::multiply`] with the default context.
pub fn multiply(a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
    DecimalContext::default().multiply(a, b)
}

/// [`DecimalContext::divide`] with the default context.
pub fn divide(a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
    DecimalContext::default().divide(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_sum_of_products() {
        let ctx = DecimalContext::default();
        let a = ctx.multiply(dec!(0.1), dec!(0.1)).unwrap();
        let b = ctx.multiply(dec!(0.2), dec!(0.1)).unwrap();
        assert_eq!(ctx.add(a, b).unwrap(), dec!(0.03));
    }

    #[test]
    fn test_divide_rounds_to_scale() {
        let ctx = DecimalContext::new(4);
        assert_eq!(ctx.divide(dec!(1), dec!(3)).unwrap(), dec!(0.3333));
        assert_eq!(ctx.divide(dec!(2), dec!(3)).unwrap(), dec!(0.6667));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            divide(dec!(1), dec!(0)),
            Err(ArithmeticError::DivisionByZero)
        );
        let ctx = DecimalContext::default();
        assert_eq!(ctx.divide_or_zero(dec!(1), dec!(0)).unwrap(), dec!(0));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = multiply(Decimal::MAX, dec!(2)).unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::Overflow {
                operation: "multiply"
            }
        );
        assert!(add(Decimal::MAX, Decimal::MAX).is_err());
    }

    #[test]
    fn test_percent_helpers() {
        let ctx = DecimalContext::default();
        assert_eq!(ctx.percent(dec!(1000), dec!(10)).unwrap(), dec!(100));
        assert_eq!(ctx.ratio_percent(dec!(1), dec!(4)).unwrap(), dec!(25));
        assert_eq!(ctx.ratio_percent(dec!(1), dec!(0)).unwrap(), dec!(0));
    }

    #[test]
    fn test_sum_empty() {
        let ctx = DecimalContext::default();
        assert_eq!(ctx.sum(Vec::new()).unwrap(), dec!(0));
        assert_eq!(ctx.sum([dec!(1.5), dec!(2.25)]).unwrap(), dec!(3.75));
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(DecimalContext::new(40).scale, MAX_SCALE);
    }
}
