//! Yield and waste analysis.
//!
//! A yield factor is the usable fraction of an input or output, in `[0, 1]`.
//! It comes from an explicit yield percentage, or from the complement of a
//! waste percentage. When both are given the yield percentage wins.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{InvalidPercentageError, PercentageKind, RecipeOutput, YieldAnalysis};

fn validate(kind: PercentageKind, pct: Decimal) -> Result<Decimal, InvalidPercentageError> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(InvalidPercentageError::new(kind, pct));
    }
    Ok(pct)
}

/// Derive the yield factor from a yield or waste percentage.
///
/// # Examples
///
/// ```
/// use recipecost_core::yields::calculate_yield_factor;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_yield_factor(Some(dec!(80)), None).unwrap(), dec!(0.8));
/// assert_eq!(calculate_yield_factor(None, Some(dec!(20))).unwrap(), dec!(0.8));
/// assert_eq!(calculate_yield_factor(None, None).unwrap(), dec!(1));
/// assert!(calculate_yield_factor(Some(dec!(150)), None).is_err());
/// ```
pub fn calculate_yield_factor(
    yield_pct: Option<Decimal>,
    waste_pct: Option<Decimal>,
) -> Result<Decimal, InvalidPercentageError> {
    if let Some(pct) = yield_pct {
        let pct = validate(PercentageKind::Yield, pct)?;
        return Ok(pct / Decimal::ONE_HUNDRED);
    }
    if let Some(pct) = waste_pct {
        let pct = validate(PercentageKind::Waste, pct)?;
        return Ok((Decimal::ONE_HUNDRED - pct) / Decimal::ONE_HUNDRED);
    }
    Ok(Decimal::ONE)
}

/// Efficiency on a 0-100 scale, increasing with the yield percentage.
#[must_use]
pub fn efficiency_score(yield_percentage: Decimal) -> Decimal {
    yield_percentage
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Build the yield report for a recipe output.
///
/// # Examples
///
/// ```
/// use recipecost_core::{yields::calculate_yield_analysis, RecipeOutput};
/// use rust_decimal_macros::dec;
///
/// let output = RecipeOutput::new("stock", dec!(100), "l").with_yield(dec!(90));
/// let analysis = calculate_yield_analysis(&output).unwrap();
/// assert_eq!(analysis.actual_yield, dec!(90));
/// ```
pub fn calculate_yield_analysis(
    output: &RecipeOutput,
) -> Result<YieldAnalysis, InvalidPercentageError> {
    let factor = calculate_yield_factor(output.yield_percentage, output.waste_percentage)?;

    let theoretical_yield = output.quantity;
    let actual_yield = theoretical_yield * factor;
    let waste_factor = output.waste_percentage.unwrap_or(Decimal::ZERO);
    let yield_percentage = output
        .yield_percentage
        .unwrap_or(Decimal::ONE_HUNDRED - waste_factor);

    Ok(YieldAnalysis {
        theoretical_yield,
        actual_yield,
        yield_percentage,
        waste_factor,
        efficiency_score: efficiency_score(yield_percentage),
    })
}
