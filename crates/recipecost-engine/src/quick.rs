//! Quick cost estimate over raw inputs.

use recipecost_core::yields::calculate_yield_factor;
use recipecost_core::{DecimalContext, RecipeInput};
use rust_decimal::Decimal;

use crate::CostError;

/// Estimate the materials cost of raw inputs, re-deriving the quantity that
/// must be bought to end up with `quantity` usable units.
///
/// Unlike [`recipecost_core::primitives::calculate_materials_cost`], which
/// takes quantities as final, each line here is divided by its usable
/// fraction:
/// - a positive waste percentage gives `1 - waste/100`
/// - otherwise a yield percentage gives `yield/100`
///
/// Only `unitCostOverride` is priced; inputs without one count as zero, as
/// do negative quantities.
/// A zero usable fraction contributes zero. Any yield or waste percentage
/// outside `[0, 100]` fails, even when the other one decides the factor.
///
/// # Examples
///
/// ```
/// use recipecost_core::RecipeInput;
/// use recipecost_engine::estimate_quick_cost;
/// use rust_decimal_macros::dec;
///
/// let inputs = vec![
///     RecipeInput::new("trim", dec!(100), "g").with_waste(dec!(20)).with_unit_cost(dec!(0.2)),
/// ];
/// assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(25));
/// ```
pub fn estimate_quick_cost(inputs: &[RecipeInput]) -> Result<Decimal, CostError> {
    let ctx = DecimalContext::default();
    let mut total = Decimal::ZERO;

    for input in inputs {
        let unit_cost = input.unit_cost_override.unwrap_or(Decimal::ZERO);
        let line = ctx.multiply(input.effective_quantity(), unit_cost)?;

        let waste_factor = input
            .waste_percentage
            .map(|waste| calculate_yield_factor(None, Some(waste)))
            .transpose()?;
        let yield_factor = input
            .yield_percentage
            .map(|pct| calculate_yield_factor(Some(pct), None))
            .transpose()?;

        let factor = match (input.waste_percentage, waste_factor, yield_factor) {
            (Some(waste), Some(f), _) if waste > Decimal::ZERO => f,
            (_, _, Some(f)) => f,
            _ => Decimal::ONE,
        };

        total = ctx.add(total, ctx.divide_or_zero(line, factor)?)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipecost_core::Item;
    use rust_decimal_macros::dec;

    #[test]
    fn test_waste_adjusted() {
        let inputs = vec![RecipeInput::new("x", dec!(100), "g")
            .with_waste(dec!(20))
            .with_unit_cost(dec!(0.2))];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(25));
    }

    #[test]
    fn test_yield_adjusted() {
        let inputs = vec![RecipeInput::new("x", dec!(100), "g")
            .with_yield(dec!(75))
            .with_unit_cost(dec!(0.15))];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(20));
    }

    #[test]
    fn test_waste_takes_precedence_when_positive() {
        let inputs = vec![RecipeInput::new("x", dec!(100), "g")
            .with_waste(dec!(50))
            .with_yield(dec!(80))
            .with_unit_cost(dec!(1))];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(200));

        let zero_waste = vec![RecipeInput::new("x", dec!(100), "g")
            .with_waste(dec!(0))
            .with_yield(dec!(80))
            .with_unit_cost(dec!(1))];
        assert_eq!(estimate_quick_cost(&zero_waste).unwrap(), dec!(125));
    }

    #[test]
    fn test_no_adjustment_and_sum() {
        let inputs = vec![
            RecipeInput::new("a", dec!(2), "kg").with_unit_cost(dec!(3)),
            RecipeInput::new("b", dec!(100), "g")
                .with_waste(dec!(20))
                .with_unit_cost(dec!(0.2)),
        ];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(31));
    }

    #[test]
    fn test_only_override_is_priced() {
        let inputs = vec![RecipeInput::new(
            Item::new("a").with_unit_cost(dec!(9)),
            dec!(2),
            "kg",
        )];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(0));
        assert_eq!(estimate_quick_cost(&[]).unwrap(), dec!(0));
    }

    #[test]
    fn test_out_of_range_percentages_rejected() {
        let negative_waste = vec![RecipeInput::new("x", dec!(100), "g")
            .with_waste(dec!(-5))
            .with_unit_cost(dec!(1))];
        assert!(matches!(
            estimate_quick_cost(&negative_waste),
            Err(CostError::InvalidPercentage(_))
        ));

        let bad_yield_behind_waste = vec![RecipeInput::new("x", dec!(100), "g")
            .with_waste(dec!(20))
            .with_yield(dec!(120))
            .with_unit_cost(dec!(1))];
        assert!(matches!(
            estimate_quick_cost(&bad_yield_behind_waste),
            Err(CostError::InvalidPercentage(_))
        ));
    }

    #[test]
    fn test_negative_quantity_counts_as_zero() {
        let inputs = vec![
            RecipeInput::new("a", dec!(-10), "g").with_unit_cost(dec!(1)),
            RecipeInput::new("b", dec!(3), "g").with_unit_cost(dec!(1)),
        ];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(3));
    }

    #[test]
    fn test_total_waste_degrades_to_zero() {
        let inputs = vec![RecipeInput::new("x", dec!(10), "g")
            .with_waste(dec!(100))
            .with_unit_cost(dec!(1))];
        assert_eq!(estimate_quick_cost(&inputs).unwrap(), dec!(0));
    }

    #[test]
    fn test_invalid_waste_rejected() {
        let inputs = vec![RecipeInput::new("x", dec!(10), "g")
            .with_waste(dec!(120))
            .with_unit_cost(dec!(1))];
        assert!(matches!(
            estimate_quick_cost(&inputs),
            Err(CostError::InvalidPercentage(_))
        ));
    }
}
