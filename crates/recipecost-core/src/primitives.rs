//! Independent cost primitives.
//!
//! Each function is a pure mapping from inputs to a [`Decimal`]. Missing
//! data (no inputs, no cost reference, no config, zero output) contributes
//! zero instead of failing; only arithmetic overflow is reported.

use rust_decimal::Decimal;

use crate::{ArithmeticError, DecimalContext, LaborAssignment, RecipeCostConfig, RecipeInput};

/// Sum of `quantity × effective unit cost` over the inputs.
///
/// Inputs are taken as already carrying their final required quantity; no
/// yield adjustment happens here. A negative quantity counts as zero.
///
/// # Examples
///
/// ```
/// use recipecost_core::{primitives::calculate_materials_cost, RecipeInput};
/// use rust_decimal_macros::dec;
///
/// let inputs = vec![
///     RecipeInput::new("a", dec!(2), "kg").with_unit_cost(dec!(100)),
///     RecipeInput::new("b", dec!(1.5), "kg").with_unit_cost(dec!(200)),
/// ];
/// assert_eq!(calculate_materials_cost(Some(&inputs)).unwrap(), dec!(500));
/// assert_eq!(calculate_materials_cost(None).unwrap(), dec!(0));
/// ```
pub fn calculate_materials_cost(
    inputs: Option<&[RecipeInput]>,
) -> Result<Decimal, ArithmeticError> {
    let ctx = DecimalContext::default();
    let Some(inputs) = inputs else {
        return Ok(Decimal::ZERO);
    };

    inputs.iter().try_fold(Decimal::ZERO, |acc, input| {
        let line = ctx.multiply(input.effective_quantity(), input.effective_unit_cost())?;
        ctx.add(acc, line)
    })
}

/// Sum of assignment costs; assignments without a cost count as zero.
pub fn calculate_labor_cost(assignments: &[LaborAssignment]) -> Result<Decimal, ArithmeticError> {
    DecimalContext::default().sum(
        assignments
            .iter()
            .map(|a| a.total_cost.unwrap_or(Decimal::ZERO)),
    )
}

/// `materials × overhead% / 100 + fixed overhead`.
///
/// The percentage applies to materials only, never to labor.
pub fn calculate_overhead_cost(
    materials_cost: Decimal,
    config: Option<&RecipeCostConfig>,
) -> Result<Decimal, ArithmeticError> {
    let Some(config) = config else {
        return Ok(Decimal::ZERO);
    };
    let ctx = DecimalContext::default();

    let variable = match config.overhead_percentage {
        Some(pct) => ctx.percent(materials_cost, pct)?,
        None => Decimal::ZERO,
    };
    ctx.add(variable, config.overhead_fixed.unwrap_or(Decimal::ZERO))
}

/// Sum of all cost components.
pub fn calculate_total_cost(
    materials: Decimal,
    labor: Decimal,
    overhead: Decimal,
    packaging: Option<Decimal>,
) -> Result<Decimal, ArithmeticError> {
    DecimalContext::default().sum([
        materials,
        labor,
        overhead,
        packaging.unwrap_or(Decimal::ZERO),
    ])
}

/// `total / output_quantity`, or zero when the output quantity is not
/// positive.
///
/// A zero quantity is a normal transient state while a recipe is being
/// edited, so it never fails.
pub fn calculate_unit_cost(
    total_cost: Decimal,
    output_quantity: Decimal,
) -> Result<Decimal, ArithmeticError> {
    if output_quantity <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    DecimalContext::default().divide(total_cost, output_quantity)
}
