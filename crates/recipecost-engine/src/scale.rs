//! Scaling of cost results and recipes.

use recipecost_core::{DecimalContext, Recipe, RecipeCostResult};
use rust_decimal::Decimal;

use crate::CostError;

fn check_factor(factor: Decimal) -> Result<(), CostError> {
    if factor <= Decimal::ZERO {
        return Err(CostError::InvalidScaleFactor(factor));
    }
    Ok(())
}

/// Scale a cost result to a batch `factor` times as large.
///
/// All cost components, breakdown lines and yields scale by `factor`.
/// Cost and output grow together, so `cost_per_unit` and the breakdown
/// percentages are carried over unchanged.
///
/// # Examples
///
/// ```
/// use recipecost_core::{Recipe, RecipeInput, RecipeOutput};
/// use recipecost_engine::{calculate_cost, scale_recipe_cost, RecipeCostOptions};
/// use rust_decimal_macros::dec;
///
/// let recipe = Recipe::new("r", RecipeOutput::new("o", dec!(3), "unit"))
///     .with_input(RecipeInput::new("x", dec!(1), "kg").with_unit_cost(dec!(10)));
/// let result = calculate_cost(&recipe, &RecipeCostOptions::default()).unwrap();
///
/// let doubled = scale_recipe_cost(&result, dec!(2)).unwrap();
/// assert_eq!(doubled.total_cost, dec!(20));
/// assert_eq!(doubled.cost_per_unit, result.cost_per_unit);
/// ```
pub fn scale_recipe_cost(
    result: &RecipeCostResult,
    factor: Decimal,
) -> Result<RecipeCostResult, CostError> {
    check_factor(factor)?;
    let ctx = DecimalContext::default();
    let scale = |v: Decimal| ctx.multiply(v, factor);

    let mut scaled = result.clone();
    scaled.materials_cost = scale(result.materials_cost)?;
    scaled.labor_cost = scale(result.labor_cost)?;
    scaled.overhead_cost = scale(result.overhead_cost)?;
    scaled.packaging_cost = scale(result.packaging_cost)?;
    scaled.total_cost = scale(result.total_cost)?;

    for line in &mut scaled.inputs_breakdown {
        line.quantity = scale(line.quantity)?;
        line.total_cost = scale(line.total_cost)?;
        line.yield_adjusted_cost = scale(line.yield_adjusted_cost)?;
    }

    scaled.yield_analysis.theoretical_yield = scale(result.yield_analysis.theoretical_yield)?;
    scaled.yield_analysis.actual_yield = scale(result.yield_analysis.actual_yield)?;

    Ok(scaled)
}

/// Scale a recipe's input and output quantities by `factor`.
///
/// Percentages, unit costs and the cost config are left as they are.
pub fn scale_recipe(recipe: &Recipe, factor: Decimal) -> Result<Recipe, CostError> {
    check_factor(factor)?;
    let ctx = DecimalContext::default();

    let mut scaled = recipe.clone();
    for input in &mut scaled.inputs {
        input.quantity = ctx.multiply(input.quantity, factor)?;
    }
    scaled.output.quantity = ctx.multiply(scaled.output.quantity, factor)?;
    Ok(scaled)
}
