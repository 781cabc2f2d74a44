//! The full recipe cost pipeline.

use chrono::Utc;
use recipecost_core::primitives::{
    calculate_labor_cost, calculate_overhead_cost, calculate_total_cost, calculate_unit_cost,
};
use recipecost_core::yields::{calculate_yield_analysis, calculate_yield_factor};
use recipecost_core::{
    ArithmeticError, DecimalContext, InvalidPercentageError, Recipe, RecipeCostConfig,
    RecipeCostResult, RecipeInput, RecipeInputCost,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{calculate_profitability, CostError, RecipeCostCalculationError, RecipeCostOptions};

/// Internal failure before the recipe id is attached.
enum Failure {
    Percentage(InvalidPercentageError),
    Arithmetic(ArithmeticError),
}

impl From<InvalidPercentageError> for Failure {
    fn from(e: InvalidPercentageError) -> Self {
        Self::Percentage(e)
    }
}

impl From<ArithmeticError> for Failure {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

/// Compute the full cost breakdown of a recipe.
///
/// The pipeline:
/// 1. Costs each input as `quantity × conversion factor × unit cost`, then
///    divides by the input's yield factor
/// 2. Sums the yield-adjusted costs into the materials cost
/// 3. Adds labor, overhead (a percentage of materials plus a fixed part)
///    and packaging
/// 4. Divides the total by the output quantity that survives yield loss
/// 5. Derives profitability when a selling price is supplied
///
/// Missing costs, zero quantities and absent config contribute zero. An
/// out-of-range yield or waste percentage fails with
/// [`CostError::InvalidPercentage`]; any other failure is wrapped in
/// [`CostError::Calculation`] with the recipe id.
pub fn calculate_cost(
    recipe: &Recipe,
    options: &RecipeCostOptions,
) -> Result<RecipeCostResult, CostError> {
    let _span = tracing::debug_span!("calculate_cost", recipe = %recipe.id).entered();

    match run_pipeline(recipe, options) {
        Ok(result) => {
            debug!(
                total = %result.total_cost,
                per_unit = %result.cost_per_unit,
                "recipe costed"
            );
            Ok(result)
        }
        Err(Failure::Percentage(e)) => {
            warn!(recipe = %recipe.id, "rejected recipe: {e}");
            Err(e.into())
        }
        Err(Failure::Arithmetic(e)) => {
            Err(RecipeCostCalculationError::new(recipe.id.clone(), e).into())
        }
    }
}

/// Cost every recipe, stopping at the first failure.
pub fn calculate_costs(
    recipes: &[Recipe],
    options: &RecipeCostOptions,
) -> Result<Vec<RecipeCostResult>, CostError> {
    recipes.iter().map(|r| calculate_cost(r, options)).collect()
}

fn run_pipeline(
    recipe: &Recipe,
    options: &RecipeCostOptions,
) -> Result<RecipeCostResult, Failure> {
    let ctx = DecimalContext::default();
    let config = recipe.cost_config.as_ref();

    let mut inputs_breakdown = recipe
        .inputs
        .iter()
        .map(|input| cost_input(&ctx, input))
        .collect::<Result<Vec<_>, _>>()?;

    let materials_cost = ctx.sum(inputs_breakdown.iter().map(|c| c.yield_adjusted_cost))?;
    for line in &mut inputs_breakdown {
        line.percentage_of_total = ctx.ratio_percent(line.yield_adjusted_cost, materials_cost)?;
    }

    let labor_cost = labor_cost(&ctx, config, options)?;
    let overhead_cost = if overhead_enabled(config, options) {
        calculate_overhead_cost(materials_cost, config)?
    } else {
        Decimal::ZERO
    };
    let packaging_cost = packaging_cost(config, options);
    let total_cost = calculate_total_cost(
        materials_cost,
        labor_cost,
        overhead_cost,
        Some(packaging_cost),
    )?;

    let output = &recipe.output;
    let output_factor = calculate_yield_factor(output.yield_percentage, output.waste_percentage)?;
    let effective_output = ctx.multiply(output.quantity, output_factor)?;
    let cost_per_unit = calculate_unit_cost(total_cost, effective_output)?;

    let yield_analysis = calculate_yield_analysis(output)?;

    let profitability = match options.selling_price {
        Some(price) if options.include_profitability => Some(calculate_profitability(
            cost_per_unit,
            price,
            options.target_food_cost_percentage,
        )?),
        _ => None,
    };

    Ok(RecipeCostResult {
        recipe_id: recipe.id.clone(),
        materials_cost,
        labor_cost,
        overhead_cost,
        packaging_cost,
        total_cost,
        cost_per_unit,
        inputs_breakdown,
        yield_analysis,
        profitability,
        calculated_at: options.calculated_at.unwrap_or_else(Utc::now),
    })
}

fn cost_input(ctx: &DecimalContext, input: &RecipeInput) -> Result<RecipeInputCost, Failure> {
    if !input.has_cost() {
        warn!(item = input.item.id(), "input has no unit cost, counting it as zero");
    }

    if !input.has_valid_quantity() {
        warn!(
            item = input.item.id(),
            quantity = %input.quantity,
            "negative quantity or conversion factor, counting it as zero"
        );
    }

    let quantity = ctx.multiply(input.effective_quantity(), input.effective_conversion_factor())?;
    let unit_cost = input.effective_unit_cost();
    let total_cost = ctx.multiply(quantity, unit_cost)?;

    let factor = calculate_yield_factor(input.yield_percentage, input.waste_percentage)?;
    let yield_adjusted_cost = ctx.divide_or_zero(total_cost, factor)?;

    Ok(RecipeInputCost {
        item_id: input.item.id().to_string(),
        quantity,
        unit_cost,
        total_cost,
        yield_adjusted_cost,
        percentage_of_total: Decimal::ZERO,
    })
}

fn labor_cost(
    ctx: &DecimalContext,
    config: Option<&RecipeCostConfig>,
    options: &RecipeCostOptions,
) -> Result<Decimal, ArithmeticError> {
    let enabled = options.include_labor || config.is_some_and(|c| c.include_labor);
    if !enabled {
        return Ok(Decimal::ZERO);
    }
    if !options.labor_assignments.is_empty() {
        return calculate_labor_cost(&options.labor_assignments);
    }
    match config.map(|c| (c.labor_cost_per_hour, c.labor_hours)) {
        Some((Some(rate), Some(hours))) => ctx.multiply(rate, hours),
        _ => Ok(Decimal::ZERO),
    }
}

fn overhead_enabled(config: Option<&RecipeCostConfig>, options: &RecipeCostOptions) -> bool {
    options.include_overhead && config.and_then(|c| c.include_overhead) != Some(false)
}

fn packaging_cost(config: Option<&RecipeCostConfig>, options: &RecipeCostOptions) -> Decimal {
    options
        .packaging_cost
        .or_else(|| {
            config
                .filter(|c| c.include_packaging)
                .and_then(|c| c.packaging_cost)
        })
        .unwrap_or(Decimal::ZERO)
}
