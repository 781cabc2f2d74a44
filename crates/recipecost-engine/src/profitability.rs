//! Price-side metrics for a costed unit.

use recipecost_core::{ArithmeticError, DecimalContext, RecipeProfitability};
use rust_decimal::Decimal;

/// Margin, food cost percentage and suggested price for one unit.
///
/// A zero selling price yields zero percentages. The suggested price is only
/// computed for a positive target food cost percentage.
pub fn calculate_profitability(
    cost_per_unit: Decimal,
    selling_price: Decimal,
    target_food_cost_percentage: Option<Decimal>,
) -> Result<RecipeProfitability, ArithmeticError> {
    let ctx = DecimalContext::default();

    let profit_margin = ctx.subtract(selling_price, cost_per_unit)?;
    let profit_percentage = ctx.ratio_percent(profit_margin, selling_price)?;
    let actual_food_cost_percentage = ctx.ratio_percent(cost_per_unit, selling_price)?;

    let suggested_price = match target_food_cost_percentage {
        Some(target) if target > Decimal::ZERO => {
            let scaled = ctx.multiply(cost_per_unit, Decimal::ONE_HUNDRED)?;
            Some(ctx.divide(scaled, target)?)
        }
        _ => None,
    };

    Ok(RecipeProfitability {
        selling_price,
        profit_margin,
        profit_percentage,
        break_even_price: cost_per_unit,
        target_food_cost_percentage,
        actual_food_cost_percentage,
        suggested_price,
    })
}
