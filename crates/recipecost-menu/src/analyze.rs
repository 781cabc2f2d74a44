//! Quadrant classification over a whole menu.

use std::collections::HashMap;

use recipecost_core::{ArithmeticError, DecimalContext, RecipeCostResult};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::stats::{centre, relative_score};
use crate::{
    build_recommendations, MenuCategory, MenuEngineeringAnalysis, MenuEngineeringConfig,
    MenuError, MenuSummary, RecipeMenuMetrics, RecipeSalesData,
};

/// A sales record joined with its cost, before scoring.
struct Joined<'a> {
    sales: &'a RecipeSalesData,
    cost_per_unit: Decimal,
    units: Decimal,
    margin: Decimal,
}

/// Classify every sold item into a [`MenuCategory`].
///
/// Sales records are joined with cost results by recipe id. Records with no
/// cost result are skipped and listed in
/// [`MenuEngineeringAnalysis::unmatched_recipe_ids`]. Each item is scored on
/// units sold and on contribution margin relative to the menu's centre, so
/// the centre scores 100. The thresholds are the centre of those scores,
/// with the popularity threshold scaled by
/// [`MenuEngineeringConfig::popularity_factor`]. A score at or above its
/// threshold counts as high, except that an item with no sales is never
/// popular.
pub fn analyze_menu(
    sales: &[RecipeSalesData],
    costs: &[RecipeCostResult],
    config: &MenuEngineeringConfig,
) -> Result<MenuEngineeringAnalysis, MenuError> {
    if config.popularity_factor <= Decimal::ZERO {
        return Err(MenuError::InvalidPopularityFactor(config.popularity_factor));
    }

    let _span = tracing::debug_span!(
        "analyze_menu",
        items = sales.len(),
        tendency = %config.central_tendency
    )
    .entered();

    let ctx = DecimalContext::default();
    let by_id: HashMap<&str, &RecipeCostResult> =
        costs.iter().map(|c| (c.recipe_id.as_str(), c)).collect();

    let mut joined = Vec::with_capacity(sales.len());
    let mut unmatched_recipe_ids = Vec::new();
    for record in sales {
        let Some(cost) = by_id.get(record.recipe_id.as_str()) else {
            warn!(recipe = %record.recipe_id, "no cost result for sales record, skipping");
            unmatched_recipe_ids.push(record.recipe_id.clone());
            continue;
        };
        joined.push(Joined {
            sales: record,
            cost_per_unit: cost.cost_per_unit,
            units: Decimal::from(record.units_sold),
            margin: ctx.subtract(record.selling_price, cost.cost_per_unit)?,
        });
    }

    let tendency = config.central_tendency;
    let units: Vec<Decimal> = joined.iter().map(|j| j.units).collect();
    let margins: Vec<Decimal> = joined.iter().map(|j| j.margin).collect();
    let units_centre = centre(&ctx, &units, tendency)?;
    let margin_centre = centre(&ctx, &margins, tendency)?;

    let popularity_scores = units
        .iter()
        .map(|&u| relative_score(&ctx, u, units_centre))
        .collect::<Result<Vec<_>, _>>()?;
    let profitability_scores = margins
        .iter()
        .map(|&m| relative_score(&ctx, m, margin_centre))
        .collect::<Result<Vec<_>, _>>()?;

    let popularity_threshold = ctx.multiply(
        centre(&ctx, &popularity_scores, tendency)?,
        config.popularity_factor,
    )?;
    let profitability_threshold = centre(&ctx, &profitability_scores, tendency)?;
    debug!(
        %units_centre,
        %margin_centre,
        %popularity_threshold,
        %profitability_threshold,
        "menu thresholds"
    );

    let total_units = ctx.sum(units.iter().copied())?;
    let items = joined
        .iter()
        .zip(popularity_scores.iter().zip(&profitability_scores))
        .map(|(j, (&popularity_score, &profitability_score))| -> Result<_, ArithmeticError> {
            let category = MenuCategory::classify(
                j.sales.units_sold > 0 && popularity_score >= popularity_threshold,
                profitability_score >= profitability_threshold,
            );
            Ok(RecipeMenuMetrics {
                recipe_id: j.sales.recipe_id.clone(),
                name: j
                    .sales
                    .name
                    .clone()
                    .unwrap_or_else(|| j.sales.recipe_id.clone()),
                units_sold: j.sales.units_sold,
                menu_mix_percentage: ctx.ratio_percent(j.units, total_units)?,
                selling_price: j.sales.selling_price,
                cost_per_unit: j.cost_per_unit,
                contribution_margin: j.margin,
                total_contribution: ctx.multiply(j.margin, j.units)?,
                popularity_score,
                profitability_score,
                category,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = summarize(&ctx, &items)?;
    debug!(
        stars = summary.stars,
        cash_cows = summary.cash_cows,
        puzzles = summary.puzzles,
        dogs = summary.dogs,
        "menu classified"
    );

    Ok(MenuEngineeringAnalysis {
        recommendations: build_recommendations(&items),
        items,
        popularity_threshold,
        profitability_threshold,
        summary,
        unmatched_recipe_ids,
    })
}

fn summarize(
    ctx: &DecimalContext,
    items: &[RecipeMenuMetrics],
) -> Result<MenuSummary, ArithmeticError> {
    let mut summary = MenuSummary {
        item_count: items.len(),
        ..MenuSummary::default()
    };

    for item in items {
        let units = Decimal::from(item.units_sold);
        summary.total_units_sold = summary
            .total_units_sold
            .checked_add(item.units_sold)
            .ok_or(ArithmeticError::Overflow { operation: "add" })?;
        summary.total_revenue = ctx.add(
            summary.total_revenue,
            ctx.multiply(item.selling_price, units)?,
        )?;
        summary.total_food_cost = ctx.add(
            summary.total_food_cost,
            ctx.multiply(item.cost_per_unit, units)?,
        )?;
        summary.total_contribution = ctx.add(summary.total_contribution, item.total_contribution)?;
        match item.category {
            MenuCategory::Star => summary.stars += 1,
            MenuCategory::CashCow => summary.cash_cows += 1,
            MenuCategory::Puzzle => summary.puzzles += 1,
            MenuCategory::Dog => summary.dogs += 1,
        }
    }

    summary.average_contribution_margin = ctx.divide_or_zero(
        summary.total_contribution,
        Decimal::from(summary.total_units_sold),
    )?;
    Ok(summary)
}
