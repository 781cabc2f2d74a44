//! Cost calculation results.
//!
//! These are plain values computed on demand from a recipe snapshot. The
//! engine never keeps them; persisting them is the caller's business.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Cost contribution of one recipe input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInputCost {
    /// Referenced item id
    pub item_id: String,
    /// Quantity consumed, in the item's costing unit
    pub quantity: Decimal,
    /// Effective cost per unit
    pub unit_cost: Decimal,
    /// `quantity × unit_cost`, before yield adjustment
    pub total_cost: Decimal,
    /// Cost after accounting for the input's yield loss
    pub yield_adjusted_cost: Decimal,
    /// Share of the materials cost, in percent
    pub percentage_of_total: Decimal,
}

/// How much of the theoretical output survives production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldAnalysis {
    /// Output quantity before loss
    pub theoretical_yield: Decimal,
    /// Output quantity after loss
    pub actual_yield: Decimal,
    /// Usable fraction of the output, in percent
    pub yield_percentage: Decimal,
    /// Lost fraction of the output, in percent
    pub waste_factor: Decimal,
    /// Efficiency on a 0-100 scale
    pub efficiency_score: Decimal,
}

/// Price-side metrics for a costed recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeProfitability {
    /// Selling price per unit
    pub selling_price: Decimal,
    /// `selling_price - cost_per_unit`
    pub profit_margin: Decimal,
    /// Margin as a percentage of the selling price
    pub profit_percentage: Decimal,
    /// Price at which the unit neither gains nor loses
    pub break_even_price: Decimal,
    /// Target food cost, in percent of the selling price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_food_cost_percentage: Option<Decimal>,
    /// Actual food cost, in percent of the selling price
    pub actual_food_cost_percentage: Decimal,
    /// Price that would hit the target food cost percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<Decimal>,
}

impl RecipeProfitability {
    /// Whether the actual food cost is within the target, if one was set.
    #[must_use]
    pub fn meets_target(&self) -> Option<bool> {
        self.target_food_cost_percentage
            .map(|target| self.actual_food_cost_percentage <= target)
    }
}

/// Full cost breakdown of one recipe.
///
/// `total_cost` always equals the sum of the four cost components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCostResult {
    /// Recipe this result belongs to
    pub recipe_id: String,
    /// Sum of yield-adjusted input costs
    pub materials_cost: Decimal,
    /// Labor cost
    pub labor_cost: Decimal,
    /// Overhead cost
    pub overhead_cost: Decimal,
    /// Packaging cost
    pub packaging_cost: Decimal,
    /// Sum of all components
    pub total_cost: Decimal,
    /// Cost per usable output unit
    pub cost_per_unit: Decimal,
    /// Per-input contributions
    pub inputs_breakdown: Vec<RecipeInputCost>,
    /// Output yield report
    pub yield_analysis: YieldAnalysis,
    /// Price-side metrics, when a selling price was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profitability: Option<RecipeProfitability>,
    /// When the result was computed
    pub calculated_at: DateTime<Utc>,
}

impl RecipeCostResult {
    /// Sum of the breakdown percentages.
    #[must_use]
    pub fn breakdown_percentage_sum(&self) -> Decimal {
        self.inputs_breakdown
            .iter()
            .map(|c| c.percentage_of_total)
            .sum()
    }

    /// Materials cost as a percentage of total cost.
    #[must_use]
    pub fn materials_share(&self) -> Decimal {
        if self.total_cost.is_zero() {
            return Decimal::ZERO;
        }
        (self.materials_cost * Decimal::ONE_HUNDRED / self.total_cost)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
