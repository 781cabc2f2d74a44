//! Menu engineering inputs and outputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MenuCategory, MenuEngineeringRecommendation};

/// Sales history of one menu item over a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSalesData {
    /// Recipe the item is produced from
    pub recipe_id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Units sold in the period
    pub units_sold: u64,
    /// Menu price per unit
    pub selling_price: Decimal,
}

impl RecipeSalesData {
    /// Create a sales record.
    #[must_use]
    pub fn new(recipe_id: impl Into<String>, units_sold: u64, selling_price: Decimal) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            name: None,
            units_sold,
            selling_price,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Per-item menu engineering metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMenuMetrics {
    /// Recipe id
    pub recipe_id: String,
    /// Display name
    pub name: String,
    /// Units sold in the period
    pub units_sold: u64,
    /// Share of all units sold, in percent
    pub menu_mix_percentage: Decimal,
    /// Menu price per unit
    pub selling_price: Decimal,
    /// Cost per unit from the cost engine
    pub cost_per_unit: Decimal,
    /// `selling_price - cost_per_unit`
    pub contribution_margin: Decimal,
    /// `contribution_margin × units_sold`
    pub total_contribution: Decimal,
    /// Popularity relative to the menu centre (centre = 100)
    pub popularity_score: Decimal,
    /// Profitability relative to the menu centre (centre = 100)
    pub profitability_score: Decimal,
    /// Assigned quadrant
    pub category: MenuCategory,
}

/// Menu-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummary {
    /// Number of classified items
    pub item_count: usize,
    /// Units sold across the menu
    pub total_units_sold: u64,
    /// Revenue across the menu
    pub total_revenue: Decimal,
    /// Food cost across the menu
    pub total_food_cost: Decimal,
    /// Contribution across the menu
    pub total_contribution: Decimal,
    /// Contribution per unit sold across the menu
    pub average_contribution_margin: Decimal,
    /// Items classified as stars
    pub stars: usize,
    /// Items classified as cash cows
    pub cash_cows: usize,
    /// Items classified as puzzles
    pub puzzles: usize,
    /// Items classified as dogs
    pub dogs: usize,
}

impl MenuSummary {
    /// Number of items in a category.
    #[must_use]
    pub const fn count(&self, category: MenuCategory) -> usize {
        match category {
            MenuCategory::Star => self.stars,
            MenuCategory::CashCow => self.cash_cows,
            MenuCategory::Puzzle => self.puzzles,
            MenuCategory::Dog => self.dogs,
        }
    }
}

/// Result of a menu engineering run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEngineeringAnalysis {
    /// Classified items, in input order
    pub items: Vec<RecipeMenuMetrics>,
    /// Popularity score at or above which an item is popular
    pub popularity_threshold: Decimal,
    /// Profitability score at or above which an item is profitable
    pub profitability_threshold: Decimal,
    /// Menu-wide totals
    pub summary: MenuSummary,
    /// Actions per category
    pub recommendations: Vec<MenuEngineeringRecommendation>,
    /// Sales records with no matching cost result
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched_recipe_ids: Vec<String>,
}

impl MenuEngineeringAnalysis {
    /// Look up an item by recipe id.
    #[must_use]
    pub fn item(&self, recipe_id: &str) -> Option<&RecipeMenuMetrics> {
        self.items.iter().find(|m| m.recipe_id == recipe_id)
    }

    /// Items in the given category.
    pub fn in_category(
        &self,
        category: MenuCategory,
    ) -> impl Iterator<Item = &RecipeMenuMetrics> + '_ {
        self.items.iter().filter(move |m| m.category == category)
    }
}
