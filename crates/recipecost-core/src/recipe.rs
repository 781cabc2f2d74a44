//! Recipe (bill of materials) types.
//!
//! A [`Recipe`] turns a list of [`RecipeInput`]s into a single
//! [`RecipeOutput`]. Each input and the output may carry a yield or waste
//! percentage describing how much survives processing. The optional
//! [`RecipeCostConfig`] holds the labor, overhead and packaging settings
//! applied on top of the materials cost.
//!
//! # Examples
//!
//! ```
//! use recipecost_core::{Recipe, RecipeCostConfig, RecipeInput, RecipeOutput};
//! use rust_decimal_macros::dec;
//!
//! let recipe = Recipe::new("bread", RecipeOutput::new("loaf", dec!(10), "unit"))
//!     .with_input(RecipeInput::new("flour", dec!(500), "g").with_unit_cost(dec!(0.02)))
//!     .with_cost_config(RecipeCostConfig::default().with_overhead(dec!(10), dec!(0)));
//!
//! assert_eq!(recipe.inputs.len(), 1);
//! assert_eq!(recipe.output.quantity, dec!(10));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ItemRef;

/// One consumed line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    /// The consumed item
    pub item: ItemRef,
    /// Quantity consumed, in `unit`
    pub quantity: Decimal,
    /// Unit of measure for `quantity`
    #[serde(default)]
    pub unit: String,
    /// Usable fraction of the input after processing, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_percentage: Option<Decimal>,
    /// Fraction of the input lost to trim or spoilage, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_percentage: Option<Decimal>,
    /// Cost per unit taking precedence over the item's own cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost_override: Option<Decimal>,
    /// Multiplier converting `unit` into the unit the item is costed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_factor: Option<Decimal>,
}

impl RecipeInput {
    /// Create an input with no yield, waste or cost information.
    #[must_use]
    pub fn new(item: impl Into<ItemRef>, quantity: Decimal, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity,
            unit: unit.into(),
            yield_percentage: None,
            waste_percentage: None,
            unit_cost_override: None,
            conversion_factor: None,
        }
    }

    /// Set the unit cost override.
    #[must_use]
    pub const fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost_override = Some(unit_cost);
        self
    }

    /// Set the yield percentage.
    #[must_use]
    pub const fn with_yield(mut self, pct: Decimal) -> Self {
        self.yield_percentage = Some(pct);
        self
    }

    /// Set the waste percentage.
    #[must_use]
    pub const fn with_waste(mut self, pct: Decimal) -> Self {
        self.waste_percentage = Some(pct);
        self
    }

    /// Set the unit conversion factor.
    #[must_use]
    pub const fn with_conversion_factor(mut self, factor: Decimal) -> Self {
        self.conversion_factor = Some(factor);
        self
    }

    /// `unitCostOverride ?? item.unitCost ?? 0`.
    #[must_use]
    pub fn effective_unit_cost(&self) -> Decimal {
        self.unit_cost_override
            .or_else(|| self.item.unit_cost())
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether any cost is known for this input.
    #[must_use]
    pub const fn has_cost(&self) -> bool {
        self.unit_cost_override.is_some() || self.item.unit_cost().is_some()
    }

    /// `quantity`, with a negative value degraded to zero.
    #[must_use]
    pub fn effective_quantity(&self) -> Decimal {
        self.quantity.max(Decimal::ZERO)
    }

    /// `conversionFactor ?? 1`, with a negative value degraded to zero.
    #[must_use]
    pub fn effective_conversion_factor(&self) -> Decimal {
        self.conversion_factor
            .unwrap_or(Decimal::ONE)
            .max(Decimal::ZERO)
    }

    /// Whether neither the quantity nor the conversion factor is negative.
    #[must_use]
    pub fn has_valid_quantity(&self) -> bool {
        !self.quantity.is_sign_negative()
            && !self.conversion_factor.is_some_and(|f| f.is_sign_negative())
    }
}

/// The product a recipe yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOutput {
    /// The produced item
    pub item: ItemRef,
    /// Quantity produced before yield loss
    pub quantity: Decimal,
    /// Unit of measure for `quantity`
    #[serde(default)]
    pub unit: String,
    /// Usable fraction of the output, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_percentage: Option<Decimal>,
    /// Fraction of the output lost, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_percentage: Option<Decimal>,
}

impl RecipeOutput {
    /// Create an output with no yield loss.
    #[must_use]
    pub fn new(item: impl Into<ItemRef>, quantity: Decimal, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity,
            unit: unit.into(),
            yield_percentage: None,
            waste_percentage: None,
        }
    }

    /// Set the yield percentage.
    #[must_use]
    pub const fn with_yield(mut self, pct: Decimal) -> Self {
        self.yield_percentage = Some(pct);
        self
    }

    /// Set the waste percentage.
    #[must_use]
    pub const fn with_waste(mut self, pct: Decimal) -> Self {
        self.waste_percentage = Some(pct);
        self
    }
}

/// Labor, overhead and packaging settings for a recipe.
///
/// Overhead percentage applies to the materials cost only, never to labor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeCostConfig {
    /// Whether labor is part of this recipe's cost
    pub include_labor: bool,
    /// Hourly labor rate
    pub labor_cost_per_hour: Option<Decimal>,
    /// Labor hours per batch
    pub labor_hours: Option<Decimal>,
    /// Whether overhead applies; `None` means yes
    pub include_overhead: Option<bool>,
    /// Overhead as a percentage of materials cost
    pub overhead_percentage: Option<Decimal>,
    /// Fixed overhead per batch
    pub overhead_fixed: Option<Decimal>,
    /// Whether packaging is part of this recipe's cost
    pub include_packaging: bool,
    /// Packaging cost per batch
    pub packaging_cost: Option<Decimal>,
}

impl RecipeCostConfig {
    /// Set the labor rate and hours and enable labor.
    #[must_use]
    pub const fn with_labor(mut self, cost_per_hour: Decimal, hours: Decimal) -> Self {
        self.include_labor = true;
        self.labor_cost_per_hour = Some(cost_per_hour);
        self.labor_hours = Some(hours);
        self
    }

    /// Set percentage and fixed overhead.
    #[must_use]
    pub const fn with_overhead(mut self, percentage: Decimal, fixed: Decimal) -> Self {
        self.overhead_percentage = Some(percentage);
        self.overhead_fixed = Some(fixed);
        self
    }

    /// Set the packaging cost and enable packaging.
    #[must_use]
    pub const fn with_packaging(mut self, cost: Decimal) -> Self {
        self.include_packaging = true;
        self.packaging_cost = Some(cost);
        self
    }
}

/// A labor record supplied by the staffing module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaborAssignment {
    /// Assigned staff member
    pub staff_id: Option<String>,
    /// Hours worked on the recipe
    pub hours: Option<Decimal>,
    /// Total cost of the assignment
    #[serde(alias = "total_cost")]
    pub total_cost: Option<Decimal>,
}

impl LaborAssignment {
    /// Create an assignment with a known total cost.
    #[must_use]
    pub const fn with_total_cost(total_cost: Decimal) -> Self {
        Self {
            staff_id: None,
            hours: None,
            total_cost: Some(total_cost),
        }
    }
}

/// A recipe: inputs consumed to produce one output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identifier of the recipe
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Consumed items
    #[serde(default)]
    pub inputs: Vec<RecipeInput>,
    /// Produced item
    pub output: RecipeOutput,
    /// Labor, overhead and packaging settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_config: Option<RecipeCostConfig>,
}

impl Recipe {
    /// Create a recipe with no inputs.
    #[must_use]
    pub fn new(id: impl Into<String>, output: RecipeOutput) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            inputs: Vec::new(),
            output,
            cost_config: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add an input.
    #[must_use]
    pub fn with_input(mut self, input: RecipeInput) -> Self {
        self.inputs.push(input);
        self
    }

    /// Set the cost configuration.
    #[must_use]
    pub fn with_cost_config(mut self, config: RecipeCostConfig) -> Self {
        self.cost_config = Some(config);
        self
    }
}
