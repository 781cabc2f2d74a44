//! Per-call options for the cost pipeline.

use chrono::{DateTime, Utc};
use recipecost_core::LaborAssignment;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Options controlling which cost components [`crate::calculate_cost`]
/// includes.
///
/// Deserializes from camelCase JSON; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeCostOptions {
    /// Include labor even when the recipe config does not ask for it
    pub include_labor: bool,
    /// Include overhead (default `true`)
    pub include_overhead: bool,
    /// Compute profitability when a selling price is given
    pub include_profitability: bool,
    /// Staff assignments; when present they replace rate × hours labor
    pub labor_assignments: Vec<LaborAssignment>,
    /// Packaging cost overriding the recipe config
    pub packaging_cost: Option<Decimal>,
    /// Selling price per unit
    pub selling_price: Option<Decimal>,
    /// Target food cost, in percent of the selling price
    pub target_food_cost_percentage: Option<Decimal>,
    /// Timestamp stamped on results; defaults to now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
}

impl Default for RecipeCostOptions {
    fn default() -> Self {
        Self {
            include_labor: false,
            include_overhead: true,
            include_profitability: false,
            labor_assignments: Vec::new(),
            packaging_cost: None,
            selling_price: None,
            target_food_cost_percentage: None,
            calculated_at: None,
        }
    }
}

impl RecipeCostOptions {
    /// Enable labor.
    #[must_use]
    pub const fn with_labor(mut self) -> Self {
        self.include_labor = true;
        self
    }

    /// Disable overhead.
    #[must_use]
    pub const fn without_overhead(mut self) -> Self {
        self.include_overhead = false;
        self
    }

    /// Use the given staff assignments for labor and enable labor.
    #[must_use]
    pub fn with_labor_assignments(mut self, assignments: Vec<LaborAssignment>) -> Self {
        self.include_labor = true;
        self.labor_assignments = assignments;
        self
    }

    /// Set the packaging cost.
    #[must_use]
    pub const fn with_packaging_cost(mut self, cost: Decimal) -> Self {
        self.packaging_cost = Some(cost);
        self
    }

    /// Set the selling price and enable profitability.
    #[must_use]
    pub const fn with_selling_price(mut self, price: Decimal) -> Self {
        self.include_profitability = true;
        self.selling_price = Some(price);
        self
    }

    /// Set the target food cost percentage.
    #[must_use]
    pub const fn with_target_food_cost(mut self, pct: Decimal) -> Self {
        self.target_food_cost_percentage = Some(pct);
        self
    }

    /// Fix the result timestamp.
    #[must_use]
    pub const fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.calculated_at = Some(timestamp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let options = RecipeCostOptions::default();
        assert!(!options.include_labor);
        assert!(options.include_overhead);
        assert!(!options.include_profitability);
    }

    #[test]
    fn test_from_partial_json() {
        let options: RecipeCostOptions =
            serde_json::from_str(r#"{"includeProfitability": true, "sellingPrice": "4.50"}"#)
                .unwrap();
        assert!(options.include_overhead);
        assert!(options.include_profitability);
        assert_eq!(options.selling_price, Some(dec!(4.50)));
    }
}
