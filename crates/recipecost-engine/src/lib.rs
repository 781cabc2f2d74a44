//! Recipe cost engine.
//!
//! This crate provides:
//! - The full cost pipeline ([`calculate_cost`]): yield-adjusted materials,
//!   labor, overhead, packaging, cost per usable unit and profitability
//! - A quick estimate over raw inputs ([`estimate_quick_cost`])
//! - Scaling of results and recipes ([`scale_recipe_cost`], [`scale_recipe`])
//!
//! Every function is pure and synchronous. Inputs are borrowed and never
//! mutated, so any number of callers may cost the same recipe concurrently.
//!
//! # Example
//!
//! ```
//! use recipecost_core::{Recipe, RecipeCostConfig, RecipeInput, RecipeOutput};
//! use recipecost_engine::{calculate_cost, RecipeCostOptions};
//! use rust_decimal_macros::dec;
//!
//! let recipe = Recipe::new("bread", RecipeOutput::new("loaf", dec!(10), "unit"))
//!     .with_input(RecipeInput::new("flour", dec!(500), "g").with_unit_cost(dec!(0.02)))
//!     .with_input(RecipeInput::new("water", dec!(300), "ml").with_unit_cost(dec!(0.001)))
//!     .with_cost_config(RecipeCostConfig::default().with_overhead(dec!(10), dec!(0)));
//!
//! let result = calculate_cost(&recipe, &RecipeCostOptions::default()).unwrap();
//! assert_eq!(result.total_cost, dec!(11.33));
//! assert_eq!(result.cost_per_unit, dec!(1.133));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod options;
mod profitability;
mod quick;
mod scale;

pub use engine::{calculate_cost, calculate_costs};
pub use error::{CostError, RecipeCostCalculationError};
pub use options::RecipeCostOptions;
pub use profitability::calculate_profitability;
pub use quick::estimate_quick_cost;
pub use scale::{scale_recipe, scale_recipe_cost};
