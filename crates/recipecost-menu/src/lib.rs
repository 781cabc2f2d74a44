//! Menu engineering for recipecost.
//!
//! Classifies menu items on two axes:
//!
//! - **popularity**: units sold relative to the menu's centre
//! - **profitability**: contribution margin relative to the menu's centre
//!
//! The centre is the median (default) or mean, set by
//! [`MenuEngineeringConfig`]. Each item lands in one [`MenuCategory`]:
//!
//! | | high profitability | low profitability |
//! |---|---|---|
//! | **high popularity** | [`MenuCategory::Star`] | [`MenuCategory::CashCow`] |
//! | **low popularity** | [`MenuCategory::Puzzle`] | [`MenuCategory::Dog`] |
//!
//! # Example
//!
//! ```
//! use recipecost_core::{Recipe, RecipeInput, RecipeOutput};
//! use recipecost_engine::{calculate_costs, RecipeCostOptions};
//! use recipecost_menu::{analyze_menu, MenuCategory, MenuEngineeringConfig, RecipeSalesData};
//! use rust_decimal_macros::dec;
//!
//! let recipes = vec![
//!     Recipe::new("burger", RecipeOutput::new("burger", dec!(1), "unit"))
//!         .with_input(RecipeInput::new("patty", dec!(1), "unit").with_unit_cost(dec!(3))),
//!     Recipe::new("salad", RecipeOutput::new("salad", dec!(1), "unit"))
//!         .with_input(RecipeInput::new("greens", dec!(1), "unit").with_unit_cost(dec!(4))),
//! ];
//! let costs = calculate_costs(&recipes, &RecipeCostOptions::default()).unwrap();
//! let sales = vec![
//!     RecipeSalesData::new("burger", 120, dec!(12)),
//!     RecipeSalesData::new("salad", 30, dec!(9)),
//! ];
//!
//! let analysis = analyze_menu(&sales, &costs, &MenuEngineeringConfig::default()).unwrap();
//! assert_eq!(analysis.item("burger").unwrap().category, MenuCategory::Star);
//! assert_eq!(analysis.item("salad").unwrap().category, MenuCategory::Dog);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyze;
mod category;
mod config;
mod error;
mod recommend;
mod stats;
mod types;

pub use analyze::analyze_menu;
pub use category::MenuCategory;
pub use config::{CentralTendency, MenuEngineeringConfig};
pub use error::MenuError;
pub use recommend::{build_recommendations, MenuEngineeringRecommendation, Priority};
pub use types::{MenuEngineeringAnalysis, MenuSummary, RecipeMenuMetrics, RecipeSalesData};
