//! Core types for recipecost
//!
//! This crate provides the building blocks shared by the cost engine and the
//! menu engineering classifier:
//!
//! - [`DecimalContext`] - Fixed-precision decimal arithmetic
//! - [`Recipe`], [`RecipeInput`], [`RecipeOutput`] - The bill of materials
//! - [`RecipeCostResult`] - A full cost breakdown for one recipe
//! - [`primitives`] - Materials, labor, overhead, total and unit cost
//! - [`yields`] - Yield factors and yield analysis
//!
//! # Example
//!
//! ```
//! use recipecost_core::{primitives, RecipeInput};
//! use rust_decimal_macros::dec;
//!
//! let inputs = vec![
//!     RecipeInput::new("flour", dec!(500), "g").with_unit_cost(dec!(0.02)),
//!     RecipeInput::new("water", dec!(300), "ml").with_unit_cost(dec!(0.001)),
//! ];
//!
//! let materials = primitives::calculate_materials_cost(Some(&inputs)).unwrap();
//! assert_eq!(materials, dec!(10.3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decimal;
pub mod error;
pub mod item;
pub mod primitives;
pub mod recipe;
pub mod result;
pub mod yields;

pub use decimal::DecimalContext;
pub use error::{ArithmeticError, InvalidPercentageError, PercentageKind};
pub use item::{Item, ItemRef};
pub use recipe::{LaborAssignment, Recipe, RecipeCostConfig, RecipeInput, RecipeOutput};
pub use result::{
    RecipeCostResult, RecipeInputCost, RecipeProfitability, YieldAnalysis,
};

// Re-export commonly used external types
pub use chrono::{DateTime, Utc};
pub use rust_decimal::Decimal;
