//! Recipe costing CLI tools.
//!
//! This crate provides command-line tools over the recipecost engines:
//!
//! - `recipecost-cost`: Cost recipes and print a breakdown per recipe
//! - `recipecost-menu`: Cost recipes, join them with sales and classify the menu
//!
//! # Example Usage
//!
//! ```bash
//! recipecost-cost recipes.json --selling-price 12.50
//! recipecost-cost recipes.json --quick
//! recipecost-menu menu.json --central-tendency mean --format json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod input;
pub mod report;
