//! Implementation of `recipecost-cost`.

use crate::cmd::{init_tracing, report_failure, write_json, OutputFormat};
use crate::input::load_cost_document;
use crate::report;
use anyhow::Result;
use clap::Parser;
use recipecost_core::RecipeCostResult;
use recipecost_engine::{calculate_costs, estimate_quick_cost, scale_recipe_cost, CostError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Cost recipes and print a breakdown per recipe.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with `recipes` and optional `options`, or a single recipe
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Selling price per unit; enables profitability
    #[arg(long, value_name = "PRICE")]
    pub selling_price: Option<Decimal>,

    /// Target food cost, in percent of the selling price
    #[arg(long, value_name = "PCT")]
    pub target_food_cost: Option<Decimal>,

    /// Scale every result by this batch factor
    #[arg(long, value_name = "FACTOR")]
    pub scale: Option<Decimal>,

    /// Only print the quick material estimate per recipe
    #[arg(long, conflicts_with_all = ["selling_price", "scale"])]
    pub quick: bool,

    /// Show debug tracing on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Quick material estimate for one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickEstimate {
    /// Recipe id
    pub recipe_id: String,
    /// Estimated materials cost
    pub estimated_cost: Decimal,
}

/// Run the command, writing the report to `writer`.
pub fn execute<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let document = load_cost_document(&args.file)?;
    let recipes = document.recipes.into_vec();
    debug!(recipes = recipes.len(), file = %args.file.display(), "loaded recipes");

    if args.quick {
        let estimates = recipes
            .iter()
            .map(|recipe| -> Result<_, CostError> {
                Ok(QuickEstimate {
                    recipe_id: recipe.id.clone(),
                    estimated_cost: estimate_quick_cost(&recipe.inputs)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        return match args.format {
            OutputFormat::Text => report::write_quick_estimates(writer, &estimates),
            OutputFormat::Json => write_json(writer, &estimates),
        };
    }

    let mut options = document.options;
    if let Some(price) = args.selling_price {
        options = options.with_selling_price(price);
    }
    if let Some(target) = args.target_food_cost {
        options = options.with_target_food_cost(target);
    }

    let mut results = calculate_costs(&recipes, &options)?;
    if let Some(factor) = args.scale {
        results = results
            .iter()
            .map(|r| scale_recipe_cost(r, factor))
            .collect::<Result<Vec<RecipeCostResult>, _>>()?;
    }

    match args.format {
        OutputFormat::Text => report::write_cost_report(writer, &results),
        OutputFormat::Json => write_json(writer, &results),
    }
}

/// Main entry point for recipecost-cost.
pub fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();
    match execute(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}
