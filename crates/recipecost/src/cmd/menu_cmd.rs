//! Implementation of `recipecost-menu`.

use crate::cmd::{init_tracing, report_failure, write_json, OutputFormat};
use crate::input::load_menu_document;
use crate::report;
use anyhow::Result;
use clap::Parser;
use recipecost_engine::calculate_costs;
use recipecost_menu::{analyze_menu, CentralTendency};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Cost recipes, join them with sales and classify every menu item.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with `recipes`, `sales` and optional `options` and `config`
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Centre used for scores and thresholds (mean or median)
    #[arg(long, value_name = "TENDENCY")]
    pub central_tendency: Option<CentralTendency>,

    /// Multiplier for the popularity threshold (e.g. 0.7)
    #[arg(long, value_name = "FACTOR")]
    pub popularity_factor: Option<Decimal>,

    /// Show debug tracing on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the command, writing the report to `writer`.
pub fn execute<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let document = load_menu_document(&args.file)?;
    let recipes = document.recipes.into_vec();
    debug!(
        recipes = recipes.len(),
        sales = document.sales.len(),
        file = %args.file.display(),
        "loaded menu"
    );

    let mut config = document.config;
    if let Some(tendency) = args.central_tendency {
        config = config.with_central_tendency(tendency);
    }
    if let Some(factor) = args.popularity_factor {
        config = config.with_popularity_factor(factor);
    }

    let costs = calculate_costs(&recipes, &document.options)?;
    let analysis = analyze_menu(&document.sales, &costs, &config)?;

    match args.format {
        OutputFormat::Text => report::write_menu_report(writer, &analysis, &config),
        OutputFormat::Json => write_json(writer, &analysis),
    }
}

/// Main entry point for recipecost-menu.
pub fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();
    match execute(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}
