//! Command implementations for CLI tools.
//!
//! Each module contains the full implementation for a command,
//! which can be invoked by thin wrapper binaries.

pub mod cost_cmd;
pub mod menu_cmd;

use anyhow::{Context, Result};
use clap::ValueEnum;
use recipecost_engine::CostError;
use recipecost_menu::MenuError;
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Install a console subscriber at DEBUG when `verbose` is set.
pub(crate) fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Exit code for a failed run: 1 when a calculation failed, 2 for usage
/// and I/O problems.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<CostError>().is_some() || err.downcast_ref::<MenuError>().is_some() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

/// Print `err` and map it to an exit code.
pub(crate) fn report_failure(err: &anyhow::Error) -> ExitCode {
    eprintln!("error: {err:#}");
    exit_code(err)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).context("failed to write JSON")?;
    writeln!(writer)?;
    Ok(())
}
