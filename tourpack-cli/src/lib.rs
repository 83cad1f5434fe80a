//! Command-line interface for planning tour packages from a catalog database.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod fs;
mod plan;
mod regions;

pub use error::CliError;
use plan::{PlanArgs, run_plan};
use regions::{RegionsArgs, run_regions};

pub(crate) const ARG_CATALOG_DB: &str = "catalog-db";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_MAX_DAYS: &str = "max-days";
pub(crate) const ARG_MAX_BUDGET: &str = "max-budget";
pub(crate) const ARG_ORDER: &str = "order";
pub(crate) const ENV_PLAN_CATALOG_DB: &str = "TOURPACK_CMDS_PLAN_CATALOG_DB";
pub(crate) const ENV_PLAN_REGION: &str = "TOURPACK_CMDS_PLAN_REGION";
pub(crate) const ENV_REGIONS_CATALOG_DB: &str = "TOURPACK_CMDS_REGIONS_CATALOG_DB";

/// Run the tourpack CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Regions(args) => run_regions(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourpack",
    about = "Plan the most culturally valuable package of tour offers",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Select the best package of offers in a region.
    Plan(PlanArgs),
    /// List the regions known to a catalog.
    Regions(RegionsArgs),
}

/// Write `value` to `writer` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
