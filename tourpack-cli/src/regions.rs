//! Regions command implementation for the tourpack CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourpack_core::{CatalogIndex, Region, SqliteCatalogStore};

use crate::{ARG_CATALOG_DB, CliError, ENV_REGIONS_CATALOG_DB, fs::require_existing, write_json};

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the regions stored in a catalog database")]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct RegionsArgs {
    /// Path to the SQLite catalog database.
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

/// Resolved `regions` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegionsConfig {
    pub(crate) catalog_db: Utf8PathBuf,
}

impl TryFrom<RegionsArgs> for RegionsConfig {
    type Error = CliError;

    fn try_from(args: RegionsArgs) -> Result<Self, Self::Error> {
        let catalog_db = args.catalog_db.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG_DB,
            env: ENV_REGIONS_CATALOG_DB,
        })?;
        Ok(Self { catalog_db })
    }
}

pub(super) fn run_regions(args: RegionsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_regions_with(args, &mut stdout)
}

pub(super) fn run_regions_with(args: RegionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = RegionsConfig::try_from(merged)?;
    require_existing(&config.catalog_db, ARG_CATALOG_DB)?;

    let store = SqliteCatalogStore::open(config.catalog_db.as_std_path())?;
    let index = CatalogIndex::load(&store)?;
    let regions: Vec<&Region> = index.regions().collect();
    write_json(writer, &regions)
}
