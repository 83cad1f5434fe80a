//! Plan command implementation for the tourpack CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourpack_core::{CatalogIndex, Cost, PlanRequest, PlanResponse, Planner, SqliteCatalogStore};
use tourpack_solver_bnb::{BranchAndBoundConfig, BranchAndBoundPlanner, CandidateOrder};

use crate::{
    ARG_CATALOG_DB, ARG_MAX_BUDGET, ARG_MAX_DAYS, ARG_ORDER, ARG_REGION, CliError,
    ENV_PLAN_CATALOG_DB, ENV_PLAN_REGION, fs::require_existing, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a catalog from SQLite and select the set of offers in \
                 one region with the greatest total cultural value, visiting \
                 no point of interest twice and staying within the optional \
                 day and budget limits. The result is printed as JSON.",
    about = "Plan the best package of offers in a region"
)]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct PlanArgs {
    /// Path to the SQLite catalog database.
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
    /// Region whose offers are candidates.
    #[arg(long = ARG_REGION, value_name = "id")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Upper bound on the package's total days.
    #[arg(long = ARG_MAX_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) max_days: Option<u32>,
    /// Upper bound on the package's total cost, e.g. "250" or "249.99".
    #[arg(long = ARG_MAX_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_budget: Option<String>,
    /// Traversal order: "ascending-id" (default) or "descending-value".
    #[arg(long = ARG_ORDER, value_name = "order")]
    #[serde(default)]
    pub(crate) order: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the SQLite catalog database.
    pub(crate) catalog_db: Utf8PathBuf,
    /// The planning request.
    pub(crate) request: PlanRequest,
    /// Candidate traversal order.
    pub(crate) order: CandidateOrder,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog_db, ARG_CATALOG_DB)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalog_db = args.catalog_db.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG_DB,
            env: ENV_PLAN_CATALOG_DB,
        })?;
        let region = args.region.ok_or(CliError::MissingArgument {
            field: ARG_REGION,
            env: ENV_PLAN_REGION,
        })?;
        let max_budget = args
            .max_budget
            .map(|value| {
                value
                    .parse::<Cost>()
                    .map_err(|source| CliError::InvalidBudget { value, source })
            })
            .transpose()?;
        let order = args
            .order
            .as_deref()
            .map(str::parse::<CandidateOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            catalog_db,
            request: PlanRequest {
                region_id: region,
                max_days: args.max_days,
                max_budget,
            },
            order,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_plan(args)?;
    write_json(writer, &response)
}

fn execute_plan(args: PlanArgs) -> Result<PlanResponse, CliError> {
    let config = resolve_plan_config(args)?;
    let store = SqliteCatalogStore::open(config.catalog_db.as_std_path())?;
    let index = CatalogIndex::load(&store)?;
    if index.region(&config.request.region_id).is_none() {
        log::warn!(
            "region {} is not listed in {}; planning over its offers anyway",
            config.request.region_id,
            config.catalog_db
        );
    }
    let planner = BranchAndBoundPlanner::with_config(
        &index,
        BranchAndBoundConfig {
            order: config.order,
        },
    );
    Ok(planner.plan(&config.request))
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
