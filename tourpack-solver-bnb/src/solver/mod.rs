//! `BranchAndBoundPlanner` implementation.

use std::{borrow::Borrow, fmt, str::FromStr, time::Instant};

use thiserror::Error;
use tourpack_core::{CatalogIndex, Diagnostics, Package, PlanRequest, PlanResponse, Planner};

use crate::search::{Candidate, search};

/// Order in which candidates enter the depth-first traversal.
///
/// The order never changes the optimal value, only which of several
/// equal-value packages is returned and how quickly the best one is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CandidateOrder {
    /// Ascending offer identifier.
    #[default]
    AscendingId,
    /// Descending cultural value, ties broken by ascending identifier.
    DescendingValue,
}

impl CandidateOrder {
    const ASCENDING_ID: &'static str = "ascending-id";
    const DESCENDING_VALUE: &'static str = "descending-value";

    /// The name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AscendingId => Self::ASCENDING_ID,
            Self::DescendingValue => Self::DESCENDING_VALUE,
        }
    }

    fn arrange(self, candidates: &mut [Candidate<'_>]) {
        match self {
            // The index yields offers by ascending identifier already.
            Self::AscendingId => {}
            Self::DescendingValue => candidates.sort_by(|lhs, rhs| {
                rhs.value
                    .cmp(&lhs.value)
                    .then_with(|| lhs.offer.id.cmp(&rhs.offer.id))
            }),
        }
    }
}

impl fmt::Display for CandidateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`CandidateOrder`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown candidate order `{name}`; expected `ascending-id` or `descending-value`")]
pub struct ParseOrderError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for CandidateOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            Self::ASCENDING_ID => Ok(Self::AscendingId),
            Self::DESCENDING_VALUE => Ok(Self::DescendingValue),
            other => Err(ParseOrderError {
                name: other.to_owned(),
            }),
        }
    }
}

/// Configuration for [`BranchAndBoundPlanner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchAndBoundConfig {
    /// Traversal order of the region's offers.
    pub order: CandidateOrder,
}

/// Exact planner enumerating offer combinations depth-first.
///
/// The planner borrows a read-only [`CatalogIndex`], either directly, by
/// reference, or through an `Arc`, and may serve concurrent requests.
#[derive(Debug, Clone)]
pub struct BranchAndBoundPlanner<C>
where
    C: Borrow<CatalogIndex>,
{
    catalog: C,
    config: BranchAndBoundConfig,
}

impl<C> BranchAndBoundPlanner<C>
where
    C: Borrow<CatalogIndex>,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, BranchAndBoundConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(catalog: C, config: BranchAndBoundConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this planner reads.
    #[must_use]
    pub fn catalog(&self) -> &CatalogIndex {
        self.catalog.borrow()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &BranchAndBoundConfig {
        &self.config
    }

    fn candidates<'a>(&'a self, region_id: &'a str) -> Vec<Candidate<'a>> {
        let mut candidates: Vec<Candidate<'a>> = self
            .catalog()
            .offers_in_region(region_id)
            .map(Candidate::new)
            .collect();
        self.config.order.arrange(&mut candidates);
        candidates
    }
}

impl<C> Planner for BranchAndBoundPlanner<C>
where
    C: Borrow<CatalogIndex> + Send + Sync,
{
    fn plan(&self, request: &PlanRequest) -> PlanResponse {
        let started_at = Instant::now();

        let candidates = self.candidates(&request.region_id);
        let outcome = search(
            &candidates,
            request.days_ceiling(),
            request.budget_ceiling(),
        );
        let package = Package::from_offers(outcome.offers.into_iter().cloned().collect());
        debug_assert_eq!(package.cultural_value, outcome.value);

        let stats = outcome.stats;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates: candidates.len() as u64,
            nodes_explored: stats.nodes_explored,
            pruned_budget: stats.pruned_budget,
            pruned_duration: stats.pruned_duration,
            pruned_overlap: stats.pruned_overlap,
            incumbent_updates: stats.incumbent_updates,
        };
        log::debug!(
            "planned region {} with {} candidates: value {} from {} offers after {} nodes in {:?}",
            request.region_id,
            diagnostics.candidates,
            package.cultural_value,
            package.offers.len(),
            diagnostics.nodes_explored,
            diagnostics.solve_time,
        );

        PlanResponse {
            package,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests;
