//! Facade crate for the tourpack package planner.
//!
//! This crate re-exports the core domain types and exposes the optional
//! branch-and-bound planner and SQLite catalog store behind feature flags.

#![forbid(unsafe_code)]

pub use tourpack_core::{
    CatalogIndex, CatalogStore, Ceiling, Cost, Diagnostics, Offer, OfferId, OfferLink, Package,
    ParseCostError, PlanRequest, PlanResponse, Planner, PoiId, PointOfInterest, Region, RegionId,
};

#[cfg(feature = "store-sqlite")]
pub use tourpack_core::{SqliteCatalogStore, SqliteCatalogStoreError};

#[cfg(feature = "solver-bnb")]
pub use tourpack_solver_bnb::{BranchAndBoundConfig, BranchAndBoundPlanner, CandidateOrder};

#[cfg(feature = "test-support")]
pub use tourpack_core::test_support;
