//! Exact branch-and-bound package planner for tourpack.
//!
//! This crate provides [`BranchAndBoundPlanner`], the default implementation
//! of the [`Planner`](tourpack_core::Planner) trait. Given a region and
//! optional ceilings on total days and total cost, it enumerates every
//! combination of the region's offers depth-first and keeps the one with the
//! greatest cultural value whose members visit pairwise-distinct points of
//! interest.
//!
//! Pruning is purely constraint-based: a candidate that would overflow the
//! remaining budget, overflow the remaining days, or revisit a chosen point
//! of interest is never descended into. Every other node is explored, so the
//! worst case is exponential in the number of offers in the region. The
//! planner targets small per-region catalogs where exactness matters more
//! than asymptotics.
//!
//! Ties in cultural value are resolved deterministically: the first package
//! reaching the best value in traversal order is kept. Traversal order is set
//! by [`CandidateOrder`].
//!
//! # Examples
//!
//! ```
//! use tourpack_core::{
//!     CatalogIndex, Cost, Offer, OfferLink, PlanRequest, Planner, PointOfInterest, Region,
//! };
//! use tourpack_solver_bnb::BranchAndBoundPlanner;
//!
//! let index = CatalogIndex::from_parts(
//!     [Region::new("R", "Riviera")],
//!     [
//!         Offer::new(1, "R", "A", Cost::from_major_units(10), 2),
//!         Offer::new(2, "R", "B", Cost::from_major_units(15), 3),
//!     ],
//!     [PointOfInterest::new(1, "p1", 5), PointOfInterest::new(2, "p2", 10)],
//!     [OfferLink::new(1, 1), OfferLink::new(2, 2)],
//! );
//! let planner = BranchAndBoundPlanner::new(&index);
//! let request = PlanRequest::new("R").with_max_budget(Cost::from_major_units(20));
//!
//! let response = planner.plan(&request);
//! assert_eq!(response.package.cultural_value, 10);
//! assert_eq!(response.package.offers[0].id, 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod search;
mod solver;

pub use solver::{BranchAndBoundConfig, BranchAndBoundPlanner, CandidateOrder, ParseOrderError};
