//! Core domain types for the tourpack planner.
//!
//! The crate models a catalog of touring offers grouped by region, each
//! visiting a set of points of interest with a cultural value. It provides
//! the read-only [`CatalogStore`] boundary, the resolved in-memory
//! [`CatalogIndex`], and the [`Planner`] trait implemented by package
//! optimizers.
//!
//! # Examples
//!
//! ```
//! use tourpack_core::{CatalogIndex, Cost, Offer, OfferLink, PointOfInterest, Region};
//!
//! let index = CatalogIndex::from_parts(
//!     [Region::new("tus", "Tuscany")],
//!     [Offer::new(1, "tus", "Florence walk", Cost::from_major_units(40), 1)],
//!     [PointOfInterest::new(7, "Uffizi", 9)],
//!     [OfferLink::new(1, 7)],
//! );
//!
//! let offers: Vec<_> = index.offers_in_region("tus").collect();
//! assert_eq!(offers.len(), 1);
//! assert_eq!(offers[0].cultural_value(), 9);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod ceiling;
mod cost;
mod offer;
mod plan;
mod poi;
mod region;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::CatalogIndex;
pub use ceiling::{Ceiling, Quantity};
pub use cost::{Cost, ParseCostError};
pub use offer::{Offer, OfferId};
pub use plan::{Diagnostics, Package, PlanRequest, PlanResponse, Planner};
pub use poi::{PoiId, PointOfInterest};
pub use region::{Region, RegionId};
pub use store::{CatalogStore, OfferLink};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteCatalogStore, SqliteCatalogStoreError};
