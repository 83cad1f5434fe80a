//! Data access traits for the touring catalog.
//!
//! The `CatalogStore` trait defines a read-only interface for retrieving the
//! raw catalog collections: regions, offers, points of interest, and the
//! many-to-many links between offers and points of interest. Resolving those
//! links into offer objects is the job of [`CatalogIndex`](crate::CatalogIndex).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Offer, OfferId, PoiId, PointOfInterest, Region};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteCatalogStore, SqliteCatalogStoreError};

/// A relation record stating that an offer visits a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OfferLink {
    /// Offer side of the relation.
    pub offer_id: OfferId,
    /// Point-of-interest side of the relation.
    pub poi_id: PoiId,
}

impl OfferLink {
    /// Construct a relation record.
    #[must_use]
    pub const fn new(offer_id: OfferId, poi_id: PoiId) -> Self {
        Self { offer_id, poi_id }
    }
}

/// Read-only access to a persisted touring catalog.
///
/// Offers returned by [`CatalogStore::offers`] need not carry their points of
/// interest; the relation is supplied separately by
/// [`CatalogStore::offer_links`]. Links may reference identifiers that the
/// other collections lack; consumers must tolerate such gaps.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use tourpack_core::{
///     CatalogIndex, CatalogStore, Cost, Offer, OfferLink, PointOfInterest, Region,
/// };
///
/// struct Fixed;
///
/// impl CatalogStore for Fixed {
///     type Error = Infallible;
///
///     fn regions(&self) -> Result<Vec<Region>, Self::Error> {
///         Ok(vec![Region::new("r", "Region")])
///     }
///     fn offers(&self) -> Result<Vec<Offer>, Self::Error> {
///         Ok(vec![Offer::new(1, "r", "Tour", Cost::ZERO, 1)])
///     }
///     fn points_of_interest(&self) -> Result<Vec<PointOfInterest>, Self::Error> {
///         Ok(vec![PointOfInterest::new(1, "Museum", 4)])
///     }
///     fn offer_links(&self) -> Result<Vec<OfferLink>, Self::Error> {
///         Ok(vec![OfferLink::new(1, 1), OfferLink::new(1, 99)])
///     }
/// }
///
/// let index = CatalogIndex::load(&Fixed).unwrap();
/// assert_eq!(index.offers_by_id()[&1].cultural_value(), 4);
/// ```
pub trait CatalogStore {
    /// Error raised when the backing storage cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return every region.
    fn regions(&self) -> Result<Vec<Region>, Self::Error>;

    /// Return every offer.
    fn offers(&self) -> Result<Vec<Offer>, Self::Error>;

    /// Return every point of interest.
    fn points_of_interest(&self) -> Result<Vec<PointOfInterest>, Self::Error>;

    /// Return every offer to point-of-interest relation record.
    fn offer_links(&self) -> Result<Vec<OfferLink>, Self::Error>;
}
