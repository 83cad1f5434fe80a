//! Touring offers sold within a region.

use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cost, PoiId, PointOfInterest, RegionId};

/// Identifier of an [`Offer`].
pub type OfferId = u64;

/// A purchasable tour tied to one region.
///
/// The visited points of interest are keyed by identifier, so an offer can
/// never list the same attraction twice.
///
/// # Examples
/// ```
/// use tourpack_core::{Cost, Offer, PointOfInterest};
///
/// let offer = Offer::new(1, "tus", "Florence walk", Cost::from_major_units(10), 2)
///     .with_point_of_interest(PointOfInterest::new(1, "Duomo", 5))
///     .with_point_of_interest(PointOfInterest::new(2, "Uffizi", 3));
///
/// assert_eq!(offer.cultural_value(), 8);
/// assert_eq!(offer.points_of_interest.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offer {
    /// Unique identifier.
    pub id: OfferId,
    /// Region that sells the offer.
    pub region_id: RegionId,
    /// Human-readable name.
    pub name: String,
    /// Purchase price.
    pub cost: Cost,
    /// Duration in days.
    pub duration_days: u32,
    /// Points of interest visited, keyed by identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub points_of_interest: BTreeMap<PoiId, PointOfInterest>,
}

impl Offer {
    /// Construct an offer that visits no points of interest yet.
    #[must_use]
    pub fn new(
        id: OfferId,
        region_id: impl Into<RegionId>,
        name: impl Into<String>,
        cost: Cost,
        duration_days: u32,
    ) -> Self {
        Self {
            id,
            region_id: region_id.into(),
            name: name.into(),
            cost,
            duration_days,
            points_of_interest: BTreeMap::new(),
        }
    }

    /// Add a point of interest while returning `self` for chaining.
    #[must_use]
    pub fn with_point_of_interest(mut self, poi: PointOfInterest) -> Self {
        self.insert_point_of_interest(poi);
        self
    }

    /// Add a point of interest, replacing any entry with the same identifier.
    ///
    /// Returns `true` when the identifier was not yet present.
    pub fn insert_point_of_interest(&mut self, poi: PointOfInterest) -> bool {
        self.points_of_interest.insert(poi.id, poi).is_none()
    }

    /// Sum of the cultural values of the visited points of interest.
    #[must_use]
    pub fn cultural_value(&self) -> u64 {
        self.points_of_interest
            .values()
            .map(|poi| u64::from(poi.cultural_value))
            .fold(0, u64::saturating_add)
    }

    /// Identifiers of the visited points of interest, ascending.
    pub fn poi_ids(&self) -> impl Iterator<Item = PoiId> + '_ {
        self.points_of_interest.keys().copied()
    }

    /// Whether no visited point of interest appears in `used`.
    #[must_use]
    pub fn is_disjoint_from<S>(&self, used: &HashSet<PoiId, S>) -> bool
    where
        S: std::hash::BuildHasher,
    {
        self.points_of_interest.keys().all(|id| !used.contains(id))
    }

    /// Whether this offer and `other` visit a common point of interest.
    #[must_use]
    pub fn shares_point_of_interest_with(&self, other: &Self) -> bool {
        self.points_of_interest
            .keys()
            .any(|id| other.points_of_interest.contains_key(id))
    }
}
