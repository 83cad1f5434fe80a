//! Resolved in-memory view of a touring catalog.
//!
//! The index is built once per session from a [`CatalogStore`] and is
//! read-only afterwards, so planners may share it across threads.

use std::{collections::BTreeMap, sync::Arc};

use crate::{CatalogStore, Offer, OfferId, OfferLink, PoiId, PointOfInterest, Region, RegionId};

/// Offers and points of interest keyed by identifier, with every offer's
/// point-of-interest set resolved from the relation records.
///
/// Maps are ordered by identifier, so iteration order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    regions: BTreeMap<RegionId, Region>,
    offers_by_id: BTreeMap<OfferId, Arc<Offer>>,
    points_of_interest_by_id: BTreeMap<PoiId, PointOfInterest>,
}

impl CatalogIndex {
    /// Read every collection from `store` and resolve the offer links.
    ///
    /// # Errors
    /// Propagates the first error raised by the store.
    pub fn load<S>(store: &S) -> Result<Self, S::Error>
    where
        S: CatalogStore + ?Sized,
    {
        let regions = store.regions()?;
        let offers = store.offers()?;
        let pois = store.points_of_interest()?;
        let links = store.offer_links()?;
        Ok(Self::from_parts(regions, offers, pois, links))
    }

    /// Build an index from raw collections.
    ///
    /// Each link adds the resolved point of interest to its offer. Links
    /// naming an unknown offer or point of interest are skipped. When two
    /// entities share an identifier the later one wins.
    #[must_use]
    pub fn from_parts<R, O, P, L>(regions: R, offers: O, pois: P, links: L) -> Self
    where
        R: IntoIterator<Item = Region>,
        O: IntoIterator<Item = Offer>,
        P: IntoIterator<Item = PointOfInterest>,
        L: IntoIterator<Item = OfferLink>,
    {
        let regions: BTreeMap<RegionId, Region> = regions
            .into_iter()
            .map(|region| (region.id.clone(), region))
            .collect();
        let points_of_interest_by_id: BTreeMap<PoiId, PointOfInterest> =
            pois.into_iter().map(|poi| (poi.id, poi)).collect();
        let mut offers: BTreeMap<OfferId, Offer> =
            offers.into_iter().map(|offer| (offer.id, offer)).collect();

        let mut skipped = 0_usize;
        for link in links {
            let poi = points_of_interest_by_id.get(&link.poi_id);
            match (offers.get_mut(&link.offer_id), poi) {
                (Some(offer), Some(poi)) => {
                    offer.insert_point_of_interest(poi.clone());
                }
                _ => skipped = skipped.saturating_add(1),
            }
        }
        if skipped > 0 {
            log::debug!("skipped {skipped} offer links with unknown offer or poi ids");
        }

        Self {
            regions,
            offers_by_id: offers
                .into_iter()
                .map(|(id, offer)| (id, Arc::new(offer)))
                .collect(),
            points_of_interest_by_id,
        }
    }

    /// Offers keyed by identifier.
    #[must_use]
    pub const fn offers_by_id(&self) -> &BTreeMap<OfferId, Arc<Offer>> {
        &self.offers_by_id
    }

    /// Points of interest keyed by identifier.
    #[must_use]
    pub const fn points_of_interest_by_id(&self) -> &BTreeMap<PoiId, PointOfInterest> {
        &self.points_of_interest_by_id
    }

    /// Every known region, ordered by identifier.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.values()
    }

    /// Look up a region by identifier.
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Offers owned by `region_id`, ordered by ascending offer identifier.
    ///
    /// Regions are matched by identifier only; offers may reference a region
    /// missing from [`CatalogIndex::regions`].
    pub fn offers_in_region<'a>(
        &'a self,
        region_id: &'a str,
    ) -> impl Iterator<Item = &'a Arc<Offer>> + 'a {
        self.offers_by_id
            .values()
            .filter(move |offer| offer.region_id == region_id)
    }
}
