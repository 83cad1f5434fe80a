//! Test-only catalog fixtures used by unit and behaviour tests.

use std::convert::Infallible;

use crate::{CatalogStore, Cost, Offer, OfferLink, PointOfInterest, Region};

/// In-memory `CatalogStore` implementation used in tests.
///
/// Collections are returned exactly as stored, links included, so tests can
/// feed dangling relation records through the index build step.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MemoryCatalogStore {
    /// Stored regions.
    pub regions: Vec<Region>,
    /// Stored offers, usually without points of interest.
    pub offers: Vec<Offer>,
    /// Stored points of interest.
    pub points_of_interest: Vec<PointOfInterest>,
    /// Stored relation records.
    pub links: Vec<OfferLink>,
}

impl MemoryCatalogStore {
    /// Add a region.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Add an offer.
    #[must_use]
    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.offers.push(offer);
        self
    }

    /// Add a point of interest.
    #[must_use]
    pub fn with_point_of_interest(mut self, poi: PointOfInterest) -> Self {
        self.points_of_interest.push(poi);
        self
    }

    /// Add a relation record.
    #[must_use]
    pub fn with_link(mut self, offer_id: u64, poi_id: u64) -> Self {
        self.links.push(OfferLink::new(offer_id, poi_id));
        self
    }
}

impl CatalogStore for MemoryCatalogStore {
    type Error = Infallible;

    fn regions(&self) -> Result<Vec<Region>, Self::Error> {
        Ok(self.regions.clone())
    }

    fn offers(&self) -> Result<Vec<Offer>, Self::Error> {
        Ok(self.offers.clone())
    }

    fn points_of_interest(&self) -> Result<Vec<PointOfInterest>, Self::Error> {
        Ok(self.points_of_interest.clone())
    }

    fn offer_links(&self) -> Result<Vec<OfferLink>, Self::Error> {
        Ok(self.links.clone())
    }
}

/// The reference catalog used throughout the tests.
///
/// Region `R` sells three offers:
///
/// | offer | cost | days | points of interest   |
/// |-------|------|------|----------------------|
/// | A (1) | 10   | 2    | p1 (5), p2 (3)       |
/// | B (2) | 15   | 3    | p3 (10)              |
/// | C (3) | 5    | 1    | p1 (5)               |
///
/// Region `E` sells nothing.
#[must_use]
pub fn sample_catalog() -> MemoryCatalogStore {
    MemoryCatalogStore::default()
        .with_region(Region::new("E", "Empty"))
        .with_region(Region::new("R", "Riviera"))
        .with_offer(Offer::new(1, "R", "A", Cost::from_major_units(10), 2))
        .with_offer(Offer::new(2, "R", "B", Cost::from_major_units(15), 3))
        .with_offer(Offer::new(3, "R", "C", Cost::from_major_units(5), 1))
        .with_point_of_interest(PointOfInterest::new(1, "p1", 5))
        .with_point_of_interest(PointOfInterest::new(2, "p2", 3))
        .with_point_of_interest(PointOfInterest::new(3, "p3", 10))
        .with_link(1, 1)
        .with_link(1, 2)
        .with_link(2, 3)
        .with_link(3, 1)
}

/// Write `catalog` into a fresh SQLite database readable by
/// [`SqliteCatalogStore`](crate::SqliteCatalogStore).
///
/// # Errors
/// Returns the underlying `rusqlite` error when the database cannot be
/// created or written, including identifiers beyond the SQLite integer range.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_catalog(
    path: &std::path::Path,
    catalog: &MemoryCatalogStore,
) -> Result<(), rusqlite::Error> {
    let mut connection = rusqlite::Connection::open(path)?;
    let transaction = connection.transaction()?;
    transaction.execute_batch(
        "CREATE TABLE regions (id TEXT PRIMARY KEY, name TEXT NOT NULL);
         CREATE TABLE points_of_interest (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             cultural_value INTEGER NOT NULL
         );
         CREATE TABLE offers (
             id INTEGER PRIMARY KEY,
             region_id TEXT NOT NULL,
             name TEXT NOT NULL,
             cost_cents INTEGER NOT NULL,
             duration_days INTEGER NOT NULL
         );
         CREATE TABLE offer_points_of_interest (
             offer_id INTEGER NOT NULL,
             poi_id INTEGER NOT NULL
         );",
    )?;

    let to_sql = |value: u64| {
        i64::try_from(value).map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))
    };

    for region in &catalog.regions {
        transaction.execute(
            "INSERT INTO regions (id, name) VALUES (?1, ?2)",
            (&region.id, &region.name),
        )?;
    }
    for poi in &catalog.points_of_interest {
        transaction.execute(
            "INSERT INTO points_of_interest (id, name, cultural_value) VALUES (?1, ?2, ?3)",
            (to_sql(poi.id)?, &poi.name, poi.cultural_value),
        )?;
    }
    for offer in &catalog.offers {
        transaction.execute(
            "INSERT INTO offers (id, region_id, name, cost_cents, duration_days)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                to_sql(offer.id)?,
                &offer.region_id,
                &offer.name,
                to_sql(offer.cost.minor_units())?,
                offer.duration_days,
            ),
        )?;
    }
    for link in &catalog.links {
        transaction.execute(
            "INSERT INTO offer_points_of_interest (offer_id, poi_id) VALUES (?1, ?2)",
            (to_sql(link.offer_id)?, to_sql(link.poi_id)?),
        )?;
    }
    transaction.commit()
}
