//! SQLite-backed catalog store.
//!
//! The database is opened read-only and is expected to contain four tables:
//!
//! ```sql
//! CREATE TABLE regions (id TEXT PRIMARY KEY, name TEXT NOT NULL);
//! CREATE TABLE points_of_interest (
//!     id INTEGER PRIMARY KEY, name TEXT NOT NULL, cultural_value INTEGER NOT NULL
//! );
//! CREATE TABLE offers (
//!     id INTEGER PRIMARY KEY, region_id TEXT NOT NULL, name TEXT NOT NULL,
//!     cost_cents INTEGER NOT NULL, duration_days INTEGER NOT NULL
//! );
//! CREATE TABLE offer_points_of_interest (offer_id INTEGER NOT NULL, poi_id INTEGER NOT NULL);
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use super::{CatalogStore, OfferLink};
use crate::{Cost, Offer, PointOfInterest, Region};

/// Error raised when reading a catalog from SQLite.
#[derive(Debug, Error)]
pub enum SqliteCatalogStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a query failed.
    #[error("failed to query {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored integer does not fit the domain type.
    #[error("{table}.{column} value {value} is outside the supported range")]
    OutOfRange {
        /// Table holding the value.
        table: &'static str,
        /// Column holding the value.
        column: &'static str,
        /// Raw value read from SQLite.
        value: i64,
    },
}

/// Read-only catalog store backed by a SQLite database.
pub struct SqliteCatalogStore {
    connection: Connection,
    path: PathBuf,
}

impl fmt::Debug for SqliteCatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteCatalogStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteCatalogStore {
    /// Open a store backed by the SQLite database at `path`.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogStoreError::OpenDatabase`] when the database
    /// cannot be opened read-only.
    pub fn open<P>(path: P) -> Result<Self, SqliteCatalogStoreError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteCatalogStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    /// Location of the backing database.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn query_rows<T, F>(
        &self,
        operation: &'static str,
        sql: &str,
        mut decode: F,
    ) -> Result<Vec<T>, SqliteCatalogStoreError>
    where
        F: FnMut(&Row<'_>) -> Result<T, SqliteCatalogStoreError>,
    {
        let query_error = |source| SqliteCatalogStoreError::Query { operation, source };
        let mut statement = self.connection.prepare(sql).map_err(query_error)?;
        let mut rows = statement.query([]).map_err(query_error)?;
        let mut decoded = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            decoded.push(decode(row)?);
        }
        Ok(decoded)
    }
}

fn column<T>(
    row: &Row<'_>,
    index: usize,
    operation: &'static str,
) -> Result<T, SqliteCatalogStoreError>
where
    T: rusqlite::types::FromSql,
{
    row.get(index)
        .map_err(|source| SqliteCatalogStoreError::Query { operation, source })
}

fn unsigned<T>(
    value: i64,
    table: &'static str,
    column: &'static str,
) -> Result<T, SqliteCatalogStoreError>
where
    T: TryFrom<i64>,
{
    T::try_from(value).map_err(|_| SqliteCatalogStoreError::OutOfRange {
        table,
        column,
        value,
    })
}

impl CatalogStore for SqliteCatalogStore {
    type Error = SqliteCatalogStoreError;

    fn regions(&self) -> Result<Vec<Region>, Self::Error> {
        const OP: &str = "read regions";
        self.query_rows(OP, "SELECT id, name FROM regions ORDER BY id", |row| {
            let id: String = column(row, 0, OP)?;
            let name: String = column(row, 1, OP)?;
            Ok(Region::new(id, name))
        })
    }

    fn offers(&self) -> Result<Vec<Offer>, Self::Error> {
        const OP: &str = "read offers";
        self.query_rows(
            OP,
            "SELECT id, region_id, name, cost_cents, duration_days FROM offers ORDER BY id",
            |row| {
                let id = unsigned(column(row, 0, OP)?, "offers", "id")?;
                let region_id: String = column(row, 1, OP)?;
                let name: String = column(row, 2, OP)?;
                let cost_cents: u64 = unsigned(column(row, 3, OP)?, "offers", "cost_cents")?;
                let duration_days = unsigned(column(row, 4, OP)?, "offers", "duration_days")?;
                Ok(Offer::new(
                    id,
                    region_id,
                    name,
                    Cost::from_minor_units(cost_cents),
                    duration_days,
                ))
            },
        )
    }

    fn points_of_interest(&self) -> Result<Vec<PointOfInterest>, Self::Error> {
        const OP: &str = "read points of interest";
        self.query_rows(
            OP,
            "SELECT id, name, cultural_value FROM points_of_interest ORDER BY id",
            |row| {
                let id = unsigned(column(row, 0, OP)?, "points_of_interest", "id")?;
                let name: String = column(row, 1, OP)?;
                let cultural_value = unsigned(
                    column(row, 2, OP)?,
                    "points_of_interest",
                    "cultural_value",
                )?;
                Ok(PointOfInterest::new(id, name, cultural_value))
            },
        )
    }

    fn offer_links(&self) -> Result<Vec<OfferLink>, Self::Error> {
        const OP: &str = "read offer links";
        self.query_rows(
            OP,
            "SELECT offer_id, poi_id FROM offer_points_of_interest ORDER BY offer_id, poi_id",
            |row| {
                let offer_id =
                    unsigned(column(row, 0, OP)?, "offer_points_of_interest", "offer_id")?;
                let poi_id = unsigned(column(row, 1, OP)?, "offer_points_of_interest", "poi_id")?;
                Ok(OfferLink::new(offer_id, poi_id))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogIndex;
    use crate::test_support::{sample_catalog, write_sqlite_catalog};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_db() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("catalog.db");
        (dir, path)
    }

    #[rstest]
    fn reads_back_written_catalog(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let memory = sample_catalog();
        write_sqlite_catalog(&path, &memory).expect("persist catalog");

        let store = SqliteCatalogStore::open(&path).expect("open store");
        assert_eq!(store.regions().expect("regions"), memory.regions);
        assert_eq!(store.offers().expect("offers"), memory.offers);
        assert_eq!(
            store.points_of_interest().expect("points of interest"),
            memory.points_of_interest
        );
        assert_eq!(store.offer_links().expect("links"), memory.links);
    }

    #[rstest]
    fn index_loads_from_sqlite(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        write_sqlite_catalog(&path, &sample_catalog()).expect("persist catalog");

        let store = SqliteCatalogStore::open(&path).expect("open store");
        let index = CatalogIndex::load(&store).expect("load index");
        let values: Vec<u64> = index
            .offers_in_region("R")
            .map(|offer| offer.cultural_value())
            .collect();
        assert_eq!(values, vec![8, 10, 5]);
    }

    #[rstest]
    fn open_fails_for_missing_database(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let err = SqliteCatalogStore::open(&path).expect_err("missing database should fail");
        assert!(matches!(err, SqliteCatalogStoreError::OpenDatabase { .. }));
    }

    #[rstest]
    fn query_fails_without_schema(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        Connection::open(&path).expect("create empty database");

        let store = SqliteCatalogStore::open(&path).expect("open store");
        let err = store.offers().expect_err("missing table should fail");
        assert!(matches!(
            err,
            SqliteCatalogStoreError::Query {
                operation: "read offers",
                ..
            }
        ));
    }

    #[rstest]
    fn negative_cost_is_out_of_range(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        write_sqlite_catalog(&path, &sample_catalog()).expect("persist catalog");
        Connection::open(&path)
            .expect("reopen database")
            .execute("UPDATE offers SET cost_cents = -1 WHERE id = 1", [])
            .expect("corrupt cost");

        let store = SqliteCatalogStore::open(&path).expect("open store");
        let err = store.offers().expect_err("negative cost should fail");
        assert!(matches!(
            err,
            SqliteCatalogStoreError::OutOfRange {
                column: "cost_cents",
                value: -1,
                ..
            }
        ));
    }
}
