//! Test helpers for writing catalog databases and running commands.

use camino::Utf8PathBuf;
use tempfile::TempDir;
use tourpack_core::test_support::{MemoryCatalogStore, sample_catalog, write_sqlite_catalog};

use super::*;

/// A temporary directory holding a catalog as `catalog.db`.
#[derive(Debug)]
pub(super) struct CatalogFixture {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) db: Utf8PathBuf,
}

impl CatalogFixture {
    pub(super) fn new() -> Self {
        Self::with_catalog(&sample_catalog())
    }

    pub(super) fn with_catalog(catalog: &MemoryCatalogStore) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let db = root.join("catalog.db");
        write_sqlite_catalog(db.as_std_path(), catalog).expect("write catalog");
        Self {
            _dir: dir,
            root,
            db,
        }
    }
}

/// Parse `argv` and run the resulting command, capturing stdout.
pub(super) fn run_cli(argv: &[&str]) -> (Result<(), CliError>, String) {
    let mut stdout = Vec::new();
    let result = Cli::try_parse_from(argv.iter().copied())
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::Plan(args) => plan::run_plan_with(args, &mut stdout),
            Command::Regions(args) => regions::run_regions_with(args, &mut stdout),
        });
    let output = String::from_utf8(stdout).expect("stdout utf-8");
    (result, output)
}
