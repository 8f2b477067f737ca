//! FILENAME: tests/common/mod.rs
//! Test harness for layout store integration tests.

#![allow(dead_code)]

use grid_engine::{ColumnOrder, GroupSpec, SortConfig, SortKey, ViewConfig};
use layout_store::{FileStore, LayoutManager};
use tempfile::TempDir;

/// A file-backed layout manager in a temporary directory.
pub struct TestHarness {
    pub dir: TempDir,
    pub manager: LayoutManager<FileStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let manager = LayoutManager::new(FileStore::new(dir.path()));
        TestHarness { dir, manager }
    }

    /// A second manager over the same directory, as a fresh grid instance
    /// would create.
    pub fn reopen(&self) -> LayoutManager<FileStore> {
        LayoutManager::new(FileStore::new(self.dir.path()))
    }
}

/// Patient-grid configuration: the columns a clinic view typically shows,
/// sorted by last name and grouped by state.
pub fn clinic_config() -> ViewConfig {
    ViewConfig {
        visible_columns: ["name", "age", "address.state", "insuranceProvider"]
            .into_iter()
            .collect(),
        column_order: ColumnOrder::from_fields([
            "name",
            "age",
            "address.state",
            "insuranceProvider",
            "id",
        ]),
        sort: SortConfig::from_keys([SortKey::ascending("name"), SortKey::descending("age")]),
        group_by: GroupSpec::from_fields(["address.state"]),
    }
}
