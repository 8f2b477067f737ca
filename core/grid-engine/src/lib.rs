//! FILENAME: core/grid-engine/src/lib.rs
//! PURPOSE: Main library entry point for the data grid engine.
//! CONTEXT: Everything here is a pure, synchronous transformation over
//! host records and column metadata. Configuration state lives in the
//! `grid-state` crate; persistence of layouts in `layout-store`.
//!
//! Layers:
//! - `value` / `path`: record model and dotted-path resolution
//! - `compare` / `sort`: multi-key ordering and the sort toggle cycle
//! - `group`: hierarchical partitioning
//! - `visibility` / `reorder` / `column`: column configuration
//! - `view` / `expansion`: the derived view model the host renders

pub mod collate;
pub mod column;
pub mod compare;
pub mod expansion;
pub mod group;
pub mod logging;
pub mod path;
pub mod reorder;
pub mod sort;
pub mod value;
pub mod view;
pub mod visibility;

// Re-export commonly used types at the crate root
pub use column::{ColumnDescriptor, ColumnSet, DuplicateColumn};
pub use compare::{compare_by_keys, compare_values, sort_by_keys, sorted};
pub use expansion::{group_path_key, ExpansionSet, GroupPath};
pub use group::{
    group, group_key, group_rows, toggle_group_by, GroupBucket, GroupSpec, GroupedPartition,
    NULL_KEY, UNGROUPED_KEY,
};
pub use path::resolve;
pub use reorder::{reorder, ColumnOrder, DragColumnEvent};
pub use sort::{toggle_sort, SortConfig, SortDirection, SortIndicator, SortKey};
pub use value::{Record, Value};
pub use view::{derive_view, DisplayRow, GridView, GroupHeader, ViewConfig};
pub use visibility::{toggle_visibility, VisibleColumns};
