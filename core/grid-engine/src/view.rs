//! FILENAME: core/grid-engine/src/view.rs
//! View derivation - what the host renders.
//!
//! `derive_view` is a pure function of (records, columns, configuration).
//! The host calls it again after every configuration change; nothing is
//! recomputed implicitly. Sorting happens first and grouping partitions the
//! sorted rows, so rows inside every bucket keep the sort order.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDescriptor, ColumnSet};
use crate::compare::sorted;
use crate::expansion::{group_path_key, ExpansionSet, GroupPath};
use crate::group::{group_rows, GroupSpec, GroupedPartition};
use crate::reorder::ColumnOrder;
use crate::sort::SortConfig;
use crate::value::Record;
use crate::visibility::VisibleColumns;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// The user-adjustable part of the grid: everything a layout captures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub visible_columns: VisibleColumns,
    #[serde(default)]
    pub column_order: ColumnOrder,
    #[serde(default)]
    pub sort: SortConfig,
    #[serde(default)]
    pub group_by: GroupSpec,
}

impl ViewConfig {
    /// Initial configuration: default visibility and order, no sort, no grouping.
    pub fn defaults_for(columns: &ColumnSet) -> Self {
        ViewConfig {
            visible_columns: columns.default_visible(),
            column_order: columns.default_order(),
            sort: SortConfig::new(),
            group_by: GroupSpec::new(),
        }
    }

    /// Drops every field the column set does not know, sort keys on
    /// unsortable columns and group levels on ungroupable columns, then
    /// completes the column order. Returns the dropped field names.
    pub fn sanitize(&mut self, columns: &ColumnSet) -> Vec<String> {
        let mut dropped = Vec::new();

        self.visible_columns
            .retain_fields(|field| keep_if(&mut dropped, field, columns.contains(field)));
        self.sort.retain_fields(|field| {
            let sortable = columns.get(field).map_or(false, |c| c.sortable);
            keep_if(&mut dropped, field, sortable)
        });
        self.group_by.retain_fields(|field| {
            let groupable = columns.get(field).map_or(false, |c| c.groupable);
            keep_if(&mut dropped, field, groupable)
        });
        self.column_order
            .retain_fields(|field| keep_if(&mut dropped, field, columns.contains(field)));
        self.column_order = columns.complete_order(&self.column_order);
        dropped
    }
}

fn keep_if(dropped: &mut Vec<String>, field: &str, keep: bool) -> bool {
    if !keep && !dropped.iter().any(|d| d == field) {
        dropped.push(field.to_string());
    }
    keep
}

// ============================================================================
// VIEW MODEL
// ============================================================================

/// Renderable output of `derive_view`.
#[derive(Debug, Clone)]
pub struct GridView<'a> {
    column_set: &'a ColumnSet,
    columns: Vec<&'a ColumnDescriptor>,
    rows: Vec<&'a Record>,
    groups: Option<GroupedPartition<'a>>,
}

/// Group header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    /// Expansion key, e.g. "male/NY".
    pub path: String,
    pub field: String,
    /// Column header of `field` (or the field path when it has no column).
    pub header: String,
    pub key: String,
    pub count: usize,
    pub depth: usize,
    pub expanded: bool,
}

/// One rendered line of the grid body.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow<'a> {
    Group(GroupHeader),
    Record { record: &'a Record, depth: usize },
}

impl<'a> GridView<'a> {
    /// Visible columns in display order.
    pub fn columns(&self) -> &[&'a ColumnDescriptor] {
        &self.columns
    }

    /// All rows, sorted.
    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    /// Grouped partition of the sorted rows; `None` when not grouping.
    pub fn groups(&self) -> Option<&GroupedPartition<'a>> {
        self.groups.as_ref()
    }

    pub fn is_grouped(&self) -> bool {
        self.groups.is_some()
    }

    /// Cell text for every visible column of `record`.
    pub fn cells(&self, record: &Record) -> Vec<String> {
        self.columns.iter().map(|c| c.cell_text(record)).collect()
    }

    /// Flattens the view into body lines. Records below a collapsed group
    /// are omitted.
    pub fn display_rows(&self, expanded: &ExpansionSet) -> Vec<DisplayRow<'a>> {
        let mut out = Vec::new();
        match &self.groups {
            Some(groups) => {
                let mut path = GroupPath::new();
                self.push_groups(groups, &mut path, expanded, &mut out);
            }
            None => out.extend(
                self.rows
                    .iter()
                    .map(|&record| DisplayRow::Record { record, depth: 0 }),
            ),
        }
        out
    }

    fn push_groups<'s>(
        &self,
        partition: &'s GroupedPartition<'a>,
        path: &mut GroupPath<'s>,
        expanded: &ExpansionSet,
        out: &mut Vec<DisplayRow<'a>>,
    ) {
        let field = partition.field().unwrap_or_default();
        let depth = path.len();

        for bucket in partition.buckets() {
            path.push(&bucket.key);
            let key_path = group_path_key(path);
            let is_expanded = expanded.is_expanded(&key_path);

            out.push(DisplayRow::Group(GroupHeader {
                path: key_path,
                field: field.to_string(),
                header: self.column_set.header_for(field).to_string(),
                key: bucket.key.clone(),
                count: bucket.members.len(),
                depth,
                expanded: is_expanded,
            }));

            if is_expanded {
                match &bucket.subgroups {
                    Some(nested) => self.push_groups(nested, path, expanded, out),
                    None => out.extend(bucket.members.iter().map(|&record| {
                        DisplayRow::Record {
                            record,
                            depth: depth + 1,
                        }
                    })),
                }
            }
            path.pop();
        }
    }
}

/// Sorts, then groups, `records` under `config`.
pub fn derive_view<'a, R: Borrow<Record>>(
    records: &'a [R],
    columns: &'a ColumnSet,
    config: &ViewConfig,
) -> GridView<'a> {
    crate::log_enter!("VIEW", "derive_view", "records={}", records.len());
    let rows = sorted(records, &config.sort);

    let groups = if config.group_by.is_empty() {
        None
    } else {
        Some(group_rows(&rows, config.group_by.fields()))
    };

    let order = columns.complete_order(&config.column_order);
    let visible = order
        .fields()
        .iter()
        .filter(|field| config.visible_columns.contains(field))
        .filter_map(|field| columns.get(field))
        .collect();

    crate::log_exit!(
        "VIEW",
        "derive_view",
        "rows={} sort_keys={} group_levels={}",
        rows.len(),
        config.sort.len(),
        config.group_by.len()
    );

    GridView {
        column_set: columns,
        columns: visible,
        rows,
        groups,
    }
}
