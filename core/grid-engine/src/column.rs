//! FILENAME: core/grid-engine/src/column.rs
//! PURPOSE: Column metadata supplied by the host.
//! CONTEXT: A `ColumnDescriptor` names a record field path and how the grid
//! may use it. `ColumnSet` is the validated collection (unique fields) and
//! knows the default visibility and default display order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::resolve;
use crate::reorder::ColumnOrder;
use crate::value::Record;
use crate::visibility::VisibleColumns;

fn default_true() -> bool {
    true
}

/// Describes one column of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Dotted path into the record (e.g. "address.city").
    pub field: String,

    /// Display label.
    pub header: String,

    /// Whether clicking the header may sort by this column.
    #[serde(default = "default_true")]
    pub sortable: bool,

    /// Whether the column may be used as a group level.
    #[serde(default = "default_true")]
    pub groupable: bool,

    /// Whether the column starts visible when no default layout is given.
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Explicit display position. Columns without one follow, in
    /// declaration order, after every column that has one.
    #[serde(default)]
    pub order: Option<i32>,
}

impl ColumnDescriptor {
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        ColumnDescriptor {
            field: field.into(),
            header: header.into(),
            sortable: true,
            groupable: true,
            visible: true,
            order: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn groupable(mut self, groupable: bool) -> Self {
        self.groupable = groupable;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Cell text for `record` in this column.
    pub fn cell_text(&self, record: &Record) -> String {
        resolve(record, &self.field).display_value()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate column field: {0}")]
pub struct DuplicateColumn(pub String);

/// Column descriptors with unique fields, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSet {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnSet {
    /// Validates that every field appears once.
    pub fn try_new(columns: Vec<ColumnDescriptor>) -> Result<Self, DuplicateColumn> {
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|c| c.field == column.field) {
                return Err(DuplicateColumn(column.field.clone()));
            }
        }
        Ok(ColumnSet { columns })
    }

    pub fn get(&self, field: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header for `field`, falling back to the field path itself.
    pub fn header_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.get(field).map_or(field, |c| c.header.as_str())
    }

    /// Every column flagged `visible`.
    pub fn default_visible(&self) -> VisibleColumns {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.field.clone())
            .collect()
    }

    /// Columns ordered by their explicit `order`, ties and unordered columns
    /// keeping declaration order.
    pub fn default_order(&self) -> ColumnOrder {
        let mut columns: Vec<&ColumnDescriptor> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order.unwrap_or(i32::MAX));
        ColumnOrder::from_fields(columns.into_iter().map(|c| c.field.clone()))
    }

    /// Completes `order` into a full display order: unknown fields are
    /// dropped and missing columns are appended in default order. An empty
    /// order yields the default order.
    pub fn complete_order(&self, order: &ColumnOrder) -> ColumnOrder {
        let mut complete = ColumnOrder::from_fields(
            order
                .fields()
                .iter()
                .filter(|field| self.contains(field))
                .cloned(),
        );
        for field in self.default_order().fields() {
            complete.push(field.clone());
        }
        complete
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
