//! FILENAME: core/grid-engine/src/reorder.rs
//! PURPOSE: Column display order and drag-to-reorder moves.
//! CONTEXT: A drop of column `source` onto column `target` is a move, not a
//! swap: `source` leaves its slot and ends up at the index `target` held
//! before the move, shifting the columns in between by one.

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of column fields.
///
/// An empty order means "use the column set's default order".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ColumnOrder {
    fields: Vec<String>,
}

/// A header drag: drop `source` onto `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragColumnEvent {
    pub source: String,
    pub target: String,
}

impl ColumnOrder {
    pub fn new() -> Self {
        ColumnOrder { fields: Vec::new() }
    }

    pub fn from_fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        let mut order = ColumnOrder::new();
        for field in fields {
            order.push(field);
        }
        order
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Appends `field` unless it is already present.
    pub fn push(&mut self, field: impl Into<String>) {
        let field = field.into();
        if self.position(&field).is_none() {
            self.fields.push(field);
        }
    }

    /// Moves `source` to the index currently held by `target`.
    /// Returns false (and changes nothing) when the fields are equal or
    /// either one is missing.
    pub fn move_field(&mut self, source: &str, target: &str) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(source), self.position(target)) else {
            return false;
        };
        let moved = self.fields.remove(from);
        self.fields.insert(to, moved);
        true
    }

    pub fn retain_fields(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.fields.retain(|field| keep(field));
    }
}

impl From<Vec<String>> for ColumnOrder {
    fn from(fields: Vec<String>) -> Self {
        ColumnOrder::from_fields(fields)
    }
}

impl From<ColumnOrder> for Vec<String> {
    fn from(order: ColumnOrder) -> Self {
        order.fields
    }
}

/// Returns `order` with `source` moved onto `target`'s position.
pub fn reorder(order: &ColumnOrder, source: &str, target: &str) -> ColumnOrder {
    let mut next = order.clone();
    next.move_field(source, target);
    next
}
