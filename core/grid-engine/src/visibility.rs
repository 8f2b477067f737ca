//! FILENAME: core/grid-engine/src/visibility.rs
//! PURPOSE: The set of visible column fields.
//! CONTEXT: Membership only. Display order of visible columns comes from
//! `ColumnOrder`, never from this set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleColumns {
    fields: BTreeSet<String>,
}

impl VisibleColumns {
    pub fn new() -> Self {
        VisibleColumns {
            fields: BTreeSet::new(),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// Flips membership of `field`. Returns true if it is now visible.
    pub fn toggle(&mut self, field: &str) -> bool {
        if self.fields.remove(field) {
            false
        } else {
            self.fields.insert(field.to_string());
            true
        }
    }

    pub fn insert(&mut self, field: impl Into<String>) -> bool {
        self.fields.insert(field.into())
    }

    pub fn remove(&mut self, field: &str) -> bool {
        self.fields.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn retain_fields(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.fields.retain(|field| keep(field));
    }
}

impl<S: Into<String>> FromIterator<S> for VisibleColumns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        VisibleColumns {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns `visible` with `field` added if absent or removed if present.
pub fn toggle_visibility(visible: &VisibleColumns, field: &str) -> VisibleColumns {
    let mut next = visible.clone();
    next.toggle(field);
    next
}
