//! FILENAME: core/grid-engine/src/sort.rs
//! PURPOSE: Multi-column sort configuration and its toggle state machine.
//! CONTEXT: A `SortConfig` is an ordered list of (field, direction) keys with
//! unique fields. Position encodes priority: the first key is primary, later
//! keys only break ties. Clicking a header cycles that field through
//! unsorted -> ascending -> descending -> unsorted without disturbing the
//! position of other keys.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

// ============================================================================
// SORT KEY
// ============================================================================

/// Sort direction. Serialized as `"asc"` / `"desc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Orients an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// One entry of a sort configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        SortKey {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

/// What a column header shows for a sorted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortIndicator {
    pub direction: SortDirection,
    /// 1-based position in the sort configuration.
    pub priority: usize,
}

// ============================================================================
// SORT CONFIG
// ============================================================================

/// Ordered, field-unique list of sort keys.
///
/// Deserialization drops repeated fields (first occurrence wins) so a
/// hand-edited layout cannot break the uniqueness invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SortKey>", into = "Vec<SortKey>")]
pub struct SortConfig {
    keys: Vec<SortKey>,
}

impl SortConfig {
    pub fn new() -> Self {
        SortConfig { keys: Vec::new() }
    }

    /// Builds a configuration from keys in priority order.
    pub fn from_keys(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut config = SortConfig::new();
        for key in keys {
            if config.position(&key.field).is_none() {
                config.keys.push(key);
            }
        }
        config
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.keys.iter().position(|key| key.field == field)
    }

    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        self.position(field).map(|idx| self.keys[idx].direction)
    }

    /// Header indicator for `field`, or `None` when it is not sorted.
    pub fn indicator(&self, field: &str) -> Option<SortIndicator> {
        self.position(field).map(|idx| SortIndicator {
            direction: self.keys[idx].direction,
            priority: idx + 1,
        })
    }

    /// Advances `field` one step through absent -> asc -> desc -> absent.
    ///
    /// A newly sorted field is appended with the lowest priority; a field
    /// switching to descending keeps its position; removing a field frees its
    /// slot.
    pub fn toggle(&mut self, field: &str) {
        match self.position(field) {
            None => self.keys.push(SortKey::ascending(field)),
            Some(idx) => match self.keys[idx].direction {
                SortDirection::Ascending => {
                    self.keys[idx].direction = SortDirection::Descending;
                }
                SortDirection::Descending => {
                    self.keys.remove(idx);
                }
            },
        }
    }

    /// Keeps only the keys whose field satisfies `keep`.
    pub fn retain_fields(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.keys.retain(|key| keep(&key.field));
    }
}

impl From<Vec<SortKey>> for SortConfig {
    fn from(keys: Vec<SortKey>) -> Self {
        SortConfig::from_keys(keys)
    }
}

impl From<SortConfig> for Vec<SortKey> {
    fn from(config: SortConfig) -> Self {
        config.keys
    }
}

impl<'a> IntoIterator for &'a SortConfig {
    type Item = &'a SortKey;
    type IntoIter = std::slice::Iter<'a, SortKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Returns `config` with `field` advanced one step through the sort cycle.
pub fn toggle_sort(config: &SortConfig, field: &str) -> SortConfig {
    let mut next = config.clone();
    next.toggle(field);
    next
}
