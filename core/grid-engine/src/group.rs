//! FILENAME: core/grid-engine/src/group.rs
//! PURPOSE: Hierarchical grouping of records by one or more field paths.
//! CONTEXT: A `GroupSpec` lists group fields outermost first. `group` splits
//! the input into buckets keyed by the stringified value of the first field,
//! in the order keys are first seen, and recursively splits every bucket by
//! the remaining fields. Every record lands in exactly one leaf bucket.

use std::borrow::Borrow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::path::resolve;
use crate::value::{Record, Value};

/// Key of the single bucket returned when no grouping is requested.
pub const UNGROUPED_KEY: &str = "all";

/// Key used for records whose group value is null or stringifies to nothing.
pub const NULL_KEY: &str = "null";

// ============================================================================
// GROUP SPEC
// ============================================================================

/// Ordered, duplicate-free list of group field paths (outermost first).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GroupSpec {
    fields: Vec<String>,
}

impl GroupSpec {
    pub fn new() -> Self {
        GroupSpec { fields: Vec::new() }
    }

    pub fn from_fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        let mut spec = GroupSpec::new();
        for field in fields {
            let field = field.into();
            if !spec.contains(&field) {
                spec.fields.push(field);
            }
        }
        spec
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends `field` as the innermost level, or removes it if present.
    pub fn toggle(&mut self, field: &str) {
        match self.fields.iter().position(|f| f == field) {
            Some(idx) => {
                self.fields.remove(idx);
            }
            None => self.fields.push(field.to_string()),
        }
    }

    pub fn retain_fields(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.fields.retain(|field| keep(field));
    }
}

impl From<Vec<String>> for GroupSpec {
    fn from(fields: Vec<String>) -> Self {
        GroupSpec::from_fields(fields)
    }
}

impl From<GroupSpec> for Vec<String> {
    fn from(spec: GroupSpec) -> Self {
        spec.fields
    }
}

/// Returns `spec` with `field` added as the innermost level or removed.
pub fn toggle_group_by(spec: &GroupSpec, field: &str) -> GroupSpec {
    let mut next = spec.clone();
    next.toggle(field);
    next
}

// ============================================================================
// GROUPED PARTITION
// ============================================================================

/// Records sharing one group key, plus the nested partition for the
/// remaining group fields (if any).
#[derive(Debug, Clone)]
pub struct GroupBucket<'a> {
    pub key: String,
    pub members: Vec<&'a Record>,
    pub subgroups: Option<GroupedPartition<'a>>,
}

/// One level of grouping: buckets in first-seen key order.
#[derive(Debug, Clone)]
pub struct GroupedPartition<'a> {
    /// The field this level partitions on; `None` for the ungrouped bucket.
    field: Option<String>,
    buckets: Vec<GroupBucket<'a>>,
}

impl<'a> GroupedPartition<'a> {
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn buckets(&self) -> &[GroupBucket<'a>] {
        &self.buckets
    }

    pub fn get(&self, key: &str) -> Option<&GroupBucket<'a>> {
        self.buckets.iter().find(|bucket| bucket.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The deepest buckets, in display order.
    pub fn leaves(&self) -> Vec<&GroupBucket<'a>> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'s>(&'s self, out: &mut Vec<&'s GroupBucket<'a>>) {
        for bucket in &self.buckets {
            match &bucket.subgroups {
                Some(nested) => nested.collect_leaves(out),
                None => out.push(bucket),
            }
        }
    }

    /// Total number of records across all leaf buckets.
    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.members.len()).sum()
    }
}

/// Stringifies a group value. Null, and values whose text is empty, key as
/// `"null"`.
pub fn group_key(value: &Value) -> String {
    if value.is_null() {
        return NULL_KEY.to_string();
    }
    let text = value.to_text();
    if text.is_empty() {
        NULL_KEY.to_string()
    } else {
        text
    }
}

/// Partitions `records` by `fields` (outermost first).
///
/// With no fields the result is a single `"all"` bucket holding every record.
pub fn group<'a, R, F>(records: &'a [R], fields: &[F]) -> GroupedPartition<'a>
where
    R: Borrow<Record>,
    F: AsRef<str>,
{
    let members: Vec<&'a Record> = records.iter().map(Borrow::borrow).collect();
    partition(members, fields)
}

/// Same as `group`, for rows that are already references (e.g. sorted rows).
pub fn group_rows<'a, F: AsRef<str>>(rows: &[&'a Record], fields: &[F]) -> GroupedPartition<'a> {
    partition(rows.to_vec(), fields)
}

fn partition<'a, F: AsRef<str>>(members: Vec<&'a Record>, fields: &[F]) -> GroupedPartition<'a> {
    let Some((first, rest)) = fields.split_first() else {
        return GroupedPartition {
            field: None,
            buckets: vec![GroupBucket {
                key: UNGROUPED_KEY.to_string(),
                members,
                subgroups: None,
            }],
        };
    };
    let field = first.as_ref();

    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut buckets: Vec<GroupBucket<'a>> = Vec::new();

    for record in members {
        let key = group_key(resolve(record, field));
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(GroupBucket {
                    key,
                    members: Vec::new(),
                    subgroups: None,
                });
                buckets.len() - 1
            }
        };
        buckets[slot].members.push(record);
    }

    if !rest.is_empty() {
        for bucket in &mut buckets {
            bucket.subgroups = Some(partition(bucket.members.clone(), rest));
        }
    }

    GroupedPartition {
        field: Some(field.to_string()),
        buckets,
    }
}
