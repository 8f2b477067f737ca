//! FILENAME: core/record-source/src/memory.rs
//! PURPOSE: A record source over records held in memory.
//! CONTEXT: Used by hosts that already have their data (fixtures, a JSON
//! payload embedded in the page) and by tests. Besides the `RecordSource`
//! operations it offers ad hoc `sort`, `filter` and `group` helpers with the
//! same semantics the grid uses.

use async_trait::async_trait;
use grid_engine::{group, log_debug, resolve, sorted, GroupedPartition, Record, SortConfig, Value};

use crate::error::SourceError;
use crate::filter::FilterCriteria;
use crate::source::RecordSource;

#[derive(Debug, Clone)]
pub struct InMemoryRecordSource {
    records: Vec<Record>,
    key_field: String,
    search_fields: Vec<String>,
}

impl InMemoryRecordSource {
    /// Key field `"id"`; searches every top-level text field.
    pub fn new(records: Vec<Record>) -> Self {
        InMemoryRecordSource {
            records,
            key_field: "id".to_string(),
            search_fields: Vec::new(),
        }
    }

    /// Parses a JSON array of record objects.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    /// Restricts `search` to these field paths.
    pub fn with_search_fields<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========================================================================
    // AD HOC HELPERS
    // ========================================================================

    /// Copy of `records` in `criteria` order (stable).
    pub fn sort(&self, records: &[Record], criteria: &SortConfig) -> Vec<Record> {
        sorted(records, criteria).into_iter().cloned().collect()
    }

    /// Records passing every criterion, in input order.
    pub fn filter(&self, records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
        records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect()
    }

    /// Hierarchical partition of `records` by `group_by`.
    pub fn group<'a, F: AsRef<str>>(
        &self,
        records: &'a [Record],
        group_by: &[F],
    ) -> GroupedPartition<'a> {
        group(records, group_by)
    }

    fn matches_query(&self, record: &Record, needle: &str) -> bool {
        let contains = |value: &Value| match value {
            Value::String(s) => s.to_lowercase().contains(needle),
            _ => false,
        };
        if self.search_fields.is_empty() {
            record.fields().values().any(contains)
        } else {
            self.search_fields
                .iter()
                .any(|field| contains(resolve(record, field)))
        }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn get_all(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Record>, SourceError> {
        let found = self
            .records
            .iter()
            .find(|record| {
                let key = resolve(record, &self.key_field);
                !key.is_null() && key.to_text() == id
            })
            .cloned();
        log_debug!("SOURCE", "get_by_id id={} found={}", id, found.is_some());
        Ok(found)
    }

    async fn search(&self, query: &str) -> Result<Vec<Record>, SourceError> {
        let needle = query.to_lowercase();
        let hits: Vec<Record> = self
            .records
            .iter()
            .filter(|record| self.matches_query(record, &needle))
            .cloned()
            .collect();
        log_debug!("SOURCE", "search query={:?} hits={}", query, hits.len());
        Ok(hits)
    }
}
