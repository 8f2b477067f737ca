//! FILENAME: core/record-source/src/source.rs
//! PURPOSE: The asynchronous boundary between the grid and its data.
//! CONTEXT: The grid itself never awaits. Hosts fetch records through a
//! `RecordSource`, then hand the resulting `Vec<Record>` to the grid.

use async_trait::async_trait;
use grid_engine::Record;

use crate::error::SourceError;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Every record, in source order.
    async fn get_all(&self) -> Result<Vec<Record>, SourceError>;

    /// The record whose key field renders as `id`, if any.
    async fn get_by_id(&self, id: &str) -> Result<Option<Record>, SourceError>;

    /// Records where any searchable field contains `query`, ignoring case.
    async fn search(&self, query: &str) -> Result<Vec<Record>, SourceError>;
}
