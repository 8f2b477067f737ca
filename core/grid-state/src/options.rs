//! FILENAME: core/grid-state/src/options.rs
//! PURPOSE: Host-supplied grid configuration.
//! CONTEXT: Hosts either build `GridOptions` in code or hand over a JSON
//! document (`from_json`) with the same camelCase shape the layouts use.

use grid_engine::ColumnDescriptor;
use layout_store::{Layout, DEFAULT_COLLECTION_KEY};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

fn default_key_field() -> String {
    "id".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_COLLECTION_KEY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,

    /// Record field holding the unique row key.
    #[serde(default = "default_key_field")]
    pub key_field: String,

    /// Starting configuration. Only its visibility, order, sort and
    /// grouping are used; id and name are ignored.
    #[serde(default)]
    pub default_layout: Option<Layout>,

    /// Store key under which saved layouts are kept.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            columns: Vec::new(),
            key_field: default_key_field(),
            default_layout: None,
            storage_key: default_storage_key(),
        }
    }
}

impl GridOptions {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        GridOptions {
            columns,
            ..Default::default()
        }
    }

    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn with_default_layout(mut self, layout: Layout) -> Self {
        self.default_layout = Some(layout);
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }
}
