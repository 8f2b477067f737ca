//! FILENAME: core/layout-store/src/manager.rs
//! PURPOSE: Save, list, load, re-save and delete named layouts.
//! CONTEXT: The whole collection is one JSON array stored under a single
//! collection key. Every mutation is read-modify-write of that array, so
//! two managers sharing a store follow last-writer-wins semantics.
//!
//! Reading is tolerant: a missing key or a payload that is not an array is
//! an empty collection, and individual entries that fail to parse are
//! skipped (with a warning) rather than poisoning the list. Mutations work
//! on the raw array, so entries this version cannot parse survive a save.

use grid_engine::{log_debug, log_error, log_info, log_warn, ViewConfig};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::LayoutError;
use crate::layout::Layout;
use crate::store::KeyValueStore;

/// Collection key used when the host does not configure one.
pub const DEFAULT_COLLECTION_KEY: &str = "dataGridLayouts";

const ID_PREFIX: &str = "layout-";

pub struct LayoutManager<S> {
    store: S,
    collection_key: String,
}

impl<S: KeyValueStore> LayoutManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_collection_key(store, DEFAULT_COLLECTION_KEY)
    }

    pub fn with_collection_key(store: S, collection_key: impl Into<String>) -> Self {
        LayoutManager {
            store,
            collection_key: collection_key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    /// Unsaved layout of `config`.
    pub fn snapshot(config: &ViewConfig) -> Layout {
        Layout::from(config.clone())
    }

    /// Persists `layout` under a fresh id and the given name and returns the
    /// saved copy. Any id or name already on `layout` is replaced.
    pub fn save(&self, layout: &Layout, name: &str) -> Result<Layout, LayoutError> {
        let name = name.trim();
        if name.is_empty() {
            log_warn!("LAYOUT", "save rejected: empty name");
            return Err(LayoutError::EmptyName);
        }

        let mut entries = self.read_raw()?;
        let id = fresh_id(&entries);

        let saved = Layout {
            id: Some(id),
            name: Some(name.to_string()),
            config: layout.config.clone(),
        };
        entries.push(serde_json::to_value(&saved)?);
        self.write_raw(&entries)?;

        log_info!(
            "LAYOUT",
            "saved id={} name={:?} total={}",
            saved.id().unwrap_or_default(),
            name,
            entries.len()
        );
        Ok(saved)
    }

    /// All saved layouts in save order.
    pub fn list(&self) -> Result<Vec<Layout>, LayoutError> {
        let entries = self.read_raw()?;
        let layouts: Vec<Layout> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| match serde_json::from_value::<Layout>(entry) {
                Ok(layout) => Some(layout),
                Err(e) => {
                    log_warn!("LAYOUT", "skipping malformed layout at index {}: {}", idx, e);
                    None
                }
            })
            .collect();
        log_debug!("LAYOUT", "list count={}", layouts.len());
        Ok(layouts)
    }

    /// Looks up a saved layout. `Ok(None)` when no layout has this id.
    pub fn load(&self, id: &str) -> Result<Option<Layout>, LayoutError> {
        let found = self.list()?.into_iter().find(|l| l.id() == Some(id));
        match &found {
            Some(layout) => log_info!(
                "LAYOUT",
                "load id={} name={:?}",
                id,
                layout.name().unwrap_or_default()
            ),
            None => log_info!("LAYOUT", "load miss id={}", id),
        }
        Ok(found)
    }

    /// Replaces the configuration of an existing layout, keeping its id,
    /// name and position. `Ok(None)` when no layout has this id.
    pub fn resave(&self, id: &str, config: &ViewConfig) -> Result<Option<Layout>, LayoutError> {
        let mut entries = self.read_raw()?;
        let Some(idx) = position_of(&entries, id) else {
            log_info!("LAYOUT", "resave miss id={}", id);
            return Ok(None);
        };

        let name = entries[idx]
            .get("name")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        let updated = Layout {
            id: Some(id.to_string()),
            name,
            config: config.clone(),
        };
        entries[idx] = serde_json::to_value(&updated)?;
        self.write_raw(&entries)?;

        log_info!("LAYOUT", "resaved id={}", id);
        Ok(Some(updated))
    }

    /// Removes a saved layout. Returns whether one was removed.
    pub fn delete(&self, id: &str) -> Result<bool, LayoutError> {
        let mut entries = self.read_raw()?;
        let Some(idx) = position_of(&entries, id) else {
            log_info!("LAYOUT", "delete miss id={}", id);
            return Ok(false);
        };
        entries.remove(idx);
        self.write_raw(&entries)?;

        log_info!("LAYOUT", "deleted id={} remaining={}", id, entries.len());
        Ok(true)
    }

    fn read_raw(&self) -> Result<Vec<JsonValue>, LayoutError> {
        let Some(text) = self.store.get(&self.collection_key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<JsonValue>(&text) {
            Ok(JsonValue::Array(entries)) => Ok(entries),
            Ok(other) => {
                log_warn!(
                    "LAYOUT",
                    "collection {} is not an array (found {}); treating as empty",
                    self.collection_key,
                    json_kind(&other)
                );
                Ok(Vec::new())
            }
            Err(e) => {
                log_warn!(
                    "LAYOUT",
                    "collection {} is not valid JSON ({}); treating as empty",
                    self.collection_key,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_raw(&self, entries: &[JsonValue]) -> Result<(), LayoutError> {
        let text = serde_json::to_string(entries)?;
        self.store.set(&self.collection_key, &text).map_err(|e| {
            log_error!("LAYOUT", "writing collection {} failed: {}", self.collection_key, e);
            LayoutError::from(e)
        })
    }
}

fn entry_id(entry: &JsonValue) -> Option<&str> {
    entry.get("id").and_then(JsonValue::as_str)
}

fn position_of(entries: &[JsonValue], id: &str) -> Option<usize> {
    entries.iter().position(|entry| entry_id(entry) == Some(id))
}

fn fresh_id(entries: &[JsonValue]) -> String {
    loop {
        let id = format!("{}{}", ID_PREFIX, Uuid::new_v4());
        if position_of(entries, &id).is_none() {
            return id;
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
