//! FILENAME: core/layout-store/src/layout.rs
//! PURPOSE: The persisted layout record.
//! CONTEXT: A layout is a `ViewConfig` plus identity. Snapshots taken from
//! the live grid carry no id or name; `LayoutManager::save` assigns both.
//! The JSON shape is `{id, name, visibleColumns, columnOrder, sort, groupBy}`.

use grid_engine::{ColumnOrder, GroupSpec, SortConfig, ViewConfig, VisibleColumns};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub config: ViewConfig,
}

impl Layout {
    /// Unsaved layout capturing the given configuration.
    pub fn snapshot(
        visible_columns: VisibleColumns,
        column_order: ColumnOrder,
        sort: SortConfig,
        group_by: GroupSpec,
    ) -> Self {
        Layout {
            id: None,
            name: None,
            config: ViewConfig {
                visible_columns,
                column_order,
                sort,
                group_by,
            },
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

impl From<ViewConfig> for Layout {
    fn from(config: ViewConfig) -> Self {
        Layout {
            id: None,
            name: None,
            config,
        }
    }
}
