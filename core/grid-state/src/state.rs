//! FILENAME: core/grid-state/src/state.rs
//! PURPOSE: One live grid instance.
//! CONTEXT: `GridState` owns the active configuration (visible columns,
//! column order, sort, grouping) and the group expansion set. Every
//! configuration change goes through a method here, is validated against
//! the column set, and, if it changed anything, is reported to the
//! optional change listener with a full layout snapshot.
//!
//! Nothing is persisted implicitly; saving is an explicit `save_layout`.

use grid_engine::{
    derive_view, log_debug, log_info, log_warn, resolve, ColumnDescriptor, ColumnSet, DisplayRow,
    DragColumnEvent, ExpansionSet, GridView, Record, SortIndicator, ViewConfig,
};
use layout_store::{KeyValueStore, Layout, LayoutManager};

use crate::error::GridError;
use crate::options::GridOptions;

/// Callback invoked after every effective configuration change.
pub type ChangeListener = Box<dyn FnMut(&Layout)>;

/// Result of `GridState::load_layout`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The layout was found and is now the active configuration.
    Applied(Layout),
    /// No saved layout has the id; the active configuration is unchanged.
    NotFound,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied(_))
    }
}

pub struct GridState<S> {
    columns: ColumnSet,
    key_field: String,
    config: ViewConfig,
    expansion: ExpansionSet,
    layouts: LayoutManager<S>,
    on_change: Option<ChangeListener>,
}

impl<S: KeyValueStore> GridState<S> {
    /// Builds the instance from host options. Fails on duplicate column
    /// fields. The default layout, if any, is sanitized against the columns.
    pub fn new(options: GridOptions, store: S) -> Result<Self, GridError> {
        let GridOptions {
            columns,
            key_field,
            default_layout,
            storage_key,
        } = options;

        let columns = ColumnSet::try_new(columns).map_err(|e| {
            log_warn!("GRID", "rejected column set: {}", e);
            GridError::from(e)
        })?;

        let config = match default_layout {
            Some(layout) => {
                let mut config = layout.config;
                let dropped = config.sanitize(&columns);
                if !dropped.is_empty() {
                    log_warn!("GRID", "default layout dropped fields {:?}", dropped);
                }
                config
            }
            None => ViewConfig::defaults_for(&columns),
        };

        log_info!(
            "GRID",
            "created columns={} visible={} sort_keys={} group_levels={}",
            columns.len(),
            config.visible_columns.len(),
            config.sort.len(),
            config.group_by.len()
        );

        Ok(GridState {
            columns,
            key_field,
            config,
            expansion: ExpansionSet::new(),
            layouts: LayoutManager::with_collection_key(store, storage_key),
            on_change: None,
        })
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_on_change(&mut self, listener: impl FnMut(&Layout) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn with_on_change(mut self, listener: impl FnMut(&Layout) + 'static) -> Self {
        self.set_on_change(listener);
        self
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    pub fn layouts(&self) -> &LayoutManager<S> {
        &self.layouts
    }

    /// Row key of `record` (the key field rendered as text).
    pub fn row_key(&self, record: &Record) -> String {
        resolve(record, &self.key_field).to_text()
    }

    /// Header indicator for `field`: direction and 1-based priority.
    pub fn sort_indicator(&self, field: &str) -> Option<SortIndicator> {
        self.config.sort.indicator(field)
    }

    // ========================================================================
    // CONFIGURATION CHANGES
    // ========================================================================

    /// Shows or hides a column. Returns true if it is now visible.
    pub fn toggle_column_visibility(&mut self, field: &str) -> Result<bool, GridError> {
        self.require_column(field)?;
        let visible = self.config.visible_columns.toggle(field);
        log_debug!("GRID", "visibility field={} visible={}", field, visible);
        self.notify();
        Ok(visible)
    }

    /// Cycles `field` through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, field: &str) -> Result<(), GridError> {
        let sortable = self.require_column(field)?.sortable;
        if !sortable {
            log_warn!("GRID", "sort rejected: {} is not sortable", field);
            return Err(GridError::NotSortable(field.to_string()));
        }
        self.config.sort.toggle(field);
        log_debug!(
            "GRID",
            "sort field={} now={:?}",
            field,
            self.config.sort.direction_of(field)
        );
        self.notify();
        Ok(())
    }

    /// Adds `field` as the innermost group level, or removes it.
    /// Group paths change meaning, so every group collapses.
    pub fn toggle_group_by(&mut self, field: &str) -> Result<(), GridError> {
        let groupable = self.require_column(field)?.groupable;
        if !groupable {
            log_warn!("GRID", "group rejected: {} is not groupable", field);
            return Err(GridError::NotGroupable(field.to_string()));
        }
        self.config.group_by.toggle(field);
        self.expansion.collapse_all();
        log_debug!("GRID", "group_by now={:?}", self.config.group_by.fields());
        self.notify();
        Ok(())
    }

    /// Moves `source` to `target`'s position. Returns whether the order
    /// changed (false when source and target are the same column).
    pub fn reorder_columns(&mut self, source: &str, target: &str) -> Result<bool, GridError> {
        self.require_column(source)?;
        self.require_column(target)?;

        let moved = self.config.column_order.move_field(source, target);
        if moved {
            log_debug!("GRID", "reorder {} -> {}", source, target);
            self.notify();
        }
        Ok(moved)
    }

    pub fn handle_drag(&mut self, event: &DragColumnEvent) -> Result<bool, GridError> {
        self.reorder_columns(&event.source, &event.target)
    }

    /// Opens or closes the group at `path` (e.g. "female/NY"). Expansion is
    /// not part of a layout, so the change listener is not called.
    pub fn toggle_group_expansion(&mut self, path: &str) -> bool {
        self.expansion.toggle(path)
    }

    // ========================================================================
    // VIEW
    // ========================================================================

    /// Unsaved snapshot of the active configuration.
    pub fn current_layout(&self) -> Layout {
        LayoutManager::<S>::snapshot(&self.config)
    }

    /// Derives the view of `records` under the active configuration.
    pub fn view<'a, R>(&'a self, records: &'a [R]) -> GridView<'a>
    where
        R: std::borrow::Borrow<Record>,
    {
        derive_view(records, &self.columns, &self.config)
    }

    /// Body lines of `records`, honoring the expansion set.
    pub fn display_rows<'a, R>(&'a self, records: &'a [R]) -> Vec<DisplayRow<'a>>
    where
        R: std::borrow::Borrow<Record>,
    {
        self.view(records).display_rows(&self.expansion)
    }

    // ========================================================================
    // LAYOUTS
    // ========================================================================

    pub fn save_layout(&self, name: &str) -> Result<Layout, GridError> {
        Ok(self.layouts.save(&self.current_layout(), name)?)
    }

    pub fn saved_layouts(&self) -> Result<Vec<Layout>, GridError> {
        Ok(self.layouts.list()?)
    }

    /// Replaces the active configuration with a saved layout. A miss
    /// leaves everything untouched.
    pub fn load_layout(&mut self, id: &str) -> Result<LoadOutcome, GridError> {
        let Some(layout) = self.layouts.load(id)? else {
            return Ok(LoadOutcome::NotFound);
        };

        let mut config = layout.config.clone();
        let dropped = config.sanitize(&self.columns);
        if !dropped.is_empty() {
            log_warn!("GRID", "layout {} dropped fields {:?}", id, dropped);
        }

        self.config = config;
        self.expansion.collapse_all();
        self.notify();
        Ok(LoadOutcome::Applied(layout))
    }

    /// Overwrites a saved layout with the active configuration.
    pub fn resave_layout(&self, id: &str) -> Result<Option<Layout>, GridError> {
        Ok(self.layouts.resave(id, &self.config)?)
    }

    pub fn delete_layout(&self, id: &str) -> Result<bool, GridError> {
        Ok(self.layouts.delete(id)?)
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn require_column(&self, field: &str) -> Result<&ColumnDescriptor, GridError> {
        self.columns.get(field).ok_or_else(|| {
            log_warn!("GRID", "unknown column {}", field);
            GridError::UnknownColumn(field.to_string())
        })
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            let layout = Layout::from(self.config.clone());
            listener(&layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_engine::SortDirection;
    use layout_store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options() -> GridOptions {
        GridOptions::new(vec![
            ColumnDescriptor::new("id", "ID").groupable(false),
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::new("age", "Age"),
            ColumnDescriptor::new("city", "City"),
            ColumnDescriptor::new("joined", "Join Date").groupable(false),
            ColumnDescriptor::new("notes", "Notes").sortable(false).hidden(),
        ])
    }

    fn grid() -> GridState<MemoryStore> {
        GridState::new(options(), MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let grid = grid();
        let config = grid.config();
        assert_eq!(config.visible_columns.len(), 5);
        assert!(!config.visible_columns.contains("notes"));
        assert!(config.sort.is_empty());
        assert!(config.group_by.is_empty());
        assert_eq!(
            config.column_order.fields(),
            ["id", "name", "age", "city", "joined", "notes"]
        );
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let mut opts = options();
        opts.columns.push(ColumnDescriptor::new("age", "Age again"));
        match GridState::new(opts, MemoryStore::new()) {
            Err(GridError::DuplicateColumn(field)) => assert_eq!(field, "age"),
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("duplicate columns accepted"),
        }
    }

    #[test]
    fn test_default_layout_is_sanitized() {
        let default = Layout::from(ViewConfig {
            visible_columns: ["name", "ghost"].into_iter().collect(),
            column_order: grid_engine::ColumnOrder::from_fields(["city", "name"]),
            sort: grid_engine::SortConfig::from_keys([grid_engine::SortKey::descending("age")]),
            group_by: grid_engine::GroupSpec::from_fields(["city"]),
        });
        let grid = GridState::new(options().with_default_layout(default), MemoryStore::new())
            .unwrap();

        let config = grid.config();
        assert_eq!(config.visible_columns.iter().collect::<Vec<_>>(), ["name"]);
        assert_eq!(
            config.column_order.fields(),
            ["city", "name", "id", "age", "joined", "notes"]
        );
        assert_eq!(config.sort.direction_of("age"), Some(SortDirection::Descending));
        assert_eq!(config.group_by.fields(), ["city"]);
    }

    #[test]
    fn test_boundary_validation_leaves_state_untouched() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut grid = grid().with_on_change(move |_| *counter.borrow_mut() += 1);
        let before = grid.config().clone();

        assert!(matches!(
            grid.toggle_column_visibility("ghost"),
            Err(GridError::UnknownColumn(_))
        ));
        assert!(matches!(grid.toggle_sort("notes"), Err(GridError::NotSortable(_))));
        assert!(matches!(grid.toggle_group_by("id"), Err(GridError::NotGroupable(_))));
        assert!(matches!(
            grid.reorder_columns("name", "ghost"),
            Err(GridError::UnknownColumn(_))
        ));

        assert_eq!(grid.config(), &before);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_listener_sees_every_change() {
        let seen: Rc<RefCell<Vec<Layout>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut grid = grid().with_on_change(move |layout| sink.borrow_mut().push(layout.clone()));

        grid.toggle_column_visibility("age").unwrap();
        grid.toggle_sort("name").unwrap();
        grid.toggle_group_by("city").unwrap();
        assert!(grid.reorder_columns("city", "id").unwrap());
        assert!(!grid.reorder_columns("city", "city").unwrap());
        grid.toggle_group_expansion("Boston");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        let last = seen.last().unwrap();
        assert!(last.id.is_none());
        assert!(!last.config.visible_columns.contains("age"));
        assert_eq!(last.config.sort.direction_of("name"), Some(SortDirection::Ascending));
        assert_eq!(last.config.group_by.fields(), ["city"]);
        assert_eq!(last.config.column_order.fields()[0], "city");
        assert_eq!(last, &grid.current_layout());
    }

    #[test]
    fn test_sort_indicator() {
        let mut grid = grid();
        grid.toggle_sort("age").unwrap();
        grid.toggle_sort("name").unwrap();
        grid.toggle_sort("name").unwrap();

        let indicator = grid.sort_indicator("name").unwrap();
        assert_eq!(indicator.priority, 2);
        assert_eq!(indicator.direction, SortDirection::Descending);
        assert_eq!(grid.sort_indicator("city"), None);
    }

    #[test]
    fn test_grouping_change_collapses_groups() {
        let mut grid = grid();
        grid.toggle_group_by("city").unwrap();
        assert!(grid.toggle_group_expansion("Boston"));
        grid.toggle_group_by("age").unwrap();
        assert!(grid.expansion().is_empty());
    }

    #[test]
    fn test_load_miss_keeps_state_and_skips_listener() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut grid = grid().with_on_change(move |_| *counter.borrow_mut() += 1);
        grid.toggle_sort("age").unwrap();
        let before = grid.config().clone();

        assert_eq!(grid.load_layout("does-not-exist").unwrap(), LoadOutcome::NotFound);
        assert_eq!(grid.config(), &before);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_row_key() {
        let grid = grid();
        let record = Record::new().with("id", 42).with("name", "Ann");
        assert_eq!(grid.row_key(&record), "42");
    }
}
