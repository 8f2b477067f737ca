//! FILENAME: core/grid-state/src/error.rs

use grid_engine::DuplicateColumn;
use layout_store::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Duplicate column field: {0}")]
    DuplicateColumn(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column is not sortable: {0}")]
    NotSortable(String),

    #[error("Column is not groupable: {0}")]
    NotGroupable(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid grid options: {0}")]
    Options(#[from] serde_json::Error),
}

impl From<DuplicateColumn> for GridError {
    fn from(err: DuplicateColumn) -> Self {
        GridError::DuplicateColumn(err.0)
    }
}
