//! FILENAME: core/record-source/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The backing service could not be reached. Remote sources report
    /// transport failures with this; the grid keeps its current records.
    #[error("Record source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid record data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
