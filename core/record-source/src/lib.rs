//! FILENAME: core/record-source/src/lib.rs
//! Record sources for the data grid.
//!
//! Fetching is the only asynchronous step in the grid's life: a host awaits
//! a `RecordSource`, then works with the records synchronously.

mod error;
mod filter;
mod memory;
mod source;

pub use error::SourceError;
pub use filter::FilterCriteria;
pub use memory::InMemoryRecordSource;
pub use source::RecordSource;
