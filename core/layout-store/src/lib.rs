//! FILENAME: core/layout-store/src/lib.rs
//! Grid Layout Store
//!
//! Named snapshots of a grid configuration (visible columns, column order,
//! sort, grouping), persisted as one JSON collection in a key-value store.

mod error;
mod layout;
mod manager;
mod store;

pub use error::{LayoutError, StoreError};
pub use layout::Layout;
pub use manager::{LayoutManager, DEFAULT_COLLECTION_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
