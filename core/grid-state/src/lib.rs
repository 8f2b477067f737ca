//! FILENAME: core/grid-state/src/lib.rs
//! PURPOSE: The stateful grid component.
//! CONTEXT: Ties the pure engine (`grid-engine`) to layout persistence
//! (`layout-store`). A host creates one `GridState` per grid on screen,
//! forwards header clicks, menu toggles and column drags to it, and asks it
//! for the derived view after each change.

mod error;
mod options;
mod state;

pub use error::GridError;
pub use options::GridOptions;
pub use state::{ChangeListener, GridState, LoadOutcome};
