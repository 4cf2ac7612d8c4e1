//! Folder registry: the remembered set of music folders and its on-disk
//! store.
//!
//! The registry is loaded once at startup and appended to when the user
//! picks a new folder; every successful addition is persisted right away.

mod model;
mod store;

pub use model::*;
pub use store::*;
