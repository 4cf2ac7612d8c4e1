//! Track library: the folder scanner and the `Track` model.
//!
//! Scanning is flat (no recursion into subdirectories) and tolerant: a
//! registered folder that no longer exists simply yields no tracks.

mod model;
mod scan;

pub use model::*;
pub use scan::*;
