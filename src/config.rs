//! Configuration loader and schema types.
//!
//! Configuration covers presentation ambience only (header text, fade-out on
//! quit). Playback modes always start off and the folder list lives in the
//! registry store, not here.

mod load;
mod schema;

pub use load::*;
pub use schema::*;

#[cfg(test)]
mod tests;
