//! Playlist model: the append-only `original` ordering and the `working`
//! ordering playback actually follows.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
