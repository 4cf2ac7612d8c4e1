//! Audio playback subsystem.
//!
//! Playback runs on a dedicated thread that owns the rodio output stream;
//! the rest of the program talks to it through `AudioCmd`s and observes it
//! through the shared `PlaybackHandle`.

mod player;
mod sink;
mod thread;
mod types;

pub use player::*;
pub use types::*;
