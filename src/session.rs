//! Player session: the single owner of playlist, registry and playback
//! state, and the state machine behind every transport command.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
