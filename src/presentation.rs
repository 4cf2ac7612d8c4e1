//! The seam between the player state machine and whatever renders and plays
//! media.
//!
//! The session never talks to rodio, ratatui or D-Bus directly; it emits
//! through this trait. The runtime implements it with the audio thread plus
//! a `ViewState` the TUI renderer reads; tests implement it with a
//! recording fake.

use std::path::{Path, PathBuf};

pub trait Presentation {
    /// Load the media at `path` and start playing it immediately.
    fn load_and_play(&mut self, path: &Path);
    /// Pause the current track, keeping its position.
    fn pause(&mut self);
    /// Resume the paused track.
    fn resume(&mut self);
    /// Mirror of the repeat flag: loop the current track when it ends.
    fn set_loop(&mut self, enabled: bool);
    /// Replace the rendered track list (working order).
    fn render_list(&mut self, names: &[String]);
    /// Update the now-playing line.
    fn render_now_playing(&mut self, name: &str);
    /// Update the album-art display; `None` clears it.
    fn render_album_art(&mut self, art: Option<&Path>);
}

/// What the presentation last rendered, as plain data.
///
/// The ratatui draw function reads this every frame instead of re-deriving
/// it from the session, which keeps rendering a pure function of state.
#[derive(Debug, Default, Clone)]
pub struct ViewState {
    pub list: Vec<String>,
    pub now_playing: Option<String>,
    pub album_art: Option<PathBuf>,
}
