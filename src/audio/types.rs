//! Audio-related small types and handles.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Load the file at the given path and start playing it.
    Load(PathBuf),
    /// Pause the current track, keeping its position.
    Pause,
    /// Resume the paused track.
    Resume,
    /// Loop the current track when it reaches its end.
    SetLoop(bool),
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone, Default)]
pub struct PlaybackInfo {
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Whether playback is currently active.
    pub playing: bool,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
