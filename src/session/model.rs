use std::path::{Path, PathBuf};

use crate::library::{self, Track};
use crate::playlist::Playlist;
use crate::presentation::Presentation;
use crate::registry::{self, FolderRegistry};

/// The transport state of the session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Owns the playlist, the folder registry and the playback cursor.
///
/// Every mutation happens through a method taking the `Presentation`
/// collaborator, so the session stays a plain single-threaded state machine
/// with no ambient globals.
pub struct PlayerSession {
    pub playlist: Playlist,
    pub registry: FolderRegistry,
    /// Index into the working ordering; `None` means nothing selected yet.
    pub current: Option<usize>,
    pub repeat: bool,
    pub playback: PlaybackState,

    /// Where `register_folder` persists the registry; `None` disables
    /// persistence (no resolvable config location).
    state_path: Option<PathBuf>,
}

impl PlayerSession {
    pub fn new(registry: FolderRegistry, state_path: Option<PathBuf>) -> Self {
        Self {
            playlist: Playlist::new(),
            registry,
            current: None,
            repeat: false,
            playback: PlaybackState::default(),
            state_path,
        }
    }

    /// Scan every registered folder, in registry order, into the playlist.
    ///
    /// Startup restore: registry order, not original arrival order, decides
    /// the initial `original` ordering.
    pub fn load_registered(&mut self, present: &mut dyn Presentation) {
        let folders: Vec<PathBuf> = self.registry.folders().to_vec();
        for folder in folders {
            let tracks = library::scan(&folder);
            tracing::info!(folder = %folder.display(), tracks = tracks.len(), "restored folder");
            self.playlist.append(tracks);
        }
        present.render_list(&self.playlist.names());
    }

    /// Register a newly picked folder, persist the registry and scan the
    /// folder into the playlist.
    ///
    /// Returns `false` for an already-registered path; the duplicate is not
    /// scanned again and the persisted state is untouched.
    pub fn register_folder(&mut self, path: &Path, present: &mut dyn Presentation) -> bool {
        if !self.registry.register(path) {
            tracing::debug!(folder = %path.display(), "folder already registered");
            return false;
        }

        if let Some(state_path) = &self.state_path {
            if let Err(e) = registry::save(state_path, &self.registry) {
                // Persistence failures must not abort registration.
                tracing::warn!(error = %e, "could not persist folder registry");
            }
        }

        let tracks = library::scan(path);
        tracing::info!(folder = %path.display(), tracks = tracks.len(), "registered folder");
        self.playlist.append(tracks);
        present.render_list(&self.playlist.names());
        true
    }

    /// Select the track at `index` in the working ordering and start playing
    /// it. Out-of-range indices are no-ops.
    pub fn select(&mut self, index: usize, present: &mut dyn Presentation) {
        let Some(track) = self.playlist.at(index) else {
            return;
        };
        let (path, display, art) = (track.path.clone(), track.display.clone(), track.album_art.clone());

        self.current = Some(index);
        self.playback = PlaybackState::Playing;
        present.load_and_play(&path);
        present.render_now_playing(&display);
        present.render_album_art(art.as_deref());
    }

    /// Advance to the next track, wrapping at the end.
    ///
    /// Wraps unconditionally; the repeat flag only loops the current track
    /// on the media surface and never affects manual navigation.
    pub fn next(&mut self, present: &mut dyn Presentation) {
        self.step(1, present);
    }

    /// Go back one track, wrapping at the start.
    pub fn previous(&mut self, present: &mut dyn Presentation) {
        self.step(-1, present);
    }

    fn step(&mut self, delta: i64, present: &mut dyn Presentation) {
        let len = self.playlist.len() as i64;
        if len == 0 {
            return;
        }

        // "Nothing selected" behaves as index -1: the first `next` lands on
        // 0. rem_euclid keeps the result in range for every combination of
        // cursor and delta.
        let cursor = self.current.map(|i| i as i64).unwrap_or(-1);
        let index = (cursor + delta).rem_euclid(len) as usize;
        self.select(index, present);
    }

    /// Resume playback; a no-op until something has been selected.
    pub fn play(&mut self, present: &mut dyn Presentation) {
        if self.current.is_none() {
            return;
        }
        self.playback = PlaybackState::Playing;
        present.resume();
    }

    /// Pause playback; a no-op until something has been selected.
    pub fn pause(&mut self, present: &mut dyn Presentation) {
        if self.current.is_none() {
            return;
        }
        self.playback = PlaybackState::Paused;
        present.pause();
    }

    /// Flip the repeat flag and mirror it onto the media surface's loop
    /// flag. Does not touch `next`/`previous` wraparound.
    pub fn toggle_repeat(&mut self, present: &mut dyn Presentation) {
        self.repeat = !self.repeat;
        present.set_loop(self.repeat);
    }

    /// Toggle shuffle and restart playback from the top of the new working
    /// ordering. Both transitions restart at index 0; an empty playlist
    /// clears the selection instead.
    pub fn toggle_shuffle(&mut self, present: &mut dyn Presentation) {
        let enabled = !self.playlist.is_shuffled();
        self.playlist.set_shuffled(enabled);
        present.render_list(&self.playlist.names());

        if self.playlist.is_empty() {
            self.current = None;
        } else {
            self.select(0, present);
        }
    }

    pub fn is_shuffled(&self) -> bool {
        self.playlist.is_shuffled()
    }

    /// Currently selected track, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.playlist.at(i))
    }

    pub fn has_tracks(&self) -> bool {
        !self.playlist.is_empty()
    }
}
