use rand::seq::SliceRandom;

use crate::library::Track;

/// Two views over the same logical track collection.
///
/// `original` holds tracks in discovery order (folders in registry order,
/// file-name order within a folder) and is only ever appended to. `working`
/// is the order playback follows: equal to `original`, or a uniformly random
/// permutation of it while shuffle is active. The two always have the same
/// length and the same multiset of tracks.
#[derive(Debug, Default)]
pub struct Playlist {
    original: Vec<Track>,
    working: Vec<Track>,
    shuffled: bool,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend `original` with newly scanned tracks, in the order given.
    ///
    /// When shuffle is off, `working` is rebuilt as a full copy of
    /// `original`, so new tracks land at the end in scan order. When shuffle
    /// is on, the enlarged set is re-shuffled wholesale; a partial shuffle
    /// of only the new tail would stop being a uniform permutation.
    pub fn append(&mut self, tracks: Vec<Track>) {
        self.original.extend(tracks);
        self.rebuild_working();
    }

    /// Turn shuffle on (fresh random permutation of `original`) or off
    /// (`working` reset to `original`).
    ///
    /// The session layer pairs either transition with a restart of playback
    /// at index 0; this model only maintains the orderings.
    pub fn set_shuffled(&mut self, enabled: bool) {
        self.shuffled = enabled;
        self.rebuild_working();
    }

    fn rebuild_working(&mut self) {
        self.working = self.original.clone();
        if self.shuffled {
            self.working.shuffle(&mut rand::rng());
        }
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Track at `index` in the working ordering.
    pub fn at(&self, index: usize) -> Option<&Track> {
        self.working.get(index)
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Display names in working order, for list rendering.
    pub fn names(&self) -> Vec<String> {
        self.working.iter().map(|t| t.display.clone()).collect()
    }

    pub fn original(&self) -> &[Track] {
        &self.original
    }

    pub fn working(&self) -> &[Track] {
        &self.working
    }
}
