use std::path::Path;

use crate::audio::{AudioCmd, AudioPlayer, PlaybackHandle};
use crate::presentation::{Presentation, ViewState};

/// The production `Presentation`: transport goes to the audio thread,
/// rendering updates the `ViewState` the ratatui draw function reads.
pub struct TuiSurface<'a> {
    audio: &'a AudioPlayer,
    pub view: ViewState,
}

impl<'a> TuiSurface<'a> {
    pub fn new(audio: &'a AudioPlayer) -> Self {
        Self {
            audio,
            view: ViewState::default(),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.audio.playback_handle()
    }
}

impl Presentation for TuiSurface<'_> {
    fn load_and_play(&mut self, path: &Path) {
        let _ = self.audio.send(AudioCmd::Load(path.to_path_buf()));
    }

    fn pause(&mut self) {
        let _ = self.audio.send(AudioCmd::Pause);
    }

    fn resume(&mut self) {
        let _ = self.audio.send(AudioCmd::Resume);
    }

    fn set_loop(&mut self, enabled: bool) {
        let _ = self.audio.send(AudioCmd::SetLoop(enabled));
    }

    fn render_list(&mut self, names: &[String]) {
        self.view.list = names.to_vec();
    }

    fn render_now_playing(&mut self, name: &str) {
        self.view.now_playing = Some(name.to_string());
    }

    fn render_album_art(&mut self, art: Option<&Path>) {
        self.view.album_art = art.map(Path::to_path_buf);
    }
}
