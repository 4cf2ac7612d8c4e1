use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Handle to the audio thread: a command channel plus shared playback info.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, playback_info.clone());

        Self {
            tx,
            playback: playback_info,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the thread to fade out and stop, then wait for it to finish.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}
