use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;
        let mut current: Option<PathBuf> = None;
        let mut paused = true;
        let mut loop_enabled = false;

        // Track start time and accumulated elapsed when paused.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            sink.set_volume(1.0);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(1.0 - t);
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load(path) => {
                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }

                        match create_sink(&stream, &path) {
                            Ok(new_sink) => {
                                new_sink.set_volume(1.0);
                                new_sink.play();
                                sink = Some(new_sink);
                                current = Some(path);
                                paused = false;
                                started_at = Some(Instant::now());
                                accumulated = Duration::ZERO;
                                if let Ok(mut info) = playback_info.lock() {
                                    info.elapsed = Duration::ZERO;
                                    info.playing = true;
                                }
                            }
                            Err(e) => {
                                // Unplayable file: stay silent rather than crash.
                                tracing::warn!(error = %e, "could not play track");
                                sink = None;
                                current = None;
                                paused = true;
                                started_at = None;
                                accumulated = Duration::ZERO;
                                if let Ok(mut info) = playback_info.lock() {
                                    info.elapsed = Duration::ZERO;
                                    info.playing = false;
                                }
                            }
                        }
                    }

                    AudioCmd::Pause => {
                        if let Some(s) = sink.as_ref() {
                            if !paused {
                                s.pause();
                                if let Some(st) = started_at {
                                    accumulated += Instant::now() - st;
                                }
                                started_at = None;
                                paused = true;
                                if let Ok(mut info) = playback_info.lock() {
                                    info.playing = false;
                                }
                            }
                        }
                    }

                    AudioCmd::Resume => {
                        if let Some(s) = sink.as_ref() {
                            if paused {
                                s.play();
                                started_at = Some(Instant::now());
                                paused = false;
                                if let Ok(mut info) = playback_info.lock() {
                                    info.playing = true;
                                }
                            }
                        }
                    }

                    AudioCmd::SetLoop(enabled) => {
                        loop_enabled = enabled;
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            fade_out_sink(s, fade_out_ms);
                            s.stop();
                        }
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic upkeep: publish elapsed time, restart the track
                    // when it ends with looping on, mark it finished otherwise.
                    if let Some(ref s) = sink {
                        if !paused {
                            let elapsed =
                                accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                            if let Ok(mut info) = playback_info.lock() {
                                info.elapsed = elapsed;
                            }

                            if s.empty() {
                                if loop_enabled {
                                    if let Some(path) = current.clone() {
                                        match create_sink(&stream, &path) {
                                            Ok(new_sink) => {
                                                new_sink.play();
                                                sink = Some(new_sink);
                                                started_at = Some(Instant::now());
                                                accumulated = Duration::ZERO;
                                                if let Ok(mut info) = playback_info.lock() {
                                                    info.elapsed = Duration::ZERO;
                                                }
                                            }
                                            Err(e) => {
                                                tracing::warn!(error = %e, "could not loop track");
                                                sink = None;
                                                paused = true;
                                                if let Ok(mut info) = playback_info.lock() {
                                                    info.playing = false;
                                                }
                                            }
                                        }
                                    }
                                } else {
                                    // Track ran out; wait for the next Load.
                                    sink = None;
                                    paused = true;
                                    started_at = None;
                                    accumulated = Duration::ZERO;
                                    if let Ok(mut info) = playback_info.lock() {
                                        info.playing = false;
                                    }
                                }
                            }
                        }
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
