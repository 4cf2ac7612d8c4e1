use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::AudioPlayer;
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::update_mpris;
use crate::runtime::surface::TuiSurface;
use crate::session::{PlaybackState, PlayerSession};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Highlighted row in the track list; independent of the playing track.
    pub cursor: usize,
    /// In-progress folder path while the add-folder prompt is open.
    pub prompt: Option<String>,
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Last-known playing index as emitted to MPRIS.
    pub last_mpris_index: Option<usize>,
    /// Last-known playback state as emitted to MPRIS.
    pub last_mpris_playback: PlaybackState,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `session`.
    pub fn new(session: &PlayerSession) -> Self {
        Self {
            cursor: 0,
            prompt: None,
            pending_gg: false,
            last_mpris_index: None,
            last_mpris_playback: session.playback,
        }
    }

    /// Keep the cursor inside the (possibly shrunken or reordered) list.
    fn clamp_cursor(&mut self, list_len: usize) {
        if list_len == 0 {
            self.cursor = 0;
        } else if self.cursor >= list_len {
            self.cursor = list_len - 1;
        }
    }
}

/// Main terminal event loop: handles input, UI drawing, sync with the audio
/// thread and MPRIS. Returns `Ok(())` when shutdown is requested.
#[allow(clippy::too_many_arguments)]
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    session: &mut PlayerSession,
    surface: &mut TuiSurface<'_>,
    audio_player: &AudioPlayer,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let playback_handle = surface.playback_handle();

    loop {
        // Sync transport state from the audio thread: the current track may
        // have ended on its own since the last iteration.
        if session.current.is_some() && session.playback != PlaybackState::Stopped {
            if let Ok(info) = playback_handle.lock() {
                session.playback = if info.playing {
                    PlaybackState::Playing
                } else {
                    PlaybackState::Paused
                };
            }
        }

        // Keep MPRIS in sync even when changes come from media keys.
        if session.current != state.last_mpris_index
            || session.playback != state.last_mpris_playback
        {
            update_mpris(mpris, session);
            state.last_mpris_index = session.current;
            state.last_mpris_playback = session.playback;
        }

        terminal.draw(|f| {
            ui::draw(
                f,
                session,
                &surface.view,
                &playback_handle,
                state.cursor,
                state.prompt.as_deref(),
                &settings.ui,
            )
        })?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, settings, session, surface, audio_player, mpris, state) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(
                    key,
                    settings,
                    session,
                    surface,
                    audio_player,
                    mpris,
                    control_tx,
                    state,
                ) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_control_cmd(
    cmd: ControlCmd,
    settings: &config::Settings,
    session: &mut PlayerSession,
    surface: &mut TuiSurface<'_>,
    audio_player: &AudioPlayer,
    mpris: &MprisHandle,
    state: &mut EventLoopState,
) -> bool {
    match cmd {
        ControlCmd::Quit => {
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        ControlCmd::Play => {
            session.play(surface);
        }
        ControlCmd::Pause | ControlCmd::Stop => {
            session.pause(surface);
        }
        ControlCmd::PlayPause => match session.playback {
            PlaybackState::Playing => session.pause(surface),
            PlaybackState::Paused | PlaybackState::Stopped => session.play(surface),
        },
        ControlCmd::Next => {
            session.next(surface);
            if let Some(i) = session.current {
                state.cursor = i;
            }
        }
        ControlCmd::Prev => {
            session.previous(surface);
            if let Some(i) = session.current {
                state.cursor = i;
            }
        }
    }

    update_mpris(mpris, session);
    false
}

#[allow(clippy::too_many_arguments)]
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    session: &mut PlayerSession,
    surface: &mut TuiSurface<'_>,
    audio_player: &AudioPlayer,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    // Add-folder prompt: the modal "directory picker" of this player.
    if let Some(buffer) = state.prompt.as_mut() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => {
                // Cancelled: same as the picker returning no path.
                state.prompt = None;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let path = buffer.trim().to_string();
                state.prompt = None;
                if !path.is_empty() {
                    session.register_folder(Path::new(&path), surface);
                    state.clamp_cursor(surface.view.list.len());
                    update_mpris(mpris, session);
                }
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    buffer.push(c);
                }
            }
            _ => {}
        }

        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('a') => {
            state.pending_gg = false;
            state.prompt = Some(String::new());
        }
        KeyCode::Char('s') => {
            state.pending_gg = false;
            session.toggle_shuffle(surface);
            state.cursor = session.current.unwrap_or(0);
            update_mpris(mpris, session);
        }
        KeyCode::Char('r') => {
            state.pending_gg = false;
            session.toggle_repeat(surface);
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                state.cursor = 0;
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            let len = surface.view.list.len();
            if len > 0 {
                state.cursor = len - 1;
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            let len = surface.view.list.len();
            if len > 0 {
                state.cursor = (state.cursor + 1) % len;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            let len = surface.view.list.len();
            if len > 0 {
                state.cursor = (state.cursor + len - 1) % len;
            }
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            if session.has_tracks() {
                session.select(state.cursor, surface);
                update_mpris(mpris, session);
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            state.pending_gg = false;
            // Behave like MPRIS PlayPause.
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}
