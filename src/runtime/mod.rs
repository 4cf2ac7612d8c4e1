use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use crate::audio::AudioPlayer;
use crate::mpris::ControlCmd;

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;
mod surface;

use surface::TuiSurface;

/// Set up file logging under the config directory.
///
/// The TUI owns the terminal, so logs go to `vivace.log` instead of stderr.
/// Returns the appender guard; dropping it flushes buffered log lines.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let config_path = crate::config::default_config_path()?;
    let dir = config_path.parent()?.to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, "vivace.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env("VIVACE_LOG").unwrap_or_else(|_| EnvFilter::new("vivace=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = init_logging();

    let settings = settings::load_settings();

    let audio_player = AudioPlayer::new();
    let mut surface = TuiSurface::new(&audio_player);
    let mut session = startup::restore_session(&mut surface);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::update_mpris(&mpris, &session);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&session);

        event_loop::run(
            &mut terminal,
            &settings,
            &mut session,
            &mut surface,
            &audio_player,
            &mpris,
            &control_tx,
            &control_rx,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
