use super::*;
use crate::library::Track;
use crate::registry::{self, FolderRegistry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Records every Presentation call so tests can assert on emissions.
#[derive(Debug, Default)]
struct RecordingSurface {
    loaded: Vec<PathBuf>,
    pauses: usize,
    resumes: usize,
    loop_flags: Vec<bool>,
    lists: Vec<Vec<String>>,
    now_playing: Vec<String>,
    art: Vec<Option<PathBuf>>,
}

impl RecordingSurface {
    fn transport_calls(&self) -> usize {
        self.loaded.len() + self.pauses + self.resumes
    }
}

impl crate::presentation::Presentation for RecordingSurface {
    fn load_and_play(&mut self, path: &Path) {
        self.loaded.push(path.to_path_buf());
    }
    fn pause(&mut self) {
        self.pauses += 1;
    }
    fn resume(&mut self) {
        self.resumes += 1;
    }
    fn set_loop(&mut self, enabled: bool) {
        self.loop_flags.push(enabled);
    }
    fn render_list(&mut self, names: &[String]) {
        self.lists.push(names.to_vec());
    }
    fn render_now_playing(&mut self, name: &str) {
        self.now_playing.push(name.to_string());
    }
    fn render_album_art(&mut self, art: Option<&Path>) {
        self.art.push(art.map(Path::to_path_buf));
    }
}

fn t(name: &str) -> Track {
    Track {
        display: name.to_string(),
        path: PathBuf::from(format!("/music/{name}")),
        album_art: None,
    }
}

fn session_with(tracks: Vec<Track>) -> PlayerSession {
    let mut session = PlayerSession::new(FolderRegistry::new(), None);
    session.playlist.append(tracks);
    session
}

#[test]
fn empty_playlist_makes_transport_a_no_op() {
    let mut session = session_with(vec![]);
    let mut surface = RecordingSurface::default();

    session.next(&mut surface);
    session.previous(&mut surface);
    session.play(&mut surface);
    session.pause(&mut surface);
    session.select(0, &mut surface);

    assert_eq!(session.current, None);
    assert_eq!(session.playback, PlaybackState::Stopped);
    assert_eq!(surface.transport_calls(), 0);
    assert!(surface.now_playing.is_empty());
}

#[test]
fn select_emits_track_now_playing_and_art() {
    let mut session = session_with(vec![
        Track {
            display: "a.mp3".into(),
            path: "/music/rock/a.mp3".into(),
            album_art: Some("/music/rock/cover.jpg".into()),
        },
        t("b.mp3"),
    ]);
    let mut surface = RecordingSurface::default();

    session.select(0, &mut surface);

    assert_eq!(session.current, Some(0));
    assert_eq!(session.playback, PlaybackState::Playing);
    assert_eq!(surface.loaded, vec![PathBuf::from("/music/rock/a.mp3")]);
    assert_eq!(surface.now_playing, vec!["a.mp3".to_string()]);
    assert_eq!(surface.art, vec![Some(PathBuf::from("/music/rock/cover.jpg"))]);
}

#[test]
fn select_out_of_range_is_a_no_op() {
    let mut session = session_with(vec![t("a.mp3")]);
    let mut surface = RecordingSurface::default();

    session.select(1, &mut surface);

    assert_eq!(session.current, None);
    assert!(surface.loaded.is_empty());
}

#[test]
fn first_next_lands_on_index_zero() {
    let mut session = session_with(vec![t("a.mp3"), t("b.mp3"), t("c.mp3")]);
    let mut surface = RecordingSurface::default();

    session.next(&mut surface);
    assert_eq!(session.current, Some(0));
}

#[test]
fn next_cycles_back_to_the_starting_index() {
    let mut session = session_with(vec![t("a.mp3"), t("b.mp3"), t("c.mp3")]);
    let mut surface = RecordingSurface::default();
    session.select(1, &mut surface);

    for _ in 0..3 {
        session.next(&mut surface);
    }
    assert_eq!(session.current, Some(1));
}

#[test]
fn previous_then_next_is_identity() {
    let mut session = session_with(vec![t("a.mp3"), t("b.mp3"), t("c.mp3")]);
    let mut surface = RecordingSurface::default();

    for start in 0..3 {
        session.select(start, &mut surface);
        session.previous(&mut surface);
        session.next(&mut surface);
        assert_eq!(session.current, Some(start));

        session.next(&mut surface);
        session.previous(&mut surface);
        assert_eq!(session.current, Some(start));
    }
}

#[test]
fn previous_wraps_from_the_first_track() {
    let mut session = session_with(vec![t("a.mp3"), t("b.mp3"), t("c.mp3")]);
    let mut surface = RecordingSurface::default();
    session.select(0, &mut surface);

    session.previous(&mut surface);
    assert_eq!(session.current, Some(2));
}

#[test]
fn play_and_pause_delegate_once_selected() {
    let mut session = session_with(vec![t("a.mp3")]);
    let mut surface = RecordingSurface::default();
    session.select(0, &mut surface);

    session.pause(&mut surface);
    assert_eq!(session.playback, PlaybackState::Paused);
    assert_eq!(surface.pauses, 1);

    session.play(&mut surface);
    assert_eq!(session.playback, PlaybackState::Playing);
    assert_eq!(surface.resumes, 1);
}

#[test]
fn toggle_repeat_mirrors_the_loop_flag() {
    let mut session = session_with(vec![t("a.mp3")]);
    let mut surface = RecordingSurface::default();

    session.toggle_repeat(&mut surface);
    session.toggle_repeat(&mut surface);

    assert!(!session.repeat);
    assert_eq!(surface.loop_flags, vec![true, false]);
}

#[test]
fn toggle_shuffle_restarts_playback_at_the_top() {
    let mut session = session_with((0..8).map(|i| t(&format!("{i}.mp3"))).collect());
    let mut surface = RecordingSurface::default();
    session.select(5, &mut surface);

    session.toggle_shuffle(&mut surface);
    assert!(session.is_shuffled());
    assert_eq!(session.current, Some(0));
    assert_eq!(session.playback, PlaybackState::Playing);
    // List re-rendered, then index 0 of the new ordering loaded.
    assert_eq!(surface.lists.len(), 1);
    let first = session.playlist.at(0).unwrap();
    assert_eq!(surface.loaded.last(), Some(&first.path));

    session.toggle_shuffle(&mut surface);
    assert!(!session.is_shuffled());
    assert_eq!(session.current, Some(0));
    assert_eq!(surface.loaded.last(), Some(&PathBuf::from("/music/0.mp3")));
}

#[test]
fn toggle_shuffle_on_empty_playlist_clears_selection_quietly() {
    let mut session = session_with(vec![]);
    let mut surface = RecordingSurface::default();

    session.toggle_shuffle(&mut surface);
    assert!(session.is_shuffled());
    assert_eq!(session.current, None);
    assert!(surface.loaded.is_empty());
}

#[test]
fn register_folder_scans_persists_and_rejects_duplicates() {
    let music = tempdir().unwrap();
    fs::write(music.path().join("a.mp3"), b"not real").unwrap();
    fs::write(music.path().join("b.txt"), b"ignore me").unwrap();

    let state = tempdir().unwrap();
    let state_path = state.path().join("folders.toml");

    let mut session = PlayerSession::new(FolderRegistry::new(), Some(state_path.clone()));
    let mut surface = RecordingSurface::default();

    assert!(session.register_folder(music.path(), &mut surface));
    assert_eq!(session.playlist.len(), 1);
    assert_eq!(surface.lists.len(), 1);

    let persisted = registry::load(&state_path);
    assert_eq!(persisted.folders(), &[music.path().to_path_buf()]);
    let first_write = fs::read_to_string(&state_path).unwrap();

    // Second registration: rejected, not re-scanned, state untouched.
    assert!(!session.register_folder(music.path(), &mut surface));
    assert_eq!(session.playlist.len(), 1);
    assert_eq!(surface.lists.len(), 1);
    assert_eq!(fs::read_to_string(&state_path).unwrap(), first_write);
}

#[test]
fn load_registered_scans_in_registry_order() {
    let rock = tempdir().unwrap();
    fs::write(rock.path().join("r.mp3"), b"not real").unwrap();
    let jazz = tempdir().unwrap();
    fs::write(jazz.path().join("j.mp3"), b"not real").unwrap();

    let mut registry = FolderRegistry::new();
    registry.register(rock.path());
    registry.register(jazz.path());

    let mut session = PlayerSession::new(registry, None);
    let mut surface = RecordingSurface::default();
    session.load_registered(&mut surface);

    let names: Vec<&str> = session
        .playlist
        .original()
        .iter()
        .map(|t| t.display.as_str())
        .collect();
    assert_eq!(names, vec!["r.mp3", "j.mp3"]);
    assert_eq!(surface.lists.len(), 1);
}

#[test]
fn missing_registered_folder_degrades_to_no_tracks() {
    let mut registry = FolderRegistry::new();
    registry.register(Path::new("/gone/since/last/time"));

    let mut session = PlayerSession::new(registry, None);
    let mut surface = RecordingSurface::default();
    session.load_registered(&mut surface);

    assert!(session.playlist.is_empty());
}
