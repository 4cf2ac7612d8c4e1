use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::model::Track;

/// Extensions treated as audio, compared case-insensitively.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];

/// Album-art file names probed in order; the first that exists wins.
const ALBUM_ART_CANDIDATES: &[&str] = &["cover.jpg", "cover.png", "album.jpg", "album.png"];

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// Probe `dir` for a fixed set of album-art file names.
///
/// Resolved once per folder scan; every track of that scan shares the result.
pub fn find_album_art(dir: &Path) -> Option<PathBuf> {
    ALBUM_ART_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Scan a single folder for audio files.
///
/// Returns an empty list when `dir` does not exist or is not a directory:
/// the registry may remember a path the user has since deleted, and that is
/// not an error the user can act on. Does not recurse into subdirectories.
/// Entries come back in file-name order so re-scans are deterministic.
pub fn scan(dir: &Path) -> Vec<Track> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "skipping missing or non-directory folder");
        return Vec::new();
    }

    let album_art = find_album_art(dir);

    let mut tracks: Vec<Track> = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file() && is_audio_file(path) {
            let display = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string();

            tracks.push(Track {
                display,
                path: path.to_path_buf(),
                album_art: album_art.clone(),
            });
        }
    }

    tracks
}
