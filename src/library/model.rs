use std::path::PathBuf;

/// One playable audio file plus its resolved album-art path.
///
/// Immutable once constructed. Identity is the file path; the same file
/// name appearing in two folders produces two distinct tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    /// File name as shown in the track list (extension included).
    pub display: String,
    pub path: PathBuf,
    /// Shared by every track scanned from the same folder.
    pub album_art: Option<PathBuf>,
}
