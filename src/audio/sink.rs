//! Utilities for creating `rodio` sinks from file paths.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use rodio::{Decoder, OutputStream, Sink};

/// Open and decode `path` into a fresh paused `Sink`.
///
/// Unreadable or undecodable files are reported as errors so the audio
/// thread can degrade to silence instead of panicking; the file may have
/// been deleted since the folder was scanned.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> anyhow::Result<Sink> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let source = Decoder::new(BufReader::new(file))
        .with_context(|| format!("decoding {}", path.display()))?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
