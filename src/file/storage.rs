// Load and save .splice files

use crate::codec::{DecodeOptions, decode_with_options, encode_to_vec};
use crate::file::FileError;
use crate::model::Pattern;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

/// Load a pattern with the default (permissive) decode options
pub fn load_pattern(path: impl AsRef<Path>) -> Result<Pattern, FileError> {
    load_pattern_with_options(path, &DecodeOptions::default())
}

/// Load a pattern from a .splice file
pub fn load_pattern_with_options(
    path: impl AsRef<Path>,
    options: &DecodeOptions,
) -> Result<Pattern, FileError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let pattern =
        decode_with_options(BufReader::new(file), options).map_err(|source| FileError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Loaded {} ({} tracks, {} BPM)",
        path.display(),
        pattern.tracks.len(),
        pattern.tempo
    );
    Ok(pattern)
}

/// Save a pattern to a .splice file
///
/// The pattern is encoded before the file is created, so an invalid pattern
/// never leaves an empty or partial file behind.
pub fn save_pattern(pattern: &Pattern, path: impl AsRef<Path>) -> Result<(), FileError> {
    let path = path.as_ref();
    let bytes = encode_to_vec(pattern)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.sync_all()?;

    log::debug!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
