// Directory scanning - Finds and decodes every .splice file under a root

use crate::codec::DecodeOptions;
use crate::file::storage::load_pattern_with_options;
use crate::file::{FileError, SPLICE_EXTENSION};
use crate::model::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Decode every .splice file below `root`, sorted by path
///
/// Files that fail to decode are logged and skipped; only errors walking the
/// directory itself are returned.
pub fn scan_directory(
    root: impl AsRef<Path>,
    options: &DecodeOptions,
) -> Result<Vec<(PathBuf, Pattern)>, FileError> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_splice_file(entry.path()) {
            continue;
        }

        match load_pattern_with_options(entry.path(), options) {
            Ok(pattern) => found.push((entry.into_path(), pattern)),
            Err(e) => log::warn!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    log::debug!(
        "Found {} patterns under {}",
        found.len(),
        root.as_ref().display()
    );
    Ok(found)
}

fn is_splice_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SPLICE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::save_pattern;
    use crate::model::Track;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_finds_patterns_sorted() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        let b = Pattern::new("b", 100.0).with_track(Track::silent(1, "kick"));
        let a = Pattern::new("a", 90.0);
        save_pattern(&b, root.join("b.splice")).unwrap();
        save_pattern(&a, root.join("nested").join("a.SPLICE")).unwrap();
        save_pattern(&a, root.join("a.splice")).unwrap();

        let found = scan_directory(root, &DecodeOptions::default()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|(path, _)| path.strip_prefix(root).unwrap().display().to_string())
            .collect();

        assert_eq!(found.len(), 3);
        assert!(names[0].ends_with("a.splice"));
        assert!(names[1].ends_with("b.splice"));
        assert_eq!(found[1].1, b);
    }

    #[test]
    fn test_scan_skips_invalid_and_foreign_files() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        save_pattern(&Pattern::new("ok", 120.0), root.join("ok.splice")).unwrap();
        fs::write(root.join("broken.splice"), b"SPLICE\x00").unwrap();
        fs::write(root.join("notes.txt"), b"not a pattern").unwrap();

        let found = scan_directory(root, &DecodeOptions::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1.version, "ok");
    }

    #[test]
    fn test_scan_applies_decode_options() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        let pattern = Pattern::new("v", 120.0).with_track(Track::silent(0, "kick"));
        let path = root.join("odd.splice");
        save_pattern(&pattern, &path).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        // Last byte is the final step of the only track
        *bytes.last_mut().unwrap() = 9;
        fs::write(&path, &bytes).unwrap();

        let permissive = scan_directory(root, &DecodeOptions::default()).unwrap();
        assert_eq!(permissive.len(), 1);

        let strict = scan_directory(root, &DecodeOptions::strict()).unwrap();
        assert!(strict.is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = tempdir().unwrap();
        let result = scan_directory(temp_dir.path().join("nope"), &DecodeOptions::default());
        assert!(matches!(result, Err(FileError::Walk(_))));
    }
}
