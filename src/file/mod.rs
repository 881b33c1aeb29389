// File layer for .splice patterns
// Path-based load/save, directory scanning and text exports on top of the codec

pub mod export;
pub mod storage;
pub mod scan;

use crate::codec::{DecodeError, EncodeError};
use std::path::PathBuf;

pub use export::{ExportFormat, export_pattern, import_pattern};
pub use storage::{load_pattern, load_pattern_with_options, save_pattern};
pub use scan::scan_directory;

/// File extension of pattern files
pub const SPLICE_EXTENSION: &str = "splice";

/// File layer error types
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to encode pattern: {0}")]
    Encode(#[from] EncodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),

    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}
