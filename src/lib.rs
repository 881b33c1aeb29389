// Splice Drum - Library exports for the CLI, tests and benchmarks

pub mod codec;
pub mod file;
pub mod model;

// Re-export commonly used types for convenience
pub use codec::{
    DecodeError, DecodeOptions, EncodeError, decode, decode_bytes, decode_with_options, encode,
    encode_to_vec, payload_len,
};
pub use file::{ExportFormat, FileError, load_pattern, save_pattern, scan_directory};
pub use model::{Pattern, STEPS_PER_TRACK, Sequence, Steps, Track};
