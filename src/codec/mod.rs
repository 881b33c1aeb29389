// SPLICE codec - Binary layout of .splice drum pattern files
//
// Layout (note the mixed byte order):
//   magic           6 bytes   "SPLICE"
//   payload length  8 bytes   u64 big-endian, counts every byte below
//   version        32 bytes   text, zero-padded
//   tempo           4 bytes   f32 little-endian
//   per track:
//     id            4 bytes   i32 little-endian
//     name length   1 byte    u8
//     name          n bytes   raw text
//     steps        16 bytes   one byte per step, 1 = hit

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::{DecodeOptions, decode, decode_bytes, decode_with_options};
pub use encoder::{encode, encode_to_vec, payload_len};
pub use error::{DecodeError, EncodeError, TextField};

/// File signature
pub const MAGIC: &[u8; 6] = b"SPLICE";

/// Magic plus the payload length field
pub const HEADER_LEN: usize = MAGIC.len() + 8;

/// Width of the zero-padded version field
pub const VERSION_LEN: usize = 32;

/// Width of the tempo field
pub const TEMPO_LEN: usize = 4;

/// Longest track name the one-byte length prefix can describe
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Encoded size of a track without its name bytes (id + name length + steps)
pub const TRACK_OVERHEAD: usize = 4 + 1 + crate::model::STEPS_PER_TRACK;
