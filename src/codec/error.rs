// Codec error types

use crate::codec::{MAX_NAME_LEN, VERSION_LEN};

/// Text fields checked in strict decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Version,
    TrackName { track: usize },
}

impl std::fmt::Display for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextField::Version => write!(f, "version"),
            TextField::TrackName { track } => write!(f, "name of track {}", track),
        }
    }
}

/// Decode error types
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Not a SPLICE file (header was {found:?})")]
    BadMagic { found: Vec<u8> },

    #[error("Unexpected end of data")]
    Truncated,

    #[error("Payload length mismatch: header declares {declared} bytes but {consumed} were read")]
    LengthMismatch { declared: u64, consumed: u64 },

    #[error("Invalid step value {value} at step {step} of track {track}")]
    InvalidStep { track: usize, step: usize, value: u8 },

    #[error("Invalid UTF-8 in {field}")]
    InvalidText { field: TextField },

    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            DecodeError::Truncated
        } else {
            DecodeError::Io(err)
        }
    }
}

/// Encode error types
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Version is {len} bytes, the field holds at most {max}", max = VERSION_LEN)]
    VersionTooLong { len: usize },

    #[error("Version contains a NUL byte")]
    VersionContainsNul,

    #[error("Name of track {track} is {len} bytes, at most {max} are allowed", max = MAX_NAME_LEN)]
    NameTooLong { track: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_eof_maps_to_truncated() {
        let err: DecodeError = Error::new(ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, DecodeError::Truncated));
    }

    #[test]
    fn test_other_io_errors_kept() {
        let err: DecodeError = Error::new(ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, DecodeError::Io(_)));

        let source = std::error::Error::source(&err).expect("io error kept as source");
        assert_eq!(source.to_string(), "nope");
    }

    #[test]
    fn test_error_messages() {
        let err = EncodeError::NameTooLong { track: 2, len: 300 };
        assert_eq!(
            err.to_string(),
            "Name of track 2 is 300 bytes, at most 255 are allowed"
        );

        let err = DecodeError::InvalidText {
            field: TextField::TrackName { track: 1 },
        };
        assert_eq!(err.to_string(), "Invalid UTF-8 in name of track 1");
    }
}
