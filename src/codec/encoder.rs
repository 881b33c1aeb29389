// Encoder - Serializes a Pattern into the SPLICE layout
// The whole file is validated and assembled in memory before the sink sees a byte

use crate::codec::error::EncodeError;
use crate::codec::{HEADER_LEN, MAGIC, MAX_NAME_LEN, TEMPO_LEN, TRACK_OVERHEAD, VERSION_LEN};
use crate::model::Pattern;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Value of the payload length field: every byte after the 14-byte header
pub fn payload_len(pattern: &Pattern) -> u64 {
    let tracks: usize = pattern
        .tracks
        .iter()
        .map(|track| TRACK_OVERHEAD + track.name.len())
        .sum();
    (VERSION_LEN + TEMPO_LEN + tracks) as u64
}

/// Encode a pattern into a new buffer
pub fn encode_to_vec(pattern: &Pattern) -> Result<Vec<u8>, EncodeError> {
    validate(pattern)?;

    let payload = payload_len(pattern);
    let mut buf = Vec::with_capacity(HEADER_LEN + payload as usize);

    buf.extend_from_slice(MAGIC);
    buf.write_u64::<BigEndian>(payload)?;

    let mut version_field = [0u8; VERSION_LEN];
    version_field[..pattern.version.len()].copy_from_slice(pattern.version.as_bytes());
    buf.extend_from_slice(&version_field);

    buf.write_f32::<LittleEndian>(pattern.tempo)?;

    for track in &pattern.tracks {
        buf.write_i32::<LittleEndian>(track.id)?;
        // Length checked in validate()
        buf.write_u8(track.name.len() as u8)?;
        buf.extend_from_slice(track.name.as_bytes());
        buf.extend(track.steps.iter().map(|hit| u8::from(*hit)));
    }

    debug_assert_eq!(buf.len() as u64, HEADER_LEN as u64 + payload);
    Ok(buf)
}

/// Encode a pattern into `sink`
///
/// Nothing is written when the pattern fails validation.
pub fn encode<W: Write>(pattern: &Pattern, mut sink: W) -> Result<(), EncodeError> {
    let bytes = encode_to_vec(pattern)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

fn validate(pattern: &Pattern) -> Result<(), EncodeError> {
    let version = pattern.version.as_bytes();
    if version.len() > VERSION_LEN {
        return Err(EncodeError::VersionTooLong { len: version.len() });
    }
    if version.contains(&0) {
        return Err(EncodeError::VersionContainsNul);
    }

    for (index, track) in pattern.tracks.iter().enumerate() {
        if track.name.len() > MAX_NAME_LEN {
            return Err(EncodeError::NameTooLong {
                track: index,
                len: track.name.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_bytes;
    use crate::model::Track;

    fn kick() -> Track {
        Track::from_grid(1, "kick", "x--x|x---|x-x-|x--x").unwrap()
    }

    #[test]
    fn test_payload_len() {
        let pattern = Pattern::new("0.808-alpha", 120.0).with_track(kick());
        assert_eq!(payload_len(&pattern), 61);
        assert_eq!(payload_len(&Pattern::new("", 0.0)), 36);
    }

    #[test]
    fn test_encoded_layout() {
        let pattern = Pattern::new("0.808-alpha", 120.0).with_track(kick());
        let bytes = encode_to_vec(&pattern).unwrap();

        assert_eq!(bytes.len(), HEADER_LEN + 61);
        assert_eq!(&bytes[..6], b"SPLICE");
        assert_eq!(&bytes[6..14], &61u64.to_be_bytes());
        assert_eq!(&bytes[14..25], b"0.808-alpha");
        assert!(bytes[25..46].iter().all(|b| *b == 0));
        assert_eq!(&bytes[46..50], &120.0f32.to_le_bytes());
        assert_eq!(&bytes[50..54], &1i32.to_le_bytes());
        assert_eq!(bytes[54], 4);
        assert_eq!(&bytes[55..59], b"kick");
        assert_eq!(
            &bytes[59..75],
            &[1u8, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1]
        );
    }

    #[test]
    fn test_encode_then_decode() {
        let pattern = Pattern::new("0.808-alpha", 120.0).with_track(kick());
        let decoded = decode_bytes(&encode_to_vec(&pattern).unwrap()).unwrap();
        assert_eq!(decoded, pattern);
    }

    #[test]
    fn test_version_too_long() {
        let pattern = Pattern::new("v".repeat(33), 120.0);
        let mut sink = Vec::new();
        let result = encode(&pattern, &mut sink);

        assert!(matches!(result, Err(EncodeError::VersionTooLong { len: 33 })));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_version_exactly_full_width() {
        let pattern = Pattern::new("v".repeat(32), 120.0);
        let bytes = encode_to_vec(&pattern).unwrap();
        assert_eq!(&bytes[14..46], "v".repeat(32).as_bytes());
    }

    #[test]
    fn test_version_with_nul() {
        let pattern = Pattern::new("0.9\0beta", 120.0);
        assert!(matches!(
            encode_to_vec(&pattern),
            Err(EncodeError::VersionContainsNul)
        ));
    }

    #[test]
    fn test_name_too_long() {
        let pattern = Pattern::new("0.808-alpha", 120.0)
            .with_track(kick())
            .with_track(Track::silent(2, "n".repeat(256)));
        let mut sink = Vec::new();
        let result = encode(&pattern, &mut sink);

        assert!(matches!(
            result,
            Err(EncodeError::NameTooLong { track: 1, len: 256 })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_name_max_length() {
        let pattern = Pattern::new("v", 120.0).with_track(Track::silent(2, "n".repeat(255)));
        let bytes = encode_to_vec(&pattern).unwrap();
        assert_eq!(bytes[HEADER_LEN + 36 + 4], 255);
        assert_eq!(decode_bytes(&bytes).unwrap(), pattern);
    }
}
