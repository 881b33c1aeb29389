// Decoder - Parses a SPLICE byte stream into a Pattern
// Reads strictly left to right; the payload length field bounds the track loop

use crate::codec::error::{DecodeError, TextField};
use crate::codec::{MAGIC, TEMPO_LEN, TRACK_OVERHEAD, VERSION_LEN};
use crate::model::{Pattern, STEPS_PER_TRACK, Steps, Track};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Read;

/// Options for decoding a pattern
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Reject step bytes other than 0 and 1 instead of reading them as off
    pub strict_steps: bool,
    /// Reject version and name bytes that are not valid UTF-8 instead of
    /// replacing them with U+FFFD
    pub strict_text: bool,
}

impl DecodeOptions {
    /// Options with every check enabled
    pub fn strict() -> Self {
        Self {
            strict_steps: true,
            strict_text: true,
        }
    }
}

/// Decode a pattern with the default (permissive) options
pub fn decode<R: Read>(source: R) -> Result<Pattern, DecodeError> {
    decode_with_options(source, &DecodeOptions::default())
}

/// Decode a pattern from an in-memory buffer
pub fn decode_bytes(bytes: &[u8]) -> Result<Pattern, DecodeError> {
    decode(bytes)
}

/// Decode a pattern
///
/// Bytes following the declared payload are left unread. A payload length
/// that ends partway through a field is rejected with
/// [`DecodeError::LengthMismatch`].
pub fn decode_with_options<R: Read>(
    mut source: R,
    options: &DecodeOptions,
) -> Result<Pattern, DecodeError> {
    read_magic(&mut source)?;

    let declared = source.read_u64::<BigEndian>()?;
    let mut consumed: u64 = 0;

    let mut version_field = [0u8; VERSION_LEN];
    source.read_exact(&mut version_field)?;
    consumed += VERSION_LEN as u64;
    let version = decode_text(
        until_nul(&version_field).to_vec(),
        TextField::Version,
        options,
    )?;

    let tempo = source.read_f32::<LittleEndian>()?;
    consumed += TEMPO_LEN as u64;

    let mut tracks = Vec::new();
    while consumed < declared {
        let (track, len) = read_track(&mut source, tracks.len(), options)?;
        consumed += len as u64;
        tracks.push(track);
    }

    if consumed > declared {
        return Err(DecodeError::LengthMismatch { declared, consumed });
    }

    Ok(Pattern {
        version,
        tempo,
        tracks,
    })
}

fn read_magic<R: Read>(source: &mut R) -> Result<(), DecodeError> {
    let mut found = Vec::with_capacity(MAGIC.len());
    source
        .by_ref()
        .take(MAGIC.len() as u64)
        .read_to_end(&mut found)?;

    if found.as_slice() == MAGIC {
        Ok(())
    } else if MAGIC.starts_with(&found) {
        // Right prefix, stream just ended early
        Err(DecodeError::Truncated)
    } else {
        Err(DecodeError::BadMagic { found })
    }
}

/// Read one track record, returning it with its encoded size
fn read_track<R: Read>(
    source: &mut R,
    index: usize,
    options: &DecodeOptions,
) -> Result<(Track, usize), DecodeError> {
    let id = source.read_i32::<LittleEndian>()?;

    let name_len = source.read_u8()? as usize;
    let mut name = vec![0u8; name_len];
    source.read_exact(&mut name)?;
    let name = decode_text(name, TextField::TrackName { track: index }, options)?;

    let mut raw_steps = [0u8; STEPS_PER_TRACK];
    source.read_exact(&mut raw_steps)?;
    let mut steps: Steps = [false; STEPS_PER_TRACK];
    for (step, (flag, value)) in steps.iter_mut().zip(raw_steps).enumerate() {
        if options.strict_steps && value > 1 {
            return Err(DecodeError::InvalidStep {
                track: index,
                step,
                value,
            });
        }
        *flag = value == 1;
    }

    Ok((Track { id, name, steps }, TRACK_OVERHEAD + name_len))
}

/// Bytes before the first NUL. Strips all zero padding and never keeps an
/// embedded NUL.
fn until_nul(field: &[u8]) -> &[u8] {
    match field.iter().position(|b| *b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

fn decode_text(
    bytes: Vec<u8>,
    field: TextField,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(_) if options.strict_text => Err(DecodeError::InvalidText { field }),
        Err(err) => Ok(String::from_utf8_lossy(err.as_bytes()).into_owned()),
    }
}
