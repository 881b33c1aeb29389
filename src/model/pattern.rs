// Pattern - Decoded content of a .splice file
// A version label, a tempo and an ordered list of instrument tracks

use crate::model::track::{STEPS_PER_TRACK, Track};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Steps per quarter note (the 16 steps of a pattern are sixteenth notes)
pub const STEPS_PER_BEAT: u32 = 4;

/// A drum machine pattern
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pattern {
    /// Hardware version label (at most 32 bytes, no NUL bytes)
    pub version: String,

    /// Tempo in BPM
    pub tempo: f32,

    /// Tracks in file order
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Create a new pattern without tracks
    pub fn new(version: impl Into<String>, tempo: f32) -> Self {
        Self {
            version: version.into(),
            tempo,
            tracks: Vec::new(),
        }
    }

    /// Builder-style track append
    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Append a track
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// All tracks with the given id, in file order
    pub fn tracks_with_id(&self, id: i32) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.id == id)
    }

    /// Tracks that fire at `step` (taken modulo 16)
    pub fn hits_at(&self, step: usize) -> Vec<&Track> {
        self.tracks.iter().filter(|t| t.is_hit(step)).collect()
    }

    /// Duration of one sixteenth step at the pattern tempo
    ///
    /// Returns `None` when the tempo is not a positive finite number.
    pub fn step_duration(&self) -> Option<Duration> {
        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            return None;
        }
        let beat_secs = 60.0 / f64::from(self.tempo);
        Duration::try_from_secs_f64(beat_secs / f64::from(STEPS_PER_BEAT)).ok()
    }

    /// Duration of one full pass over the 16 steps
    pub fn loop_duration(&self) -> Option<Duration> {
        self.step_duration()
            .and_then(|step| step.checked_mul(STEPS_PER_TRACK as u32))
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}
