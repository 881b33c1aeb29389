// Track - One instrument lane of a drum pattern
// Holds the instrument id, its name and the 16 step flags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of steps in every track
pub const STEPS_PER_TRACK: usize = 16;

/// Steps are shown in groups of this size, separated by `|`
pub const STEPS_PER_GROUP: usize = 4;

/// Marker used for an active step
pub const HIT_MARKER: char = 'x';

/// Marker used for an inactive step
pub const REST_MARKER: char = '-';

/// Fixed-size step sequence. A length other than 16 cannot be represented.
pub type Steps = [bool; STEPS_PER_TRACK];

/// Errors raised while parsing a step grid such as `x---|x---|x---|x---`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid step character '{0}' (expected '{hit}' or '{rest}')", hit = HIT_MARKER, rest = REST_MARKER)]
    InvalidChar(char),

    #[error("Step grid has {0} steps, expected {expected}", expected = STEPS_PER_TRACK)]
    WrongLength(usize),
}

/// An instrument track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Instrument identifier. Not required to be unique within a pattern.
    pub id: i32,

    /// Instrument name (at most 255 bytes once encoded)
    pub name: String,

    /// Step flags, `true` = hit
    pub steps: Steps,
}

impl Track {
    /// Create a new track
    pub fn new(id: i32, name: impl Into<String>, steps: Steps) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
        }
    }

    /// Create a track with every step off
    pub fn silent(id: i32, name: impl Into<String>) -> Self {
        Self::new(id, name, [false; STEPS_PER_TRACK])
    }

    /// Build a track from a step grid in the rendering format.
    ///
    /// `|` separators and whitespace are ignored. `x`/`X` marks a hit and
    /// `-`/`.` marks a rest.
    pub fn from_grid(id: i32, name: impl Into<String>, grid: &str) -> Result<Self, GridError> {
        let mut steps = [false; STEPS_PER_TRACK];
        let mut count = 0;

        for c in grid.chars().filter(|c| *c != '|' && !c.is_whitespace()) {
            let hit = match c {
                'x' | 'X' => true,
                '-' | '.' => false,
                other => return Err(GridError::InvalidChar(other)),
            };
            if count < STEPS_PER_TRACK {
                steps[count] = hit;
            }
            count += 1;
        }

        if count != STEPS_PER_TRACK {
            return Err(GridError::WrongLength(count));
        }

        Ok(Self::new(id, name, steps))
    }

    /// Whether the track fires at the given step (wraps around 16)
    pub fn is_hit(&self, step: usize) -> bool {
        self.steps[step % STEPS_PER_TRACK]
    }

    /// Number of active steps
    pub fn hit_count(&self) -> usize {
        self.steps.iter().filter(|s| **s).count()
    }

    /// Render only the step grid, e.g. `|x---|x---|x---|x---|`
    pub fn grid(&self) -> String {
        let mut out =
            String::with_capacity(STEPS_PER_TRACK + STEPS_PER_TRACK / STEPS_PER_GROUP + 1);
        for group in self.steps.chunks(STEPS_PER_GROUP) {
            out.push('|');
            out.extend(
                group
                    .iter()
                    .map(|hit| if *hit { HIT_MARKER } else { REST_MARKER }),
            );
        }
        out.push('|');
        out
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.id, self.name, self.grid())
    }
}
