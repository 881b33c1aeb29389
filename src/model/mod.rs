// Pattern model - Plain data decoded from and encoded to .splice files

pub mod pattern;
pub mod sequence;
pub mod track;

pub use pattern::{Pattern, STEPS_PER_BEAT};
pub use sequence::Sequence;
pub use track::{GridError, STEPS_PER_TRACK, Steps, Track};
