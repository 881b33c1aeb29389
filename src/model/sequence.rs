// Sequence - Patterns chained one after another
// Each pattern contributes 16 steps; the whole chain loops

use crate::model::pattern::Pattern;
use crate::model::track::{STEPS_PER_TRACK, Track};

/// An ordered chain of patterns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    patterns: Vec<Pattern>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern at the end of the chain
    pub fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Total number of steps in one pass over the chain
    pub fn len_steps(&self) -> usize {
        self.patterns.len() * STEPS_PER_TRACK
    }

    /// Pattern playing at `global_step` and the local step inside it.
    /// The step wraps around the end of the chain.
    pub fn locate(&self, global_step: usize) -> Option<(&Pattern, usize)> {
        if self.patterns.is_empty() {
            return None;
        }
        let step = global_step % self.len_steps();
        let pattern = &self.patterns[step / STEPS_PER_TRACK];
        Some((pattern, step % STEPS_PER_TRACK))
    }

    /// Tracks firing at `global_step`
    pub fn hits_at(&self, global_step: usize) -> Vec<&Track> {
        match self.locate(global_step) {
            Some((pattern, step)) => pattern.hits_at(step),
            None => Vec::new(),
        }
    }

    /// Tempo of the pattern playing at `global_step`
    pub fn tempo_at(&self, global_step: usize) -> Option<f32> {
        self.locate(global_step).map(|(pattern, _)| pattern.tempo)
    }
}

impl FromIterator<Pattern> for Sequence {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
