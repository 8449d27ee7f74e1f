//! Scoring policies and score sources
//!
//! A [`ScoringPolicy`] fixes the range an expert scores in and how the
//! comment is annotated. The number itself comes from a [`ScoreSource`], so
//! callers can swap the seeded PRNG for a fixed sequence.

use std::collections::VecDeque;

use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha20Rng,
};
use serde::{Deserialize, Serialize};

/// Scoring behaviour attached to an expert record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Full range 1..=10
    Base,
    /// Narrow high-confidence range 5..=10
    HighConfidence,
}

impl ScoringPolicy {
    /// Inclusive score bounds
    pub const fn range(self) -> (u8, u8) {
        match self {
            ScoringPolicy::Base => (1, 10),
            ScoringPolicy::HighConfidence => (5, 10),
        }
    }

    /// Draws a score within this policy's range
    pub fn score(self, source: &mut dyn ScoreSource) -> u8 {
        let (low, high) = self.range();
        source.next_in_range(low, high).clamp(low, high)
    }

    /// Comment recorded on the evaluation
    pub fn comment(self, expert_name: &str) -> String {
        match self {
            ScoringPolicy::Base => format!("Evaluation by {expert_name}"),
            ScoringPolicy::HighConfidence => format!("Senior expert evaluation by {expert_name}"),
        }
    }
}

/// Source of raw scores
pub trait ScoreSource: Send {
    /// Returns a value in `low..=high`
    fn next_in_range(&mut self, low: u8, high: u8) -> u8;
}

/// ChaCha20-backed source; reproducible when built from a seed
pub struct SeededScores {
    rng: ChaCha20Rng,
}

impl SeededScores {
    /// Creates a reproducible source from a 64-bit seed
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(bytes),
        }
    }

    /// Creates a source seeded from OS randomness
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }
}

impl ScoreSource for SeededScores {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        let span = u32::from(high - low) + 1;
        // draws at or above the last whole multiple of `span` would skew low values
        let limit = u32::MAX - u32::MAX % span;
        loop {
            let draw = self.rng.next_u32();
            if draw < limit {
                return low + (draw % span) as u8;
            }
        }
    }
}

/// Replays a fixed sequence of scores, cycling when exhausted
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedScores {
    script: Vec<u8>,
    pending: VecDeque<u8>,
}

impl ScriptedScores {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        let script = script.into();
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }
}

impl ScoreSource for ScriptedScores {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending
            .pop_front()
            .map(|value| value.clamp(low, high.max(low)))
            .unwrap_or(low)
    }
}
