//! Sources of randomness.
//!
//! Every random decision in the game goes through a [`Roller`], so a test can
//! swap the seeded generator for a [`FixedRoller`] that replays a script.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of random outcomes.
pub trait Roller {
    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// A uniformly random integer in `lo..=hi`.
    fn between(&mut self, lo: i32, hi: i32) -> i32;

    /// Roll a twenty-sided die.
    fn d20(&mut self) -> i32 {
        self.between(1, 20)
    }
}

impl Roller for StdRng {
    fn chance(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }

    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.random_range(lo..=hi)
    }
}

/// A roller that replays queued outcomes.
///
/// Chance rolls and ranged rolls are queued separately. An exhausted chance
/// queue answers `false`; an exhausted range queue answers the low bound.
/// Queued range values are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct FixedRoller {
    chances: VecDeque<bool>,
    values: VecDeque<i32>,
}

impl FixedRoller {
    /// Create a roller with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue outcomes for [`Roller::chance`].
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Queue outcomes for [`Roller::between`].
    pub fn with_values(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.values.extend(values);
        self
    }

    /// Number of outcomes still queued.
    pub fn remaining(&self) -> usize {
        self.chances.len() + self.values.len()
    }
}

impl Roller for FixedRoller {
    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        match self.values.pop_front() {
            Some(v) => v.clamp(lo, hi.max(lo)),
            None => lo,
        }
    }
}
