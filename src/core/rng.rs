//! Random source seam
//!
//! Combat resolution is a pure function of state, chosen action and the draws
//! taken from a [`RandomSource`]. Every `rand::Rng` is a source; tests and
//! replays can feed [`ScriptedRolls`] instead.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The draws the engine needs from a random generator
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform draw in `[lo, hi]`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.gen_range(lo..=hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty table");
        self.gen_range(0..len.max(1))
    }
}

/// Reproducible generator for seeded runs
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A queue of pre-decided unit-interval fractions
///
/// Every draw consumes one fraction `t`: `unit()` returns it directly,
/// `uniform(lo, hi)` maps it to `lo + t * (hi - lo)` and `pick(len)` to
/// `floor(t * len)`.
///
/// # Panics
/// Drawing from an exhausted script panics: a scenario that needs more
/// randomness than it declared is a broken scenario.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Queue more fractions after the existing ones
    pub fn extend(&mut self, rolls: impl IntoIterator<Item = f64>) {
        self.rolls.extend(rolls);
    }

    /// Fractions not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }

    fn next_fraction(&mut self) -> f64 {
        match self.rolls.pop_front() {
            Some(t) => t.clamp(0.0, 1.0),
            None => panic!("scripted random source exhausted"),
        }
    }
}

impl RandomSource for ScriptedRolls {
    fn unit(&mut self) -> f64 {
        self.next_fraction()
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let t = self.next_fraction();
        lo + t * (hi - lo)
    }

    fn pick(&mut self, len: usize) -> usize {
        let t = self.next_fraction();
        ((t * len as f64) as usize).min(len.saturating_sub(1))
    }
}
