//! Injectable sources of uniform randomness
//!
//! Every stochastic decision in generation draws from a [`RandomSource`] so that
//! callers control determinism: [`SeededRandom`] for reproducible runs and
//! [`ScriptedRandom`] for replaying an exact sequence of draws.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform random number capability consumed by the generation core
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in the inclusive range `[min, max]`
    ///
    /// Always consumes exactly one draw. An empty range (`max <= min`)
    /// collapses to `min`.
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        let draw = self.next_unit();
        if max <= min {
            return min;
        }

        let span = max - min;
        let offset = (draw * (span + 1) as f64).floor() as usize;
        min + offset.min(span)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded random source for reproducible generation
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, wrapping around when exhausted
///
/// Draws are clamped into `[0, 1)`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `draws` in order
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }

        let draw = self
            .draws
            .get(self.cursor % self.draws.len())
            .copied()
            .unwrap_or(0.0);
        self.cursor += 1;

        draw.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
