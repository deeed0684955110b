//! RNG module - seeded randomness for the scene
//!
//! All random choices (star placement, blink timing, debris frames and spawn
//! columns) go through one [`GameRng`]. It wraps a PCG generator seeded from a
//! `u64`, so a run can be replayed from the seed it logs at startup and tests
//! get the same sequence every time.

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct GameRng {
    inner: Pcg32,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `range`. An empty range yields its start.
    pub fn range(&mut self, range: RangeInclusive<i32>) -> i32 {
        if range.start() > range.end() {
            return *range.start();
        }
        self.inner.random_range(range)
    }

    /// Uniform tick count in `range`. An empty range yields its start.
    pub fn ticks(&mut self, range: RangeInclusive<u32>) -> u32 {
        if range.start() > range.end() {
            return *range.start();
        }
        self.inner.random_range(range)
    }

    /// Random element of `items`, `None` if empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
