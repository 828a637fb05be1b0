//! Random number generation for dungeon generation
//!
//! Uses a seeded ChaCha RNG so that every attempt is reproducible from its seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generation random number generator
///
/// Wraps ChaCha8Rng. One instance is created per generation attempt and passed
/// explicitly to every stage.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns a value uniformly drawn from `lo..=hi`
    ///
    /// Returns `lo` if the range is empty.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns a float in `[0, 1)`
    pub fn value(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Returns true with the given probability
    ///
    /// Always draws exactly one value, so callers consume the same amount of
    /// randomness whatever the outcome.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.value() < probability
    }

    /// Draw a seed for a follow-up attempt
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// A fresh seed from OS entropy
pub fn random_seed() -> u64 {
    rand::random()
}
