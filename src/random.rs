//! Seeded random source shared by every stochastic decision of a run.
//!
//! All draws go through one [`RandomSource`], so a fixed seed reproduces
//! a run exactly: same seed, same draw sequence, same result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seedable pseudo-random generator with the draws metaheuristics need.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Creates a source from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a source from an optional seed (entropy when `None`).
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)`.
    pub fn rand(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// `n` uniform draws in `[0, 1)`.
    pub fn rand_vec(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.rand()).collect()
    }

    /// Uniform draw in `[low, high)`. A degenerate range returns `low`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.rand()
    }

    /// `n` uniform draws in `[low, high)`.
    pub fn uniform_vec(&mut self, low: f64, high: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.uniform(low, high)).collect()
    }

    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    pub fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }

    /// Normal draw with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, std: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        mean + std * z
    }

    /// `n` normal draws.
    pub fn normal_vec(&mut self, mean: f64, std: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal(mean, std)).collect()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
