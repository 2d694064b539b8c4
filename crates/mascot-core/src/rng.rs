//! Seeded RNG wrapper owned by each mascot.
//!
//! Every random draw in the framework (behavior selection, timer jitter,
//! wander targets) goes through one `MascotRng`.  Seeding it makes a whole
//! run reproducible on a virtual clock; two mascots never share one.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Per-mascot RNG.
pub struct MascotRng(SmallRng);

impl MascotRng {
    /// Seed deterministically.  The same seed always replays the same run.
    pub fn new(seed: u64) -> Self {
        MascotRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for hosts that want a different mascot each time.
    pub fn from_entropy() -> Self {
        MascotRng(SmallRng::from_entropy())
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A duration sampled uniformly from `[lo, hi)` milliseconds.
    ///
    /// Returns `lo` when the range is empty instead of panicking.
    #[inline]
    pub fn duration_ms(&mut self, lo: u64, hi: u64) -> u64 {
        if hi > lo { self.0.gen_range(lo..hi) } else { lo }
    }
}
