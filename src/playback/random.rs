//! Standard random source backed by `rand`

use super::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let mut random = StdRandom::new();
        for len in 1..50 {
            assert!(random.pick(len) < len);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        let first: Vec<usize> = (0..20).map(|_| a.pick(10)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(first, second);
    }
}
