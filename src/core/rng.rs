//! RNG module - seedable gem generation
//!
//! A simple LCG keeps the whole simulation deterministic: the session and
//! the gravity refill draw from an injected generator, so tests and replays
//! can reproduce any board exactly from a seed.

use crate::types::{GemKind, GEM_KINDS, GEM_KIND_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniform-random gem kind from the alphabet
    pub fn next_gem(&mut self) -> GemKind {
        GEM_KINDS[self.next_range(GEM_KIND_COUNT as u32) as usize]
    }

    /// Get the current RNG state (for restarting a session with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_next_gem_in_alphabet() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..200 {
            let gem = rng.next_gem();
            assert!(GEM_KINDS.contains(&gem));
        }
    }

    #[test]
    fn test_next_gem_covers_alphabet() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; GEM_KIND_COUNT as usize];
        for _ in 0..500 {
            seen[rng.next_gem().index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all gem kinds should appear");
    }
}
