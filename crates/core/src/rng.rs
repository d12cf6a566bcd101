//! RNG module - seedable randomness for food placement
//!
//! The game draws all of its randomness through [`RandomSource`], so tests can
//! drive placement with a fixed seed (or a scripted source) and replay a
//! session exactly. [`SimpleRng`] is the default deterministic generator.

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Uniform value in `[0, n)`. Returns 0 when `n == 0`.
    fn below(&mut self, n: u32) -> u32;
}

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
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state (a session can be replayed from it)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        // Multiply-shift keeps the high bits; the low bits of an LCG are weak.
        ((self.next_u32() as u64 * n as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, n: u32) -> u32 {
        (**self).below(n)
    }
}
