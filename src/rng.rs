//! Xorshift32 PRNG behind a pluggable random-source seam.
//!
//! Algorithm: x ^= x << 13; x ^= x >> 17; x ^= x << 5;
//! Every spawn decision draws through `RandomSource`, so deterministic
//! replays and tests can substitute a scripted sequence for `SeededRng`.

/// Uniform integer draws for spawn gates and column picks.
pub trait RandomSource {
    /// Random i32 in [min, max_exclusive).
    fn next_range(&mut self, min: i32, max_exclusive: i32) -> i32;
}

#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        // Must be non-zero; use default if 0 provided
        let state = if seed == 0 { 0xDEADBEEF } else { seed };
        Self { state }
    }

    pub fn get_state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32.
    pub fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.state
    }
}

impl RandomSource for SeededRng {
    fn next_range(&mut self, min: i32, max_exclusive: i32) -> i32 {
        let range = (max_exclusive - min) as u32;
        min + (self.next() % range) as i32
    }
}
