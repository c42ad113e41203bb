//! Random sources for initial velocities.
//! Injected explicitly so simulations are reproducible from a seed.

/// Anything that can produce uniform floats in `[0, 1]`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1]`, both ends included.
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in `[lo, hi]`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic and fast; not suitable for anything security related.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        unit_from_bits(self.next_u64())
    }
}

/// Map the top 24 bits onto `[0, 1]`. 24 bits fit the f32 mantissa, so every
/// step is exact and the all-ones pattern lands on 1.0.
fn unit_from_bits(bits: u64) -> f32 {
    const MAX: u32 = (1 << 24) - 1;
    (bits >> 40) as f32 / MAX as f32
}
