//! Seeded linear congruential generator used for reproducible synthetic samples.
//!
//! The generator is intentionally tiny: the sequence is fully determined by the seed and
//! the constants below, so sample sets are identical across runs and platforms.
//! Each [`SeededRandom`] owns its state exclusively; share values, not generators.

/// Seed used when none is given.
pub const DEFAULT_SEED: u32 = 12345;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;

/// Deterministic pseudo-random generator (LCG with `A = 1103515245`, `C = 12345`, `M = 2^31`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state. Equals the construction seed until the first draw.
    pub fn seed(&self) -> u32 {
        self.state
    }

    /// Advance the state and return a uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let next = (self.state as u64 * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        // `next < 2^31`, so it always fits.
        self.state = next as u32;
        next as f64 / LCG_MODULUS as f64
    }

    /// Uniform value in `[min, max)` using a single draw.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Normally distributed value via the Box–Muller transform.
    ///
    /// Consumes exactly two draws. A zero first draw would make `ln(u1)` diverge, so
    /// `u1` is clamped to [`f64::MIN_POSITIVE`]; the result is always finite.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        z0 * std_dev + mean
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
