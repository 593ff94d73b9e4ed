//! Deterministic generator for simulations and tests.
//!
//! The search itself accepts any [`rand::Rng`]; [`Lcg`] exists so that runs
//! can be replayed bit-for-bit from a single 32-bit seed, matching the
//! generator historically used by the simulation harness.

use rand::RngCore;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// Linear congruential generator: `s ← (1664525·s + 1013904223) mod 2³²`.
///
/// Statistically weak, but cheap and fully reproducible. Use
/// [`u_numflow::random::create_rng`] when quality matters more than
/// replayability.
///
/// ```
/// use rand::Rng;
/// use u_pacs::random::Lcg;
///
/// let mut a = Lcg::new(42);
/// let mut b = Lcg::new(42);
/// let xs: Vec<usize> = (0..5).map(|_| a.random_range(0..10)).collect();
/// let ys: Vec<usize> = (0..5).map(|_| b.random_range(0..10)).collect();
/// assert_eq!(xs, ys);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    #[cfg(test)]
    fn next_unit(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
