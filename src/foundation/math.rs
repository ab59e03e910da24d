/// Source of the randomized animation intervals and gaze targets.
///
/// Blink delays and gaze retarget intervals are the only nondeterministic
/// inputs to the renderer; everything downstream of them is a pure function
/// of state and landmarks. Injecting this trait lets tests script exact
/// values instead of relying on wall-clock randomness.
pub trait DurationSource {
    /// Uniform sample in `[lo, hi)`.
    fn sample(&mut self, lo: f64, hi: f64) -> f64;
}

/// Deterministic SplitMix64 generator backing [`DurationSource`] by default.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

impl DurationSource for Rng64 {
    fn sample(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64_01() * (hi - lo)
    }
}
