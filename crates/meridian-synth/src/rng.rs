//! Xorshift pseudo-random generator.

/// 32-bit xorshift generator on a signed state.
///
/// The right shift is arithmetic, so sequences match the ones produced by
/// the web front end for the same seed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: i32,
}

impl Xorshift32 {
    /// Creates a generator from a non-zero seed.
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns it reinterpreted as unsigned.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x as u32
    }

    /// Returns a uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}
