//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws, bit for bit. A market run is fully
//! described by its seed and configuration, so replaying a scenario must
//! reproduce every valuation, every pairing and every price.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use market_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let u = rng.next_f64(); // [0.0, 1.0)
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is remapped to 1 (xorshift cannot leave the all-zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// This is the uniform draw every distribution sampler and the shuffle
    /// are built on. Each call consumes exactly one `next()`.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits → exact f64 mantissa
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Seeded Fisher–Yates shuffle
    ///
    /// Returns a fresh permutation and leaves `items` untouched. Walks from the
    /// last position down to 1, consuming one `next_f64()` per position, so a
    /// slice of length `n` always costs `n - 1` draws (none for `n <= 1`).
    ///
    /// # Example
    /// ```
    /// use market_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// let ids = vec!["B1", "B2", "B3"];
    /// let shuffled = rng.shuffle(&ids);
    ///
    /// assert_eq!(ids, vec!["B1", "B2", "B3"]);
    /// assert_eq!(shuffled.len(), 3);
    /// ```
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = ((self.next_f64() * (i + 1) as f64).floor() as usize).min(i);
            out.swap(i, j);
        }
        out
    }

    /// Get current RNG state (for replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
