//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the simulator MUST go through this module, and
//! every draw must happen in the documented order (population, then per-round
//! shuffles). One extra or missing draw shifts every value that follows.

mod xorshift;

pub use xorshift::RngManager;
