//! Error taxonomy for the market simulator
//!
//! The engine has exactly one failure mode of its own: a configuration it
//! cannot interpret (an unknown distribution kind). Scenario validation and
//! config hashing reuse the same enum so callers handle a single type.

use thiserror::Error;

/// Errors raised by the simulator core
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration error: unknown distribution kind, out-of-range
    /// parameters, unsupported strategy key
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Scenario (de)serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
