//! Orchestrator - round loop and run aggregation
//!
//! See `engine.rs` for the round loop, `config.rs` for scenarios and
//! `results.rs` for what a run returns.

pub mod config;
pub mod engine;
pub mod results;

pub use crate::core::error::SimulationError;
pub use config::{compute_config_hash, ScenarioConfig, MAX_COUNT, MIN_COUNT};
pub use engine::{rng_seed, run_simulation, Orchestrator};
pub use results::{RoundResult, RunMetrics, RunParams, RunResult};
