//! Market Simulator Core - Rust Engine
//!
//! Deterministic agent-based market simulator: buyers and sellers drawn from
//! configured distributions are paired each round and bargain bilaterally
//! with alternating offers. The run reports trade volume, surplus, deadlock
//! rate and surplus inequality.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation and seeded shuffle
//! - **population**: Distributions and the one-time population draw
//! - **matching**: Per-round pairing policies (random, best-fit)
//! - **negotiation**: Alternating-offer protocol and strategy table
//! - **metrics**: Gini coefficient and averages
//! - **orchestrator**: Round loop, scenario config, run results
//! - **models**: Domain types (Buyer, Seller)
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG, fixed draw order)
//! 2. Every deal price lies in `[seller cost, buyer valuation]`
//! 3. Realized surplus never decreases

// Module declarations
pub mod core;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod negotiation;
pub mod orchestrator;
pub mod population;
pub mod rng;

// Re-exports for convenience
pub use crate::core::error::SimulationError;
pub use matching::{MatchingPolicy, Pairing};
pub use metrics::gini;
pub use models::{Buyer, Seller};
pub use negotiation::{negotiate_pair, NegotiationOutcome, NegotiationStrategy, NegotiationTerms, MAX_OFFERS};
pub use orchestrator::{
    compute_config_hash, run_simulation, Orchestrator, RoundResult, RunMetrics, RunParams, RunResult,
    ScenarioConfig,
};
pub use population::{generate_population, Distribution, Population};
pub use rng::RngManager;
