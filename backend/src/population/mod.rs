//! Population generation
//!
//! Draws every buyer valuation and every seller cost exactly once per run,
//! before the first round. All buyers are drawn before any seller, and draws
//! below zero are clamped to zero.
//!
//! # Example
//!
//! ```
//! use market_simulator_core_rs::population::{generate_population, Distribution};
//! use market_simulator_core_rs::rng::RngManager;
//!
//! let mut rng = RngManager::new(42);
//! let population = generate_population(
//!     3,
//!     2,
//!     &Distribution::Uniform { min: 80.0, max: 120.0 },
//!     &Distribution::Uniform { min: 40.0, max: 90.0 },
//!     &mut rng,
//! );
//!
//! assert_eq!(population.buyers.len(), 3);
//! assert_eq!(population.sellers[1].id(), "S2");
//! ```

mod distribution;

pub use distribution::{Distribution, DistributionParams, DistributionSpec};

use crate::models::agent::{Buyer, Seller};
use crate::rng::RngManager;

/// Agent arenas for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub buyers: Vec<Buyer>,
    pub sellers: Vec<Seller>,
}

impl Population {
    /// Number of negotiations per round: `min(buyers, sellers)`
    pub fn pairs_per_round(&self) -> usize {
        self.buyers.len().min(self.sellers.len())
    }
}

/// Draw the buyer and seller arenas
///
/// Draw order is part of the reproducibility contract: `num_buyers`
/// valuations first, then `num_sellers` costs.
pub fn generate_population(
    num_buyers: usize,
    num_sellers: usize,
    valuation_distribution: &Distribution,
    cost_distribution: &Distribution,
    rng: &mut RngManager,
) -> Population {
    let buyers: Vec<Buyer> = (1..=num_buyers)
        .map(|n| Buyer::new(n, valuation_distribution.sample(rng).max(0.0)))
        .collect();

    let sellers: Vec<Seller> = (1..=num_sellers)
        .map(|n| Seller::new(n, cost_distribution.sample(rng).max(0.0)))
        .collect();

    Population { buyers, sellers }
}
