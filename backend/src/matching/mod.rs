//! Round matching
//!
//! Each round the orchestrator asks a [`Matcher`] to line buyers up against
//! sellers. Pairs are formed index by index over the two ordered lists, and
//! only the first `min(buyers, sellers)` positions trade. Agents beyond that
//! sit the round out; nothing carries over.
//!
//! # Policies
//!
//! 1. **Random**: shuffle buyers, then shuffle sellers (two RNG calls, in
//!    that order)
//! 2. **BestFit**: highest valuations meet lowest costs; consumes no draws
//!
//! ```
//! use market_simulator_core_rs::matching::{Matcher, MatchingPolicy};
//! use market_simulator_core_rs::rng::RngManager;
//! use market_simulator_core_rs::{Buyer, Seller};
//!
//! let buyers = vec![Buyer::new(1, 90.0), Buyer::new(2, 120.0)];
//! let sellers = vec![Seller::new(1, 70.0), Seller::new(2, 40.0), Seller::new(3, 55.0)];
//!
//! let mut matcher = MatchingPolicy::BestFit.matcher();
//! let pairs = matcher.pair(&buyers, &sellers, &mut RngManager::new(1));
//!
//! assert_eq!(pairs.len(), 2);
//! assert_eq!((pairs[0].buyer, pairs[0].seller), (1, 1)); // B2 ↔ S2
//! ```

use crate::models::agent::{Buyer, Seller};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One buyer/seller pairing, as indices into the agent arenas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub buyer: usize,
    pub seller: usize,
}

/// Pairs buyers with sellers for one round
pub trait Matcher {
    /// Produce exactly `min(buyers.len(), sellers.len())` pairings
    fn pair(&mut self, buyers: &[Buyer], sellers: &[Seller], rng: &mut RngManager) -> Vec<Pairing>;
}

/// Matching policy selected by the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchingPolicy {
    #[default]
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "best-fit")]
    BestFit,
}

impl MatchingPolicy {
    /// Instantiate the matcher for this policy
    pub fn matcher(self) -> Box<dyn Matcher> {
        match self {
            MatchingPolicy::Random => Box::new(RandomMatcher),
            MatchingPolicy::BestFit => Box::new(BestFitMatcher),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchingPolicy::Random => "random",
            MatchingPolicy::BestFit => "best-fit",
        }
    }
}

impl fmt::Display for MatchingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniformly random pairing via two seeded shuffles
pub struct RandomMatcher;

impl Matcher for RandomMatcher {
    fn pair(&mut self, buyers: &[Buyer], sellers: &[Seller], rng: &mut RngManager) -> Vec<Pairing> {
        let buyer_order = rng.shuffle(&(0..buyers.len()).collect::<Vec<_>>());
        let seller_order = rng.shuffle(&(0..sellers.len()).collect::<Vec<_>>());
        zip_orders(&buyer_order, &seller_order)
    }
}

/// Rank-order pairing: valuation descending against cost ascending
///
/// Both sorts are stable, so equal valuations (or costs) keep arena order.
pub struct BestFitMatcher;

impl Matcher for BestFitMatcher {
    fn pair(&mut self, buyers: &[Buyer], sellers: &[Seller], _rng: &mut RngManager) -> Vec<Pairing> {
        let mut buyer_order: Vec<usize> = (0..buyers.len()).collect();
        buyer_order.sort_by(|&a, &b| {
            buyers[b]
                .valuation()
                .partial_cmp(&buyers[a].valuation())
                .unwrap_or(Ordering::Equal)
        });

        let mut seller_order: Vec<usize> = (0..sellers.len()).collect();
        seller_order.sort_by(|&a, &b| {
            sellers[a]
                .cost()
                .partial_cmp(&sellers[b].cost())
                .unwrap_or(Ordering::Equal)
        });

        zip_orders(&buyer_order, &seller_order)
    }
}

fn zip_orders(buyer_order: &[usize], seller_order: &[usize]) -> Vec<Pairing> {
    buyer_order
        .iter()
        .zip(seller_order)
        .map(|(&buyer, &seller)| Pairing { buyer, seller })
        .collect()
}
