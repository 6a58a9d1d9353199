//! Orchestrator Engine
//!
//! Drives a run from seed to result:
//!
//! ```text
//! new():
//!   1. Seed RNG from scenario
//!   2. Draw buyers, then sellers
//!
//! For each round r = 1..=rounds:
//!   1. Pair agents (matcher; random policy shuffles buyers, then sellers)
//!   2. Negotiate each pair in pairing order
//!   3. Credit realized surplus for deals, count deadlocks
//!   4. Summarise the round
//!
//! finish():
//!   Run remaining rounds, compute run metrics and Gini over surplus
//! ```
//!
//! Everything happens on one thread, in exactly this order. The sequence of
//! RNG draws is the reproducibility contract, so pairs within a round are
//! never negotiated concurrently or out of order.
//!
//! # Example
//!
//! ```
//! use market_simulator_core_rs::orchestrator::{run_simulation, ScenarioConfig};
//! use market_simulator_core_rs::{Distribution, MatchingPolicy, NegotiationStrategy};
//!
//! let config = ScenarioConfig {
//!     name: None,
//!     num_buyers: 1,
//!     num_sellers: 1,
//!     rounds: 1,
//!     valuation_distribution: Distribution::Uniform { min: 100.0, max: 100.0 },
//!     cost_distribution: Distribution::Uniform { min: 50.0, max: 50.0 },
//!     matching_policy: MatchingPolicy::Random,
//!     buyer_strategy: NegotiationStrategy::Fair,
//!     seller_strategy: NegotiationStrategy::Fair,
//!     seed: 7,
//! };
//!
//! let result = run_simulation(&config);
//! assert_eq!(result.metrics.trade_volume, 1);
//! assert_eq!(result.metrics.average_price, Some(75.0));
//! assert_eq!(result.metrics.total_surplus, 50.0);
//! ```

use super::config::ScenarioConfig;
use super::results::{RoundResult, RunMetrics, RunParams, RunResult};
use crate::matching::Matcher;
use crate::metrics::{gini, mean};
use crate::models::agent::{Buyer, Seller};
use crate::negotiation::{negotiate_pair, NegotiationTerms};
use crate::population::generate_population;
use crate::rng::RngManager;
use tracing::{debug, info};

/// Run-wide accumulators
#[derive(Debug, Clone, Default)]
struct RunTotals {
    deal_prices: Vec<f64>,
    consumer_surplus: f64,
    producer_surplus: f64,
    offers_for_deals: usize,
    deadlocks: usize,
}

/// Round-by-round simulation driver
///
/// Owns the RNG and both agent arenas for the lifetime of a run; nothing else
/// mutates an agent's realized surplus.
pub struct Orchestrator {
    config: ScenarioConfig,
    rng: RngManager,
    buyers: Vec<Buyer>,
    sellers: Vec<Seller>,
    matcher: Box<dyn Matcher>,
    pairs_per_round: usize,
    round_results: Vec<RoundResult>,
    totals: RunTotals,
}

impl Orchestrator {
    /// Seed the RNG and draw the population
    ///
    /// The scenario is taken as already validated.
    pub fn new(config: ScenarioConfig) -> Self {
        let mut rng = RngManager::new(rng_seed(config.seed));

        let population = generate_population(
            config.num_buyers,
            config.num_sellers,
            &config.valuation_distribution,
            &config.cost_distribution,
            &mut rng,
        );
        let pairs_per_round = population.pairs_per_round();

        info!(
            seed = config.seed,
            buyers = config.num_buyers,
            sellers = config.num_sellers,
            rounds = config.rounds,
            policy = %config.matching_policy,
            buyer_strategy = %config.buyer_strategy,
            seller_strategy = %config.seller_strategy,
            "population drawn"
        );

        Self {
            matcher: config.matching_policy.matcher(),
            config,
            rng,
            buyers: population.buyers,
            sellers: population.sellers,
            pairs_per_round,
            round_results: Vec::new(),
            totals: RunTotals::default(),
        }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn buyers(&self) -> &[Buyer] {
        &self.buyers
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    pub fn rng(&self) -> &RngManager {
        &self.rng
    }

    pub fn pairs_per_round(&self) -> usize {
        self.pairs_per_round
    }

    /// Rounds completed so far
    pub fn current_round(&self) -> usize {
        self.round_results.len()
    }

    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    pub fn is_complete(&self) -> bool {
        self.current_round() >= self.config.rounds
    }

    /// Execute the next round
    ///
    /// Returns `None` once all configured rounds have run.
    pub fn run_round(&mut self) -> Option<RoundResult> {
        if self.is_complete() {
            return None;
        }
        let round_num = self.current_round() + 1;

        // STEP 1: PAIRING
        let pairs = self.matcher.pair(&self.buyers, &self.sellers, &mut self.rng);

        // STEP 2: NEGOTIATION + SURPLUS
        let mut prices = Vec::new();
        let mut deadlocks = 0;
        let mut offers_this_round = 0;

        for pairing in pairs.iter().take(self.pairs_per_round) {
            let buyer = &mut self.buyers[pairing.buyer];
            let seller = &mut self.sellers[pairing.seller];

            let outcome = negotiate_pair(&NegotiationTerms::new(
                buyer.valuation(),
                seller.cost(),
                self.config.buyer_strategy,
                self.config.seller_strategy,
            ));

            match outcome.price {
                Some(price) => {
                    self.totals.consumer_surplus += buyer.record_deal(price);
                    self.totals.producer_surplus += seller.record_deal(price);
                    self.totals.deal_prices.push(price);
                    self.totals.offers_for_deals += outcome.offers;
                    offers_this_round += outcome.offers;
                    prices.push(price);
                }
                None => {
                    deadlocks += 1;
                    self.totals.deadlocks += 1;
                }
            }
        }

        // STEP 3: ROUND SUMMARY
        let deals = prices.len();
        let result = RoundResult {
            round_num,
            deals,
            deadlocks,
            avg_price: mean(&prices),
            prices,
            avg_offers: if deals > 0 {
                offers_this_round as f64 / deals as f64
            } else {
                0.0
            },
        };

        debug!(
            round = round_num,
            deals,
            deadlocks,
            avg_price = ?result.avg_price,
            "round complete"
        );

        self.round_results.push(result.clone());
        Some(result)
    }

    /// Run any remaining rounds and assemble the result
    pub fn finish(mut self) -> RunResult {
        while self.run_round().is_some() {}

        let metrics = self.compute_metrics();

        info!(
            seed = self.config.seed,
            trade_volume = metrics.trade_volume,
            deadlock_rate = metrics.deadlock_rate,
            total_surplus = metrics.total_surplus,
            gini = metrics.gini_surplus,
            "run complete"
        );

        RunResult {
            params: RunParams {
                num_buyers: self.config.num_buyers,
                num_sellers: self.config.num_sellers,
                rounds: self.config.rounds,
                matching_policy: self.config.matching_policy,
                buyer_strategy: self.config.buyer_strategy,
                seller_strategy: self.config.seller_strategy,
                seed: self.config.seed,
            },
            metrics,
            rounds: self.round_results,
            all_deal_prices: self.totals.deal_prices,
            buyers: self.buyers,
            sellers: self.sellers,
        }
    }

    fn compute_metrics(&self) -> RunMetrics {
        let trade_volume = self.totals.deal_prices.len();
        let total_pairs = self.config.rounds * self.pairs_per_round;

        // Buyers first, then sellers
        let surpluses: Vec<f64> = self
            .buyers
            .iter()
            .map(Buyer::realized_surplus)
            .chain(self.sellers.iter().map(Seller::realized_surplus))
            .collect();

        RunMetrics {
            trade_volume,
            average_price: mean(&self.totals.deal_prices),
            consumer_surplus: self.totals.consumer_surplus,
            producer_surplus: self.totals.producer_surplus,
            total_surplus: self.totals.consumer_surplus + self.totals.producer_surplus,
            deadlock_rate: if total_pairs > 0 {
                self.totals.deadlocks as f64 / total_pairs as f64
            } else {
                0.0
            },
            gini_surplus: gini(&surpluses),
            avg_offers_to_deal: if trade_volume > 0 {
                self.totals.offers_for_deals as f64 / trade_volume as f64
            } else {
                0.0
            },
        }
    }
}

/// Generator seed for a scenario seed
///
/// Two's-complement bit pattern, so negative seeds map to distinct states.
pub fn rng_seed(seed: i64) -> u64 {
    seed as u64
}

/// Run a scenario start to finish
///
/// Pure: the same scenario (seed included) always yields an identical result.
pub fn run_simulation(config: &ScenarioConfig) -> RunResult {
    Orchestrator::new(config.clone()).finish()
}
