//! Round and run results
//!
//! These are the structures the engine hands back to its callers. They
//! serialize to camelCase JSON; absent prices become `null`.

use crate::matching::MatchingPolicy;
use crate::models::agent::{Buyer, Seller};
use crate::negotiation::NegotiationStrategy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Summary of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// 1-based round number
    pub round_num: usize,
    pub deals: usize,
    pub deadlocks: usize,
    /// Mean deal price, `None` if the round had no deals
    pub avg_price: Option<f64>,
    /// Deal prices in pairing order
    pub prices: Vec<f64>,
    /// Mean offers per deal, 0 if the round had no deals
    pub avg_offers: f64,
}

/// Aggregate economics of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetrics {
    /// Number of deals across all rounds
    pub trade_volume: usize,
    /// Mean deal price across the run, `None` without deals
    pub average_price: Option<f64>,
    /// Σ (valuation − price) over deals
    pub consumer_surplus: f64,
    /// Σ (price − cost) over deals
    pub producer_surplus: f64,
    pub total_surplus: f64,
    /// Deadlocks / (rounds × pairs per round)
    pub deadlock_rate: f64,
    /// Gini coefficient over buyers' then sellers' realized surplus
    pub gini_surplus: f64,
    pub avg_offers_to_deal: f64,
}

/// Effective parameters the run was executed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunParams {
    pub num_buyers: usize,
    pub num_sellers: usize,
    pub rounds: usize,
    pub matching_policy: MatchingPolicy,
    pub buyer_strategy: NegotiationStrategy,
    pub seller_strategy: NegotiationStrategy,
    pub seed: i64,
}

/// Complete output of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub params: RunParams,
    pub metrics: RunMetrics,
    pub rounds: Vec<RoundResult>,
    /// Every deal price, round by round
    pub all_deal_prices: Vec<f64>,
    /// Final buyer arena, in id order
    pub buyers: Vec<Buyer>,
    /// Final seller arena, in id order
    pub sellers: Vec<Seller>,
}

impl RunResult {
    /// The `n` buyers with the highest realized surplus
    ///
    /// Ties keep id order.
    pub fn top_buyers(&self, n: usize) -> Vec<&Buyer> {
        let mut ranked: Vec<&Buyer> = self.buyers.iter().collect();
        ranked.sort_by(|a, b| by_surplus_desc(a.realized_surplus(), b.realized_surplus()));
        ranked.truncate(n);
        ranked
    }

    /// The `n` sellers with the highest realized surplus
    ///
    /// Ties keep id order.
    pub fn top_sellers(&self, n: usize) -> Vec<&Seller> {
        let mut ranked: Vec<&Seller> = self.sellers.iter().collect();
        ranked.sort_by(|a, b| by_surplus_desc(a.realized_surplus(), b.realized_surplus()));
        ranked.truncate(n);
        ranked
    }
}

fn by_surplus_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
