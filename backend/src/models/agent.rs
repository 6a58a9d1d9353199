//! Market participants
//!
//! Buyers carry a private valuation, sellers a private cost. Both are drawn
//! once per run by the population generator and never change afterwards.
//! The only mutable field is `realized_surplus`, which the orchestrator
//! accumulates after every deal the agent takes part in.
//!
//! Agents are stored in two arenas (`Vec<Buyer>`, `Vec<Seller>`) owned by the
//! orchestrator; matching and aggregation address them by index.

use serde::{Deserialize, Serialize};

/// A buyer with a fixed valuation for one unit of the good
///
/// # Example
/// ```
/// use market_simulator_core_rs::Buyer;
///
/// let mut buyer = Buyer::new(1, 100.0);
/// assert_eq!(buyer.id(), "B1");
///
/// buyer.record_deal(75.0);
/// assert_eq!(buyer.realized_surplus(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    id: String,
    valuation: f64,
    realized_surplus: f64,
}

impl Buyer {
    /// Create buyer number `n` (1-based, id `"B{n}"`)
    pub fn new(n: usize, valuation: f64) -> Self {
        Self {
            id: format!("B{}", n),
            valuation,
            realized_surplus: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn valuation(&self) -> f64 {
        self.valuation
    }

    pub fn realized_surplus(&self) -> f64 {
        self.realized_surplus
    }

    /// Credit the consumer surplus of a deal at `price`
    ///
    /// Surplus is floored at zero. Returns the amount credited.
    pub fn record_deal(&mut self, price: f64) -> f64 {
        let surplus = (self.valuation - price).max(0.0);
        self.realized_surplus += surplus;
        surplus
    }
}

/// A seller with a fixed production cost for one unit of the good
///
/// # Example
/// ```
/// use market_simulator_core_rs::Seller;
///
/// let mut seller = Seller::new(3, 50.0);
/// assert_eq!(seller.id(), "S3");
///
/// seller.record_deal(75.0);
/// assert_eq!(seller.realized_surplus(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    id: String,
    cost: f64,
    realized_surplus: f64,
}

impl Seller {
    /// Create seller number `n` (1-based, id `"S{n}"`)
    pub fn new(n: usize, cost: f64) -> Self {
        Self {
            id: format!("S{}", n),
            cost,
            realized_surplus: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn realized_surplus(&self) -> f64 {
        self.realized_surplus
    }

    /// Credit the producer surplus of a deal at `price`
    ///
    /// Surplus is floored at zero. Returns the amount credited.
    pub fn record_deal(&mut self, price: f64) -> f64 {
        let surplus = (price - self.cost).max(0.0);
        self.realized_surplus += surplus;
        surplus
    }
}
