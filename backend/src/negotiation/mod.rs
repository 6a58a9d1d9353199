//! Bilateral alternating-offer negotiation
//!
//! One buyer and one seller take turns naming a price, buyer first. After
//! each proposal that is not accepted, the other side counters by moving its
//! own standing offer toward the proposer's by its concession fraction.
//!
//! ```text
//! turn 0  buyer proposes   min(buyer_offer, valuation)  → accept? else seller counters
//! turn 1  seller proposes  max(seller_offer, cost)      → accept? else buyer counters
//! turn 2  buyer proposes   ...
//! ...
//! turn MAX_OFFERS - 1      → no acceptance: deadlock
//! ```
//!
//! A proposal is accepted when `cost <= price <= valuation`.
//!
//! # Critical Invariants
//!
//! - **Termination**: at most `max_offers` proposals, never an error
//! - **Deal bounds**: every deal price lies in `[cost, valuation]`
//! - **Deadlock**: `price` is `None` exactly when all `max_offers` proposals
//!   were rejected
//! - **No randomness**: outcome is a pure function of the terms, so the
//!   negotiation never touches the run's RNG

mod strategy;

pub use strategy::{NegotiationStrategy, Opening, StrategyProfile, RECIPROCATION_CAP};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Offer budget per negotiation
pub const MAX_OFFERS: usize = 5;

/// Inputs to one negotiation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegotiationTerms {
    pub buyer_valuation: f64,
    pub seller_cost: f64,
    pub buyer_strategy: NegotiationStrategy,
    pub seller_strategy: NegotiationStrategy,
    pub max_offers: usize,
}

impl NegotiationTerms {
    /// Terms with the standard offer budget of [`MAX_OFFERS`]
    pub fn new(
        buyer_valuation: f64,
        seller_cost: f64,
        buyer_strategy: NegotiationStrategy,
        seller_strategy: NegotiationStrategy,
    ) -> Self {
        Self {
            buyer_valuation,
            seller_cost,
            buyer_strategy,
            seller_strategy,
            max_offers: MAX_OFFERS,
        }
    }
}

/// Who made an offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Buyer,
    Seller,
}

/// One proposal in the offer history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub actor: Actor,
    pub price: f64,
}

/// Result of one negotiation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationOutcome {
    /// Agreed price, `None` on deadlock
    pub price: Option<f64>,
    /// Every proposal in order
    pub history: Vec<Offer>,
    /// Proposals made, including the accepted one
    pub offers: usize,
}

impl NegotiationOutcome {
    pub fn is_deal(&self) -> bool {
        self.price.is_some()
    }

    pub fn is_deadlock(&self) -> bool {
        self.price.is_none()
    }
}

/// Move `current` toward `target` by `fraction` of the distance
fn move_toward(current: f64, target: f64, fraction: f64) -> f64 {
    current + (target - current) * fraction
}

/// Run the alternating-offer protocol for one pair
///
/// # Example
/// ```
/// use market_simulator_core_rs::negotiation::{negotiate_pair, NegotiationStrategy, NegotiationTerms};
///
/// let terms = NegotiationTerms::new(
///     100.0,
///     50.0,
///     NegotiationStrategy::Fair,
///     NegotiationStrategy::Fair,
/// );
/// let outcome = negotiate_pair(&terms);
///
/// assert_eq!(outcome.price, Some(75.0));
/// assert_eq!(outcome.offers, 1);
/// ```
pub fn negotiate_pair(terms: &NegotiationTerms) -> NegotiationOutcome {
    let valuation = terms.buyer_valuation;
    let cost = terms.seller_cost;
    let buyer = terms.buyer_strategy;
    let seller = terms.seller_strategy;

    let mut buyer_offer = buyer.profile().buyer_opening.price(valuation, cost).max(cost);
    let mut seller_offer = seller.profile().seller_opening.price(valuation, cost).max(cost);

    // Standing offers before each side's most recent counter
    let mut prev_buyer_offer: Option<f64> = None;
    let mut prev_seller_offer: Option<f64> = None;

    let mut history = Vec::with_capacity(terms.max_offers);

    for turn in 0..terms.max_offers {
        let (actor, price) = if turn % 2 == 0 {
            (Actor::Buyer, buyer_offer.min(valuation))
        } else {
            (Actor::Seller, seller_offer.max(cost))
        };
        history.push(Offer { actor, price });

        if price >= cost && price <= valuation {
            trace!(turn, ?actor, price, "offer accepted");
            return NegotiationOutcome {
                price: Some(price),
                history,
                offers: turn + 1,
            };
        }

        match actor {
            Actor::Buyer => {
                let buyer_move = prev_buyer_offer.map_or(0.0, |prev| (buyer_offer - prev).abs());
                let fraction = seller.concession(buyer_move);
                prev_seller_offer = Some(seller_offer);
                seller_offer = move_toward(seller_offer, buyer_offer, fraction).max(cost);
            }
            Actor::Seller => {
                let seller_move = prev_seller_offer.map_or(0.0, |prev| (seller_offer - prev).abs());
                let fraction = buyer.concession(seller_move);
                prev_buyer_offer = Some(buyer_offer);
                buyer_offer = move_toward(buyer_offer, seller_offer, fraction).min(valuation);
            }
        }
    }

    trace!(offers = terms.max_offers, "negotiation deadlocked");
    NegotiationOutcome {
        price: None,
        history,
        offers: terms.max_offers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(v: f64, c: f64, b: NegotiationStrategy, s: NegotiationStrategy) -> NegotiationTerms {
        NegotiationTerms::new(v, c, b, s)
    }

    #[test]
    fn test_fair_pair_settles_at_midpoint_on_first_offer() {
        let outcome = negotiate_pair(&terms(
            100.0,
            50.0,
            NegotiationStrategy::Fair,
            NegotiationStrategy::Fair,
        ));

        assert_eq!(outcome.price, Some(75.0));
        assert_eq!(outcome.offers, 1);
        assert_eq!(outcome.history, vec![Offer { actor: Actor::Buyer, price: 75.0 }]);
    }

    #[test]
    fn test_cost_above_valuation_deadlocks() {
        let outcome = negotiate_pair(&terms(
            100.0,
            150.0,
            NegotiationStrategy::Fair,
            NegotiationStrategy::Fair,
        ));

        assert!(outcome.is_deadlock());
        assert_eq!(outcome.offers, MAX_OFFERS);
        assert_eq!(outcome.history.len(), MAX_OFFERS);
    }

    #[test]
    fn test_actors_alternate_starting_with_buyer() {
        let outcome = negotiate_pair(&terms(
            10.0,
            40.0,
            NegotiationStrategy::Opportunistic,
            NegotiationStrategy::Aggressive,
        ));

        let actors: Vec<Actor> = outcome.history.iter().map(|o| o.actor).collect();
        assert_eq!(
            actors,
            vec![Actor::Buyer, Actor::Seller, Actor::Buyer, Actor::Seller, Actor::Buyer]
        );
    }

    #[test]
    fn test_deadlocked_prices_respect_own_limits() {
        let outcome = negotiate_pair(&terms(
            60.0,
            90.0,
            NegotiationStrategy::Aggressive,
            NegotiationStrategy::Opportunistic,
        ));

        for offer in &outcome.history {
            match offer.actor {
                Actor::Buyer => assert!(offer.price <= 60.0),
                Actor::Seller => assert!(offer.price >= 90.0),
            }
        }
    }

    #[test]
    fn test_custom_offer_budget() {
        let mut t = terms(1.0, 2.0, NegotiationStrategy::Fair, NegotiationStrategy::Fair);
        t.max_offers = 2;

        let outcome = negotiate_pair(&t);
        assert_eq!(outcome.offers, 2);
        assert_eq!(outcome.history.len(), 2);
    }
}
