//! Negotiation strategies
//!
//! A strategy is a row in a fixed table: where the agent opens and how far it
//! concedes toward the counterparty each time it counters. Strategy keys come
//! from scenario files as strings; keys outside the three named strategies are
//! accepted and mapped to [`NegotiationStrategy::Baseline`] (midpoint
//! openings, 0.3 concession) rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy an agent negotiates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NegotiationStrategy {
    /// Opens far from the midpoint, concedes 10% per counter
    Aggressive,
    /// Opens at the midpoint, concedes 50% per counter
    #[default]
    Fair,
    /// Opens off-centre, concedes 30% but reciprocates the other side's moves
    Opportunistic,
    /// Fallback for unrecognised keys
    Baseline,
}

/// Opening offer rule, expressed on the gap `valuation - cost`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opening {
    /// `cost + gap * f`
    AboveCost(f64),
    /// `valuation - gap * f`
    BelowValuation(f64),
}

impl Opening {
    pub fn price(self, valuation: f64, cost: f64) -> f64 {
        let gap = valuation - cost;
        match self {
            Opening::AboveCost(f) => cost + gap * f,
            Opening::BelowValuation(f) => valuation - gap * f,
        }
    }
}

/// Table row for one strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyProfile {
    /// Fraction of the distance to the counterparty's offer conceded per counter
    pub concession: f64,
    /// Where the agent opens when it is the buyer
    pub buyer_opening: Opening,
    /// Where the agent opens when it is the seller
    pub seller_opening: Opening,
    /// Whether the concession grows with the counterparty's last move
    pub reciprocates: bool,
}

const AGGRESSIVE: StrategyProfile = StrategyProfile {
    concession: 0.1,
    buyer_opening: Opening::AboveCost(0.2),
    seller_opening: Opening::BelowValuation(0.2),
    reciprocates: false,
};

const FAIR: StrategyProfile = StrategyProfile {
    concession: 0.5,
    buyer_opening: Opening::AboveCost(0.5),
    seller_opening: Opening::AboveCost(0.5),
    reciprocates: false,
};

const OPPORTUNISTIC: StrategyProfile = StrategyProfile {
    concession: 0.3,
    buyer_opening: Opening::AboveCost(0.35),
    seller_opening: Opening::AboveCost(0.65),
    reciprocates: true,
};

const BASELINE: StrategyProfile = StrategyProfile {
    concession: 0.3,
    buyer_opening: Opening::AboveCost(0.5),
    seller_opening: Opening::AboveCost(0.5),
    reciprocates: false,
};

impl NegotiationStrategy {
    /// All strategies a scenario may name explicitly
    pub const NAMED: [NegotiationStrategy; 3] = [
        NegotiationStrategy::Aggressive,
        NegotiationStrategy::Fair,
        NegotiationStrategy::Opportunistic,
    ];

    /// Resolve a strategy key; unknown keys map to `Baseline`
    pub fn from_key(key: &str) -> Self {
        match key {
            "aggressive" => NegotiationStrategy::Aggressive,
            "fair" => NegotiationStrategy::Fair,
            "opportunistic" => NegotiationStrategy::Opportunistic,
            _ => NegotiationStrategy::Baseline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NegotiationStrategy::Aggressive => "aggressive",
            NegotiationStrategy::Fair => "fair",
            NegotiationStrategy::Opportunistic => "opportunistic",
            NegotiationStrategy::Baseline => "baseline",
        }
    }

    pub fn profile(self) -> &'static StrategyProfile {
        match self {
            NegotiationStrategy::Aggressive => &AGGRESSIVE,
            NegotiationStrategy::Fair => &FAIR,
            NegotiationStrategy::Opportunistic => &OPPORTUNISTIC,
            NegotiationStrategy::Baseline => &BASELINE,
        }
    }

    /// Concession fraction for the next counter-offer
    ///
    /// `counterparty_move` is the absolute size of the counterparty's most
    /// recent concession (0 if it has not moved yet). Reciprocating
    /// strategies add twice that move to their base, capped at 0.8.
    pub fn concession(self, counterparty_move: f64) -> f64 {
        let profile = self.profile();
        if profile.reciprocates && counterparty_move > 0.0 {
            (profile.concession + counterparty_move * 2.0).min(RECIPROCATION_CAP)
        } else {
            profile.concession
        }
    }
}

/// Upper bound on a reciprocating concession
pub const RECIPROCATION_CAP: f64 = 0.8;

impl From<String> for NegotiationStrategy {
    fn from(key: String) -> Self {
        NegotiationStrategy::from_key(&key)
    }
}

impl From<NegotiationStrategy> for String {
    fn from(strategy: NegotiationStrategy) -> Self {
        strategy.as_str().to_string()
    }
}

impl fmt::Display for NegotiationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
