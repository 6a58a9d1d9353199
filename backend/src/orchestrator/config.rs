//! Scenario configuration
//!
//! A scenario is everything needed to reproduce a run: population sizes,
//! the two sampling distributions, the matching policy, both negotiation
//! strategies and the seed. Scenario files use the collaborator's camelCase
//! JSON shape:
//!
//! ```json
//! {
//!   "name": "baseline",
//!   "numBuyers": 20,
//!   "numSellers": 15,
//!   "rounds": 10,
//!   "valuationDistribution": { "type": "normal", "params": { "mu": 100, "sigma": 15 } },
//!   "costDistribution": { "type": "uniform", "params": { "min": 40, "max": 90 } },
//!   "matchingPolicy": "best-fit",
//!   "negotiationStrategyBuyer": "fair",
//!   "negotiationStrategySeller": "opportunistic",
//!   "seed": 42
//! }
//! ```
//!
//! The engine trusts whatever `ScenarioConfig` it receives. Range checks live
//! in [`ScenarioConfig::validate`], which front ends call before running.

use crate::core::error::SimulationError;
use crate::matching::MatchingPolicy;
use crate::negotiation::NegotiationStrategy;
use crate::population::{Distribution, DistributionSpec};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Smallest accepted population size or round count
pub const MIN_COUNT: usize = 1;

/// Largest accepted population size or round count
pub const MAX_COUNT: usize = 200;

/// Immutable description of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// Display name, not used by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub num_buyers: usize,

    pub num_sellers: usize,

    pub rounds: usize,

    /// Distribution buyer valuations are drawn from
    pub valuation_distribution: Distribution,

    /// Distribution seller costs are drawn from
    pub cost_distribution: Distribution,

    pub matching_policy: MatchingPolicy,

    #[serde(rename = "negotiationStrategyBuyer")]
    pub buyer_strategy: NegotiationStrategy,

    #[serde(rename = "negotiationStrategySeller")]
    pub seller_strategy: NegotiationStrategy,

    /// RNG seed for deterministic simulation; any integer, negative included
    pub seed: i64,
}

/// Scenario as read off the wire, before distribution tags are resolved
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScenario {
    #[serde(default)]
    name: Option<String>,
    num_buyers: usize,
    num_sellers: usize,
    rounds: usize,
    valuation_distribution: DistributionSpec,
    cost_distribution: DistributionSpec,
    matching_policy: MatchingPolicy,
    negotiation_strategy_buyer: NegotiationStrategy,
    negotiation_strategy_seller: NegotiationStrategy,
    seed: i64,
}

impl TryFrom<RawScenario> for ScenarioConfig {
    type Error = SimulationError;

    fn try_from(raw: RawScenario) -> Result<Self, Self::Error> {
        Ok(ScenarioConfig {
            name: raw.name,
            num_buyers: raw.num_buyers,
            num_sellers: raw.num_sellers,
            rounds: raw.rounds,
            valuation_distribution: Distribution::try_from(raw.valuation_distribution)?,
            cost_distribution: Distribution::try_from(raw.cost_distribution)?,
            matching_policy: raw.matching_policy,
            buyer_strategy: raw.negotiation_strategy_buyer,
            seller_strategy: raw.negotiation_strategy_seller,
            seed: raw.seed,
        })
    }
}

impl ScenarioConfig {
    /// Parse a scenario from JSON
    ///
    /// # Errors
    /// - `SerializationError` for malformed JSON or missing fields
    /// - `InvalidConfig` for an unknown distribution type
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let raw: RawScenario = serde_json::from_str(json)
            .map_err(|e| SimulationError::SerializationError(format!("Scenario parse failed: {}", e)))?;
        raw.try_into()
    }

    /// Negotiations per round, fixed for the whole run
    pub fn pairs_per_round(&self) -> usize {
        self.num_buyers.min(self.num_sellers)
    }

    /// Reject scenarios outside the supported envelope
    ///
    /// Checks counts and rounds against `MIN_COUNT..=MAX_COUNT`, distribution
    /// parameters, and that both strategies are named ones.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (field, value) in [
            ("numBuyers", self.num_buyers),
            ("numSellers", self.num_sellers),
            ("rounds", self.rounds),
        ] {
            if !(MIN_COUNT..=MAX_COUNT).contains(&value) {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} must be between {} and {}, got {}",
                    field, MIN_COUNT, MAX_COUNT, value
                )));
            }
        }

        self.valuation_distribution.validate("valuationDistribution")?;
        self.cost_distribution.validate("costDistribution")?;

        for (field, strategy) in [
            ("negotiationStrategyBuyer", self.buyer_strategy),
            ("negotiationStrategySeller", self.seller_strategy),
        ] {
            if !NegotiationStrategy::NAMED.contains(&strategy) {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} must be one of aggressive, fair, opportunistic",
                    field
                )));
            }
        }

        Ok(())
    }
}

/// Compute deterministic SHA256 hash of a scenario
///
/// Lets stored results be matched back to the exact scenario that produced
/// them. The display-only `name` is left out, and object keys are sorted
/// recursively before hashing so the digest does not depend on field order
/// or on how `serde_json::Map` is configured.
pub fn compute_config_hash(config: &ScenarioConfig) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let mut value = serde_json::to_value(config)
        .map_err(|e| SimulationError::SerializationError(format!("Config serialization failed: {}", e)))?;
    if let Value::Object(map) = &mut value {
        map.remove("name");
    }

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| SimulationError::SerializationError(format!("Config serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
