//! Probability distributions for agent valuations and costs
//!
//! Scenario files describe a distribution as a tagged object:
//!
//! ```json
//! { "type": "normal", "params": { "mu": 100.0, "sigma": 15.0 } }
//! ```
//!
//! The tag is resolved once, when the scenario is read. Unknown tags are a
//! configuration error; there is no fallback kind. Missing parameters take
//! the neutral defaults (`min=0, max=1`, `mu=0, sigma=1`).

use crate::core::error::SimulationError;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Sampling distribution for valuations (buyers) or costs (sellers)
///
/// # Example
/// ```
/// use market_simulator_core_rs::{Distribution, RngManager};
///
/// let dist = Distribution::Uniform { min: 80.0, max: 120.0 };
/// let mut rng = RngManager::new(42);
///
/// let v = dist.sample(&mut rng);
/// assert!(v >= 80.0 && v < 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DistributionSpec", into = "DistributionSpec")]
pub enum Distribution {
    /// Uniform on `[min, max)`
    Uniform { min: f64, max: f64 },

    /// Gaussian with mean `mu` and standard deviation `sigma`
    Normal { mu: f64, sigma: f64 },

    /// `exp(N(mu, sigma))`, for heavy right tails
    LogNormal { mu: f64, sigma: f64 },
}

impl Distribution {
    /// Build a distribution from its wire tag and raw parameters
    ///
    /// # Errors
    /// `SimulationError::InvalidConfig` if `kind` is not one of
    /// `uniform`, `normal`, `lognormal`.
    pub fn from_parts(kind: &str, params: &DistributionParams) -> Result<Self, SimulationError> {
        match kind {
            "uniform" => Ok(Distribution::Uniform {
                min: params.min.unwrap_or(0.0),
                max: params.max.unwrap_or(1.0),
            }),
            "normal" => Ok(Distribution::Normal {
                mu: params.mu.unwrap_or(0.0),
                sigma: params.sigma.unwrap_or(1.0),
            }),
            "lognormal" => Ok(Distribution::LogNormal {
                mu: params.mu.unwrap_or(0.0),
                sigma: params.sigma.unwrap_or(1.0),
            }),
            other => Err(SimulationError::InvalidConfig(format!(
                "unknown distribution type '{}'",
                other
            ))),
        }
    }

    /// Wire tag of this distribution
    pub fn kind(&self) -> &'static str {
        match self {
            Distribution::Uniform { .. } => "uniform",
            Distribution::Normal { .. } => "normal",
            Distribution::LogNormal { .. } => "lognormal",
        }
    }

    /// Draw one value
    ///
    /// Uniform consumes one draw; normal and lognormal consume two
    /// (Box–Muller), plus one more for each uniform that came out exactly 0.
    pub fn sample(&self, rng: &mut RngManager) -> f64 {
        match *self {
            Distribution::Uniform { min, max } => min + rng.next_f64() * (max - min),
            Distribution::Normal { mu, sigma } => sample_normal(rng, mu, sigma),
            Distribution::LogNormal { mu, sigma } => sample_normal(rng, mu, sigma).exp(),
        }
    }

    /// Parameter sanity checks applied to incoming scenarios
    ///
    /// Not called by the engine itself.
    pub fn validate(&self, field: &str) -> Result<(), SimulationError> {
        let invalid = |msg: String| Err(SimulationError::InvalidConfig(format!("{}: {}", field, msg)));

        match *self {
            Distribution::Uniform { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return invalid("uniform bounds must be finite".to_string());
                }
                if min > max {
                    return invalid(format!("uniform min ({}) exceeds max ({})", min, max));
                }
            }
            Distribution::Normal { mu, sigma } | Distribution::LogNormal { mu, sigma } => {
                if !mu.is_finite() || !sigma.is_finite() {
                    return invalid(format!("{} parameters must be finite", self.kind()));
                }
                if sigma <= 0.0 {
                    return invalid(format!("{} sigma must be positive, got {}", self.kind(), sigma));
                }
            }
        }
        Ok(())
    }
}

/// Box–Muller transform, cosine branch only
fn sample_normal(rng: &mut RngManager, mu: f64, sigma: f64) -> f64 {
    let u1 = nonzero_uniform(rng);
    let u2 = nonzero_uniform(rng);
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    z * sigma + mu
}

fn nonzero_uniform(rng: &mut RngManager) -> f64 {
    loop {
        let u = rng.next_f64();
        if u != 0.0 {
            return u;
        }
    }
}

/// Raw parameters as they appear on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
}

/// Tagged wire form of [`Distribution`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: DistributionParams,
}

impl TryFrom<DistributionSpec> for Distribution {
    type Error = SimulationError;

    fn try_from(spec: DistributionSpec) -> Result<Self, Self::Error> {
        Distribution::from_parts(&spec.kind, &spec.params)
    }
}

impl From<Distribution> for DistributionSpec {
    fn from(dist: Distribution) -> Self {
        let params = match dist {
            Distribution::Uniform { min, max } => DistributionParams {
                min: Some(min),
                max: Some(max),
                ..Default::default()
            },
            Distribution::Normal { mu, sigma } | Distribution::LogNormal { mu, sigma } => {
                DistributionParams {
                    mu: Some(mu),
                    sigma: Some(sigma),
                    ..Default::default()
                }
            }
        };
        DistributionSpec {
            kind: dist.kind().to_string(),
            params,
        }
    }
}
