//! Domain models for the market simulator

pub mod agent;

// Re-exports
pub use agent::{Buyer, Seller};
