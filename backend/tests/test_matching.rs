//! Tests for round matching policies

use market_simulator_core_rs::matching::{BestFitMatcher, Matcher, MatchingPolicy, RandomMatcher};
use market_simulator_core_rs::{Buyer, RngManager, Seller};

fn buyers(valuations: &[f64]) -> Vec<Buyer> {
    valuations
        .iter()
        .enumerate()
        .map(|(i, &v)| Buyer::new(i + 1, v))
        .collect()
}

fn sellers(costs: &[f64]) -> Vec<Seller> {
    costs
        .iter()
        .enumerate()
        .map(|(i, &c)| Seller::new(i + 1, c))
        .collect()
}

#[test]
fn test_pair_count_is_smaller_side() {
    let b = buyers(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let s = sellers(&[5.0, 15.0]);

    for policy in [MatchingPolicy::Random, MatchingPolicy::BestFit] {
        let pairs = policy.matcher().pair(&b, &s, &mut RngManager::new(3));
        assert_eq!(pairs.len(), 2, "policy {}", policy);
    }

    let pairs = RandomMatcher.pair(&buyers(&[1.0, 2.0]), &sellers(&[1.0, 2.0, 3.0]), &mut RngManager::new(3));
    assert_eq!(pairs.len(), 2);
}

#[test]
fn test_best_fit_pairs_highest_valuation_with_lowest_cost() {
    let b = buyers(&[70.0, 120.0, 95.0]);
    let s = sellers(&[60.0, 30.0, 45.0]);

    let pairs = BestFitMatcher.pair(&b, &s, &mut RngManager::new(1));

    let named: Vec<(&str, &str)> = pairs
        .iter()
        .map(|p| (b[p.buyer].id(), s[p.seller].id()))
        .collect();
    assert_eq!(named, vec![("B2", "S2"), ("B3", "S3"), ("B1", "S1")]);
}

#[test]
fn test_best_fit_independent_of_seed() {
    let b = buyers(&[55.0, 80.0, 55.0, 91.0, 12.0]);
    let s = sellers(&[40.0, 40.0, 10.0]);

    let reference = BestFitMatcher.pair(&b, &s, &mut RngManager::new(1));
    for seed in [2, 17, 999, u64::MAX] {
        assert_eq!(BestFitMatcher.pair(&b, &s, &mut RngManager::new(seed)), reference);
    }
}

#[test]
fn test_random_pairs_are_distinct_agents() {
    let b = buyers(&[1.0; 12]);
    let s = sellers(&[1.0; 9]);

    let pairs = RandomMatcher.pair(&b, &s, &mut RngManager::new(77));

    let mut buyer_idx: Vec<usize> = pairs.iter().map(|p| p.buyer).collect();
    let mut seller_idx: Vec<usize> = pairs.iter().map(|p| p.seller).collect();
    buyer_idx.sort_unstable();
    buyer_idx.dedup();
    seller_idx.sort_unstable();
    seller_idx.dedup();

    assert_eq!(buyer_idx.len(), 9);
    assert_eq!(seller_idx, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_random_matching_depends_on_seed() {
    let b = buyers(&[1.0; 10]);
    let s = sellers(&[1.0; 10]);

    let a = RandomMatcher.pair(&b, &s, &mut RngManager::new(1));
    let c = RandomMatcher.pair(&b, &s, &mut RngManager::new(2));

    assert_ne!(a, c);
}
