//! Common Test Utilities
//!
//! Shared helpers used by both the unit and integration harnesses.

#![allow(dead_code)]

pub mod fixtures;

use ops_by_hive::fees::BlockchainNetwork;
use ops_by_hive::types::FeeComparisonResult;

/// Tolerance for sums whose evaluation order differs from the engine's
pub const EPSILON: f64 = 1e-9;

/// Assert two floats agree to within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, context: &str) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= EPSILON * scale,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}

/// Total fee of one chain, panicking if the chain is missing from the result
pub fn total_fee(result: &FeeComparisonResult, blockchain: BlockchainNetwork) -> f64 {
    result
        .calculation_for(blockchain)
        .unwrap_or_else(|| panic!("no calculation for {}", blockchain))
        .total_fee_usd
}
