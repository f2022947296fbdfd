//! Presentation layer over fee comparison results

use super::constants::PERCENTAGE_DECIMAL_PLACES;
use super::network::BlockchainNetwork;
use crate::types::{BlockchainFeeCalculation, FeeComparisonResult, FormattedFeeComparison};
use crate::utils::currency::{format_currency, format_percentage};
use crate::utils::math::ratio_percentage;

/// Human-readable display name for a blockchain
pub fn blockchain_display_name(blockchain: BlockchainNetwork) -> &'static str {
    blockchain.display_name()
}

/// Format a single chain's calculation for display
///
/// `percentage_of_operations` is fee dollars over the raw operation count × 100,
/// a loose cost-intensity figure rather than a true percentage.
pub fn format_blockchain_calculation(
    calculation: &BlockchainFeeCalculation,
    total_operations: f64,
    hive_savings: f64,
) -> FormattedFeeComparison {
    let percentage_of_operations = ratio_percentage(calculation.total_fee_usd, total_operations);

    FormattedFeeComparison {
        blockchain: calculation.blockchain,
        blockchain_display_name: blockchain_display_name(calculation.blockchain).to_string(),
        total_fee_usd: calculation.total_fee_usd,
        total_fee_formatted: format_currency(calculation.total_fee_usd, 0),
        savings_vs_hive: format_currency(hive_savings, 0),
        percentage_of_operations: format_percentage(
            percentage_of_operations,
            PERCENTAGE_DECIMAL_PLACES,
        ),
    }
}

/// Format a comparison result for display: Hive dropped, most expensive chain first
pub fn format_fee_comparison_result(result: &FeeComparisonResult) -> Vec<FormattedFeeComparison> {
    let mut formatted: Vec<FormattedFeeComparison> = result
        .calculations
        .iter()
        .filter(|calculation| !calculation.blockchain.is_hive())
        .map(|calculation| {
            let savings = result
                .hive_savings
                .get(&calculation.blockchain)
                .copied()
                .unwrap_or_default();
            format_blockchain_calculation(calculation, result.total_operations, savings)
        })
        .collect();

    // Stable sort keeps declared order for equal totals
    formatted.sort_by(|a, b| b.total_fee_usd.total_cmp(&a.total_fee_usd));
    formatted
}

/// Total USD saved by using Hive instead of each other chain, summed
pub fn calculate_total_savings(result: &FeeComparisonResult) -> f64 {
    result.hive_savings.values().sum()
}

/// Formatted total savings (whole dollars)
pub fn format_total_savings(result: &FeeComparisonResult) -> String {
    format_currency(calculate_total_savings(result), 0)
}
