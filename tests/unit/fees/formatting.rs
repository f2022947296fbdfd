//! Formatted comparison rows and savings totals

use ops_by_hive::fees::{
    calculate_fee_comparison, calculate_fee_comparison_default, calculate_total_savings,
    format_blockchain_calculation, format_fee_comparison_result, format_total_savings,
    BlockchainNetwork, FeeCalculationInput,
};
use ops_by_hive::utils::currency::format_currency;

#[test]
fn test_scenario_formatted_order() {
    let result = calculate_fee_comparison(&FeeCalculationInput::new(1200.0, 2020, 2021)).unwrap();
    let rows = format_fee_comparison_result(&result);

    let order: Vec<BlockchainNetwork> = rows.iter().map(|row| row.blockchain).collect();
    assert_eq!(order[0], BlockchainNetwork::Bitcoin);
    assert_eq!(order[1], BlockchainNetwork::Ethereum);
    assert!(!order.contains(&BlockchainNetwork::Hive));
    assert_eq!(rows[0].total_fee_usd, 12600.0);
    assert_eq!(rows[1].total_fee_usd, 12090.0);
}

#[test]
fn test_rows_sorted_descending_for_default_window() {
    let result = calculate_fee_comparison_default(123_456.0).unwrap();
    let rows = format_fee_comparison_result(&result);

    assert_eq!(rows.len(), 5);
    for pair in rows.windows(2) {
        assert!(pair[0].total_fee_usd >= pair[1].total_fee_usd);
    }
    // Solana is by far the cheapest chain in the table
    assert_eq!(rows[4].blockchain, BlockchainNetwork::Solana);
}

#[test]
fn test_cost_intensity_formula_preserved() {
    let result = calculate_fee_comparison(&FeeCalculationInput::new(1200.0, 2020, 2021)).unwrap();
    let ethereum = result.calculation_for(BlockchainNetwork::Ethereum).unwrap();

    let row = format_blockchain_calculation(ethereum, result.total_operations, 12090.0);
    // 12090 / 1200 * 100 = 1007.5
    assert_eq!(row.percentage_of_operations, "1007.50%");
    assert_eq!(row.blockchain_display_name, "Ethereum");
    assert_eq!(row.total_fee_formatted, "$12,090");
    assert_eq!(row.savings_vs_hive, "$12,090");
}

#[test]
fn test_total_savings_counts_each_chain_once() {
    let result = calculate_fee_comparison(&FeeCalculationInput::new(1200.0, 2020, 2021)).unwrap();
    let manual: f64 = result.hive_savings.values().sum();

    assert_eq!(calculate_total_savings(&result), manual);
    assert_eq!(format_total_savings(&result), format_currency(manual, 0));
}

#[test]
fn test_half_dollar_totals_round_up() {
    // 0.5 ops at $1 plus 0.5 ops at $20
    let result = calculate_fee_comparison(&FeeCalculationInput::new(1.0, 2020, 2021)).unwrap();
    let rows = format_fee_comparison_result(&result);
    let bitcoin = rows
        .iter()
        .find(|row| row.blockchain == BlockchainNetwork::Bitcoin)
        .unwrap();

    assert_eq!(bitcoin.total_fee_usd, 10.5);
    assert_eq!(bitcoin.total_fee_formatted, "$11");
    assert_eq!(bitcoin.savings_vs_hive, "$11");
}
