//! Properties of the fee comparison engine over every valid year window

use crate::common::{assert_close, total_fee};
use ops_by_hive::fees::{
    calculate_fee_comparison, calculate_fee_comparison_default, fee_for_year, BlockchainNetwork,
    FeeCalculationInput, COMPARABLE_BLOCKCHAINS, VALID_CALCULATION_YEARS,
};

/// Every (start, end) pair the engine accepts
fn all_windows() -> Vec<(u16, u16)> {
    let mut windows = Vec::new();
    for &start in &VALID_CALCULATION_YEARS {
        for &end in &VALID_CALCULATION_YEARS {
            if start <= end {
                windows.push((start, end));
            }
        }
    }
    windows
}

#[test]
fn test_breakdown_and_totals_for_every_window() {
    for (start, end) in all_windows() {
        for operations in [1.0, 7.0, 1200.0, 987_654.0] {
            let result =
                calculate_fee_comparison(&FeeCalculationInput::new(operations, start, end))
                    .unwrap();
            let year_count = end - start + 1;
            let per_year = operations / f64::from(year_count);

            assert_eq!(result.calculations.len(), 6);
            for calculation in &result.calculations {
                let years: Vec<u16> = calculation.yearly_breakdown.iter().map(|b| b.year).collect();
                assert_eq!(years, (start..=end).collect::<Vec<_>>());

                for breakdown in &calculation.yearly_breakdown {
                    let fee = fee_for_year(calculation.blockchain, breakdown.year).unwrap();
                    assert_eq!(breakdown.operation_count, per_year);
                    assert_eq!(breakdown.total_fee_usd, per_year * fee);
                }

                let reversed_sum: f64 = calculation
                    .yearly_breakdown
                    .iter()
                    .rev()
                    .map(|b| b.total_fee_usd)
                    .sum();
                assert_close(
                    calculation.total_fee_usd,
                    reversed_sum,
                    &format!("{} {}-{}", calculation.blockchain, start, end),
                );
            }
        }
    }
}

#[test]
fn test_hive_is_always_free_and_savings_match_totals() {
    for (start, end) in all_windows() {
        let result = calculate_fee_comparison(&FeeCalculationInput::new(5000.0, start, end)).unwrap();

        assert_eq!(total_fee(&result, BlockchainNetwork::Hive), 0.0);
        assert_eq!(result.hive_savings.len(), COMPARABLE_BLOCKCHAINS.len());
        for blockchain in COMPARABLE_BLOCKCHAINS {
            assert_eq!(result.hive_savings[&blockchain], total_fee(&result, blockchain));
        }
    }
}

#[test]
fn test_processing_order_is_fixed() {
    let result = calculate_fee_comparison_default(42.0).unwrap();
    let order: Vec<BlockchainNetwork> = result.calculations.iter().map(|c| c.blockchain).collect();

    let mut expected = COMPARABLE_BLOCKCHAINS.to_vec();
    expected.push(BlockchainNetwork::Hive);
    assert_eq!(order, expected);
}

#[test]
fn test_scenario_two_years() {
    let result = calculate_fee_comparison(&FeeCalculationInput::new(1200.0, 2020, 2021)).unwrap();

    assert_eq!(total_fee(&result, BlockchainNetwork::Bitcoin), 12600.0);
    assert_eq!(total_fee(&result, BlockchainNetwork::Ethereum), 12090.0);
    assert_eq!(total_fee(&result, BlockchainNetwork::Hive), 0.0);
    assert_eq!(result.total_operations, 1200.0);
}

#[test]
fn test_scenario_default_window() {
    let result = calculate_fee_comparison_default(3650.0).unwrap();

    assert_eq!(result.calculation_period.start_year, 2020);
    assert_eq!(result.calculation_period.end_year, 2024);

    // 730 operations in each of 2020..=2024, 2025 never contributes
    let expected_bitcoin = 730.0 * 1.0 + 730.0 * 20.0 + 730.0 * 1.9 + 730.0 * 2.5 + 730.0 * 7.0;
    assert_close(
        total_fee(&result, BlockchainNetwork::Bitcoin),
        expected_bitcoin,
        "bitcoin 2020-2024",
    );
    for calculation in &result.calculations {
        assert!(calculation.yearly_breakdown.iter().all(|b| b.year <= 2024));
    }
}

#[test]
fn test_results_are_deterministic() {
    let input = FeeCalculationInput::new(31_337.0, 2021, 2025);
    assert_eq!(
        calculate_fee_comparison(&input).unwrap(),
        calculate_fee_comparison(&input).unwrap()
    );
}

#[test]
fn test_concurrent_calculations_agree() {
    let expected = calculate_fee_comparison_default(10_000.0).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| calculate_fee_comparison_default(10_000.0).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
