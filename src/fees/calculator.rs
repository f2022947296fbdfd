//! Fee comparison engine
//!
//! Spreads an account's operation count evenly over a year range and prices it
//! with each chain's yearly average fee. Every call is pure: the fee matrix is a
//! compile-time constant and all results are freshly allocated.

use super::constants::{
    FeeCalculationYear, DEFAULT_END_YEAR, DEFAULT_START_YEAR, MAX_CALCULATION_YEAR,
    MIN_CALCULATION_YEAR, MIN_OPERATION_COUNT,
};
use super::matrix::{FeeMatrix, BLOCKCHAIN_FEE_MATRIX};
use super::network::{BlockchainNetwork, COMPARABLE_BLOCKCHAINS};
use crate::errors::{FeeCalculatorError, FeeResult};
use crate::types::{
    BlockchainFeeCalculation, CalculationPeriod, FeeComparisonResult, YearlyFeeBreakdown,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Input parameters for a fee comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculationInput {
    pub total_operations: f64,
    pub start_year: FeeCalculationYear,
    pub end_year: FeeCalculationYear,
}

impl FeeCalculationInput {
    pub fn new(
        total_operations: f64,
        start_year: FeeCalculationYear,
        end_year: FeeCalculationYear,
    ) -> Self {
        Self {
            total_operations,
            start_year,
            end_year,
        }
    }

    /// Input covering the default comparison window
    pub fn with_default_period(total_operations: f64) -> Self {
        Self::new(total_operations, DEFAULT_START_YEAR, DEFAULT_END_YEAR)
    }

    /// Check every bound, reporting the first offending field
    pub fn validate(&self) -> FeeResult<()> {
        // is_finite also rules out NaN
        let operations_valid =
            self.total_operations.is_finite() && self.total_operations >= MIN_OPERATION_COUNT;
        if !operations_valid {
            return Err(FeeCalculatorError::Validation {
                field: "total_operations",
                value: self.total_operations.to_string(),
                expected: format!("a finite number of at least {}", MIN_OPERATION_COUNT),
            });
        }

        check_year_bounds("start_year", self.start_year)?;
        check_year_bounds("end_year", self.end_year)?;

        if self.start_year > self.end_year {
            return Err(FeeCalculatorError::Validation {
                field: "start_year",
                value: self.start_year.to_string(),
                expected: format!("no later than end_year ({})", self.end_year),
            });
        }

        Ok(())
    }
}

fn check_year_bounds(field: &'static str, year: FeeCalculationYear) -> FeeResult<()> {
    if !(MIN_CALCULATION_YEAR..=MAX_CALCULATION_YEAR).contains(&year) {
        return Err(FeeCalculatorError::Validation {
            field,
            value: year.to_string(),
            expected: format!(
                "between {} and {}",
                MIN_CALCULATION_YEAR, MAX_CALCULATION_YEAR
            ),
        });
    }
    Ok(())
}

/// Fee comparison engine bound to a fee matrix
#[derive(Debug, Clone, Copy)]
pub struct FeeCalculator<'a> {
    matrix: FeeMatrix<'a>,
}

impl Default for FeeCalculator<'static> {
    fn default() -> Self {
        Self::new(BLOCKCHAIN_FEE_MATRIX)
    }
}

impl<'a> FeeCalculator<'a> {
    pub fn new(matrix: FeeMatrix<'a>) -> Self {
        Self { matrix }
    }

    /// Calculate and compare fees across all chains for the given input
    pub fn calculate(&self, input: &FeeCalculationInput) -> FeeResult<FeeComparisonResult> {
        if let Err(e) = input.validate() {
            warn!("Rejected fee calculation input: {}", e);
            return Err(e);
        }

        let period = CalculationPeriod {
            start_year: input.start_year,
            end_year: input.end_year,
        };
        // Not rounded: an estimate, and rounding here would compound per chain
        let operations_per_year = input.total_operations / f64::from(period.year_count());
        let years: Vec<FeeCalculationYear> = (period.start_year..=period.end_year).collect();

        let mut calculations = Vec::with_capacity(COMPARABLE_BLOCKCHAINS.len() + 1);
        for blockchain in COMPARABLE_BLOCKCHAINS
            .iter()
            .copied()
            .chain(std::iter::once(BlockchainNetwork::Hive))
        {
            calculations.push(self.calculate_blockchain_fees(
                blockchain,
                operations_per_year,
                &years,
            )?);
        }

        let hive_savings = calculate_hive_savings(&calculations);

        debug!(
            "Fee comparison: operations={}, period={}-{}, per_year={:.4}, chains={}",
            input.total_operations,
            period.start_year,
            period.end_year,
            operations_per_year,
            calculations.len()
        );

        Ok(FeeComparisonResult {
            total_operations: input.total_operations,
            calculation_period: period,
            calculations,
            hive_savings,
        })
    }

    /// Price one chain over every year in range
    fn calculate_blockchain_fees(
        &self,
        blockchain: BlockchainNetwork,
        operations_per_year: f64,
        years: &[FeeCalculationYear],
    ) -> FeeResult<BlockchainFeeCalculation> {
        let mut yearly_breakdown = Vec::with_capacity(years.len());
        let mut total_fee_usd = 0.0;

        for &year in years {
            let average_fee_usd = self.matrix.fee_for_year(blockchain, year).ok_or_else(|| {
                warn!("Fee matrix has no entry for {} in {}", blockchain, year);
                FeeCalculatorError::MissingFeeData { blockchain, year }
            })?;

            let yearly_total_fee = operations_per_year * average_fee_usd;
            total_fee_usd += yearly_total_fee;

            yearly_breakdown.push(YearlyFeeBreakdown {
                year,
                operation_count: operations_per_year,
                average_fee_usd,
                total_fee_usd: yearly_total_fee,
            });
        }

        debug!("{}: total fee ${:.2}", blockchain.display_name(), total_fee_usd);

        Ok(BlockchainFeeCalculation {
            blockchain,
            total_fee_usd,
            yearly_breakdown,
        })
    }
}

/// Savings of every non-Hive chain relative to Hive's own computed total
fn calculate_hive_savings(
    calculations: &[BlockchainFeeCalculation],
) -> BTreeMap<BlockchainNetwork, f64> {
    let hive_total = calculations
        .iter()
        .find(|calculation| calculation.blockchain.is_hive())
        .map(|calculation| calculation.total_fee_usd)
        .unwrap_or_default();

    calculations
        .iter()
        .filter(|calculation| !calculation.blockchain.is_hive())
        .map(|calculation| (calculation.blockchain, calculation.total_fee_usd - hive_total))
        .collect()
}

/// Calculate and compare fees across all chains using the built-in fee matrix
pub fn calculate_fee_comparison(input: &FeeCalculationInput) -> FeeResult<FeeComparisonResult> {
    FeeCalculator::default().calculate(input)
}

/// Fee comparison over the default 2020-2024 window
///
/// 2025 is excluded; call [`calculate_fee_comparison`] for full coverage.
pub fn calculate_fee_comparison_default(total_operations: f64) -> FeeResult<FeeComparisonResult> {
    calculate_fee_comparison(&FeeCalculationInput::with_default_period(total_operations))
}
