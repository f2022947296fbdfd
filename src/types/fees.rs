//! Fee comparison types

use crate::fees::{BlockchainNetwork, FeeCalculationYear};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Average fee for a single blockchain in a specific year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyFeeDatum {
    pub year: FeeCalculationYear,
    pub average_fee_usd: f64,
}

/// Operations and fees attributed to a single year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyFeeBreakdown {
    pub year: FeeCalculationYear,
    /// Evenly distributed estimate, may be fractional
    pub operation_count: f64,
    pub average_fee_usd: f64,
    pub total_fee_usd: f64,
}

/// Fee calculation for one blockchain over the whole period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainFeeCalculation {
    pub blockchain: BlockchainNetwork,
    pub total_fee_usd: f64,
    pub yearly_breakdown: Vec<YearlyFeeBreakdown>,
}

/// Inclusive year range of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationPeriod {
    pub start_year: FeeCalculationYear,
    pub end_year: FeeCalculationYear,
}

impl CalculationPeriod {
    pub fn year_count(&self) -> u16 {
        self.end_year - self.start_year + 1
    }
}

/// Comparison results across all blockchains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeComparisonResult {
    pub total_operations: f64,
    pub calculation_period: CalculationPeriod,
    /// Comparison chains in declared order, Hive last
    pub calculations: Vec<BlockchainFeeCalculation>,
    /// Non-Hive chain -> USD avoided by using Hive instead
    pub hive_savings: BTreeMap<BlockchainNetwork, f64>,
}

impl FeeComparisonResult {
    /// Look up the calculation for a specific chain
    pub fn calculation_for(
        &self,
        blockchain: BlockchainNetwork,
    ) -> Option<&BlockchainFeeCalculation> {
        self.calculations
            .iter()
            .find(|calculation| calculation.blockchain == blockchain)
    }
}

/// One row of the user-facing comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedFeeComparison {
    pub blockchain: BlockchainNetwork,
    pub blockchain_display_name: String,
    pub total_fee_usd: f64,
    pub total_fee_formatted: String,
    pub savings_vs_hive: String,
    pub percentage_of_operations: String,
}
