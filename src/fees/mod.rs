//! Blockchain fee comparison
//!
//! Estimates what an account's Hive operations would have cost in transaction fees
//! on other blockchains, using a compiled-in table of yearly average fees.
//!
//! ## Usage
//!
//! ```rust
//! use ops_by_hive::fees::{
//!     calculate_fee_comparison, format_fee_comparison_result, BlockchainNetwork,
//!     FeeCalculationInput,
//! };
//!
//! let result = calculate_fee_comparison(&FeeCalculationInput::new(1200.0, 2020, 2021))?;
//! let bitcoin = result.calculation_for(BlockchainNetwork::Bitcoin).unwrap();
//! assert_eq!(bitcoin.total_fee_usd, 12600.0);
//!
//! let rows = format_fee_comparison_result(&result);
//! assert_eq!(rows[0].blockchain, BlockchainNetwork::Bitcoin);
//! # Ok::<(), ops_by_hive::errors::FeeCalculatorError>(())
//! ```

pub mod calculator;
pub mod constants;
pub mod formatter;
pub mod matrix;
pub mod network;

pub use calculator::{
    calculate_fee_comparison, calculate_fee_comparison_default, FeeCalculationInput,
    FeeCalculator,
};
pub use constants::{
    FeeCalculationYear, DEFAULT_END_YEAR, DEFAULT_START_YEAR, HIVE_TRANSACTION_FEE_USD,
    MAX_CALCULATION_YEAR, MIN_CALCULATION_YEAR, VALID_CALCULATION_YEARS,
};
pub use formatter::{
    blockchain_display_name, calculate_total_savings, format_blockchain_calculation,
    format_fee_comparison_result, format_total_savings,
};
pub use matrix::{fee_for_year, fee_history_for_blockchain, FeeMatrix, BLOCKCHAIN_FEE_MATRIX};
pub use network::{BlockchainNetwork, COMPARABLE_BLOCKCHAINS};
