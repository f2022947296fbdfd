//! Report formatting and output generation
//!
//! Provides formatting for fee comparisons, the fee matrix and network share via
//! the [`ReportFormatter`] facade. Supports Console and JSON output formats.

pub mod comparison;
pub mod matrix;
pub mod share;
pub mod utils;

use crate::errors::AppResult;
use crate::fees::BlockchainNetwork;
use crate::types::{FeeComparisonResult, NetworkShare};

pub use comparison::FeeComparisonReport;
pub use share::NetworkShareReport;

/// Output format options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Parse output format string, anything unrecognised falls back to console
    pub fn parse(format_str: &str) -> Self {
        match format_str.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Console rendering options
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Append per-year breakdowns for every chain
    pub detailed: bool,
    /// Decimal places for per-year amounts
    pub currency_decimals: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            detailed: false,
            currency_decimals: crate::fees::constants::CURRENCY_DECIMAL_PLACES,
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_fee_comparison(
        result: &FeeComparisonResult,
        format: &OutputFormat,
        options: &ReportOptions,
    ) -> AppResult<String> {
        comparison::format_fee_comparison(result, format, options)
    }

    pub fn format_fee_matrix(
        blockchain: Option<BlockchainNetwork>,
        format: &OutputFormat,
    ) -> AppResult<String> {
        matrix::format_fee_matrix(blockchain, format)
    }

    pub fn format_network_share(share: &NetworkShare, format: &OutputFormat) -> AppResult<String> {
        share::format_network_share(share, format)
    }
}
