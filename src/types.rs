//! Ops by Hive - Type System
//!
//! - `fees`: Fee matrix data and fee comparison results
//! - `network_share`: Network statistics rows and an account's share of them

pub mod fees;
pub mod network_share;

pub use fees::{
    BlockchainFeeCalculation, CalculationPeriod, FeeComparisonResult, FormattedFeeComparison,
    YearlyFeeBreakdown, YearlyFeeDatum,
};
pub use network_share::{NetworkShare, TransactionStatistics};
