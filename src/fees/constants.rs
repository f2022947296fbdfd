//! Fixed bounds and presentation constants for the fee comparison

/// Calendar year covered by the fee matrix
pub type FeeCalculationYear = u16;

/// Minimum valid year for fee calculations
pub const MIN_CALCULATION_YEAR: FeeCalculationYear = 2020;

/// Maximum valid year for fee calculations
pub const MAX_CALCULATION_YEAR: FeeCalculationYear = 2025;

/// All supported calculation years in chronological order
pub const VALID_CALCULATION_YEARS: [FeeCalculationYear; 6] = [2020, 2021, 2022, 2023, 2024, 2025];

/// First year of the default comparison window
pub const DEFAULT_START_YEAR: FeeCalculationYear = 2020;

/// Last year of the default comparison window
///
/// 2025 is left out: the table's figure for it covers a partial year.
pub const DEFAULT_END_YEAR: FeeCalculationYear = 2024;

/// Minimum operation count for valid calculations
pub const MIN_OPERATION_COUNT: f64 = 1.0;

/// Hive transaction fee (always zero)
pub const HIVE_TRANSACTION_FEE_USD: f64 = 0.0;

/// Default number of decimal places for currency formatting
pub const CURRENCY_DECIMAL_PLACES: usize = 2;

/// Default number of decimal places for percentages
pub const PERCENTAGE_DECIMAL_PLACES: usize = 2;
