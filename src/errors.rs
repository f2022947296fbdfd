use crate::fees::BlockchainNetwork;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Fee comparison engine failures (bad input or incomplete fee data)
    #[error(transparent)]
    FeeCalculator(#[from] FeeCalculatorError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Command-line argument that parsed but makes no sense for the command
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Fee comparison engine errors
///
/// `Validation` is the caller's fault; `MissingFeeData` means the compiled-in fee
/// table has a hole.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeCalculatorError {
    /// Caller-supplied input outside the allowed bounds
    #[error("[FeeCalculator Validation Error] {field} must be {expected}, received: {value}")]
    Validation {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// Fee table has no entry for a (chain, year) the validated range needs
    #[error("[FeeCalculator Data Error] No fee data found for {blockchain} in year {year}")]
    MissingFeeData {
        blockchain: BlockchainNetwork,
        year: u16,
    },
}

impl FeeCalculatorError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FeeCalculatorError::Validation { .. })
    }

    pub fn is_data_integrity(&self) -> bool {
        matches!(self, FeeCalculatorError::MissingFeeData { .. })
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for fee calculations
pub type FeeResult<T> = Result<T, FeeCalculatorError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(format!("TOML serialisation failed: {}", err))
    }
}
