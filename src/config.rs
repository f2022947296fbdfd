use crate::errors::{AppError, AppResult};
use crate::fees::{
    FeeCalculationYear, DEFAULT_END_YEAR, DEFAULT_START_YEAR, MAX_CALCULATION_YEAR,
    MIN_CALCULATION_YEAR,
};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory (extension resolved by `config`)
pub const DEFAULT_CONFIG_NAME: &str = "ops-by-hive";

/// Environment variable prefix, e.g. `OPS_BY_HIVE_DISPLAY__FORMAT=json`
pub const ENV_PREFIX: &str = "OPS_BY_HIVE";

const MAX_DECIMALS: usize = 10;

/// Application configuration loaded from ops-by-hive.toml or environment variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub calculation: CalculationConfig,
    pub display: DisplayConfig,
}

/// Year window used when the command line gives none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationConfig {
    pub default_start_year: FeeCalculationYear,
    pub default_end_year: FeeCalculationYear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for per-year amounts in detailed reports
    pub currency_decimals: usize,
    /// "console" or "json"
    pub format: String,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            default_start_year: DEFAULT_START_YEAR,
            default_end_year: DEFAULT_END_YEAR,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_decimals: 2,
            format: "console".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from ops-by-hive.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(DEFAULT_CONFIG_NAME).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = AppConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default(
                "calculation.default_start_year",
                i64::from(defaults.calculation.default_start_year),
            )?
            .set_default(
                "calculation.default_end_year",
                i64::from(defaults.calculation.default_end_year),
            )?
            .set_default(
                "display.currency_decimals",
                defaults.display.currency_decimals as i64,
            )?
            .set_default("display.format", defaults.display.format)?
            .add_source(file)
            // OPS_BY_HIVE_CALCULATION__DEFAULT_END_YEAR -> calculation.default_end_year
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject windows the fee matrix cannot serve and nonsensical display settings
    pub fn validate(&self) -> AppResult<()> {
        let calculation = &self.calculation;
        for (name, year) in [
            ("calculation.default_start_year", calculation.default_start_year),
            ("calculation.default_end_year", calculation.default_end_year),
        ] {
            if !(MIN_CALCULATION_YEAR..=MAX_CALCULATION_YEAR).contains(&year) {
                return Err(AppError::Config(format!(
                    "{} must be between {} and {}, got {}",
                    name, MIN_CALCULATION_YEAR, MAX_CALCULATION_YEAR, year
                )));
            }
        }

        if calculation.default_start_year > calculation.default_end_year {
            return Err(AppError::Config(format!(
                "calculation.default_start_year ({}) is after calculation.default_end_year ({})",
                calculation.default_start_year, calculation.default_end_year
            )));
        }

        if self.display.currency_decimals > MAX_DECIMALS {
            return Err(AppError::Config(format!(
                "display.currency_decimals must be at most {}, got {}",
                MAX_DECIMALS, self.display.currency_decimals
            )));
        }

        if !matches!(self.display.format.to_lowercase().as_str(), "console" | "json") {
            return Err(AppError::Config(format!(
                "display.format must be \"console\" or \"json\", got \"{}\"",
                self.display.format
            )));
        }

        Ok(())
    }

    /// True when the configured window is the engine's built-in default window
    pub fn uses_default_window(&self) -> bool {
        self.calculation == CalculationConfig::default()
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
