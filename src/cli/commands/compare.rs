use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::fees::{
    calculate_fee_comparison, calculate_fee_comparison_default, FeeCalculationInput,
    FeeCalculationYear,
};
use crate::reports::{OutputFormat, ReportFormatter, ReportOptions};
use crate::types::FeeComparisonResult;
use clap::Args;
use tracing::info;

/// Estimate what an account's operations would have cost on other blockchains
#[derive(Args)]
pub struct CompareCommand {
    /// Total number of operations performed by the account
    #[arg(long, short = 'n')]
    pub operations: u64,

    /// First year of the period (overrides ops-by-hive.toml)
    #[arg(long)]
    pub start_year: Option<FeeCalculationYear>,

    /// Last year of the period (overrides ops-by-hive.toml)
    #[arg(long)]
    pub end_year: Option<FeeCalculationYear>,

    /// Output format: console or json (overrides ops-by-hive.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Include the per-year breakdown for every blockchain
    #[arg(long)]
    pub detailed: bool,
}

impl CompareCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let result = self.calculate(app_config)?;

        let format_str = self.format.as_deref().unwrap_or(&app_config.display.format);
        let format = OutputFormat::parse(format_str);
        let options = ReportOptions {
            detailed: self.detailed,
            currency_decimals: app_config.display.currency_decimals,
        };

        print!(
            "{}",
            ReportFormatter::format_fee_comparison(&result, &format, &options)?
        );
        Ok(())
    }

    /// Run the engine, using the default window when nothing overrides it
    pub fn calculate(&self, app_config: &AppConfig) -> AppResult<FeeComparisonResult> {
        let total_operations = self.operations as f64;

        if self.start_year.is_none() && self.end_year.is_none() && app_config.uses_default_window()
        {
            info!("Comparing {} operations over the default window", self.operations);
            return Ok(calculate_fee_comparison_default(total_operations)?);
        }

        let input = FeeCalculationInput::new(
            total_operations,
            self.start_year
                .unwrap_or(app_config.calculation.default_start_year),
            self.end_year
                .unwrap_or(app_config.calculation.default_end_year),
        );
        info!(
            "Comparing {} operations over {}-{}",
            self.operations, input.start_year, input.end_year
        );
        Ok(calculate_fee_comparison(&input)?)
    }
}
