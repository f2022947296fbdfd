//! Fee comparison report formatters

use super::utils::{export_json, section_header};
use super::{OutputFormat, ReportOptions};
use crate::errors::AppResult;
use crate::fees::{calculate_total_savings, format_fee_comparison_result, BlockchainNetwork};
use crate::types::{FeeComparisonResult, FormattedFeeComparison};
use crate::utils::currency::{format_currency, format_large_number};
use serde::Serialize;

const TABLE_WIDTH: usize = 69;

/// Everything a consumer needs to render the comparison, in one document
#[derive(Debug, Clone, Serialize)]
pub struct FeeComparisonReport<'a> {
    pub result: &'a FeeComparisonResult,
    pub formatted: Vec<FormattedFeeComparison>,
    pub total_savings_usd: f64,
    pub total_savings_formatted: String,
}

impl<'a> FeeComparisonReport<'a> {
    pub fn new(result: &'a FeeComparisonResult) -> Self {
        let total_savings_usd = calculate_total_savings(result);
        Self {
            result,
            formatted: format_fee_comparison_result(result),
            total_savings_usd,
            total_savings_formatted: format_currency(total_savings_usd, 0),
        }
    }
}

/// Format a fee comparison for console or JSON output
pub fn format_fee_comparison(
    result: &FeeComparisonResult,
    format: &OutputFormat,
    options: &ReportOptions,
) -> AppResult<String> {
    let report = FeeComparisonReport::new(result);

    match format {
        OutputFormat::Json => export_json(&report),
        OutputFormat::Console => {
            let mut output = section_header("HIVE FEE COMPARISON");
            let period = &result.calculation_period;
            let year_count = period.year_count();

            output.push_str(&format!(
                "Operations: {}\n",
                format_large_number(result.total_operations)
            ));
            output.push_str(&format!(
                "Period:     {}-{} ({} year{}, ~{} operations/year)\n\n",
                period.start_year,
                period.end_year,
                year_count,
                if year_count == 1 { "" } else { "s" },
                format_large_number(result.total_operations / f64::from(year_count)),
            ));

            output.push_str(&format!(
                "{:<12} | {:>16} | {:>16} | {:>14} |\n",
                "Blockchain", "Total Fees", "Saved with Hive", "Fee % of Ops"
            ));
            output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

            for row in &report.formatted {
                output.push_str(&format!(
                    "{:<12} | {:>16} | {:>16} | {:>14} |\n",
                    row.blockchain_display_name,
                    row.total_fee_formatted,
                    row.savings_vs_hive,
                    row.percentage_of_operations,
                ));
            }

            output.push_str(&format!("\n{}\n", "=".repeat(TABLE_WIDTH)));
            if let Some(hive) = result.calculation_for(BlockchainNetwork::Hive) {
                output.push_str(&format!(
                    "Fees on Hive:          {}\n",
                    format_currency(hive.total_fee_usd, 0)
                ));
            }
            output.push_str(&format!(
                "Total saved with Hive: {}\n",
                report.total_savings_formatted
            ));

            if options.detailed {
                output.push_str(&format_yearly_breakdown(result, options.currency_decimals));
            }

            Ok(output)
        }
    }
}

/// Per-year breakdown for every chain, Hive included
fn format_yearly_breakdown(result: &FeeComparisonResult, decimals: usize) -> String {
    let mut output = format!("\n{}", section_header("YEARLY BREAKDOWN"));

    for calculation in &result.calculations {
        let blockchain = calculation.blockchain;
        output.push_str(&format!(
            "{} ({}):\n",
            blockchain.display_name(),
            blockchain.symbol()
        ));
        output.push_str(&format!(
            "  {:<6} {:>14} {:>14} {:>18}\n",
            "Year", "Operations", "Avg Fee", "Total"
        ));
        output.push_str(&format!("  {}\n", "-".repeat(55)));

        for breakdown in &calculation.yearly_breakdown {
            output.push_str(&format!(
                "  {:<6} {:>14} {:>14} {:>18}\n",
                breakdown.year,
                format!("{:.2}", breakdown.operation_count),
                format_currency(breakdown.average_fee_usd, 5),
                format_currency(breakdown.total_fee_usd, decimals),
            ));
        }

        output.push_str(&format!(
            "  {:<6} {:>14} {:>14} {:>18}\n\n",
            "Total",
            "",
            "",
            format_currency(calculation.total_fee_usd, decimals)
        ));
    }

    output
}
