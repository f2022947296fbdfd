//! Fee matrix report formatters

use super::utils::{export_json, section_header};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::fees::{BlockchainNetwork, BLOCKCHAIN_FEE_MATRIX, VALID_CALCULATION_YEARS};
use crate::types::YearlyFeeDatum;
use crate::utils::currency::format_currency;
use serde::Serialize;

/// Fee history of one chain as exported in JSON
#[derive(Debug, Serialize)]
struct FeeHistoryEntry {
    blockchain: BlockchainNetwork,
    display_name: &'static str,
    symbol: &'static str,
    history: &'static [YearlyFeeDatum],
}

/// Format the built-in fee matrix, optionally restricted to one chain
pub fn format_fee_matrix(
    blockchain: Option<BlockchainNetwork>,
    format: &OutputFormat,
) -> AppResult<String> {
    let entries: Vec<FeeHistoryEntry> = BLOCKCHAIN_FEE_MATRIX
        .networks()
        .filter(|network| blockchain.map_or(true, |wanted| wanted == *network))
        .filter_map(|network| {
            BLOCKCHAIN_FEE_MATRIX
                .history(network)
                .map(|history| FeeHistoryEntry {
                    blockchain: network,
                    display_name: network.display_name(),
                    symbol: network.symbol(),
                    history,
                })
        })
        .collect();

    match format {
        OutputFormat::Json => export_json(&entries),
        OutputFormat::Console => {
            let mut output = section_header("AVERAGE TRANSACTION FEES (USD)");

            output.push_str(&format!("{:<18}", "Blockchain"));
            for year in VALID_CALCULATION_YEARS {
                output.push_str(&format!(" {:>10}", year));
            }
            output.push('\n');
            output.push_str(&format!(
                "{}\n",
                "-".repeat(18 + 11 * VALID_CALCULATION_YEARS.len())
            ));

            for entry in &entries {
                output.push_str(&format!(
                    "{:<18}",
                    format!("{} ({})", entry.display_name, entry.symbol)
                ));
                for year in VALID_CALCULATION_YEARS {
                    let cell = entry
                        .history
                        .iter()
                        .find(|datum| datum.year == year)
                        .map(|datum| format_currency(datum.average_fee_usd, 5))
                        .unwrap_or_else(|| "-".to_string());
                    output.push_str(&format!(" {:>10}", cell));
                }
                output.push('\n');
            }

            Ok(output)
        }
    }
}
