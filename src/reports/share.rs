//! Network share report formatters

use super::utils::{export_json, format_number, section_header};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::NetworkShare;
use serde::Serialize;

/// Network share with its display strings, as exported in JSON
#[derive(Debug, Serialize)]
pub struct NetworkShareReport<'a> {
    #[serde(flatten)]
    pub share: &'a NetworkShare,
    pub global_total_billions: String,
    pub percentage_formatted: String,
}

impl<'a> NetworkShareReport<'a> {
    pub fn new(share: &'a NetworkShare) -> Self {
        Self {
            share,
            global_total_billions: share.global_total_billions(),
            percentage_formatted: share.percentage_formatted(),
        }
    }
}

/// Format an account's network share for console or JSON output
pub fn format_network_share(share: &NetworkShare, format: &OutputFormat) -> AppResult<String> {
    let report = NetworkShareReport::new(share);

    match format {
        OutputFormat::Json => export_json(&report),
        OutputFormat::Console => {
            let mut output = section_header("NETWORK SHARE");
            output.push_str(&format!("Account:       @{}\n", share.username));
            output.push_str(&format!(
                "Operations:    {}\n",
                format_number(share.user_total)
            ));
            output.push_str(&format!(
                "Network total: {} billion ({})\n",
                report.global_total_billions,
                format_number(share.global_total)
            ));
            output.push_str(&format!("Share:         {}\n", report.percentage_formatted));
            Ok(output)
        }
    }
}
