//! An account's share of all operations recorded on the network
//!
//! Statistics rows are supplied by the caller (fetching them is not this crate's
//! job); this module only aggregates and derives the percentage.

use crate::errors::{AppError, AppResult};
use crate::types::{NetworkShare, TransactionStatistics};
use crate::utils::math::safe_percentage_u64;
use std::path::Path;
use tracing::{debug, warn};

const ONE_BILLION: f64 = 1_000_000_000.0;

/// Sum of yearly transaction counts
pub fn global_total(statistics: &[TransactionStatistics]) -> u64 {
    statistics
        .iter()
        .fold(0u64, |sum, row| sum.saturating_add(row.trx_count))
}

/// Parse the JSON array returned by the network statistics feed
pub fn parse_statistics(json: &str) -> AppResult<Vec<TransactionStatistics>> {
    let rows: Vec<TransactionStatistics> = serde_json::from_str(json)?;
    debug!("Parsed {} network statistics rows", rows.len());
    Ok(rows)
}

/// Load network statistics from a JSON file
pub fn load_statistics(path: &Path) -> AppResult<Vec<TransactionStatistics>> {
    let content = std::fs::read_to_string(path)?;
    parse_statistics(&content)
}

impl NetworkShare {
    /// Compute an account's share of a known network total
    pub fn new(username: &str, user_total: u64, global_total: u64) -> AppResult<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::InvalidArgument(
                "username must not be empty".to_string(),
            ));
        }

        if global_total == 0 {
            warn!("Network total is zero, share of {} reported as 0%", username);
        } else if user_total > global_total {
            warn!(
                "{} has more operations ({}) than the network total ({})",
                username, user_total, global_total
            );
        }

        Ok(Self {
            username: username.to_string(),
            user_total,
            global_total,
            percentage: safe_percentage_u64(user_total, global_total),
        })
    }

    /// Compute an account's share from yearly network statistics rows
    pub fn from_statistics(
        username: &str,
        user_total: u64,
        statistics: &[TransactionStatistics],
    ) -> AppResult<Self> {
        Self::new(username, user_total, global_total(statistics))
    }

    /// Network total in billions, two decimals (e.g. "1.23")
    pub fn global_total_billions(&self) -> String {
        format!("{:.2}", self.global_total as f64 / ONE_BILLION)
    }

    /// Share rendered with six decimals (e.g. "0.000123%")
    pub fn percentage_formatted(&self) -> String {
        format!("{:.6}%", self.percentage)
    }
}
