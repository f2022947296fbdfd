//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use ops_by_hive::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    crate::utils::currency::group_thousands(&n.to_string())
}

/// Section header used by every console report
pub fn section_header(title: &str) -> String {
    format!("=== {} ===\n\n", title)
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| AppError::InvalidData(format!("JSON export failed: {}", e)))
}
