//! Fixture files written into temporary directories

use std::path::PathBuf;
use tempfile::TempDir;

/// Yearly network statistics in the shape served by the statistics feed
pub const NETWORK_STATISTICS_JSON: &str = r#"[
  {"date": "2025-01-01T00:00:00", "trx_count": 300000000, "avg_trx": 28.5, "min_trx": 0, "max_trx": 2100, "last_block_num": 99000000},
  {"date": "2024-01-01T00:00:00", "trx_count": 700000000, "avg_trx": 66.4, "min_trx": 0, "max_trx": 3400, "last_block_num": 91000000},
  {"date": "2023-01-01T00:00:00", "trx_count": 1000000000, "avg_trx": 95.1, "min_trx": 1, "max_trx": 5200, "last_block_num": 81000000}
]"#;

/// Sum of `trx_count` in [`NETWORK_STATISTICS_JSON`]
pub const NETWORK_STATISTICS_TOTAL: u64 = 2_000_000_000;

/// Write `content` to `name` inside a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_temp_file(name: &str, content: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}
