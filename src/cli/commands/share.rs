use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::network_share::load_statistics;
use crate::reports::{OutputFormat, ReportFormatter};
use crate::types::NetworkShare;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Show an account's share of all operations on the network
#[derive(Args)]
pub struct ShareCommand {
    /// Account name
    #[arg(long)]
    pub username: String,

    /// Total number of operations performed by the account
    #[arg(long)]
    pub user_operations: u64,

    /// Network-wide operation total
    #[arg(long, conflicts_with = "stats_file", required_unless_present = "stats_file")]
    pub global_total: Option<u64>,

    /// JSON file with yearly network transaction statistics
    #[arg(long)]
    pub stats_file: Option<PathBuf>,

    /// Output format: console or json (overrides ops-by-hive.toml)
    #[arg(long)]
    pub format: Option<String>,
}

impl ShareCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let share = self.compute()?;
        let format_str = self.format.as_deref().unwrap_or(&app_config.display.format);
        let format = OutputFormat::parse(format_str);
        print!("{}", ReportFormatter::format_network_share(&share, &format)?);
        Ok(())
    }

    pub fn compute(&self) -> AppResult<NetworkShare> {
        match (&self.stats_file, self.global_total) {
            (Some(path), _) => {
                info!("Loading network statistics from {}", path.display());
                let statistics = load_statistics(path)?;
                NetworkShare::from_statistics(&self.username, self.user_operations, &statistics)
            }
            (None, Some(global_total)) => {
                NetworkShare::new(&self.username, self.user_operations, global_total)
            }
            (None, None) => Err(AppError::InvalidArgument(
                "either --global-total or --stats-file is required".to_string(),
            )),
        }
    }
}
