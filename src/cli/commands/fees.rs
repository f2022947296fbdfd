use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::fees::BlockchainNetwork;
use crate::reports::{OutputFormat, ReportFormatter};
use clap::Args;

/// Show the built-in table of yearly average fees
#[derive(Args)]
pub struct FeesCommand {
    /// Only show one blockchain (id, name or ticker, e.g. bnb_chain, Polkadot, ETH)
    #[arg(long)]
    pub blockchain: Option<BlockchainNetwork>,

    /// Output format: console or json (overrides ops-by-hive.toml)
    #[arg(long)]
    pub format: Option<String>,
}

impl FeesCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let format_str = self.format.as_deref().unwrap_or(&app_config.display.format);
        let format = OutputFormat::parse(format_str);
        print!("{}", ReportFormatter::format_fee_matrix(self.blockchain, &format)?);
        Ok(())
    }
}
