use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;

/// Print the effective configuration as TOML
#[derive(Args)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        print!("{}", app_config.to_toml()?);
        Ok(())
    }
}
