use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

pub mod commands;

/// Ops by Hive - what your Hive operations would have cost elsewhere
#[derive(Parser)]
#[command(name = "ops-by-hive")]
#[command(about = "Compare a Hive account's operations against fees on other blockchains")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./ops-by-hive.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compare fees across blockchains for an operation count
    Compare(commands::compare::CompareCommand),
    /// Show the yearly average fee table
    Fees(commands::fees::FeesCommand),
    /// Show an account's share of all network operations
    Share(commands::share::ShareCommand),
    /// Print the effective configuration
    ShowConfig(commands::config::ConfigCommand),
}

impl Cli {
    /// Resolve configuration from --config or the default search
    pub fn load_config(&self) -> AppResult<AppConfig> {
        let app_config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                AppConfig::load_from(path)?
            }
            None => AppConfig::load()?,
        };
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn execute(&self) -> AppResult<()> {
        let app_config = self.load_config()?;

        match &self.command {
            Commands::Compare(command) => command.run(&app_config),
            Commands::Fees(command) => command.run(&app_config),
            Commands::Share(command) => command.run(&app_config),
            Commands::ShowConfig(command) => command.run(&app_config),
        }
    }
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    Cli::parse().execute()
}
