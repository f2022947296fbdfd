//! Configuration file and environment precedence

use crate::common::fixtures::write_temp_file;
use clap::Parser;
use ops_by_hive::cli::Cli;
use ops_by_hive::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_cli_config_flag_loads_file() -> anyhow::Result<()> {
    let (_dir, path) = write_temp_file(
        "ops.toml",
        "[calculation]\ndefault_start_year = 2022\ndefault_end_year = 2025\n\n[display]\nformat = \"json\"\n",
    )?;
    let path_arg = path.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["ops-by-hive", "--config", path_arg.as_str(), "show-config"])?;
    let config = cli.load_config()?;

    assert_eq!(config.calculation.default_start_year, 2022);
    assert_eq!(config.calculation.default_end_year, 2025);
    assert_eq!(config.display.format, "json");
    assert_eq!(config.display.currency_decimals, 2);
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_file() -> anyhow::Result<()> {
    let (_dir, path) = write_temp_file(
        "ops.toml",
        "[calculation]\ndefault_start_year = 2021\ndefault_end_year = 2023\n",
    )?;

    std::env::set_var("OPS_BY_HIVE_CALCULATION__DEFAULT_START_YEAR", "2022");
    let loaded = AppConfig::load_from(&path);
    std::env::remove_var("OPS_BY_HIVE_CALCULATION__DEFAULT_START_YEAR");

    let config = loaded?;
    assert_eq!(config.calculation.default_start_year, 2022);
    assert_eq!(config.calculation.default_end_year, 2023);
    Ok(())
}

#[test]
#[serial]
fn test_invalid_configured_window_rejected() -> anyhow::Result<()> {
    let (_dir, path) = write_temp_file(
        "ops.toml",
        "[calculation]\ndefault_start_year = 2025\ndefault_end_year = 2020\n",
    )?;
    let path_arg = path.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["ops-by-hive", "--config", path_arg.as_str(), "fees"])?;
    assert!(cli.load_config().is_err());
    Ok(())
}

#[test]
#[serial]
fn test_show_config_renders_toml() -> anyhow::Result<()> {
    let rendered = AppConfig::default().to_toml()?;
    let parsed: toml::Value = toml::from_str(&rendered)?;

    assert_eq!(
        parsed["calculation"]["default_start_year"].as_integer(),
        Some(2020)
    );
    assert_eq!(parsed["display"]["format"].as_str(), Some("console"));
    Ok(())
}

#[test]
#[serial]
fn test_unparsable_env_override_fails_without_config_flag() -> anyhow::Result<()> {
    std::env::set_var(
        "OPS_BY_HIVE_CALCULATION__DEFAULT_END_YEAR",
        "twenty-twenty-three",
    );
    let cli = Cli::try_parse_from(["ops-by-hive", "show-config"]);
    let loaded = cli.map(|cli| cli.load_config());
    std::env::remove_var("OPS_BY_HIVE_CALCULATION__DEFAULT_END_YEAR");

    assert!(loaded?.is_err());
    Ok(())
}

#[test]
#[serial]
fn test_missing_default_config_file_uses_builtin_window() -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(["ops-by-hive", "show-config"])?;
    let config = cli.load_config()?;

    assert_eq!(config, AppConfig::default());
    Ok(())
}
