use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction};
use crate::config::{Config, validate_config};
use crate::output::OutputFormat;
use crate::{ChapterGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_type(), e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ChapterGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| ChapterGuardError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;

    validate_config(&config)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_type(), e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => format_config_text(&config),
    }
}

/// Effective configuration as TOML under a banner.
///
/// # Errors
/// Returns an error if TOML serialization fails.
pub(crate) fn format_config_text(config: &Config) -> Result<String> {
    let mut output = String::new();
    output.push_str("# === Effective Configuration ===\n\n");
    write!(output, "{}", toml::to_string_pretty(config)?).ok();
    Ok(output)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
