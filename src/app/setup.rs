//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::config::{ConfigLoader, TerminalConfig};
use crate::logging;
use anyhow::{Context, Result};
use tracing::info;

/// Everything the terminal needs to start.
pub struct PreparedApp {
    /// The merged configuration: file values, then CLI overrides.
    pub config: TerminalConfig,
}

/// Prepares the application for running.
///
/// Configures logging first so that config problems end up in the log file,
/// then loads the configuration file (if any) and applies the CLI overrides.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, or if the configuration
/// cannot be read, parsed or validated.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    logging::init(args.log_file.as_deref())?;

    let mut config = ConfigLoader::load(args.config.as_deref()).context("Failed to load config")?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    info!(
        "Prepared session for {} (config file: {:?})",
        config.name, args.config
    );

    Ok(PreparedApp { config })
}

/// Applies `--name` and `--message` on top of the file configuration.
fn apply_overrides(config: &mut TerminalConfig, args: &AppArgs) {
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(message) = &args.message {
        config.short_message = message.clone();
    }
}
