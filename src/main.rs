//! The main entry point for the birthday terminal.
mod app;
mod config;
mod logging;
mod session;
mod ui;

use anyhow::Result;

/// Parses the command line, loads the configuration and runs the terminal
/// until the user exits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal cannot
/// be driven.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
