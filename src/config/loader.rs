//! Configuration file loader.
use std::fs;
use std::path::Path;

use tracing::debug;

use super::{ConfigError, TerminalConfig};

/// Stateless configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from `path`, or returns the defaults
    /// when no path is given.
    pub fn load(path: Option<&Path>) -> Result<TerminalConfig, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => {
                debug!("No config file given, using defaults");
                TerminalConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load_from_path(path: &Path) -> Result<TerminalConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json(&content, path)
    }

    fn parse_json(content: &str, path: &Path) -> Result<TerminalConfig, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })
    }
}
