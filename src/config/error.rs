//! Configuration error types.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON content could not be parsed.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A value parsed fine but makes no sense.
    #[error("Invalid configuration value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_chains_io_source() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/birthday.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/birthday.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_reports_position() {
        let err = ConfigError::Parse {
            path: PathBuf::from("birthday.json"),
            line: 3,
            column: 7,
            message: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("birthday.json:3:7"));
        assert!(msg.contains("expected value"));
    }
}
