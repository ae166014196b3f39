//! Configuration for the birthday terminal.
//!
//! Values come from an optional JSON file and may be overridden on the
//! command line.
mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{TerminalConfig, Timings};
