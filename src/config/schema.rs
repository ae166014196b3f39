//! Configuration schema types.
//!
//! Every field has a default, so an empty JSON object is a valid file.
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Root configuration.
///
/// ```json
/// { "name": "CODY", "short_message": "...", "timings": { "boot_interval_ms": 500 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Whose birthday it is. Shown upper-cased in the header and banners.
    pub name: String,
    /// Closing line of the `COMMIT;` scene.
    pub short_message: String,
    pub timings: Timings,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            name: "CODY".to_string(),
            short_message: "Hope your day is filled with joy and code!".to_string(),
            timings: Timings::default(),
        }
    }
}

impl TerminalConfig {
    /// Rejects values the session cannot display sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "name",
                reason: "must not be blank".to_string(),
            });
        }
        if self.timings.boot_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "timings.boot_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// The header title, e.g. `DB://BIRTHDAY_CODY`.
    pub fn title(&self) -> String {
        format!("DB://BIRTHDAY_{}", self.name.to_uppercase())
    }
}

/// Delays that pace the session, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Timings {
    /// Gap between boot lines.
    pub boot_interval_ms: u64,
    /// Pause between the end of the boot script and the login banner.
    pub boot_settle_ms: u64,
    pub wishes_delay_ms: u64,
    pub cake_delay_ms: u64,
    pub commit_delay_ms: u64,
    /// How long the cake scene's sparkles stay on screen.
    pub sparkle_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            boot_interval_ms: 500,
            boot_settle_ms: 1000,
            wishes_delay_ms: 1000,
            cake_delay_ms: 1000,
            commit_delay_ms: 1500,
            sparkle_ms: 3000,
        }
    }
}
