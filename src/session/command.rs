//! This module contains the command registry and the parsed command type.
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::config::Timings;

/// A fixed output block bound to one SQL-style command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// `SELECT * FROM wishes;`
    Wishes,
    /// `SELECT * FROM cake;`
    Cake,
    /// `COMMIT;`
    Commit,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Wishes, Scene::Cake, Scene::Commit];

    /// The exact command string that triggers this scene.
    pub fn command(self) -> &'static str {
        match self {
            Scene::Wishes => "SELECT * FROM wishes;",
            Scene::Cake => "SELECT * FROM cake;",
            Scene::Commit => "COMMIT;",
        }
    }

    /// Exact, case-sensitive registry lookup.
    pub fn lookup(command: &str) -> Option<Scene> {
        Self::ALL.into_iter().find(|scene| scene.command() == command)
    }

    /// How long the scene "processes" before its output appears.
    pub fn render_delay(self, timings: &Timings) -> Duration {
        let millis = match self {
            Scene::Wishes => timings.wishes_delay_ms,
            Scene::Cake => timings.cake_delay_ms,
            Scene::Commit => timings.commit_delay_ms,
        };
        Duration::from_millis(millis)
    }
}

/// A trimmed, recognised submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Scene(Scene),
    Help,
    Clear,
    /// An empty submission.
    Blank,
}

/// The only error a submission can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR: Unknown command \"{0}\"")]
pub struct UnknownCommand(pub String);

impl UnknownCommand {
    pub const HINT: &'static str = "Type \"help\" for available commands";
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Some(scene) = Scene::lookup(trimmed) {
            Ok(Command::Scene(scene))
        } else if trimmed.eq_ignore_ascii_case("help") {
            Ok(Command::Help)
        } else if trimmed.eq_ignore_ascii_case("clear") {
            Ok(Command::Clear)
        } else if trimmed.is_empty() {
            Ok(Command::Blank)
        } else {
            Err(UnknownCommand(trimmed.to_string()))
        }
    }
}
