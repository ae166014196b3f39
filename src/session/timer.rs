//! Timers a session asks its host to run.
use std::time::Duration;

use super::command::Scene;

/// A deferred step of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Print the next boot line.
    BootTick,
    /// The pause after the boot script has elapsed.
    BootSettled,
    /// A pending scene's processing delay has elapsed.
    SceneReady(Scene),
    /// The sparkle burst with this id should disappear.
    SparklesExpired(u64),
}

/// A timer tagged with the session epoch it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub epoch: u64,
    pub timer: Timer,
}

/// Work the session hands back to whoever drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Deliver `timer` back to the session once `after` has elapsed.
    Schedule { after: Duration, timer: Timer },
}
