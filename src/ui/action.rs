//! This module defines the actions a key press can ask the controller for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIAction {
    /// Tears the session down and boots a fresh one.
    Restart,
    /// Restores the terminal and exits.
    Exit,
}
