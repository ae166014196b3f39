//! The crossterm front end of the birthday terminal.
pub mod action;
pub mod event;
pub mod runner;
pub mod scheduler;
pub mod state;
pub mod terminal;

pub use action::UIAction;
pub use event::UIEvent;
pub use runner::run_tui;
pub use scheduler::Scheduler;
pub use state::UIState;
pub use terminal::TerminalUI;
