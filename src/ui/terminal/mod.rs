//! This module defines the core components and logic for the terminal user interface.
mod controller;
mod events;
mod lifecycle;
mod render;

pub use controller::TerminalUI;
