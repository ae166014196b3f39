//! This module defines the events consumed by the UI loop.
use crossterm::event::KeyEvent;

use crate::session::TimerFired;

#[derive(Debug)]
pub enum UIEvent {
    KeyPress(KeyEvent),
    Resize(u16, u16),
    /// A scheduled session timer elapsed.
    Timer(TimerFired),
    /// Animation frame: blinks the cursor and moves sparkles.
    Tick,
}
