//! View-only state of the terminal front end.
mod scroll;

/// Rows taken by the header and the blank row under it.
pub const HEADER_ROWS: u16 = 2;
/// Rows taken by the input line and the status line.
pub const FOOTER_ROWS: u16 = 2;

#[derive(Debug)]
pub struct UIState {
    pub terminal_size: (u16, u16),
    /// Lines hidden below the bottom of the log view.
    pub scroll_offset: usize,
    pub is_at_bottom: bool,
    /// Cursor blink phase, flipped on every animation tick.
    pub blink_on: bool,
    /// Animation frame counter, drives the background rain.
    pub frame: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            terminal_size: (80, 24),
            scroll_offset: 0,
            is_at_bottom: true,
            blink_on: true,
            frame: 0,
        }
    }

    /// Number of rows available to the line log.
    pub fn log_area_height(&self) -> usize {
        self.terminal_size
            .1
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize
    }

    /// Advances the animations by one frame.
    pub fn tick(&mut self) {
        self.blink_on = !self.blink_on;
        self.frame = self.frame.wrapping_add(1);
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}
