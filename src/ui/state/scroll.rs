//! Scrolling of the line log.
use super::UIState;

const PAGE: usize = 10;

impl UIState {
    /// Keeps the view pinned to the bottom unless the user scrolled up, in
    /// which case the visible window stays put while lines are added.
    pub fn lines_changed(&mut self, before: usize, after: usize) {
        if self.is_at_bottom {
            self.scroll_offset = 0;
        } else if after > before {
            self.scroll_offset = self.scroll_offset.saturating_add(after - before);
        }
        self.update_scroll_state(after);
    }

    /// Clamps the offset to the content and refreshes `is_at_bottom`.
    pub fn update_scroll_state(&mut self, total_lines: usize) {
        let max_scroll = total_lines.saturating_sub(self.log_area_height());
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        self.is_at_bottom = self.scroll_offset == 0;
    }

    pub fn page_up(&mut self, total_lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(PAGE);
        self.update_scroll_state(total_lines);
    }

    pub fn page_down(&mut self, total_lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(PAGE);
        self.update_scroll_state(total_lines);
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.is_at_bottom = true;
    }

    /// Index range of the lines that fit in the log area.
    pub fn visible_range(&self, total_lines: usize) -> std::ops::Range<usize> {
        let visible = self.log_area_height();
        let end = total_lines.saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(visible);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_height(height: u16) -> UIState {
        let mut state = UIState::new();
        state.terminal_size = (80, height);
        state
    }

    #[test]
    fn short_logs_cannot_scroll() {
        let mut state = state_with_height(24);
        state.page_up(5);
        assert_eq!(state.scroll_offset, 0);
        assert!(state.is_at_bottom);
        assert_eq!(state.visible_range(5), 0..5);
    }

    #[test]
    fn page_up_is_clamped_to_content() {
        let mut state = state_with_height(14);
        state.page_up(25);
        assert_eq!(state.scroll_offset, 10);
        state.page_up(25);
        assert_eq!(state.scroll_offset, 15);
        assert_eq!(state.visible_range(25), 0..10);
        state.page_down(25);
        assert_eq!(state.visible_range(25), 10..20);
        state.page_down(25);
        assert!(state.is_at_bottom);
    }

    #[test]
    fn scrolled_view_holds_position_while_lines_arrive() {
        let mut state = state_with_height(14);
        state.page_up(40);
        let before = state.visible_range(40);
        state.lines_changed(40, 45);
        assert_eq!(state.visible_range(45), before);
    }

    #[test]
    fn clearing_the_log_snaps_back_to_bottom() {
        let mut state = state_with_height(14);
        state.page_up(40);
        state.lines_changed(40, 0);
        assert!(state.is_at_bottom);
        assert_eq!(state.visible_range(0), 0..0);
    }
}
