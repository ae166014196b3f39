//! This module contains the editable input line.

/// The text field under the log, with a character-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    buffer: String,
    cursor_pos: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor_end();
    }

    /// Empties the field and returns what it held.
    pub fn take(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_pos = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.buffer.insert(byte_pos, c);
        self.cursor_pos += 1;
    }

    pub fn remove_char_before(&mut self) -> bool {
        if self.cursor_pos == 0 || self.cursor_pos > self.char_count() {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.buffer.remove(byte_pos);
        self.cursor_pos -= 1;
        true
    }

    pub fn remove_char_at(&mut self) -> bool {
        if self.cursor_pos >= self.char_count() {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_pos);
        self.buffer.remove(byte_pos);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.char_count() {
            self.cursor_pos += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    // Cursor positions count chars; `String` edits need byte offsets.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}
