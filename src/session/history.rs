//! This module contains the command history and its recall cursor.

/// Previously submitted commands plus a recall cursor.
///
/// Entries are unique: a command that is already present is not appended
/// again. The cursor is either `None` ("no selection") or a valid index.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

/// What the input field should show after a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Nothing changes.
    Unchanged,
    /// Replace the input with this entry.
    Entry(&'a str),
    /// Clear the input field.
    Cleared,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `command` unless it is empty or already recorded.
    ///
    /// Returns `true` if the history grew.
    pub fn record(&mut self, command: &str) -> bool {
        if command.is_empty() || self.entries.iter().any(|entry| entry == command) {
            return false;
        }
        self.entries.push(command.to_string());
        true
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the current selection.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Moves one step toward older entries, stopping at the oldest.
    pub fn older(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Recall::Entry(&self.entries[index])
    }

    /// Moves one step toward newer entries; stepping past the newest clears
    /// the selection.
    pub fn newer(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Unchanged,
            Some(i) if i + 1 >= self.entries.len() => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(i) => {
                self.cursor = Some(i + 1);
                Recall::Entry(&self.entries[i + 1])
            }
        }
    }
}
