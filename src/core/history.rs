//! Linear undo/redo history of visited states.
//!
//! The buffer only grows: recording a transition appends the state being
//! left, and undoing also appends the state being left so that a later
//! redo can read it back. The cursor marks the entry the next undo will
//! restore; `None` means nothing is left to undo.
//!
//! Redo reads two slots past the cursor. After an undo the cursor sits one
//! slot before the entry it just restored, and the entry appended by that
//! undo lies one further on.

use serde::{Deserialize, Serialize};

/// Ordered record of previously occupied states plus an undo/redo cursor.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::History;
///
/// let mut history = History::new();
/// history.record("idle");
/// history.record("running");
///
/// // Currently in "idle" again after idle -> running -> idle
/// assert_eq!(history.undo("idle").as_deref(), Some("running"));
/// assert_eq!(history.redo().as_deref(), Some("idle"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history with nothing to undo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from raw parts.
    ///
    /// Returns `None` when the cursor does not point inside `entries`.
    pub fn from_parts(entries: Vec<String>, cursor: Option<usize>) -> Option<Self> {
        match cursor {
            Some(c) if c >= entries.len() => None,
            _ => Some(Self { entries, cursor }),
        }
    }

    /// Split into raw entries and cursor.
    pub fn into_parts(self) -> (Vec<String>, Option<usize>) {
        (self.entries, self.cursor)
    }

    /// Record that `previous` was left by a forward transition.
    ///
    /// The cursor moves to the newly appended entry.
    pub fn record(&mut self, previous: impl Into<String>) {
        self.entries.push(previous.into());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back from `current`.
    ///
    /// Appends `current` so it can be redone, then returns the state to
    /// restore. Returns `None` (and leaves the history untouched) when
    /// nothing is left to undo.
    pub fn undo(&mut self, current: impl Into<String>) -> Option<String> {
        let cursor = self.cursor?;
        let restored = self.entries.get(cursor)?.clone();
        self.entries.push(current.into());
        self.cursor = cursor.checked_sub(1);
        Some(restored)
    }

    /// Step forward again, returning the state to restore.
    pub fn redo(&mut self) -> Option<String> {
        let index = self.redo_index();
        let restored = self.entries.get(index)?.clone();
        self.cursor = Some(self.cursor.map_or(0, |c| c + 1));
        Some(restored)
    }

    /// Drop every entry and reset the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_index() < self.entries.len()
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current cursor; `None` means no undo is available.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn redo_index(&self) -> usize {
        self.cursor.map_or(1, |c| c + 2)
    }
}
