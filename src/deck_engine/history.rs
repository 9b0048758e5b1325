//! Append-only record of the prompts drawn in the active category, plus the
//! cursor marking which entry is on screen.
//!
//! Cursor movement lives in `navigation`; this module only covers what
//! changes the entry list itself.

use crate::deck_engine::{
    error::{DeckError, DeckResult},
    models::DrawnPrompt,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    pub(super) entries: Vec<DrawnPrompt>,
    /// `None` while nothing is displayed; otherwise always `< entries.len()`.
    pub(super) cursor: Option<usize>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry and hide the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Add `prompt` as the newest entry, point the cursor at it, and return it.
    pub fn append(&mut self, prompt: DrawnPrompt) -> &DrawnPrompt {
        let index = self.entries.len();
        self.entries.push(prompt);
        self.cursor = Some(index);
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn at(&self, index: usize) -> DeckResult<&DrawnPrompt> {
        self.entries.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn entries(&self) -> &[DrawnPrompt] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entry under the cursor, if any.
    pub fn current(&self) -> Option<&DrawnPrompt> {
        self.cursor.and_then(|i| self.entries.get(i))
    }
}
