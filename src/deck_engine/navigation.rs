//! Cursor movement over the history ledger.
//!
//! Moves saturate at both ends and never wrap. Nothing here touches a pool.

use tracing::{trace, warn};

use crate::deck_engine::{
    error::{DeckError, DeckResult},
    history::HistoryLedger,
};

impl HistoryLedger {
    /// Step back one entry. No-op with no cursor or at the oldest entry.
    pub fn previous(&mut self) {
        if let Some(i) = self.cursor {
            if i > 0 {
                self.cursor = Some(i - 1);
                trace!(cursor = i - 1, "history cursor moved back");
            }
        }
    }

    /// Step forward one entry. No-op with no cursor or at the newest entry.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if let Some(i) = self.cursor {
            if i + 1 < self.entries.len() {
                self.cursor = Some(i + 1);
                trace!(cursor = i + 1, "history cursor moved forward");
            }
        }
    }

    /// Put the cursor on `index` directly.
    pub fn jump_to(&mut self, index: usize) -> DeckResult<()> {
        let len = self.entries.len();
        if index >= len {
            warn!(index, len, "jump to history index out of range");
            return Err(DeckError::IndexOutOfRange { index, len });
        }
        self.cursor = Some(index);
        trace!(cursor = index, "history cursor jumped");
        Ok(())
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }
}
