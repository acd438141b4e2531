//! Event types emitted by the table widget.
//!
//! The widget queues [`TableEvent`]s as the user interacts with it; the
//! embedding application drains the queue each frame and reacts. This keeps
//! the widget free of application callbacks while preserving the output
//! contracts: selection change, sort change, page change.

use crate::sort::SortStatus;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not for this widget; try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// A state change the application should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The selected key list changed.
    SelectionChange { keys: Vec<String> },
    /// The user asked for a different sort order.
    SortChange { status: SortStatus },
    /// The user moved to another page.
    PageChange { page: usize },
    /// Plain click or Enter on a row.
    Activate { key: String, index: usize },
    /// The cursor moved to a row.
    CursorMove { key: String, index: usize },
    /// A context-menu item was clicked for a row.
    MenuAction { item: String, key: String },
}
