//! Sort status for sortable columns.
//!
//! The widget never reorders rows itself; it tracks which column the user
//! asked to sort by and emits the new status for the application to apply.

use serde::{Deserialize, Serialize};

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The current sort: which column, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStatus {
    /// Column index into the table's column list.
    pub column: usize,
    pub direction: SortDirection,
}

impl SortStatus {
    /// Ascending sort on a column.
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Status after a click on a sortable header.
    ///
    /// Clicking the current sort column flips its direction; clicking any
    /// other column starts an ascending sort there.
    pub fn toggle(current: Option<Self>, column: usize) -> Self {
        match current {
            Some(status) if status.column == column => Self {
                column,
                direction: status.direction.flip(),
            },
            _ => Self::ascending(column),
        }
    }
}
