pub mod edges;
pub mod events;
pub mod menu;
pub mod page;
pub mod selection;
pub mod sort;
pub mod table;
pub mod theme;
pub mod throttle;

pub use table::Table;

pub mod prelude {
    pub use crate::edges::ScrollEdges;
    pub use crate::events::{EventResult, TableEvent};
    pub use crate::menu::{ContextMenu, MenuItem, MenuState};
    pub use crate::page::PageState;
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::sort::{SortDirection, SortStatus};
    pub use crate::table::{Alignment, Column, Table, TableId, TableRow};
    pub use crate::theme::TableTheme;
    pub use crate::throttle::Throttle;
}
