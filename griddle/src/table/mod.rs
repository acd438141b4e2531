//! Data table widget.
//!
//! [`Table`] renders typed records (anything implementing [`TableRow`])
//! into a columnar grid with a sticky header, optional selection gutter,
//! sortable headers, a pagination footer, and a row context menu. State is
//! shared behind an `Arc`, so clones are cheap handles onto one instance.
//!
//! ```no_run
//! use griddle::table::{Column, Table, TableRow};
//!
//! #[derive(Clone)]
//! struct Track {
//!     id: u64,
//!     title: String,
//! }
//!
//! impl TableRow for Track {
//!     fn key(&self) -> String {
//!         self.id.to_string()
//!     }
//!
//!     fn cell(&self, column_index: usize) -> String {
//!         match column_index {
//!             0 => self.id.to_string(),
//!             _ => self.title.clone(),
//!         }
//!     }
//! }
//!
//! let table = Table::<Track>::new(vec![
//!     Column::new("Id", 6).align(griddle::table::Alignment::Right),
//!     Column::new("Title", 30).sortable(),
//! ]);
//! ```

mod events;
mod item;
mod render;
mod state;

pub use item::{Alignment, Column, TableRow};
pub use state::{Table, TableId};
