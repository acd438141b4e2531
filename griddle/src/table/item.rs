//! TableRow trait and Column descriptors.

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration: header text, width, alignment, visibility, and
/// whether the column participates in sorting.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("ID", 8),
///     Column::new("Name", 30).sortable(),
///     Column::new("Size", 12).align(Alignment::Right),
///     Column::new("Internal", 10).hidden(),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header text.
    pub header: String,
    /// Column width in terminal columns (fixed).
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Hidden columns take no space and render nothing.
    pub visible: bool,
    /// Whether clicking the header toggles sorting on this column.
    pub sortable: bool,
}

impl Column {
    /// Create a new column with explicit width.
    pub fn new(header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            align: Alignment::Left,
            visible: true,
            sortable: false,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Hide the column.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Trait for records that can be displayed as table rows.
///
/// `key` is the record's identity accessor: selection membership and
/// context-menu targeting compare keys, never references. Records whose
/// source type keeps its identity in an `id` field implement `key` by
/// returning that field.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct Track {
///     id: String,
///     title: String,
///     plays: u64,
/// }
///
/// impl TableRow for Track {
///     fn key(&self) -> String {
///         self.id.clone()
///     }
///
///     fn cell(&self, column_index: usize) -> String {
///         match column_index {
///             0 => self.title.clone(),
///             1 => self.plays.to_string(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Stable identity key for this record.
    fn key(&self) -> String;

    /// Display text for the column at `column_index`.
    ///
    /// Indices follow the table's full column list, including hidden
    /// columns. Out-of-range indices render as empty.
    fn cell(&self, column_index: usize) -> String;

    /// Height of every row in terminal rows.
    const HEIGHT: u16 = 1;
}
